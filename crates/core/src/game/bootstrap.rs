//! Construction and wholesale resets: new games, restarts, and the
//! entity respawn used by life loss and level completion.

use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use super::*;
use crate::maze::{Maze, MazeLayout};

impl Game {
    pub fn new(seed: u64, variant: Variant) -> Self {
        Self::from_rules(seed, variant, variant.ruleset())
    }

    /// Build a game against an arbitrary ruleset; unit tests use this to
    /// run the engine on purpose-built boards.
    #[cfg(test)]
    pub(crate) fn with_ruleset(seed: u64, rules: &'static Ruleset) -> Self {
        Self::from_rules(seed, Variant::Arcade, rules)
    }

    fn from_rules(seed: u64, variant: Variant, rules: &'static Ruleset) -> Self {
        Self {
            seed,
            variant,
            rules,
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: GamePhase::Ready,
            state: build_level_state(rules),
            log: Vec::new(),
            next_input_seq: 0,
            home_mode: AgentMode::Patrol,
            home_mode_ticks: PATROL_WAVE_TICKS,
        }
    }

    /// Rebuild the run from scratch, reseeding the rng so a restarted game
    /// is tick-for-tick identical to a fresh one with the same seed.
    pub(super) fn reset_run(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.state = build_level_state(self.rules);
        self.home_mode = AgentMode::Patrol;
        self.home_mode_ticks = PATROL_WAVE_TICKS;
    }

    /// Return the player and every agent to their spawn cells, leaving the
    /// maze untouched. Fleeing agents stay fleeing while the power window
    /// is still open; the wave schedule restarts from its Patrol leg.
    pub(super) fn reset_entities(&mut self) {
        let layout = self.state.maze.layout();
        self.state.player = spawn_player(layout);
        self.home_mode = AgentMode::Patrol;
        self.home_mode_ticks = PATROL_WAVE_TICKS;
        let mode =
            if self.state.power_active() { AgentMode::Flee } else { self.home_mode };
        for agent in self.state.agents.values_mut() {
            agent.pos = agent.spawn;
            agent.facing = agent.spawn_facing;
            agent.mode = mode;
        }
    }
}

fn build_level_state(rules: &'static Ruleset) -> GameState {
    let layout = rules.layout;
    GameState {
        maze: Maze::from_layout(layout),
        player: spawn_player(layout),
        agents: spawn_agents(layout),
        score: 0,
        lives: STARTING_LIVES,
        level: 1,
        power_ticks: 0,
    }
}

fn spawn_player(layout: &'static MazeLayout) -> Player {
    Player { pos: layout.player_spawn, facing: layout.player_facing, queued: None }
}

fn spawn_agents(layout: &'static MazeLayout) -> SlotMap<AgentId, Agent> {
    let mut agents = SlotMap::with_key();
    for (persona, spawn, facing) in layout.agent_spawns {
        let id = agents.insert(Agent {
            id: AgentId::default(),
            persona,
            pos: spawn,
            facing,
            mode: AgentMode::Patrol,
            spawn,
            spawn_facing: facing,
        });
        agents[id].id = id;
    }
    agents
}
