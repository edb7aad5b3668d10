//! Agent decision making: persona targeting, the legal-move enumeration,
//! and the mode machinery (power window and patrol/pursue waves).

use rand_chacha::rand_core::Rng;

use super::*;
use crate::maze::Maze;

impl Game {
    /// Recompute and apply every agent's move for this tick. Returns the
    /// agents that swapped cells with the player, for the crossing-capture
    /// collision rule.
    pub(super) fn advance_agents(&mut self, player_from: Pos) -> Vec<AgentId> {
        let player_to = self.state.player.pos;
        let mut crossings = Vec::new();
        let ids: Vec<AgentId> = self.state.agents.keys().collect();
        for id in ids {
            let agent = self.state.agents[id];
            let Some(direction) = self.choose_agent_direction(&agent) else {
                continue;
            };
            let to = try_move(&self.state.maze, agent.pos, direction);
            if self.rules.crossing_capture && to == player_from && player_to == agent.pos {
                crossings.push(id);
            }
            let slot = &mut self.state.agents[id];
            slot.facing = direction;
            slot.pos = to;
        }
        crossings
    }

    fn choose_agent_direction(&mut self, agent: &Agent) -> Option<Direction> {
        let moves = legal_moves(&self.state.maze, agent.pos, agent.facing);
        if moves.is_empty() {
            return None;
        }
        let chosen = match agent.mode {
            AgentMode::Patrol => {
                let pick = self.rng.next_u64() as usize % moves.len();
                moves[pick].0
            }
            AgentMode::Pursue => best_move_toward(&moves, self.pursuit_target(agent)),
            AgentMode::Flee => best_move_away(&moves, self.state.player.pos),
        };
        Some(chosen)
    }

    /// The per-persona pursuit target. Targets may land off-grid or inside
    /// walls; they only steer the distance comparison.
    fn pursuit_target(&self, agent: &Agent) -> Pos {
        let player = self.state.player;
        match agent.persona {
            Persona::Chaser => player.pos,
            Persona::Ambusher => project(player.pos, player.facing, AMBUSH_LOOKAHEAD),
            Persona::Flanker => {
                let pivot = project(player.pos, player.facing, FLANK_PIVOT_AHEAD);
                let anchor = self
                    .state
                    .agents
                    .values()
                    .find(|other| other.persona == Persona::Chaser)
                    .map_or(player.pos, |other| other.pos);
                Pos { y: 2 * pivot.y - anchor.y, x: 2 * pivot.x - anchor.x }
            }
            Persona::Skittish => {
                if manhattan(agent.pos, player.pos) > SKITTISH_RANGE {
                    player.pos
                } else {
                    self.state.maze.layout().retreat_corner
                }
            }
        }
    }

    /// Force every agent into Flee and (re)open the power window. A fresh
    /// activation overwrites whatever was left of the previous one.
    pub(super) fn activate_power(&mut self) {
        self.state.power_ticks = POWER_DURATION_TICKS;
        for agent in self.state.agents.values_mut() {
            agent.mode = AgentMode::Flee;
        }
        self.log.push(LogEvent::PowerActivated { ticks: POWER_DURATION_TICKS });
    }

    pub(super) fn tick_power(&mut self) {
        if self.state.power_ticks == 0 {
            return;
        }
        self.state.power_ticks -= 1;
        if self.state.power_ticks == 0 {
            for agent in self.state.agents.values_mut() {
                agent.mode = self.home_mode;
            }
            self.log.push(LogEvent::PowerExpired);
        }
    }

    /// Advance the global wave schedule. Fleeing agents are left alone; the
    /// wave still flips underneath them so power expiry reverts to the
    /// current leg.
    pub(super) fn tick_wave(&mut self) {
        self.home_mode_ticks = self.home_mode_ticks.saturating_sub(1);
        if self.home_mode_ticks > 0 {
            return;
        }
        (self.home_mode, self.home_mode_ticks) = match self.home_mode {
            AgentMode::Patrol => (AgentMode::Pursue, PURSUE_WAVE_TICKS),
            _ => (AgentMode::Patrol, PATROL_WAVE_TICKS),
        };
        for agent in self.state.agents.values_mut() {
            if agent.mode != AgentMode::Flee {
                agent.mode = self.home_mode;
            }
        }
    }
}

fn project(pos: Pos, direction: Direction, cells: i32) -> Pos {
    let (dy, dx) = direction.offset();
    Pos { y: pos.y + dy * cells, x: pos.x + dx * cells }
}

/// All legal moves from `pos`, excluding the reverse of `facing` unless it
/// is the only way out. Enumerated in the fixed tie-break order.
pub(super) fn legal_moves(maze: &Maze, pos: Pos, facing: Direction) -> Vec<(Direction, Pos)> {
    let reverse = facing.opposite();
    let mut moves = Vec::with_capacity(4);
    for direction in DIRECTION_ORDER {
        if direction == reverse {
            continue;
        }
        let to = try_move(maze, pos, direction);
        if to != pos {
            moves.push((direction, to));
        }
    }
    if moves.is_empty() {
        let to = try_move(maze, pos, reverse);
        if to != pos {
            moves.push((reverse, to));
        }
    }
    moves
}

fn best_move_toward(moves: &[(Direction, Pos)], target: Pos) -> Direction {
    let mut best = moves[0];
    let mut best_distance = distance_sq(best.1, target);
    for &(direction, to) in &moves[1..] {
        let distance = distance_sq(to, target);
        if distance < best_distance {
            best = (direction, to);
            best_distance = distance;
        }
    }
    best.0
}

fn best_move_away(moves: &[(Direction, Pos)], player: Pos) -> Direction {
    let mut best = moves[0];
    let mut best_distance = distance_sq(best.1, player);
    for &(direction, to) in &moves[1..] {
        let distance = distance_sq(to, player);
        if distance > best_distance {
            best = (direction, to);
            best_distance = distance;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{CORRIDOR, CROSSROADS, started_game};
    use crate::maze::Maze;

    #[test]
    fn legal_moves_follow_the_fixed_enumeration_order() {
        let maze = Maze::from_layout(&CROSSROADS);
        let moves = legal_moves(&maze, Pos { y: 3, x: 3 }, Direction::Up);
        let directions: Vec<Direction> = moves.iter().map(|&(direction, _)| direction).collect();
        // Reverse of Up (Down) is excluded; the rest keep enumeration order.
        assert_eq!(directions, [Direction::Right, Direction::Left, Direction::Up]);
    }

    #[test]
    fn dead_end_permits_reversal() {
        let maze = Maze::from_layout(&CORRIDOR);
        // Corridor runs along row 1; from its left end the only way out of
        // a rightward dead end check is back the way we came.
        let moves = legal_moves(&maze, Pos { y: 1, x: 1 }, Direction::Left);
        assert_eq!(moves, vec![(Direction::Right, Pos { y: 1, x: 2 })]);
    }

    #[test]
    fn ties_resolve_to_the_first_enumerated_direction() {
        let maze = Maze::from_layout(&CROSSROADS);
        // Target equidistant from the Right and Down candidates: Right wins.
        let moves = legal_moves(&maze, Pos { y: 3, x: 3 }, Direction::Right);
        let target = Pos { y: 4, x: 4 };
        assert_eq!(best_move_toward(&moves, target), Direction::Right);
    }

    #[test]
    fn flee_maximizes_distance_from_the_player() {
        let maze = Maze::from_layout(&CROSSROADS);
        let moves = legal_moves(&maze, Pos { y: 3, x: 3 }, Direction::Up);
        assert_eq!(best_move_away(&moves, Pos { y: 3, x: 1 }), Direction::Right);
        assert_eq!(best_move_away(&moves, Pos { y: 5, x: 3 }), Direction::Up);
    }

    #[test]
    fn chaser_targets_the_player_cell() {
        let game = started_game(11);
        let chaser = game
            .state()
            .agents
            .values()
            .find(|agent| agent.persona == Persona::Chaser)
            .copied()
            .expect("chaser exists");
        assert_eq!(game.pursuit_target(&chaser), game.state().player.pos);
    }

    #[test]
    fn ambusher_leads_the_player_by_four_cells() {
        let mut game = started_game(11);
        game.state.player.pos = Pos { y: 9, x: 5 };
        game.state.player.facing = Direction::Right;
        let ambusher = game
            .state()
            .agents
            .values()
            .find(|agent| agent.persona == Persona::Ambusher)
            .copied()
            .expect("ambusher exists");
        assert_eq!(game.pursuit_target(&ambusher), Pos { y: 9, x: 9 });
    }

    #[test]
    fn flanker_mirrors_the_chaser_through_the_pivot() {
        let mut game = started_game(11);
        game.state.player.pos = Pos { y: 9, x: 5 };
        game.state.player.facing = Direction::Right;
        let chaser_id = game
            .state()
            .agents
            .iter()
            .find(|(_, agent)| agent.persona == Persona::Chaser)
            .map(|(id, _)| id)
            .expect("chaser exists");
        game.state.agents[chaser_id].pos = Pos { y: 5, x: 5 };

        let flanker = game
            .state()
            .agents
            .values()
            .find(|agent| agent.persona == Persona::Flanker)
            .copied()
            .expect("flanker exists");
        // Pivot is (9, 7); mirroring (5, 5) through it lands at (13, 9).
        assert_eq!(game.pursuit_target(&flanker), Pos { y: 13, x: 9 });
    }

    #[test]
    fn skittish_breaks_off_inside_its_range() {
        let mut game = started_game(11);
        let skittish_id = game
            .state()
            .agents
            .iter()
            .find(|(_, agent)| agent.persona == Persona::Skittish)
            .map(|(id, _)| id)
            .expect("skittish exists");

        game.state.player.pos = Pos { y: 1, x: 1 };
        game.state.agents[skittish_id].pos = Pos { y: 15, x: 15 };
        let far = game.state.agents[skittish_id];
        assert_eq!(game.pursuit_target(&far), Pos { y: 1, x: 1 });

        game.state.agents[skittish_id].pos = Pos { y: 3, x: 5 };
        let near = game.state.agents[skittish_id];
        assert_eq!(game.pursuit_target(&near), game.state().maze.layout().retreat_corner);
    }

    #[test]
    fn power_activation_sets_every_agent_fleeing_with_a_full_window() {
        let mut game = started_game(11);
        game.activate_power();
        assert_eq!(game.state().power_ticks, POWER_DURATION_TICKS);
        assert!(game.state().agents.values().all(|agent| agent.mode == AgentMode::Flee));
    }

    #[test]
    fn reactivation_overwrites_the_remaining_window() {
        let mut game = started_game(11);
        game.activate_power();
        for _ in 0..10 {
            game.tick_power();
        }
        assert_eq!(game.state().power_ticks, POWER_DURATION_TICKS - 10);
        game.activate_power();
        assert_eq!(game.state().power_ticks, POWER_DURATION_TICKS);
    }

    #[test]
    fn power_expiry_reverts_all_agents_at_once() {
        let mut game = started_game(11);
        game.activate_power();
        for _ in 0..POWER_DURATION_TICKS {
            game.tick_power();
        }
        assert_eq!(game.state().power_ticks, 0);
        assert!(game.state().agents.values().all(|agent| agent.mode == game.home_mode));
        assert!(game.log().contains(&LogEvent::PowerExpired));
    }

    #[test]
    fn wave_flips_patrol_to_pursue_and_back() {
        let mut game = started_game(11);
        assert_eq!(game.home_mode, AgentMode::Patrol);
        for _ in 0..PATROL_WAVE_TICKS {
            game.tick_wave();
        }
        assert_eq!(game.home_mode, AgentMode::Pursue);
        assert!(game.state().agents.values().all(|agent| agent.mode == AgentMode::Pursue));
        for _ in 0..PURSUE_WAVE_TICKS {
            game.tick_wave();
        }
        assert_eq!(game.home_mode, AgentMode::Patrol);
    }

    #[test]
    fn wave_flip_leaves_fleeing_agents_alone() {
        let mut game = started_game(11);
        game.activate_power();
        for _ in 0..PATROL_WAVE_TICKS {
            game.tick_wave();
        }
        assert_eq!(game.home_mode, AgentMode::Pursue);
        assert!(game.state().agents.values().all(|agent| agent.mode == AgentMode::Flee));
    }

    #[test]
    fn patrol_choice_is_deterministic_for_a_seed() {
        let run = |seed: u64| {
            let mut game = started_game(seed);
            let mut trace = Vec::new();
            for _ in 0..40 {
                game.advance(1);
                trace.extend(
                    game.state().agents.values().map(|agent| (agent.persona, agent.pos)),
                );
            }
            trace
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43), "different seeds should diverge within 40 ticks");
    }
}
