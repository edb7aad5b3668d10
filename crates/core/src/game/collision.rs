//! Consumption, captures, life loss, and level completion.

use super::*;

impl Game {
    /// Consume whatever the player landed on. Returns true when that
    /// consumption cleared the board and advanced the level, in which case
    /// entities have already been reset.
    pub(super) fn consume_under_player(&mut self) -> bool {
        match self.state.maze.consume(self.state.player.pos) {
            Some(Cell::Pellet) => self.add_score(PELLET_SCORE),
            Some(Cell::PowerPellet) => {
                self.add_score(POWER_PELLET_SCORE);
                self.activate_power();
            }
            _ => return false,
        }
        if self.state.maze.remaining_pellets() == 0 {
            self.complete_level();
            return true;
        }
        false
    }

    fn complete_level(&mut self) {
        self.state.level += 1;
        self.add_score(LEVEL_BONUS);
        self.state.maze.reset_consumables();
        self.state.power_ticks = 0;
        self.reset_entities();
        self.log.push(LogEvent::LevelChanged { level: self.state.level });
        self.log.push(LogEvent::BannerShown {
            banner: Banner::LevelComplete,
            duration_ms: LEVEL_COMPLETE_BANNER_MS,
        });
    }

    /// Resolve player/agent contact once all positions for the tick are
    /// final. Every co-located fleeing agent is captured; contact with a
    /// non-fleeing agent costs at most one life per tick.
    pub(super) fn resolve_collisions(&mut self, crossings: &[AgentId]) {
        let player_pos = self.state.player.pos;
        let ids: Vec<AgentId> = self.state.agents.keys().collect();
        for id in ids {
            let agent = self.state.agents[id];
            if agent.pos != player_pos && !crossings.contains(&id) {
                continue;
            }
            if agent.mode == AgentMode::Flee {
                self.capture_agent(id);
            } else {
                self.lose_life();
                return;
            }
        }
    }

    fn capture_agent(&mut self, id: AgentId) {
        self.add_score(CAPTURE_SCORE);
        let agent = &mut self.state.agents[id];
        agent.pos = agent.spawn;
        agent.facing = agent.spawn_facing;
        // Back to Pursue regardless of the still-running power window.
        agent.mode = AgentMode::Pursue;
        self.log.push(LogEvent::AgentCaptured { agent: id });
    }

    fn lose_life(&mut self) {
        self.state.lives -= 1;
        self.log.push(LogEvent::LivesChanged { lives: self.state.lives });
        if self.state.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.log.push(LogEvent::BannerShown {
                banner: Banner::GameOver,
                duration_ms: GAME_OVER_BANNER_MS,
            });
        } else {
            // Positions reset; the consumed-pellet state and any running
            // power countdown carry over.
            self.reset_entities();
            self.log.push(LogEvent::BannerShown {
                banner: Banner::LifeLost,
                duration_ms: LIFE_LOST_BANNER_MS,
            });
        }
    }
}
