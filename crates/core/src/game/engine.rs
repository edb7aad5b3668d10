//! Budgeted tick advancement and the fixed per-tick sequencing.

use super::*;

impl Game {
    /// Run up to `max_ticks` simulation steps. Stops early when the game is
    /// not in `Playing` (a tolerated no-op, not a fault) or when the run
    /// ends.
    pub fn advance(&mut self, max_ticks: u32) -> AdvanceResult {
        let mut ticks = 0;
        while ticks < max_ticks {
            if self.phase != GamePhase::Playing {
                return AdvanceResult {
                    simulated_ticks: ticks,
                    stop_reason: AdvanceStopReason::Idle(self.phase),
                };
            }
            self.step();
            ticks += 1;
            if self.phase == GamePhase::GameOver {
                return AdvanceResult {
                    simulated_ticks: ticks,
                    stop_reason: AdvanceStopReason::GameOver,
                };
            }
        }
        AdvanceResult { simulated_ticks: ticks, stop_reason: AdvanceStopReason::BudgetExhausted }
    }

    /// One tick, in the fixed order: steer, move player, consume, agents,
    /// collisions, then the power and wave countdowns.
    fn step(&mut self) {
        self.tick += 1;
        self.steer_player();
        let player_from = self.state.player.pos;
        let moved = self.move_player();
        if moved && self.consume_under_player() {
            // Level advanced: board and entities are fresh, end the tick.
            return;
        }
        let crossings = self.advance_agents(player_from);
        self.resolve_collisions(&crossings);
        if self.phase != GamePhase::Playing {
            return;
        }
        self.tick_power();
        self.tick_wave();
    }
}
