//! The simulation core: phase machine, command surface, and per-tick
//! sequencing. Submodules split the concerns; everything operates on the
//! one `GameState` owned here.

use rand_chacha::ChaCha8Rng;

use crate::state::{Agent, GameState, Player};
use crate::tuning::*;
use crate::types::*;

mod behavior;
mod bootstrap;
mod collision;
mod engine;
mod hash;
mod movement;
#[cfg(test)]
mod test_support;

pub use movement::try_move;

pub struct Game {
    seed: u64,
    variant: Variant,
    rules: &'static Ruleset,
    tick: u64,
    rng: ChaCha8Rng,
    phase: GamePhase,
    state: GameState,
    log: Vec<LogEvent>,
    next_input_seq: u64,
    /// The mode non-fleeing agents currently hold, flipped on a fixed wave
    /// schedule between Patrol and Pursue.
    home_mode: AgentMode,
    home_mode_ticks: u32,
}

impl Game {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn input_seq(&self) -> u64 {
        self.next_input_seq
    }

    /// Direct state access for tests outside this module tree.
    #[cfg(test)]
    pub(crate) fn state_mut_for_tests(&mut self) -> &mut GameState {
        &mut self.state
    }

    // ----- command surface -----------------------------------------------
    //
    // Illegal transitions are tolerated no-ops; each command reports whether
    // it was accepted so the frontend can journal exactly what took effect.

    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.next_input_seq += 1;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::Paused;
        self.next_input_seq += 1;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.next_input_seq += 1;
        true
    }

    /// Full reset back into play: fresh level state, reseeded rng. The tick
    /// counter keeps running so journal stamps stay monotonic.
    pub fn restart(&mut self) -> bool {
        if self.phase == GamePhase::Ready {
            return false;
        }
        self.reset_run();
        self.phase = GamePhase::Playing;
        self.next_input_seq += 1;
        true
    }

    pub fn set_player_direction(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.state.player.queued = Some(direction);
        self.next_input_seq += 1;
        true
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.state.score += points;
        self.log.push(LogEvent::ScoreChanged { score: self.state.score });
    }
}
