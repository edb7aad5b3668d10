//! Fixed-timestep pacing and render interpolation.
//!
//! The simulation always advances in whole ticks; the frontend feeds real
//! frame deltas into a [`FrameClock`] and receives the number of ticks due.
//! For the Fluid variant it also keeps a [`MotionTrail`] of previous-tick
//! positions so entities can be drawn partway between cells.

use slotmap::SecondaryMap;

use crate::state::GameState;
use crate::types::{AgentId, Pos, manhattan};

/// Longest frame delta honored before the clock clamps, so a stall does
/// not burst a backlog of ticks.
const MAX_FRAME_DELTA: f32 = 0.25;

pub struct FrameClock {
    tick_interval: f32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self { tick_interval: tick_interval_ms as f32 / 1000.0, accumulator: 0.0 }
    }

    /// Account `dt` seconds of real time and return how many whole ticks
    /// are now due.
    pub fn due_ticks(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DELTA);
        let due = (self.accumulator / self.tick_interval) as u32;
        self.accumulator -= due as f32 * self.tick_interval;
        due
    }

    /// Fraction of the way from the previous tick to the next, for
    /// interpolated rendering.
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.tick_interval).clamp(0.0, 1.0)
    }
}

/// A fractional board position, in cell units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPos {
    pub y: f32,
    pub x: f32,
}

impl RenderPos {
    pub fn snap(pos: Pos) -> Self {
        Self { y: pos.y as f32, x: pos.x as f32 }
    }
}

/// Previous-tick entity positions, captured right before each tick.
pub struct MotionTrail {
    player: Pos,
    agents: SecondaryMap<AgentId, Pos>,
}

impl MotionTrail {
    pub fn capture(state: &GameState) -> Self {
        let mut agents = SecondaryMap::new();
        for (id, agent) in state.agents.iter() {
            agents.insert(id, agent.pos);
        }
        Self { player: state.player.pos, agents }
    }

    pub fn player_pos(&self, state: &GameState, alpha: f32) -> RenderPos {
        lerp_cells(self.player, state.player.pos, alpha)
    }

    pub fn agent_pos(&self, state: &GameState, id: AgentId, alpha: f32) -> RenderPos {
        let current = state.agents[id].pos;
        let previous = self.agents.get(id).copied().unwrap_or(current);
        lerp_cells(previous, current, alpha)
    }
}

/// Interpolate between two cell positions. Teleports (tunnel wraps,
/// respawns) are farther than one cell apart and snap to the destination
/// instead of sliding across the board.
fn lerp_cells(previous: Pos, current: Pos, alpha: f32) -> RenderPos {
    if manhattan(previous, current) > 1 {
        return RenderPos::snap(current);
    }
    let alpha = alpha.clamp(0.0, 1.0);
    RenderPos {
        y: previous.y as f32 + (current.y - previous.y) as f32 * alpha,
        x: previous.x as f32 + (current.x - previous.x) as f32 * alpha,
    }
}
