use slotmap::SlotMap;

use crate::maze::Maze;
use crate::types::*;

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub pos: Pos,
    pub facing: Direction,
    /// Requested turn, applied on the first tick where it is legal.
    pub queued: Option<Direction>,
}

#[derive(Clone, Copy, Debug)]
pub struct Agent {
    pub id: AgentId,
    pub persona: Persona,
    pub pos: Pos,
    pub facing: Direction,
    pub mode: AgentMode,
    pub spawn: Pos,
    pub spawn_facing: Direction,
}

/// Everything one level mutates, owned exclusively by the tick controller.
pub struct GameState {
    pub maze: Maze,
    pub player: Player,
    pub agents: SlotMap<AgentId, Agent>,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    /// Remaining Flee ticks; zero means the power window is inactive.
    pub power_ticks: u32,
}

impl GameState {
    pub fn power_active(&self) -> bool {
        self.power_ticks > 0
    }
}
