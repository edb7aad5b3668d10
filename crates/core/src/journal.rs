use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// Every accepted command of one run, tick-stamped so a replay can apply
/// them at the same boundaries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    /// Hash of the maze layout the run was recorded against.
    pub content_hash: u64,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    /// Tick counter value at the boundary where the command was accepted.
    pub tick: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Start,
    Pause,
    Resume,
    Restart,
    SetDirection(Direction),
}

impl InputJournal {
    pub fn new(seed: u64, content_hash: u64) -> Self {
        Self {
            format_version: 1,
            build_id: "dev".to_string(),
            content_hash,
            seed,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, tick: u64, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, tick, payload });
    }
}
