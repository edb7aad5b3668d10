//! Fixed gameplay numbers and the per-variant rulesets.

use crate::maze::{CLASSIC, MazeLayout, TUNNEL};
use crate::types::Variant;

pub const STARTING_LIVES: u8 = 3;

pub const PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 50;
pub const CAPTURE_SCORE: u32 = 200;
pub const LEVEL_BONUS: u32 = 500;

/// Flee window after a power pellet, in ticks (7 s at the arcade cadence).
pub const POWER_DURATION_TICKS: u32 = 35;

/// Global home-mode wave lengths. Agents open in a Patrol wave.
pub const PATROL_WAVE_TICKS: u32 = 15;
pub const PURSUE_WAVE_TICKS: u32 = 60;

/// Cells the Ambusher aims ahead of the player's facing.
pub const AMBUSH_LOOKAHEAD: i32 = 4;
/// Cells ahead of the player the Flanker mirrors the Chaser through.
pub const FLANK_PIVOT_AHEAD: i32 = 2;
/// Manhattan distance under which the Skittish persona breaks off.
pub const SKITTISH_RANGE: u32 = 8;

pub const LIFE_LOST_BANNER_MS: u32 = 1500;
pub const LEVEL_COMPLETE_BANNER_MS: u32 = 2000;
pub const GAME_OVER_BANNER_MS: u32 = 3000;

/// Per-variant board and rule selection.
pub struct Ruleset {
    pub layout: &'static MazeLayout,
    pub tick_interval_ms: u32,
    /// Count a player/agent cell swap within one tick as co-location.
    pub crossing_capture: bool,
    /// Whether the frontend should interpolate entity positions between
    /// ticks when rendering.
    pub interpolate: bool,
}

static ARCADE_RULES: Ruleset = Ruleset {
    layout: &CLASSIC,
    tick_interval_ms: 200,
    crossing_capture: false,
    interpolate: false,
};

static FLUID_RULES: Ruleset = Ruleset {
    layout: &TUNNEL,
    tick_interval_ms: 120,
    crossing_capture: true,
    interpolate: true,
};

impl Variant {
    pub fn ruleset(self) -> &'static Ruleset {
        match self {
            Self::Arcade => &ARCADE_RULES,
            Self::Fluid => &FLUID_RULES,
        }
    }
}
