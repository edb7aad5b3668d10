use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct AgentId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dy, dx) = direction.offset();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Squared Euclidean distance, the metric every pursue/flee comparison uses.
pub fn distance_sq(a: Pos, b: Pos) -> i64 {
    let dy = i64::from(a.y) - i64::from(b.y);
    let dx = i64::from(a.x) - i64::from(b.x);
    dy * dy + dx * dx
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed enumeration order for every directional tie-break.
pub const DIRECTION_ORDER: [Direction; 4] =
    [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

impl Direction {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
    Pellet,
    PowerPellet,
}

impl Cell {
    pub fn is_consumable(self) -> bool {
        matches!(self, Self::Pellet | Self::PowerPellet)
    }
}

/// Agent identity. Each persona owns one pursuit-targeting heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Persona {
    Chaser,
    Ambusher,
    Flanker,
    Skittish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentMode {
    Pursue,
    Flee,
    Patrol,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Arcade,
    Fluid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    LifeLost,
    LevelComplete,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEvent {
    ScoreChanged { score: u32 },
    LivesChanged { lives: u8 },
    LevelChanged { level: u32 },
    PowerActivated { ticks: u32 },
    PowerExpired,
    AgentCaptured { agent: AgentId },
    BannerShown { banner: Banner, duration_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStopReason {
    /// A tick was requested outside `Playing`; nothing was simulated.
    Idle(GamePhase),
    GameOver,
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug)]
pub struct AdvanceResult {
    pub simulated_ticks: u32,
    pub stop_reason: AdvanceStopReason,
}
