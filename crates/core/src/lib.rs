pub mod frame;
pub mod game;
pub mod journal;
pub mod journal_file;
pub mod maze;
pub mod replay;
pub mod state;
pub mod tuning;
pub mod types;

pub use frame::{FrameClock, MotionTrail, RenderPos};
pub use game::{Game, try_move};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use maze::{Maze, MazeLayout};
pub use replay::*;
pub use state::{Agent, GameState, Player};
pub use types::*;
