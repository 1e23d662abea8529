pub mod command_log;
pub mod compact_log;
pub mod config;
pub mod engine;
pub mod grid;
pub mod level;
pub mod path;
pub mod rules;
pub mod save_state;
pub mod solver;

pub use engine::{EngineState, MoveOutcome, PuzzleEngine};
pub use grid::{Cell, Grid, PuzzleError};
pub use level::LevelData;
pub use path::PathState;
pub use rules::{can_move, has_legal_continuation, is_solved, is_stuck_but_incomplete};
pub use save_state::SaveState;
pub use solver::{format_path, solve};
