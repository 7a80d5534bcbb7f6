//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate, Behaviour, Coord, GameConfig, GameController, GameSession, GameSetup, GameStatus,
    Grid, LockReason, Orientation, Orientations, Placement, PuzzleError, Renderer, TickScheduler,
    WordEntry,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, IntervalScheduler, TerminalRenderer};
