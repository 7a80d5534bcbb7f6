//! Common types for the word search: grid coordinates and puzzle errors.

use alloc::string::String;

/// A `(row, col)` grid coordinate.
pub type Coord = (usize, usize);

/// Broad category of a [`PuzzleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or empty word list, or a missing hint in hint mode.
    Validation,
    /// Behaviour configuration that cannot produce a puzzle.
    Config,
    /// Every size and trial was exhausted without placing all words.
    Placement,
}

/// Errors returned while preparing or generating a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// No usable words remained after normalization.
    EmptyWordList,
    /// Hint mode is active but this word carries no hint.
    MissingHint { word: String },
    /// Every orientation is disabled.
    NoOrientations,
    /// Could not place all words on any grid up to `max_size`.
    UnableToPlaceWords { longest: usize, max_size: usize },
}

impl PuzzleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PuzzleError::EmptyWordList | PuzzleError::MissingHint { .. } => ErrorKind::Validation,
            PuzzleError::NoOrientations => ErrorKind::Config,
            PuzzleError::UnableToPlaceWords { .. } => ErrorKind::Placement,
        }
    }
}

impl core::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PuzzleError::EmptyWordList => write!(f, "Word list is empty"),
            PuzzleError::MissingHint { word } => {
                write!(f, "Hint mode requires a hint for the word '{}'", word)
            }
            PuzzleError::NoOrientations => {
                write!(f, "No orientation is enabled for building the grid")
            }
            PuzzleError::UnableToPlaceWords { longest, max_size } => write!(
                f,
                "Could not place all words (longest word {}, tried grids up to {}x{})",
                longest, max_size, max_size
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PuzzleError {}
