use crate::{
    common::Coord, generator::Puzzle, placement::Placement, words::WordEntry,
};

/// Why a session stopped accepting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    /// Every word was found.
    Completed,
    /// The solution was shown.
    Revealed,
    /// The time limit ran out.
    TimeExpired,
}

/// Presentation side of a game. Receives every state change; all hooks
/// default to doing nothing.
///
/// Placements are identified by their index in [`Puzzle::placements`];
/// implementations keep their own mapping from index to whatever they draw.
pub trait Renderer {
    /// A new puzzle was generated; `entries[i]` belongs to `puzzle.placements[i]`.
    fn puzzle_ready(&mut self, _puzzle: &Puzzle, _entries: &[WordEntry]) {}

    /// The in-progress selection changed. Empty once the gesture ends.
    fn selection_changed(&mut self, _path: &[Coord]) {}

    fn word_found(&mut self, _index: usize, _placement: &Placement) {}

    fn word_solved(&mut self, _index: usize, _placement: &Placement) {}

    fn score_changed(&mut self, _found: usize, _total: usize) {}

    fn elapsed_changed(&mut self, _seconds: u32) {}

    fn locked(&mut self, _reason: LockReason) {}
}

/// Renderer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}
