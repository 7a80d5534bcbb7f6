use alloc::vec;
use alloc::vec::Vec;

use rand::Rng;

use crate::{
    common::PuzzleError,
    config::Behaviour,
    generator::{generate, Puzzle},
    grid::Grid,
    placement::Placement,
    selection::WordLookup,
    words::WordEntry,
};

/// Progress of a single placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlacementStatus {
    Pending,
    /// Located by the player.
    Found,
    /// Disclosed by a reveal.
    Solved,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Completed,
    Revealed,
    TimeExpired,
}

/// Result of reporting a matched placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Already found, unknown, or the session is locked.
    Ignored,
    Found,
    /// Found, and it was the last word.
    Completed,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is locked; time no longer accrues.
    Stopped,
    Running(u32),
    Expired,
}

/// Authoritative state of one game: the puzzle plus found/solved flags,
/// elapsed time and lock status.
#[derive(Debug, Clone)]
pub struct GameSession {
    entries: Vec<WordEntry>,
    behaviour: Behaviour,
    time_limit: Option<u32>,
    puzzle: Puzzle,
    lookup: WordLookup,
    statuses: Vec<PlacementStatus>,
    found_count: usize,
    elapsed_seconds: u32,
    status: GameStatus,
}

impl GameSession {
    /// Generate the first puzzle for `entries`.
    pub fn new<R: Rng + ?Sized>(
        entries: Vec<WordEntry>,
        behaviour: Behaviour,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let puzzle = generate(&entries, &behaviour, rng)?;
        let time_limit = behaviour.time_limit();
        let mut session = Self {
            entries,
            behaviour,
            time_limit,
            lookup: WordLookup::default(),
            statuses: Vec::new(),
            found_count: 0,
            elapsed_seconds: 0,
            status: GameStatus::InProgress,
            puzzle,
        };
        session.reset_progress();
        Ok(session)
    }

    /// Regenerate the puzzle and reset all progress. On error the previous
    /// state is kept.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PuzzleError> {
        self.puzzle = generate(&self.entries, &self.behaviour, rng)?;
        self.reset_progress();
        Ok(())
    }

    fn reset_progress(&mut self) {
        self.lookup = WordLookup::build(&self.puzzle.placements);
        self.statuses = vec![PlacementStatus::Pending; self.puzzle.placements.len()];
        self.found_count = 0;
        self.elapsed_seconds = 0;
        self.status = GameStatus::InProgress;
    }

    /// Mark a placement as found by the player. Repeated calls are ignored.
    pub fn on_match(&mut self, index: usize) -> MatchOutcome {
        if self.is_locked() {
            return MatchOutcome::Ignored;
        }
        match self.statuses.get_mut(index) {
            Some(status) if *status == PlacementStatus::Pending => {
                *status = PlacementStatus::Found
            }
            _ => return MatchOutcome::Ignored,
        }
        self.found_count += 1;
        log::info!(
            "found {} ({}/{})",
            self.puzzle.placements[index].word,
            self.found_count,
            self.total()
        );

        if self.found_count == self.total() {
            self.status = GameStatus::Completed;
            log::info!("all words found in {}s", self.elapsed_seconds);
            MatchOutcome::Completed
        } else {
            MatchOutcome::Found
        }
    }

    /// Lock the session and disclose every word not yet found.
    ///
    /// Returns the indices that became solved, or `None` if the session was
    /// already locked.
    pub fn reveal(&mut self) -> Option<Vec<usize>> {
        if self.is_locked() {
            return None;
        }
        self.status = GameStatus::Revealed;
        let mut solved = Vec::new();
        for (i, status) in self.statuses.iter_mut().enumerate() {
            if *status == PlacementStatus::Pending {
                *status = PlacementStatus::Solved;
                solved.push(i);
            }
        }
        log::info!("revealed {} unfound words", solved.len());
        Some(solved)
    }

    /// Advance elapsed time by one second, enforcing the time limit.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_locked() {
            return TickOutcome::Stopped;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        match self.time_limit {
            Some(limit) if self.elapsed_seconds >= limit => {
                self.elapsed_seconds = limit;
                self.status = GameStatus::TimeExpired;
                log::info!("time limit of {}s reached", limit);
                TickOutcome::Expired
            }
            _ => TickOutcome::Running(self.elapsed_seconds),
        }
    }

    /// `(found, total)` for display.
    pub fn score(&self) -> (usize, usize) {
        (self.found_count, self.total())
    }

    pub fn total(&self) -> usize {
        self.puzzle.placements.len()
    }

    pub fn found_count(&self) -> usize {
        self.found_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// No selection is accepted and time does not accrue once locked.
    pub fn is_locked(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.placement_status(index) == Some(PlacementStatus::Pending)
    }

    pub fn placement_status(&self, index: usize) -> Option<PlacementStatus> {
        self.statuses.get(index).copied()
    }

    pub fn statuses(&self) -> &[PlacementStatus] {
        &self.statuses
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn behaviour(&self) -> &Behaviour {
        &self.behaviour
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.puzzle.placements
    }

    pub fn lookup(&self) -> &WordLookup {
        &self.lookup
    }
}
