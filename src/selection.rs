//! Drag selection state machine and word lookup.
//!
//! A gesture starts on one cell (the anchor), follows the pointer while it
//! stays on a straight line from the anchor, and on release reads the letters
//! under the path. Lookup matches the word in either reading direction.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::Coord;
use crate::grid::Grid;
use crate::placement::Placement;

/// Map from spelled letters to the placements that spell them, forward or
/// backward along their path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLookup {
    spellings: BTreeMap<String, Vec<usize>>,
    /// `(start, end)` of each placement, by index.
    spans: Vec<(Coord, Coord)>,
}

impl WordLookup {
    /// Index every placement under its forward and reversed spelling.
    ///
    /// Forward spellings are inserted first so that, when two placements
    /// share a spelling, the one written that way is offered before the one
    /// read backwards.
    pub fn build(placements: &[Placement]) -> Self {
        let mut spellings: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, p) in placements.iter().enumerate() {
            spellings.entry(p.word.clone()).or_default().push(i);
        }
        for (i, p) in placements.iter().enumerate() {
            let ids = spellings.entry(p.reversed_word()).or_default();
            if !ids.contains(&i) {
                ids.push(i);
            }
        }
        let spans = placements.iter().map(|p| (p.start, p.end)).collect();
        WordLookup { spellings, spans }
    }

    /// Placements lying exactly on `path`, read in either direction.
    pub fn on_path(&self, path: &[Coord]) -> impl Iterator<Item = usize> + '_ {
        let ends = path.first().copied().zip(path.last().copied());
        self.spans
            .iter()
            .enumerate()
            .filter_map(move |(i, &span)| match ends {
                Some((a, b)) if span == (a, b) || span == (b, a) => Some(i),
                _ => None,
            })
    }

    /// Placement indices spelled by `letters`, in preference order.
    pub fn get(&self, letters: &str) -> &[usize] {
        self.spellings.get(letters).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

/// Cells from `start` to `end` inclusive, if they form a horizontal,
/// vertical or 45° diagonal line.
pub fn straight_path(start: Coord, end: Coord) -> Option<Vec<Coord>> {
    let dr = end.0 as isize - start.0 as isize;
    let dc = end.1 as isize - start.1 as isize;
    let (abs_r, abs_c) = (dr.abs(), dc.abs());

    if abs_r == 0 && abs_c == 0 {
        return Some(vec![start]);
    }
    if !(abs_r == 0 || abs_c == 0 || abs_r == abs_c) {
        return None;
    }

    let (step_r, step_c) = (dr.signum(), dc.signum());
    let length = abs_r.max(abs_c);
    let path = (0..=length)
        .map(|i| {
            (
                (start.0 as isize + step_r * i) as usize,
                (start.1 as isize + step_c * i) as usize,
            )
        })
        .collect();
    Some(path)
}

/// Current gesture state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Dragging { anchor: Coord, path: Vec<Coord> },
}

/// Tracks one drag gesture at a time over a square grid.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    size: usize,
    state: SelectionState,
}

impl SelectionEngine {
    pub fn new(grid_size: usize) -> Self {
        Self {
            size: grid_size,
            state: SelectionState::Idle,
        }
    }

    /// Drop any gesture and track a grid of a new size.
    pub fn reset(&mut self, grid_size: usize) {
        self.size = grid_size;
        self.state = SelectionState::Idle;
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    /// Cells of the in-progress selection; empty when idle.
    pub fn path(&self) -> &[Coord] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Dragging { path, .. } => path.as_slice(),
        }
    }

    fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    /// Begin a gesture on `cell`. A gesture already in progress is dropped.
    /// Returns `false` and stays idle if `cell` is outside the grid.
    pub fn start(&mut self, cell: Coord) -> bool {
        if !self.in_bounds(cell) {
            self.state = SelectionState::Idle;
            return false;
        }
        self.state = SelectionState::Dragging {
            anchor: cell,
            path: vec![cell],
        };
        true
    }

    /// Extend the gesture towards `target`. Targets that are off the grid or
    /// not on a straight line from the anchor collapse the path to the anchor.
    /// Returns `false` when no gesture is active.
    pub fn move_to(&mut self, target: Option<Coord>) -> bool {
        let in_bounds = target.map(|t| self.in_bounds(t)).unwrap_or(false);
        let SelectionState::Dragging { anchor, path } = &mut self.state else {
            return false;
        };
        let next = target
            .filter(|_| in_bounds)
            .and_then(|t| straight_path(*anchor, t));
        *path = next.unwrap_or_else(|| vec![*anchor]);
        true
    }

    /// Finish the gesture and return the pending placement it selects: the
    /// placement lying on the selected cells if there is one, otherwise the
    /// first pending placement spelled by the selected letters. The engine is
    /// idle afterwards whatever the outcome.
    pub fn end<F>(&mut self, grid: &Grid, lookup: &WordLookup, mut is_pending: F) -> Option<usize>
    where
        F: FnMut(usize) -> bool,
    {
        let state = core::mem::replace(&mut self.state, SelectionState::Idle);
        let SelectionState::Dragging { path, .. } = state else {
            return None;
        };
        let letters = grid.letters_along(&path);
        let mut on_path = lookup.on_path(&path).peekable();
        // A gesture over a placed word only ever credits that word.
        let matched = if on_path.peek().is_some() {
            on_path.find(|&i| is_pending(i))
        } else {
            lookup.get(&letters).iter().copied().find(|&i| is_pending(i))
        };
        log::debug!("selection {:?} spells {:?}, match {:?}", path, letters, matched);
        matched
    }

    /// Abort the gesture without side effects.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
    }
}
