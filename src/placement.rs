//! Where a word landed on the grid.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::Coord;
use crate::orientation::Orientation;

/// A word placed on the grid. `path[i]` holds the word's `i`-th letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    pub word: String,
    pub start: Coord,
    pub end: Coord,
    pub path: Vec<Coord>,
    pub orientation: Orientation,
    /// Cells that already held the matching letter when the word was placed.
    pub overlap: usize,
}

impl Placement {
    /// Number of cells (letters) covered.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The word spelled from its end cell back to its start cell.
    pub fn reversed_word(&self) -> String {
        self.word.chars().rev().collect()
    }
}

/// Step `k` cells from `origin` along `delta`, staying inside a `size`×`size` grid.
pub(crate) fn step(origin: Coord, delta: (isize, isize), k: usize, size: usize) -> Option<Coord> {
    let k = k as isize;
    let r = origin.0 as isize + delta.0 * k;
    let c = origin.1 as isize + delta.1 * k;
    if r < 0 || c < 0 || r >= size as isize || c >= size as isize {
        None
    } else {
        Some((r as usize, c as usize))
    }
}
