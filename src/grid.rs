//! Square letter grid: placement evaluation, word application and noise fill.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::Coord;
use crate::orientation::Orientation;
use crate::placement::{step, Placement};

/// An N×N grid of letters. Cells start unset and are filled by placement.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from complete rows of letters. Returns `None` if the rows
    /// do not form a square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let letters: Vec<char> = row.as_ref().chars().collect();
            if letters.len() != size {
                return None;
            }
            cells.extend(letters.into_iter().map(Some));
        }
        Some(Grid { size, cells })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    /// Letter at `(row, col)`, or `None` if unset or out of bounds.
    pub fn get(&self, (row, col): Coord) -> Option<char> {
        if !self.contains((row, col)) {
            return None;
        }
        self.cells[row * self.size + col]
    }

    fn set(&mut self, (row, col): Coord, letter: char) {
        let size = self.size;
        self.cells[row * size + col] = Some(letter);
    }

    /// `true` once every cell holds a letter.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check whether `word` fits from `start` along `orientation`.
    ///
    /// Every covered cell must be inside the grid and either empty or already
    /// holding the same letter. Returns the candidate placement, with its
    /// overlap count, when it fits.
    pub fn evaluate(&self, word: &[char], start: Coord, orientation: Orientation) -> Option<Placement> {
        if word.is_empty() || !self.contains(start) {
            return None;
        }
        let delta = orientation.delta();
        let end = step(start, delta, word.len() - 1, self.size)?;

        let mut overlap = 0;
        let mut path = Vec::with_capacity(word.len());
        for (i, &letter) in word.iter().enumerate() {
            let cell = step(start, delta, i, self.size)?;
            match self.get(cell) {
                Some(current) if current != letter => return None,
                Some(_) => overlap += 1,
                None => {}
            }
            path.push(cell);
        }

        Some(Placement {
            word: word.iter().collect(),
            start,
            end,
            path,
            orientation,
            overlap,
        })
    }

    /// Write a placement's letters onto the grid.
    pub fn apply(&mut self, placement: &Placement) {
        for (cell, letter) in placement.path.iter().zip(placement.word.chars()) {
            self.set(*cell, letter);
        }
    }

    /// Fill every unset cell with a random letter from `pool`.
    pub fn fill<R: Rng + ?Sized>(&mut self, pool: &[char], rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = pool.choose(rng).copied();
        }
    }

    /// Letters read along `path`, skipping unset or out-of-bounds cells.
    pub fn letters_along(&self, path: &[Coord]) -> String {
        path.iter().filter_map(|&cell| self.get(cell)).collect()
    }

    /// Rows as strings, using `.` for unset cells.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.unwrap_or('.')).collect())
            .collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {} }}", self.size)?;
        for row in self.rows() {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for letter in row.chars() {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}
