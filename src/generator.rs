//! Puzzle generation: grid sizing, randomized word placement with retries
//! over growing grid sizes, and noise fill.

use alloc::vec::Vec;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::common::PuzzleError;
use crate::config::{Behaviour, GeneratorLimits, DEFAULT_FILL_POOL};
use crate::grid::Grid;
use crate::orientation::Orientation;
use crate::placement::Placement;
use crate::words::WordEntry;

/// A generated puzzle. `placements[i]` belongs to the `i`-th entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

impl Puzzle {
    pub fn size(&self) -> usize {
        self.grid.size()
    }
}

/// Uppercase `pool` and keep its letters, falling back to `A`-`Z` when
/// nothing usable remains.
pub fn prepare_fill_pool(pool: &str) -> Vec<char> {
    let letters: Vec<char> = pool
        .to_uppercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if letters.is_empty() {
        if !pool.trim().is_empty() {
            log::warn!("fill pool {:?} has no letters, using default", pool);
        }
        return DEFAULT_FILL_POOL.chars().collect();
    }
    letters
}

/// First and last grid side lengths the generator tries for `entries`.
pub fn size_bounds(entries: &[WordEntry], limits: &GeneratorLimits) -> (usize, usize) {
    let longest = entries.iter().map(WordEntry::len).max().unwrap_or(0);
    let total: usize = entries.iter().map(WordEntry::len).sum();
    let by_area = libm::ceil(libm::sqrt(total as f64)) as usize + 1;
    let start = longest.max(by_area);
    let upper = start
        .max(longest + limits.size_slack)
        .max(limits.min_upper_size);
    (start, upper)
}

/// Generate a puzzle containing every entry.
///
/// Deterministic for a given `rng` state.
pub fn generate<R: Rng + ?Sized>(
    entries: &[WordEntry],
    behaviour: &Behaviour,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    let orientations = behaviour.orientations.enabled();
    if orientations.is_empty() {
        return Err(PuzzleError::NoOrientations);
    }
    if entries.is_empty() {
        return Err(PuzzleError::EmptyWordList);
    }

    let mut sorted: Vec<(usize, Vec<char>)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (i, e.word.chars().collect()))
        .collect();
    sorted.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    let limits = behaviour.limits;
    let (start, upper) = size_bounds(entries, &limits);
    let fill_pool = prepare_fill_pool(&behaviour.fill_pool);

    for size in start..=upper {
        for trial in 0..limits.trials_per_size {
            if let Some((grid, placements)) =
                try_place_all(size, &sorted, &orientations, behaviour.prefer_overlap, rng)
            {
                let mut grid = grid;
                grid.fill(&fill_pool, rng);
                log::info!(
                    "generated {}x{} puzzle with {} words (trial {})",
                    size,
                    size,
                    placements.len(),
                    trial + 1
                );
                return Ok(Puzzle { grid, placements });
            }
        }
        log::debug!("no placement found at size {}, growing grid", size);
    }

    Err(PuzzleError::UnableToPlaceWords {
        longest: sorted.first().map(|(_, w)| w.len()).unwrap_or(0),
        max_size: upper,
    })
}

/// One randomized trial at a fixed size. Returns placements in entry order.
fn try_place_all<R: Rng + ?Sized>(
    size: usize,
    sorted: &[(usize, Vec<char>)],
    orientations: &[Orientation],
    prefer_overlap: bool,
    rng: &mut R,
) -> Option<(Grid, Vec<Placement>)> {
    let mut grid = Grid::new(size);
    let mut working: Vec<&(usize, Vec<char>)> = sorted.iter().collect();
    working.shuffle(rng);

    let mut slots: Vec<Option<Placement>> = (0..sorted.len()).map(|_| None).collect();
    for (entry_index, word) in working {
        let placement = place_word(word, &grid, orientations, prefer_overlap, rng)?;
        grid.apply(&placement);
        slots[*entry_index] = Some(placement);
    }
    let placements = slots.into_iter().collect::<Option<Vec<_>>>()?;
    Some((grid, placements))
}

/// Pick a legal placement for `word`, preferring maximum overlap when asked.
pub fn place_word<R: Rng + ?Sized>(
    word: &[char],
    grid: &Grid,
    orientations: &[Orientation],
    prefer_overlap: bool,
    rng: &mut R,
) -> Option<Placement> {
    let mut shuffled = orientations.to_vec();
    shuffled.shuffle(rng);

    let size = grid.size();
    let mut candidates = Vec::new();
    for orientation in shuffled {
        for row in 0..size {
            for col in 0..size {
                if let Some(p) = grid.evaluate(word, (row, col), orientation) {
                    candidates.push(p);
                }
            }
        }
    }

    if prefer_overlap {
        let best = candidates.iter().map(|p| p.overlap).max()?;
        candidates.retain(|p| p.overlap == best);
    }
    candidates.choose(rng).cloned()
}
