//! Game configuration: behaviour flags, generator limits and the top-level
//! config record the front end loads.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::PuzzleError;
use crate::l10n::L10n;
use crate::orientation::Orientations;
use crate::words::{normalize_entries, WordEntry, WordListInput};

/// Letters used to fill uncovered cells when no usable pool is configured.
pub const DEFAULT_FILL_POOL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DEFAULT_TASK_DESCRIPTION: &str = "Find all the words in the grid.";

/// Randomized trials attempted at each grid size.
pub const TRIALS_PER_SIZE: usize = 40;
/// Extra cells beyond the longest word allowed when growing the grid.
pub const SIZE_SLACK: usize = 4;
/// The grid may always grow at least up to this side length.
pub const MIN_UPPER_SIZE: usize = 12;

/// Bounds on the generator's retry search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorLimits {
    pub trials_per_size: usize,
    pub size_slack: usize,
    pub min_upper_size: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            trials_per_size: TRIALS_PER_SIZE,
            size_slack: SIZE_SLACK,
            min_upper_size: MIN_UPPER_SIZE,
        }
    }
}

/// Whether the player hunts plain words or words described by hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Word,
    Hint,
}

impl Mode {
    /// Parse a configured mode name. Unknown names fall back to [`Mode::Word`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "hint" | "dica" => Mode::Hint,
            _ => Mode::Word,
        }
    }
}

/// Puzzle and presentation behaviour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct Behaviour {
    pub orientations: Orientations,
    #[cfg_attr(feature = "std", serde(deserialize_with = "loose::fill_pool"))]
    pub fill_pool: String,
    pub prefer_overlap: bool,
    pub show_vocabulary: bool,
    pub enable_show_solution: bool,
    pub enable_retry: bool,
    #[cfg_attr(feature = "std", serde(deserialize_with = "loose::time_limit"))]
    pub time_limit_seconds: Option<f64>,
    #[cfg_attr(feature = "std", serde(skip))]
    pub limits: GeneratorLimits,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            orientations: Orientations::all(),
            fill_pool: String::from(DEFAULT_FILL_POOL),
            prefer_overlap: true,
            show_vocabulary: true,
            enable_show_solution: true,
            enable_retry: true,
            time_limit_seconds: None,
            limits: GeneratorLimits::default(),
        }
    }
}

impl Behaviour {
    /// Effective time limit in whole seconds, if any.
    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit_seconds.and_then(parse_time_limit)
    }
}

/// Lenient readers for behaviour values hand-edited configs get wrong.
#[cfg(feature = "std")]
mod loose {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    use super::DEFAULT_FILL_POOL;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    /// Anything but a string falls back to the default pool.
    pub(super) fn fill_pool<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        Ok(match Scalar::deserialize(de)? {
            Scalar::Text(pool) => pool,
            _ => String::from(DEFAULT_FILL_POOL),
        })
    }

    /// A number or a numeric string; anything else means no limit.
    pub(super) fn time_limit<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        Ok(match Scalar::deserialize(de)? {
            Scalar::Number(secs) => Some(secs),
            Scalar::Text(secs) => secs.trim().parse().ok(),
            Scalar::Other(_) => None,
        })
    }
}

/// Interpret a configured time limit. Missing, non-finite and non-positive
/// values mean "no limit"; fractional seconds are floored.
pub fn parse_time_limit(value: f64) -> Option<u32> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let secs = libm::floor(value);
    if secs < 1.0 {
        None
    } else if secs >= u32::MAX as f64 {
        Some(u32::MAX)
    } else {
        Some(secs as u32)
    }
}

/// Raw game configuration as loaded by the front end.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "std", derive(serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct GameConfig {
    pub word_list: WordListInput,
    pub mode: Option<String>,
    pub task_description: Option<String>,
    pub behaviour: Behaviour,
    pub l10n: L10n,
}

impl GameConfig {
    /// Config for a plain word list with default behaviour.
    pub fn from_words<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let items = words
            .into_iter()
            .map(|w| crate::words::RawEntry::Word(w.into()))
            .collect::<Vec<_>>();
        Self {
            word_list: WordListInput::Items(items),
            ..Self::default()
        }
    }

    /// Validate the config and resolve it into a ready-to-play setup.
    pub fn into_setup(self) -> Result<GameSetup, PuzzleError> {
        let mode = self.mode.as_deref().map(Mode::from_name).unwrap_or_default();
        let entries = normalize_entries(&self.word_list, mode)?;

        let mut behaviour = self.behaviour;
        if mode == Mode::Hint {
            behaviour.show_vocabulary = true;
        }

        let task_description = self
            .task_description
            .map(|d| String::from(d.trim()))
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_TASK_DESCRIPTION));

        Ok(GameSetup {
            entries,
            behaviour,
            mode,
            l10n: self.l10n,
            task_description,
        })
    }
}

/// Validated configuration a game controller is built from.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub entries: Vec<WordEntry>,
    pub behaviour: Behaviour,
    pub mode: Mode,
    pub l10n: L10n,
    pub task_description: String,
}

impl GameSetup {
    pub fn new(entries: Vec<WordEntry>, behaviour: Behaviour) -> Self {
        Self {
            entries,
            behaviour,
            mode: Mode::Word,
            l10n: L10n::default(),
            task_description: String::from(DEFAULT_TASK_DESCRIPTION),
        }
    }
}
