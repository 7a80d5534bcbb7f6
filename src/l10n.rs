//! Display strings and their placeholder substitution.

use alloc::format;
use alloc::string::{String, ToString};

/// Display strings. Placeholders such as `@found` are replaced at format time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct L10n {
    pub check: String,
    pub try_again: String,
    pub show_solution: String,
    /// Uses `@found` and `@totalWords`.
    pub found: String,
    pub time_spent: String,
    /// Uses `@score` and `@total`.
    pub score: String,
    pub word_list_header: String,
    pub time_expired: String,
}

impl Default for L10n {
    fn default() -> Self {
        Self {
            check: "Check".into(),
            try_again: "Retry".into(),
            show_solution: "Show solution".into(),
            found: "@found of @totalWords found".into(),
            time_spent: "Time spent".into(),
            score: "You got @score out of @total points".into(),
            word_list_header: "Words".into(),
            time_expired: "Time is up. Restart to try again.".into(),
        }
    }
}

impl L10n {
    /// Counter label, e.g. "2 of 5 found".
    pub fn found_label(&self, found: usize, total: usize) -> String {
        self.found
            .replace("@found", &found.to_string())
            .replace("@totalWords", &total.to_string())
    }

    /// Score feedback, e.g. "You got 2 out of 5 points".
    pub fn score_label(&self, score: usize, total: usize) -> String {
        self.score
            .replace("@score", &score.to_string())
            .replace("@total", &total.to_string())
    }
}

/// Format seconds as `MM:SS`.
pub fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
