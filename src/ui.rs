#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;
use std::vec::Vec;

use crate::{
    common::Coord,
    config::{GameSetup, Mode},
    generator::Puzzle,
    l10n::{format_time, L10n},
    placement::Placement,
    renderer::{LockReason, Renderer},
    session::PlacementStatus,
    words::WordEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellMark {
    Plain,
    Found,
    Solved,
}

/// Text renderer for the terminal front end.
///
/// Keeps its own copy of what is on screen, keyed by placement index, and
/// queues short notices (found words, lock reasons) for the caller to print.
pub struct TerminalRenderer {
    l10n: L10n,
    mode: Mode,
    show_vocabulary: bool,
    time_limit: Option<u32>,
    size: usize,
    letters: Vec<char>,
    marks: Vec<CellMark>,
    words: Vec<(WordEntry, PlacementStatus)>,
    selection: Vec<Coord>,
    found: usize,
    total: usize,
    elapsed: u32,
    notices: Vec<String>,
}

impl TerminalRenderer {
    pub fn new(setup: &GameSetup) -> Self {
        Self {
            l10n: setup.l10n.clone(),
            mode: setup.mode,
            show_vocabulary: setup.behaviour.show_vocabulary,
            time_limit: setup.behaviour.time_limit(),
            size: 0,
            letters: Vec::new(),
            marks: Vec::new(),
            words: Vec::new(),
            selection: Vec::new(),
            found: 0,
            total: 0,
            elapsed: 0,
            notices: Vec::new(),
        }
    }

    /// Drain the notices queued since the last call.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn mark_path(&mut self, path: &[Coord], mark: CellMark) {
        for &(r, c) in path {
            let i = r * self.size + c;
            // A found word keeps its highlight when a solved word crosses it.
            if self.marks.get(i) != Some(&CellMark::Found) {
                if let Some(slot) = self.marks.get_mut(i) {
                    *slot = mark;
                }
            }
        }
    }

    fn set_word_status(&mut self, index: usize, status: PlacementStatus) {
        if let Some(word) = self.words.get_mut(index) {
            word.1 = status;
        }
    }

    /// Counter and timer line.
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "{} | {}: {}",
            self.l10n.found_label(self.found, self.total),
            self.l10n.time_spent,
            format_time(self.elapsed)
        );
        if let Some(limit) = self.time_limit {
            let _ = write!(line, " / {}", format_time(limit));
        }
        line
    }

    /// The whole board: column header, grid, word list and status line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("     ");
        for c in 0..self.size {
            let _ = write!(out, " {} ", column_label(c));
        }
        out.push('\n');
        for r in 0..self.size {
            let _ = write!(out, "  {:2} ", r + 1);
            for c in 0..self.size {
                let i = r * self.size + c;
                let letter = self.letters[i];
                let cell = if self.selection.contains(&(r, c)) {
                    format!("<{}>", letter)
                } else {
                    match self.marks[i] {
                        CellMark::Plain => format!(" {} ", letter),
                        CellMark::Found => format!("[{}]", letter),
                        CellMark::Solved => format!("({})", letter),
                    }
                };
                out.push_str(&cell);
            }
            out.push('\n');
        }

        if self.show_vocabulary {
            let _ = writeln!(out, "\n  {}:", self.l10n.word_list_header);
            for (entry, status) in &self.words {
                let tag = match status {
                    PlacementStatus::Pending => "[ ]",
                    PlacementStatus::Found => "[x]",
                    PlacementStatus::Solved => "[-]",
                };
                let revealed = *status != PlacementStatus::Pending;
                let line = match (self.mode, &entry.hint) {
                    (Mode::Hint, Some(hint)) if revealed => format!("{} = {}", hint, entry.word),
                    (Mode::Hint, Some(hint)) => hint.clone(),
                    _ => entry.word.clone(),
                };
                let _ = writeln!(out, "    {} {}", tag, line);
            }
        }
        let _ = writeln!(out, "\n  {}", self.status_line());
        out
    }
}

impl Renderer for TerminalRenderer {
    fn puzzle_ready(&mut self, puzzle: &Puzzle, entries: &[WordEntry]) {
        self.size = puzzle.size();
        self.letters = puzzle
            .grid
            .rows()
            .iter()
            .flat_map(|row| row.chars().collect::<Vec<_>>())
            .collect();
        self.marks = vec![CellMark::Plain; self.size * self.size];
        self.words = entries
            .iter()
            .cloned()
            .map(|e| (e, PlacementStatus::Pending))
            .collect();
        self.selection.clear();
        self.notices.clear();
    }

    fn selection_changed(&mut self, path: &[Coord]) {
        self.selection = path.to_vec();
    }

    fn word_found(&mut self, index: usize, placement: &Placement) {
        self.mark_path(&placement.path, CellMark::Found);
        self.set_word_status(index, PlacementStatus::Found);
        self.notices.push(format!("Found {}!", placement.word));
    }

    fn word_solved(&mut self, index: usize, placement: &Placement) {
        self.mark_path(&placement.path, CellMark::Solved);
        self.set_word_status(index, PlacementStatus::Solved);
    }

    fn score_changed(&mut self, found: usize, total: usize) {
        self.found = found;
        self.total = total;
    }

    fn elapsed_changed(&mut self, seconds: u32) {
        self.elapsed = seconds;
    }

    fn locked(&mut self, reason: LockReason) {
        let notice = match reason {
            LockReason::Completed => self.l10n.score_label(self.found, self.total),
            LockReason::Revealed => format!(
                "{} ({})",
                self.l10n.show_solution,
                self.l10n.score_label(self.found, self.total)
            ),
            LockReason::TimeExpired => self.l10n.time_expired.clone(),
        };
        self.notices.push(notice);
    }
}

/// Column label: `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(mut col: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push((b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    label.iter().rev().collect()
}

/// Parse a cell such as `A5` (column letters, then 1-based row) on a
/// `size`×`size` grid.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let split = input
        .find(|c: char| !c.is_ascii_alphabetic())
        .ok_or_else(|| format!("Missing row number in '{}'", input))?;
    let (letters, digits) = input.split_at(split);
    if letters.is_empty() {
        return Err(format!("Missing column letter in '{}' (e.g. A5)", input));
    }
    let mut col = 0usize;
    for ch in letters.chars() {
        let v = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        col = col.saturating_mul(26).saturating_add(v);
    }
    let col = col - 1;
    if col >= size {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            letters,
            column_label(size.saturating_sub(1))
        ));
    }
    let row: usize = digits
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", digits, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

/// A line of input at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Drag(Coord, Coord),
    Check,
    Reveal,
    Retry,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "Commands:
  drag <from> [to]   select a straight line of cells, e.g. `drag A1 E5`
  check              show the current score
  reveal             show the solution and end the game
  retry              start a new puzzle
  show               redraw the board
  help               this message
  quit               leave the game";

pub fn parse_command(line: &str, size: usize) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(Command::Show);
    };
    let command = match verb.to_ascii_lowercase().as_str() {
        "drag" | "d" => {
            let from = parts
                .next()
                .ok_or_else(|| "drag needs a start cell, e.g. `drag A1 E5`".to_string())?;
            let from = parse_coord(from, size)?;
            let to = match parts.next() {
                Some(to) => parse_coord(to, size)?,
                None => from,
            };
            Command::Drag(from, to)
        }
        "check" | "score" => Command::Check,
        "reveal" | "solve" => Command::Reveal,
        "retry" | "restart" => Command::Retry,
        "show" | "board" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command '{}' - type `help`", other)),
    };
    if parts.next().is_some() {
        return Err("Too many arguments - type `help`".to_string());
    }
    Ok(command)
}
