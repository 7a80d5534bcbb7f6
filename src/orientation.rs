//! The eight directions a word may be written along, and the mask that
//! enables a subset of them.

use alloc::vec::Vec;

/// Direction of a placed word on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum Orientation {
    Horizontal,
    HorizontalBack,
    Vertical,
    VerticalUp,
    Diagonal,
    DiagonalBack,
    DiagonalUp,
    DiagonalUpBack,
}

impl Orientation {
    /// Every orientation, in table order.
    pub const ALL: [Orientation; 8] = [
        Orientation::Horizontal,
        Orientation::HorizontalBack,
        Orientation::Vertical,
        Orientation::VerticalUp,
        Orientation::Diagonal,
        Orientation::DiagonalBack,
        Orientation::DiagonalUp,
        Orientation::DiagonalUpBack,
    ];

    /// Configuration name of the orientation.
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::HorizontalBack => "horizontalBack",
            Orientation::Vertical => "vertical",
            Orientation::VerticalUp => "verticalUp",
            Orientation::Diagonal => "diagonal",
            Orientation::DiagonalBack => "diagonalBack",
            Orientation::DiagonalUp => "diagonalUp",
            Orientation::DiagonalUpBack => "diagonalUpBack",
        }
    }

    /// Look an orientation up by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.name() == name)
    }

    /// `(row_delta, col_delta)` of one step along the orientation.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::HorizontalBack => (0, -1),
            Orientation::Vertical => (1, 0),
            Orientation::VerticalUp => (-1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::DiagonalBack => (1, -1),
            Orientation::DiagonalUp => (-1, 1),
            Orientation::DiagonalUpBack => (-1, -1),
        }
    }
}

/// Per-orientation enable flags. Missing keys default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct Orientations {
    pub horizontal: bool,
    pub horizontal_back: bool,
    pub vertical: bool,
    pub vertical_up: bool,
    pub diagonal: bool,
    pub diagonal_back: bool,
    pub diagonal_up: bool,
    pub diagonal_up_back: bool,
}

impl Orientations {
    /// Mask with every orientation enabled.
    pub const fn all() -> Self {
        Self {
            horizontal: true,
            horizontal_back: true,
            vertical: true,
            vertical_up: true,
            diagonal: true,
            diagonal_back: true,
            diagonal_up: true,
            diagonal_up_back: true,
        }
    }

    /// Mask with every orientation disabled.
    pub const fn none() -> Self {
        Self {
            horizontal: false,
            horizontal_back: false,
            vertical: false,
            vertical_up: false,
            diagonal: false,
            diagonal_back: false,
            diagonal_up: false,
            diagonal_up_back: false,
        }
    }

    /// Mask enabling exactly the given orientations.
    pub fn only(enabled: &[Orientation]) -> Self {
        let mut mask = Self::none();
        for &o in enabled {
            mask.set(o, true);
        }
        mask
    }

    pub fn is_enabled(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::HorizontalBack => self.horizontal_back,
            Orientation::Vertical => self.vertical,
            Orientation::VerticalUp => self.vertical_up,
            Orientation::Diagonal => self.diagonal,
            Orientation::DiagonalBack => self.diagonal_back,
            Orientation::DiagonalUp => self.diagonal_up,
            Orientation::DiagonalUpBack => self.diagonal_up_back,
        }
    }

    pub fn set(&mut self, orientation: Orientation, enabled: bool) {
        let slot = match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::HorizontalBack => &mut self.horizontal_back,
            Orientation::Vertical => &mut self.vertical,
            Orientation::VerticalUp => &mut self.vertical_up,
            Orientation::Diagonal => &mut self.diagonal,
            Orientation::DiagonalBack => &mut self.diagonal_back,
            Orientation::DiagonalUp => &mut self.diagonal_up,
            Orientation::DiagonalUpBack => &mut self.diagonal_up_back,
        };
        *slot = enabled;
    }

    /// Enabled orientations in table order.
    pub fn enabled(&self) -> Vec<Orientation> {
        Orientation::ALL
            .iter()
            .copied()
            .filter(|o| self.is_enabled(*o))
            .collect()
    }
}

impl Default for Orientations {
    fn default() -> Self {
        Self::all()
    }
}
