//! The two-valued state of a single cell.

use std::fmt;

/// State of one cell for the purpose of rule evaluation.
///
/// Only live cells are stored; a [`CellState::Dead`] cell is simply a
/// coordinate absent from the world's [`CellSet`](crate::CellSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// The cell is populated.
    Alive,
    /// The cell is empty.
    Dead,
}

impl CellState {
    /// Returns `true` for [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Character used by the text renderer and pattern reader.
    pub fn glyph(self) -> char {
        match self {
            Self::Alive => '*',
            Self::Dead => ' ',
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "alive"),
            Self::Dead => write!(f, "dead"),
        }
    }
}
