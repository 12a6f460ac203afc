//! Errors raised while loading a grid or placing a start position on it.

use std::fmt;
use std::io;

use crate::geom::{Bounds, Pos};

/// Errors that can occur before a search begins.
///
/// Loading failures (`Io`, `Parse`, `Ragged`, `NegativeCell`, `Empty`) and
/// `InvalidPolicy` are configuration errors. `OutOfBounds` and `Wall` reject
/// a start position.
#[derive(Debug)]
pub enum GridError {
    /// The grid file could not be read.
    Io(io::Error),
    /// A cell is not an integer. `line` and `column` are 1-based.
    Parse {
        line: usize,
        column: usize,
        text: String,
    },
    /// A row has a different number of cells than the first row.
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A cell holds a negative value.
    NegativeCell {
        line: usize,
        column: usize,
        value: i32,
    },
    /// The input contains no rows.
    Empty,
    /// A goal or cost policy cannot be applied.
    InvalidPolicy(String),
    /// A position lies outside the grid.
    OutOfBounds { pos: Pos, bounds: Bounds },
    /// A position lies on a wall (value 0).
    Wall { pos: Pos },
}

impl GridError {
    /// Whether this error comes from malformed grid input or policies.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::Parse { .. }
                | Self::Ragged { .. }
                | Self::NegativeCell { .. }
                | Self::Empty
                | Self::InvalidPolicy(_)
        )
    }

    /// Whether this error rejects a start position.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::Wall { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "grid: cannot read input: {e}"),
            Self::Parse { line, column, text } => write!(
                f,
                "grid: line {line}, cell {column}: \u{201c}{text}\u{201d} is not an integer"
            ),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has {found} cells, expected {expected}"
            ),
            Self::NegativeCell {
                line,
                column,
                value,
            } => write!(f, "grid: line {line}, cell {column}: negative value {value}"),
            Self::Empty => write!(f, "grid: no rows"),
            Self::InvalidPolicy(msg) => write!(f, "invalid policy: {msg}"),
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside the {bounds} grid")
            }
            Self::Wall { pos } => write!(f, "position {pos} is a wall"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
