//! Command-line coordinate conventions.
//!
//! Users give a start cell as two numbers `(x, y)` whose meaning varies:
//! which number is the row, whether counting starts at 0 or 1, and whether
//! rows count from the top or the bottom. A [`Convention`] maps such a pair
//! to a canonical [`Pos`] (top-left origin, 0-based, row first). The result
//! is not bounds-checked.

use std::fmt;
use std::str::FromStr;

use crate::geom::Pos;

/// How an `(x, y)` pair maps to a canonical position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convention {
    /// Top-left origin, x = column, y = row, 1-based.
    TopLeftColRow1,
    /// Top-left origin, x = row, y = column, 1-based.
    TopLeftRowCol1,
    /// Top-left origin, x = column, y = row, 0-based.
    TopLeftColRow0,
    /// Top-left origin, x = row, y = column, 0-based. Identity mapping.
    #[default]
    TopLeftRowCol0,
    /// Bottom-left origin, x = column, y = row counted upward, 1-based.
    BottomLeftColRow1,
    /// Bottom-left origin, x = row counted upward, y = column, 1-based.
    BottomLeftRowCol1,
}

impl Convention {
    pub const ALL: [Convention; 6] = [
        Convention::TopLeftColRow1,
        Convention::TopLeftRowCol1,
        Convention::TopLeftColRow0,
        Convention::TopLeftRowCol0,
        Convention::BottomLeftColRow1,
        Convention::BottomLeftRowCol1,
    ];

    /// Map `(x, y)` to a canonical position on a grid with `rows` rows.
    pub fn to_pos(self, x: i32, y: i32, rows: i32) -> Pos {
        match self {
            Convention::TopLeftColRow1 => Pos::new(y - 1, x - 1),
            Convention::TopLeftRowCol1 => Pos::new(x - 1, y - 1),
            Convention::TopLeftColRow0 => Pos::new(y, x),
            Convention::TopLeftRowCol0 => Pos::new(x, y),
            Convention::BottomLeftColRow1 => Pos::new(rows - y, x - 1),
            Convention::BottomLeftRowCol1 => Pos::new(rows - x, y - 1),
        }
    }

    /// Short name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Convention::TopLeftColRow1 => "tl-colrow-1b",
            Convention::TopLeftRowCol1 => "tl-rowcol-1b",
            Convention::TopLeftColRow0 => "tl-colrow-0b",
            Convention::TopLeftRowCol0 => "tl-rowcol-0b",
            Convention::BottomLeftColRow1 => "bl-colrow-1b",
            Convention::BottomLeftRowCol1 => "bl-rowcol-1b",
        }
    }

    /// Human-readable description.
    pub const fn describe(self) -> &'static str {
        match self {
            Convention::TopLeftColRow1 => "TL col,row 1-based",
            Convention::TopLeftRowCol1 => "TL row,col 1-based",
            Convention::TopLeftColRow0 => "TL col,row 0-based",
            Convention::TopLeftRowCol0 => "TL row,col 0-based",
            Convention::BottomLeftColRow1 => "BL col,row 1-based",
            Convention::BottomLeftRowCol1 => "BL row,col 1-based",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown convention name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConventionError(pub String);

impl fmt::Display for ParseConventionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown coordinate convention \u{201c}{}\u{201d} (expected one of:", self.0)?;
        for c in Convention::ALL {
            write!(f, " {}", c.name())?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ParseConventionError {}

impl FromStr for Convention {
    type Err = ParseConventionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Convention::ALL
            .into_iter()
            .find(|c| c.name() == key)
            .ok_or_else(|| ParseConventionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_variants() {
        assert_eq!(Convention::TopLeftColRow1.to_pos(4, 1, 3), Pos::new(0, 3));
        assert_eq!(Convention::TopLeftRowCol1.to_pos(4, 1, 3), Pos::new(3, 0));
        assert_eq!(Convention::TopLeftColRow0.to_pos(4, 1, 3), Pos::new(1, 4));
        assert_eq!(Convention::TopLeftRowCol0.to_pos(4, 1, 3), Pos::new(4, 1));
    }

    #[test]
    fn bottom_left_counts_rows_upward() {
        // Bottom row of a 3-row grid is row 1 in 1-based bottom-left terms.
        assert_eq!(Convention::BottomLeftColRow1.to_pos(2, 1, 3), Pos::new(2, 1));
        assert_eq!(Convention::BottomLeftColRow1.to_pos(2, 3, 3), Pos::new(0, 1));
        assert_eq!(Convention::BottomLeftRowCol1.to_pos(1, 5, 3), Pos::new(2, 4));
    }

    #[test]
    fn names_round_trip() {
        for c in Convention::ALL {
            assert_eq!(c.name().parse::<Convention>(), Ok(c));
        }
        assert!("tl".parse::<Convention>().is_err());
        assert_eq!(Convention::default(), Convention::TopLeftRowCol0);
    }
}
