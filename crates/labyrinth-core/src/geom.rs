//! Geometry primitives: [`Pos`], [`Move`] and [`Bounds`].
//!
//! Positions are canonical `(row, col)` indices: row grows downward from the
//! top-left corner, column grows to the right, both 0-based.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A canonical grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The position reached by taking `mv` from here. May be out of bounds.
    #[inline]
    pub const fn step(self, mv: Move) -> Self {
        let (dr, dc) = mv.delta();
        self.shift(dr, dc)
    }

    /// The four cardinal neighbours in [`Move::ALL`] order, paired with the
    /// move that reaches them.
    #[inline]
    pub fn neighbors_4(self) -> [(Move, Pos); 4] {
        Move::ALL.map(|mv| (mv, self.step(mv)))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A cardinal move operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in expansion order. Every search strategy breaks ties in
    /// this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column delta of the move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// Lowercase operator name.
    pub const fn name(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid anchored at the origin: rows `[0, rows)` and
/// columns `[0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds have zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if outside.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Pos::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Pos,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = if self.bounds.is_empty() {
            0
        } else {
            (self.cur.row.max(0) as usize) * (self.bounds.cols as usize) + self.cur.col as usize
        };
        let remaining = self.bounds.len().saturating_sub(done);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
