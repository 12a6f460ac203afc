//! An immutable integer grid shared by every search state.
//!
//! [`CostGrid`] wraps its cells in an `Rc` so that cloning is a pointer copy:
//! all states derived from one grid read the same buffer and none can
//! mutate it. A value of 0 is a wall; any positive value is a passable cell
//! whose value doubles as its id and, in cost-aware mazes, its entry cost.

use std::rc::Rc;

use crate::error::GridError;
use crate::geom::{Bounds, Pos};

/// Cell value marking an impassable cell.
pub const WALL: i32 = 0;

/// A rectangular, row-major, read-only grid of cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Rc<[i32]>,
    bounds: Bounds,
}

impl CostGrid {
    /// Build a grid from rows of cells.
    ///
    /// Fails with [`GridError::Empty`] when there are no rows or no columns,
    /// [`GridError::Ragged`] when rows differ in length, and
    /// [`GridError::NegativeCell`] on negative values. Line and column numbers
    /// in errors are 1-based row/cell indices.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let ncols = first.len();
        if ncols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * ncols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(GridError::Ragged {
                    line: r + 1,
                    expected: ncols,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                if v < 0 {
                    return Err(GridError::NegativeCell {
                        line: r + 1,
                        column: c + 1,
                        value: v,
                    });
                }
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells: cells.into(),
            bounds: Bounds::new(rows.len() as i32, ncols as i32),
        })
    }

    /// The grid extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// The raw value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<i32> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// The cell id at `p`: `None` if out of bounds or a wall.
    #[inline]
    pub fn cell_id(&self, p: Pos) -> Option<i32> {
        self.at(p).filter(|&v| v != WALL)
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.cell_id(p).is_some()
    }

    /// Check that `p` is a legal position for a state.
    pub fn check(&self, p: Pos) -> Result<i32, GridError> {
        match self.at(p) {
            None => Err(GridError::OutOfBounds {
                pos: p,
                bounds: self.bounds,
            }),
            Some(WALL) => Err(GridError::Wall { pos: p }),
            Some(v) => Ok(v),
        }
    }

    /// The cells of row `r`, or `None` if out of bounds.
    pub fn row(&self, r: i32) -> Option<&[i32]> {
        if r < 0 || r >= self.bounds.rows {
            return None;
        }
        let w = self.bounds.cols as usize;
        let start = r as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Row-major iterator over `(position, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, i32)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Positions whose value satisfies `pred`, in row-major order.
    pub fn positions(&self, mut pred: impl FnMut(i32) -> bool) -> Vec<Pos> {
        self.iter()
            .filter_map(|(p, v)| pred(v).then_some(p))
            .collect()
    }

    /// Count passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != WALL).count()
    }

    /// Whether two grids share the same cell buffer.
    pub fn ptr_eq(&self, other: &CostGrid) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }
}
