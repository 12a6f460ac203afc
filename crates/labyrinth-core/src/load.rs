//! Reading grids from `;`-delimited text.
//!
//! One row per line, cells separated by `;`. Blank lines are skipped and
//! surrounding whitespace is trimmed from lines and cells.

use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::grid::CostGrid;

/// Cell separator.
pub const DELIMITER: char = ';';

/// Parse grid text into a [`CostGrid`].
///
/// Line numbers in errors refer to the physical line in `text` (1-based),
/// counting skipped blank lines.
pub fn parse_grid(text: &str) -> Result<CostGrid, GridError> {
    let mut rows: Vec<Vec<i32>> = Vec::new();
    let mut expected: Option<usize> = None;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (j, cell) in line.split(DELIMITER).enumerate() {
            let cell = cell.trim();
            let value: i32 = cell.parse().map_err(|_| GridError::Parse {
                line: i + 1,
                column: j + 1,
                text: cell.to_string(),
            })?;
            if value < 0 {
                return Err(GridError::NegativeCell {
                    line: i + 1,
                    column: j + 1,
                    value,
                });
            }
            row.push(value);
        }
        match expected {
            None => expected = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(GridError::Ragged {
                    line: i + 1,
                    expected: n,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    log::debug!(
        "parsed grid with {} rows, {} columns",
        rows.len(),
        expected.unwrap_or(0)
    );
    CostGrid::from_rows(rows)
}

/// Read and parse a grid file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<CostGrid, GridError> {
    let path = path.as_ref();
    log::debug!("loading grid from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_grid(&text)
}
