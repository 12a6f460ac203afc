use std::error::Error;
use std::path::PathBuf;

use labyrinth_core::{CostGrid, load_grid};

#[derive(clap::Args, Debug)]
pub struct Info {
    /// Path to the `;`-delimited grid file.
    path: PathBuf,
}

impl Info {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let grid = load_grid(&self.path)?;
        print!("{}", summary(&grid));
        Ok(())
    }
}

fn format_row(row: &[i32]) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

fn summary(grid: &CostGrid) -> String {
    let first = grid.row(0).map(format_row).unwrap_or_default();
    let last = grid.row(grid.rows() - 1).map(format_row).unwrap_or_default();
    format!(
        "Rows: {}\nColumns: {}\nPassable cells: {}\nFirst row: {first}\nLast row: {last}\n",
        grid.rows(),
        grid.cols(),
        grid.passable_count(),
    )
}
