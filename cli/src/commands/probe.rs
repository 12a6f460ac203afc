use std::error::Error;

use labyrinth_core::{Convention, CostGrid, load_grid};

use super::StartArgs;

#[derive(clap::Args, Debug)]
pub struct Probe {
    #[command(flatten)]
    start: StartArgs,
}

impl Probe {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let grid = load_grid(&self.start.path)?;
        for line in probe_lines(&grid, self.start.x, self.start.y) {
            println!("{line}");
        }
        Ok(())
    }
}

/// One line per convention: where `(x, y)` lands and what is there.
fn probe_lines(grid: &CostGrid, x: i32, y: i32) -> Vec<String> {
    Convention::ALL
        .into_iter()
        .map(|c| {
            let p = c.to_pos(x, y, grid.rows());
            let found = match grid.at(p) {
                None => "outside".to_string(),
                Some(labyrinth_core::WALL) => "wall".to_string(),
                Some(id) => format!("id={id}"),
            };
            format!("{:>20} ({:<12}) -> (r={}, c={}) -> {found}", c.describe(), c.name(), p.row, p.col)
        })
        .collect()
}
