use std::error::Error;
use std::path::PathBuf;

use labyrinth_core::Convention;

mod info;
pub use info::*;

mod probe;
pub use probe::*;

mod solve;
pub use solve::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Search a maze from a start cell.
    #[command(alias = "s")]
    Solve(Solve),

    /// Show where a start coordinate lands under every convention.
    #[command(alias = "p")]
    Probe(Probe),

    /// Print the size and first and last rows of a grid file.
    #[command(alias = "i")]
    Info(Info),
}

impl Command {
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        match self {
            Command::Solve(args) => args.run(),
            Command::Probe(args) => args.run(),
            Command::Info(args) => args.run(),
        }
    }
}

/// Grid file and start coordinates shared by commands that place a start.
#[derive(clap::Args, Debug)]
pub struct StartArgs {
    /// Path to the `;`-delimited grid file.
    pub path: PathBuf,
    /// First start coordinate.
    #[arg(allow_negative_numbers = true)]
    pub x: i32,
    /// Second start coordinate.
    #[arg(allow_negative_numbers = true)]
    pub y: i32,
}

/// How to read `x` and `y`.
#[derive(clap::Args, Debug)]
pub struct ConventionArg {
    /// Coordinate convention for the start cell (tl/bl origin, rowcol/colrow
    /// order, 0b/1b base).
    #[arg(short, long, default_value = "tl-rowcol-0b")]
    pub convention: Convention,
}
