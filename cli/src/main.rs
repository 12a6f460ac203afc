//! `labyrinth`: find paths through `;`-delimited grid mazes.
//!
//! Run: cargo run -- solve maze.txt 1 2 --strategy ucs

mod commands;

use clap::Parser;

/// Solve shortest-path problems on grid mazes.
#[derive(clap::Parser, Debug)]
#[command(name = "labyrinth", version)]
struct Cli {
    /// More log output: -v info, -vv debug, -vvv trace. RUST_LOG wins.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: commands::Command,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(cli.verbose)))
        .init();

    if let Err(e) = cli.command.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
