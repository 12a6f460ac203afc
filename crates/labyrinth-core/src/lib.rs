//! **labyrinth-core**: core types for grid-maze search.
//!
//! This crate provides the pieces every other *labyrinth* crate builds on:
//! canonical positions and move operators, the immutable shared
//! [`CostGrid`], the `;`-delimited grid loader, command-line coordinate
//! conventions and the [`GridError`] taxonomy.

pub mod coords;
pub mod distance;
pub mod error;
pub mod geom;
pub mod grid;
pub mod load;

pub use coords::Convention;
pub use distance::{manhattan, manhattan_to_nearest};
pub use error::GridError;
pub use geom::{Bounds, Move, Pos};
pub use grid::{CostGrid, WALL};
pub use load::{load_grid, parse_grid};
