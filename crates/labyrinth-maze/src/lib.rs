//! Grid-maze search states.
//!
//! [`Maze`] couples a [`CostGrid`](labyrinth_core::CostGrid) with a
//! [`GoalPolicy`] and a [`CostModel`]; [`MazeState`] is the position-level
//! search node that implements
//! [`InformedState`](labyrinth_search::InformedState), so any
//! `labyrinth_search` driver can run on it.

mod maze;
mod state;

pub use maze::{CostModel, DEFAULT_GOAL_IDS, GoalPolicy, Maze};
pub use state::MazeState;
