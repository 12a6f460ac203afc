//! Generic state-space search.
//!
//! This crate provides four interchangeable drivers over any type that
//! implements [`State`]:
//!
//! - **Breadth-first** fewest-edges search ([`Search::breadth_first`])
//! - **Depth-first** with a depth bound ([`Search::depth_first`])
//! - **Uniform-cost** minimum-cost search ([`Search::uniform_cost`])
//! - **A\*** heuristic minimum-cost search ([`Search::astar`])
//!
//! All drivers run through [`Search`], which owns the node arena and
//! reuses its buffers between runs. Every driver breaks ties by the order in
//! which [`State::successors`] emits children, so repeated runs return
//! identical results.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`State`] | breadth-first, depth-first, uniform-cost |
//! | [`InformedState`] : [`State`] | A*, [`Search::run`] |

mod astar;
mod bfs;
mod dfs;
mod engine;
mod frontier;
mod result;
#[cfg(test)]
mod testing;
mod traits;
mod ucs;

pub use engine::{
    DEFAULT_MAX_DEPTH, Limits, NO_PARENT, ParseStrategyError, Search, Strategy, astar,
    breadth_first, depth_first, uniform_cost,
};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use result::{SearchResult, Solution, Stats};
pub use traits::{InformedState, State};
