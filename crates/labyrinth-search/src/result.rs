use std::fmt;

use crate::traits::State;

/// A goal reached by a search, with the path that reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S: State> {
    /// The goal state.
    pub goal: S,
    /// Total cost: the sum of [`edge_costs`](Self::edge_costs).
    pub cost: i32,
    /// Operators from the root to the goal.
    pub path: Vec<S::Op>,
    /// Cost of each edge along `path`, in the same order.
    pub edge_costs: Vec<i32>,
}

impl<S: State> Solution<S> {
    /// Number of edges on the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Operators joined by `sep`.
    pub fn render_path(&self, sep: &str) -> String {
        self.path
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl<S: State> fmt::Display for Solution<S> {
    /// `cost=<cost> steps=<n> path=<op;op;...>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cost={} steps={} path={}",
            self.cost,
            self.steps(),
            self.render_path(";")
        )
    }
}

/// Outcome of a search run.
///
/// Neither `NotFound` nor `LimitReached` is an error: the first means the
/// reachable space holds no goal, the second that a configured
/// [`Limits`](crate::Limits) bound stopped the run early.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S: State> {
    Found(Solution<S>),
    NotFound,
    LimitReached { expanded: usize },
}

impl<S: State> SearchResult<S> {
    /// Whether a goal was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The solution, if any.
    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            Self::Found(s) => Some(s),
            _ => None,
        }
    }

    /// Consume the result and return the solution, if any.
    pub fn into_solution(self) -> Option<Solution<S>> {
        match self {
            Self::Found(s) => Some(s),
            _ => None,
        }
    }

    /// Total cost of the solution, if any.
    pub fn cost(&self) -> Option<i32> {
        self.solution().map(|s| s.cost)
    }

    /// Short outcome label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not found",
            Self::LimitReached { .. } => "limit reached",
        }
    }
}

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Successors generated, including duplicates that were discarded.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expanded, {} generated, peak frontier {}",
            self.expanded, self.generated, self.max_frontier
        )
    }
}
