use std::fmt;
use std::str::FromStr;

use crate::result::{SearchResult, Solution, Stats};
use crate::traits::{InformedState, State};

/// Parent index of a root node.
pub const NO_PARENT: usize = usize::MAX;

/// Depth bound used when a depth-first strategy is named without one.
pub const DEFAULT_MAX_DEPTH: usize = 50;

// ---------------------------------------------------------------------------
// Node arena
// ---------------------------------------------------------------------------

/// A generated state and its link back toward the root.
#[derive(Debug, Clone)]
pub(crate) struct Node<S> {
    pub(crate) state: S,
    pub(crate) parent: usize,
    /// Accumulated path cost from the root.
    pub(crate) g: i32,
    /// Number of edges from the root.
    pub(crate) depth: usize,
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Resource bounds for a single run. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of expansions before giving up.
    pub max_expansions: Option<usize>,
    /// Maximum number of pending frontier entries before giving up.
    pub max_frontier: Option<usize>,
}

impl Limits {
    /// No bounds.
    pub const UNLIMITED: Self = Self {
        max_expansions: None,
        max_frontier: None,
    };
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Which driver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst { max_depth: usize },
    UniformCost,
    AStar,
}

impl Strategy {
    /// Canonical short name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst { .. } => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "astar",
        }
    }

    /// Whether the strategy guarantees a minimum-cost solution.
    pub const fn is_cost_optimal(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::AStar)
    }

    /// Replace the depth bound of a depth-first strategy. Other strategies
    /// are returned unchanged.
    pub const fn with_depth(self, max_depth: usize) -> Self {
        match self {
            Strategy::DepthFirst { .. } => Strategy::DepthFirst { max_depth },
            other => other,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst { max_depth } => write!(f, "dfs(max_depth={max_depth})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d} (expected bfs, dfs, ucs or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Parses `bfs`, `dfs`, `ucs`, `astar` and their long forms. A bare
    /// depth-first name gets [`DEFAULT_MAX_DEPTH`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Ok(Strategy::DepthFirst {
                max_depth: DEFAULT_MAX_DEPTH,
            }),
            "ucs" | "uniform-cost" | "uniform_cost" | "dijkstra" => Ok(Strategy::UniformCost),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Central coordinator for searches over states of type `S`.
///
/// `Search` owns every node generated during a run in an index arena where
/// each node stores its parent's index, so no state ever references another.
/// The arena and scratch buffers are cleared, not freed, between runs.
pub struct Search<S: State> {
    pub(crate) nodes: Vec<Node<S>>,
    pub(crate) limits: Limits,
    pub(crate) stats: Stats,
    // shared scratch buffer for successor generation
    pub(crate) sbuf: Vec<S>,
}

impl<S: State> Default for Search<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Search<S> {
    /// Create an engine with no resource limits.
    pub fn new() -> Self {
        Self::with_limits(Limits::UNLIMITED)
    }

    /// Create an engine with the given resource limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            nodes: Vec::new(),
            limits,
            stats: Stats::default(),
            sbuf: Vec::with_capacity(4),
        }
    }

    /// The configured limits.
    #[inline]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Replace the limits used by subsequent runs.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Counters from the most recent run.
    #[inline]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    // -----------------------------------------------------------------------
    // Run bookkeeping
    // -----------------------------------------------------------------------

    /// Reset the arena and counters and store `root` as node 0.
    pub(crate) fn begin(&mut self, name: &str, root: S) -> usize {
        self.nodes.clear();
        self.stats = Stats::default();
        log::debug!("{name}: starting from {:?}", root.signature());
        self.nodes.push(Node {
            state: root,
            parent: NO_PARENT,
            g: 0,
            depth: 0,
        });
        0
    }

    /// Store `state` as a child of node `parent`.
    pub(crate) fn push_child(&mut self, parent: usize, state: S) -> usize {
        let p = &self.nodes[parent];
        let g = p.g.saturating_add(state.cost());
        let depth = p.depth + 1;
        self.nodes.push(Node {
            state,
            parent,
            g,
            depth,
        });
        self.nodes.len() - 1
    }

    /// Account for one expansion with `pending` frontier entries. Returns
    /// `LimitReached` when a configured bound is exceeded.
    pub(crate) fn charge(&mut self, name: &str, pending: usize) -> Option<SearchResult<S>> {
        self.stats.max_frontier = self.stats.max_frontier.max(pending);
        let over_expansions = self
            .limits
            .max_expansions
            .is_some_and(|max| self.stats.expanded >= max);
        let over_frontier = self.limits.max_frontier.is_some_and(|max| pending > max);
        if over_expansions || over_frontier {
            log::warn!(
                "{name}: giving up after {} expansions ({} pending)",
                self.stats.expanded,
                pending
            );
            return Some(SearchResult::LimitReached {
                expanded: self.stats.expanded,
            });
        }
        self.stats.expanded += 1;
        None
    }

    pub(crate) fn finish(&self, name: &str, result: &SearchResult<S>) {
        if result.cost() == Some(i32::MAX) {
            log::warn!("{name}: path cost saturated at {}", i32::MAX);
        }
        match result {
            SearchResult::Found(s) => log::debug!(
                "{name}: found {:?} at cost {} in {} steps; {}",
                s.goal.signature(),
                s.cost,
                s.steps(),
                self.stats
            ),
            other => log::debug!("{name}: {}; {}", other.label(), self.stats),
        }
    }

    /// Rebuild the path from the root to node `idx` by walking parent links.
    pub(crate) fn solution(&self, idx: usize) -> Solution<S> {
        let mut path = Vec::with_capacity(self.nodes[idx].depth);
        let mut edge_costs = Vec::with_capacity(self.nodes[idx].depth);
        let mut ci = idx;
        while self.nodes[ci].parent != NO_PARENT {
            let node = &self.nodes[ci];
            if let Some(op) = node.state.operator() {
                path.push(op);
                edge_costs.push(node.state.cost());
            }
            ci = node.parent;
        }
        path.reverse();
        edge_costs.reverse();
        let cost = edge_costs.iter().fold(0, |acc: i32, &c| acc.saturating_add(c));
        debug_assert_eq!(cost, self.nodes[idx].g);
        Solution {
            goal: self.nodes[idx].state.clone(),
            cost,
            path,
            edge_costs,
        }
    }
}

impl<S: InformedState> Search<S> {
    /// Run the driver selected by `strategy`.
    pub fn run(&mut self, strategy: Strategy, root: S) -> SearchResult<S> {
        match strategy {
            Strategy::BreadthFirst => self.breadth_first(root),
            Strategy::DepthFirst { max_depth } => self.depth_first(root, max_depth),
            Strategy::UniformCost => self.uniform_cost(root),
            Strategy::AStar => self.astar(root),
        }
    }
}

/// Breadth-first search with a fresh, unlimited engine.
pub fn breadth_first<S: State>(root: S) -> SearchResult<S> {
    Search::new().breadth_first(root)
}

/// Depth-bounded depth-first search with a fresh, unlimited engine.
pub fn depth_first<S: State>(root: S, max_depth: usize) -> SearchResult<S> {
    Search::new().depth_first(root, max_depth)
}

/// Uniform-cost search with a fresh, unlimited engine.
pub fn uniform_cost<S: State>(root: S) -> SearchResult<S> {
    Search::new().uniform_cost(root)
}

/// A* search with a fresh, unlimited engine.
pub fn astar<S: InformedState>(root: S) -> SearchResult<S> {
    Search::new().astar(root)
}
