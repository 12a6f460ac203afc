use crate::Search;
use crate::result::SearchResult;
use crate::traits::InformedState;

impl<S: InformedState> Search<S> {
    /// A* search from `root`.
    ///
    /// Same loop as [`uniform_cost`](Self::uniform_cost) but the frontier is
    /// ordered by `f = g + heuristic`, ties broken by insertion order. The
    /// returned cost equals the uniform-cost optimum provided the heuristic
    /// is admissible. That is the caller's obligation; it is not verified.
    pub fn astar(&mut self, root: S) -> SearchResult<S> {
        self.best_first("astar", root, |s, g| g.saturating_add(s.heuristic()))
    }
}
