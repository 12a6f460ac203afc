use std::collections::HashSet;

use crate::Search;
use crate::frontier::{FifoFrontier, Frontier};
use crate::result::SearchResult;
use crate::traits::State;

impl<S: State> Search<S> {
    /// Breadth-first search from `root`.
    ///
    /// Nodes are expanded in non-decreasing depth order, so the first goal
    /// dequeued is reached in the fewest edges. Edge costs are ignored when
    /// choosing, so that path is not necessarily the cheapest. A state is
    /// enqueued at most once: its signature is recorded when first
    /// discovered.
    pub fn breadth_first(&mut self, root: S) -> SearchResult<S> {
        const NAME: &str = "bfs";

        let mut seen: HashSet<S::Key> = HashSet::new();
        seen.insert(root.signature());
        let root_idx = self.begin(NAME, root);

        let mut frontier: FifoFrontier<usize> = FifoFrontier::new();
        frontier.push(root_idx, 0);

        let mut sbuf = std::mem::take(&mut self.sbuf);

        let result = loop {
            let Some(ci) = frontier.pop() else {
                break SearchResult::NotFound;
            };

            if self.nodes[ci].state.is_goal() {
                break SearchResult::Found(self.solution(ci));
            }

            if let Some(stop) = self.charge(NAME, frontier.len()) {
                break stop;
            }
            log::trace!(
                "{NAME}: expanding {:?} at depth {}",
                self.nodes[ci].state.signature(),
                self.nodes[ci].depth
            );

            sbuf.clear();
            self.nodes[ci].state.successors(&mut sbuf);
            self.stats.generated += sbuf.len();

            for child in sbuf.drain(..) {
                if !seen.insert(child.signature()) {
                    continue;
                }
                let ni = self.push_child(ci, child);
                frontier.push(ni, 0);
            }
        };

        self.sbuf = sbuf;
        self.finish(NAME, &result);
        result
    }
}
