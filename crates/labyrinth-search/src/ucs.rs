use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::Search;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::result::SearchResult;
use crate::traits::State;

impl<S: State> Search<S> {
    /// Uniform-cost (Dijkstra) search from `root`.
    ///
    /// Nodes are expanded in order of accumulated path cost `g`, ties broken
    /// by insertion order. The first goal popped has the minimum total cost,
    /// given non-negative edge costs.
    pub fn uniform_cost(&mut self, root: S) -> SearchResult<S> {
        self.best_first("ucs", root, |_, g| g)
    }

    /// Shared best-first loop behind uniform-cost and A*.
    ///
    /// `rank(child, g)` orders the frontier. A child is pushed only when its
    /// `g` improves on the best known for its signature; popped entries whose
    /// `g` is no longer the best are stale and skipped. A signature may be
    /// expanded again if a cheaper path to it turns up later, which keeps
    /// results optimal even under an inconsistent heuristic.
    pub(crate) fn best_first(
        &mut self,
        name: &str,
        root: S,
        rank: impl Fn(&S, i32) -> i32,
    ) -> SearchResult<S> {
        let mut best: HashMap<S::Key, i32> = HashMap::new();
        best.insert(root.signature(), 0);
        let root_rank = rank(&root, 0);
        let root_idx = self.begin(name, root);

        let mut open: PriorityFrontier<usize> = PriorityFrontier::new();
        open.push(root_idx, root_rank);

        let mut sbuf = std::mem::take(&mut self.sbuf);

        let result = 'search: loop {
            let Some(ci) = open.pop() else {
                break 'search SearchResult::NotFound;
            };

            let current_g = self.nodes[ci].g;
            let sig = self.nodes[ci].state.signature();

            // Skip stale entries.
            if best.get(&sig).is_some_and(|&b| b < current_g) {
                continue;
            }

            if self.nodes[ci].state.is_goal() {
                break 'search SearchResult::Found(self.solution(ci));
            }

            if let Some(stop) = self.charge(name, open.len()) {
                break 'search stop;
            }
            log::trace!("{name}: expanding {sig:?} with g={current_g}");

            sbuf.clear();
            self.nodes[ci].state.successors(&mut sbuf);
            self.stats.generated += sbuf.len();

            for child in sbuf.drain(..) {
                let tentative = current_g.saturating_add(child.cost());
                match best.entry(child.signature()) {
                    Entry::Occupied(mut e) => {
                        if tentative >= *e.get() {
                            continue;
                        }
                        e.insert(tentative);
                    }
                    Entry::Vacant(e) => {
                        e.insert(tentative);
                    }
                }
                let child_rank = rank(&child, tentative);
                let ni = self.push_child(ci, child);
                open.push(ni, child_rank);
            }
        };

        self.sbuf = sbuf;
        self.finish(name, &result);
        result
    }
}
