//! Depth-bounded depth-first search.
//!
//! The search keeps one stack frame per node on the current path. A frame
//! records the arena slice holding that node's children and a cursor into it,
//! so children are visited in successor order without re-expanding the
//! parent. Cycle avoidance uses the set of signatures on the current path
//! only: a cell left behind on backtrack can be reached again through a
//! different branch.

use std::collections::HashSet;

use crate::Search;
use crate::frontier::{Frontier, LifoFrontier};
use crate::result::SearchResult;
use crate::traits::State;

/// A node on the current path and its not-yet-visited children.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    /// First arena index of this node's children.
    start: usize,
    /// Next child to visit.
    next: usize,
    /// One past the last child.
    end: usize,
}

impl<S: State> Search<S> {
    /// Depth-first search from `root`, never descending more than
    /// `max_depth` edges.
    ///
    /// A node at depth `max_depth` is goal-tested but not expanded. The
    /// returned path therefore has at most `max_depth` edges. No optimality
    /// is guaranteed in either cost or step count.
    pub fn depth_first(&mut self, root: S, max_depth: usize) -> SearchResult<S> {
        const NAME: &str = "dfs";

        let root_idx = self.begin(NAME, root);
        let mut on_path: HashSet<S::Key> = HashSet::new();
        let mut frames: LifoFrontier<Frame> = LifoFrontier::new();
        let mut sbuf = std::mem::take(&mut self.sbuf);

        let mut entering = Some(root_idx);
        let result = 'search: loop {
            if let Some(ci) = entering.take() {
                if self.nodes[ci].state.is_goal() {
                    break 'search SearchResult::Found(self.solution(ci));
                }
                if self.nodes[ci].depth >= max_depth {
                    log::trace!(
                        "{NAME}: depth bound reached at {:?}",
                        self.nodes[ci].state.signature()
                    );
                    continue;
                }
                if let Some(stop) = self.charge(NAME, frames.len()) {
                    break 'search stop;
                }

                let sig = self.nodes[ci].state.signature();
                log::trace!(
                    "{NAME}: expanding {:?} at depth {}",
                    sig,
                    self.nodes[ci].depth
                );
                on_path.insert(sig);

                sbuf.clear();
                self.nodes[ci].state.successors(&mut sbuf);
                self.stats.generated += sbuf.len();

                // The arena is a stack: the root, then each frame's children
                // in path order. Popping a frame truncates its slice.
                let start = self.nodes.len();
                for child in sbuf.drain(..) {
                    if on_path.contains(&child.signature()) {
                        continue;
                    }
                    self.push_child(ci, child);
                }
                let end = self.nodes.len();
                frames.push(
                    Frame {
                        node: ci,
                        start,
                        next: start,
                        end,
                    },
                    0,
                );
                continue;
            }

            let Some(top) = frames.peek_mut() else {
                break 'search SearchResult::NotFound;
            };
            if top.next < top.end {
                entering = Some(top.next);
                top.next += 1;
                continue;
            }

            // All children visited: backtrack.
            let Some(done) = frames.pop() else {
                break 'search SearchResult::NotFound;
            };
            on_path.remove(&self.nodes[done.node].state.signature());
            self.nodes.truncate(done.start);
        };

        self.sbuf = sbuf;
        self.finish(NAME, &result);
        result
    }
}
