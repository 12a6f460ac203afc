//! Frontier containers.
//!
//! Each driver keeps its discovered-but-unexpanded nodes in one of these:
//! a FIFO queue for breadth-first, a LIFO stack for depth-first, and a
//! rank-ordered priority queue for uniform-cost and A*.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// A container of pending items.
pub trait Frontier<T> {
    /// Add an item with the given rank. Unranked frontiers ignore `rank`.
    fn push(&mut self, item: T, rank: i32);

    /// Remove the next item to expand.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending items.
    fn len(&self) -> usize;

    /// Whether no items are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every item.
    fn clear(&mut self);
}

// ---------------------------------------------------------------------------
// FIFO / LIFO
// ---------------------------------------------------------------------------

/// First in, first out.
#[derive(Debug, Clone)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T, _rank: i32) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct LifoFrontier<T> {
    stack: Vec<T>,
}

impl<T> LifoFrontier<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// The item [`pop`](Frontier::pop) would return next.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.stack.last_mut()
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for LifoFrontier<T> {
    fn push(&mut self, item: T, _rank: i32) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Entry<T> {
    item: T,
    rank: i32,
    /// Insertion counter; lower pops first among equal ranks.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-rank priority queue. Items with equal rank pop in insertion order.
#[derive(Debug)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Pop the lowest-rank item, also returning its rank.
    pub fn pop_with_rank(&mut self) -> Option<(T, i32)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.rank))
    }

    /// Rank of the next item without removing it.
    pub fn peek_rank(&self) -> Option<i32> {
        self.heap.peek().map(|Reverse(entry)| entry.rank)
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, rank: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, rank, seq }));
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_with_rank().map(|(item, _)| item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove every item. The insertion counter keeps counting.
    fn clear(&mut self) {
        self.heap.clear();
    }
}
