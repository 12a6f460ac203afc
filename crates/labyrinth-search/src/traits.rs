use std::fmt;
use std::hash::Hash;

/// A node of an implicit search space.
///
/// Drivers never look inside a state: they only expand it, test it, price
/// it and deduplicate it through this interface.
pub trait State: Clone {
    /// Canonical identity used for deduplication. Two states with equal
    /// keys are the same search node, whatever path reached them.
    type Key: Eq + Hash + Clone + fmt::Debug;
    /// The move operator that produces a state from its parent.
    type Op: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Append the children of this state into `buf`, in a fixed order.
    /// The caller clears `buf` before calling. That order is the tie-break
    /// every driver uses.
    fn successors(&self, buf: &mut Vec<Self>);

    /// Whether this state satisfies the goal condition.
    fn is_goal(&self) -> bool;

    /// Cost of the edge that produced this state. 0 for a root.
    /// Must be non-negative. Path costs saturate at `i32::MAX`.
    fn cost(&self) -> i32;

    /// The operator that produced this state, `None` for a root.
    fn operator(&self) -> Option<Self::Op>;

    /// Canonical identity of this state.
    fn signature(&self) -> Self::Key;
}

/// A state with an estimate of its remaining cost to the nearest goal.
pub trait InformedState: State {
    /// Heuristic estimate of the cheapest remaining cost to a goal.
    ///
    /// Must be non-negative and never overestimate (admissible) for A* to
    /// return optimal costs. It should also be consistent:
    /// `h(n) <= cost(n, n') + h(n')` for every child `n'`. Neither property is
    /// checked.
    fn heuristic(&self) -> i32;
}
