//! A small explicit graph used to exercise the drivers.

use std::rc::Rc;

use crate::traits::{InformedState, State};

#[derive(Debug, Default)]
pub(crate) struct Graph {
    /// Outgoing edges per node: (target, cost, label), in expansion order.
    edges: Vec<Vec<(usize, i32, &'static str)>>,
    goals: Vec<usize>,
    /// Heuristic per node; zero when unset.
    h: Vec<i32>,
}

impl Graph {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            edges: vec![Vec::new(); n],
            goals: Vec::new(),
            h: vec![0; n],
        }
    }

    pub(crate) fn edge(mut self, from: usize, to: usize, cost: i32, label: &'static str) -> Self {
        self.edges[from].push((to, cost, label));
        self
    }

    /// Undirected edge with the same label both ways.
    pub(crate) fn both(self, a: usize, b: usize, cost: i32, label: &'static str) -> Self {
        self.edge(a, b, cost, label).edge(b, a, cost, label)
    }

    pub(crate) fn goal(mut self, n: usize) -> Self {
        self.goals.push(n);
        self
    }

    pub(crate) fn heuristic(mut self, h: Vec<i32>) -> Self {
        self.h = h;
        self
    }

    pub(crate) fn root(self, start: usize) -> GraphState {
        GraphState {
            graph: Rc::new(self),
            node: start,
            op: None,
            cost: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GraphState {
    graph: Rc<Graph>,
    pub(crate) node: usize,
    op: Option<&'static str>,
    cost: i32,
}

impl PartialEq for GraphState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph)
            && self.node == other.node
            && self.op == other.op
            && self.cost == other.cost
    }
}

impl GraphState {
    /// The same graph, rooted at another node.
    pub(crate) fn reroot(&self, node: usize) -> GraphState {
        GraphState {
            graph: Rc::clone(&self.graph),
            node,
            op: None,
            cost: 0,
        }
    }
}

impl State for GraphState {
    type Key = usize;
    type Op = &'static str;

    fn successors(&self, buf: &mut Vec<Self>) {
        for &(to, cost, label) in &self.graph.edges[self.node] {
            buf.push(GraphState {
                graph: Rc::clone(&self.graph),
                node: to,
                op: Some(label),
                cost,
            });
        }
    }

    fn is_goal(&self) -> bool {
        self.graph.goals.contains(&self.node)
    }

    fn cost(&self) -> i32 {
        self.cost
    }

    fn operator(&self) -> Option<&'static str> {
        self.op
    }

    fn signature(&self) -> usize {
        self.node
    }
}

impl InformedState for GraphState {
    fn heuristic(&self) -> i32 {
        self.graph.h[self.node]
    }
}

/// Node 0 with one unit-cost edge to each of `1..=spokes`. The last spoke
/// is the goal.
pub(crate) fn star(spokes: usize) -> Graph {
    (1..=spokes)
        .fold(Graph::new(spokes + 1), |g, i| g.edge(0, i, 1, "spoke"))
        .goal(spokes)
}

/// A random undirected graph: each node links to a few random others with
/// costs in `1..=9`. Node `n - 1` is the goal.
pub(crate) fn random_graph(n: usize) -> Graph {
    use rand::RngExt;

    const LABELS: [&str; 4] = ["a", "b", "c", "d"];
    let mut rng = rand::rng();
    let mut g = Graph::new(n);
    for from in 0..n {
        for label in LABELS {
            if rng.random_range(0..3u32) == 0 {
                continue;
            }
            let to = rng.random_range(0..n);
            if to != from {
                g = g.both(from, to, rng.random_range(1..=9), label);
            }
        }
    }
    g.goal(n - 1)
}
