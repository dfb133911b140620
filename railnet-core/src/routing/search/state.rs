use std::cmp::Ordering;

use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};

/// Priority queue entry shared by Dijkstra and A*
#[derive(Copy, Clone, Debug)]
pub(crate) struct State {
    /// Key the heap is ordered by
    pub(crate) priority: f64,
    /// Accumulated weight from the source
    pub(crate) distance: f64,
    /// Insertion counter, earlier entries win priority ties
    pub(crate) seq: usize,
    pub(crate) node: NodeIndex,
}

impl State {
    pub(crate) fn new(priority: f64, distance: f64, seq: usize, node: NodeIndex) -> Self {
        Self {
            priority,
            distance,
            seq,
            node,
        }
    }
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority (reversed from standard Rust BinaryHeap)
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Predecessor links: node -> (previous node, edge used to reach it)
pub(crate) type Predecessors = HashMap<NodeIndex, (NodeIndex, EdgeIndex)>;

/// Follows predecessors backward from `end` to `start`
pub(crate) fn reconstruct_path(
    predecessors: &Predecessors,
    start: NodeIndex,
    end: NodeIndex,
) -> Option<(Vec<NodeIndex>, Vec<EdgeIndex>)> {
    let mut nodes = vec![end];
    let mut edges = Vec::new();
    let mut current = end;
    while current != start {
        let &(prev, edge) = predecessors.get(&current)?;
        nodes.push(prev);
        edges.push(edge);
        current = prev;
    }
    nodes.reverse(); // Now path is from start to end
    edges.reverse();
    Some((nodes, edges))
}
