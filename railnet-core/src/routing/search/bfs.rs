use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use petgraph::graph::{EdgeIndex, NodeIndex};

use super::state::{Predecessors, reconstruct_path};
use crate::WeightedGraph;

/// Breadth-first search for the path with the fewest hops.
///
/// Neighbors are expanded in edge creation order and the first discovery of
/// a node fixes its predecessor, so among equal-hop paths the one found
/// first by that order wins.
pub(crate) fn bfs_path(
    graph: &WeightedGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(Vec<NodeIndex>, Vec<EdgeIndex>)> {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut predecessors = Predecessors::new();
    let mut queue = VecDeque::new();

    visited.insert(start.index());
    queue.push_back(start);

    'search: while let Some(node) = queue.pop_front() {
        for &(next, edge) in graph.adjacent(node) {
            if visited.contains(next.index()) {
                continue;
            }
            visited.insert(next.index());
            predecessors.insert(next, (node, edge));
            if next == target {
                break 'search;
            }
            queue.push_back(next);
        }
    }

    reconstruct_path(&predecessors, start, target)
}
