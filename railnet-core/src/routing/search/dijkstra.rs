use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};

use super::state::{Predecessors, State, reconstruct_path};
use crate::{WeightDimension, WeightedGraph};

/// Dijkstra's algorithm over one weight dimension.
/// Returns a map of reached node indices to their shortest distance.
pub fn dijkstra_path_weights(
    graph: &WeightedGraph,
    start: NodeIndex,
    dimension: WeightDimension,
    target: Option<NodeIndex>,
) -> HashMap<NodeIndex, f64> {
    search(graph, start, dimension, target).0
}

/// Shortest path between two nodes under one weight dimension
pub(crate) fn dijkstra_path(
    graph: &WeightedGraph,
    start: NodeIndex,
    target: NodeIndex,
    dimension: WeightDimension,
) -> Option<(Vec<NodeIndex>, Vec<EdgeIndex>, f64)> {
    let (distances, predecessors) = search(graph, start, dimension, Some(target));
    let total = *distances.get(&target)?;
    let (nodes, edges) = reconstruct_path(&predecessors, start, target)?;
    Some((nodes, edges, total))
}

fn search(
    graph: &WeightedGraph,
    start: NodeIndex,
    dimension: WeightDimension,
    target: Option<NodeIndex>,
) -> (HashMap<NodeIndex, f64>, Predecessors) {
    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors = Predecessors::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes);
    let mut seq = 0;

    // Start node has distance 0
    heap.push(State::new(0.0, 0.0, seq, start));
    distances.insert(start, 0.0);

    while let Some(State { distance, node, .. }) = heap.pop() {
        // Check if we've reached the target
        if target == Some(node) {
            break;
        }

        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| distance > best) {
            continue;
        }

        // Examine neighbors
        for &(next, edge) in graph.adjacent(node) {
            let next_distance = distance + graph.edge_weights(edge).get(dimension);

            let improved = match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_distance);
                    true
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_distance < *entry.get() {
                        *entry.get_mut() = next_distance;
                        true
                    } else {
                        false
                    }
                }
            };

            if improved {
                seq += 1;
                heap.push(State::new(next_distance, next_distance, seq, next));
                predecessors.insert(next, (node, edge));
            }
        }
    }

    (distances, predecessors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ring, two_components, weighted_diamond};

    #[test]
    fn prefers_cheaper_longer_route() {
        let graph = weighted_diamond();
        let a = graph.node_index("A").unwrap();
        let d = graph.node_index("D").unwrap();

        let (nodes, _, total) = dijkstra_path(&graph, a, d, WeightDimension::Time).unwrap();
        assert_eq!(graph.names(&nodes), vec!["A", "B", "C", "D"]);
        assert_eq!(total, 3.0);

        let (nodes, _, total) = dijkstra_path(&graph, a, d, WeightDimension::Cost).unwrap();
        assert_eq!(graph.names(&nodes), vec!["A", "D"]);
        assert_eq!(total, 2.0);
    }

    #[test]
    fn distances_cover_component_only() {
        let graph = two_components();
        let a = graph.node_index("A").unwrap();
        let distances = dijkstra_path_weights(&graph, a, WeightDimension::Time, None);
        assert_eq!(distances.len(), 2);
        assert_eq!(distances[&graph.node_index("B").unwrap()], 1.0);
    }

    #[test]
    fn ring_distance_to_opposite_corner() {
        let graph = ring();
        let a = graph.node_index("A").unwrap();
        let distances = dijkstra_path_weights(&graph, a, WeightDimension::Cost, None);
        assert_eq!(distances[&graph.node_index("C").unwrap()], 2.0);
        assert_eq!(distances[&graph.node_index("D").unwrap()], 1.0);
    }
}
