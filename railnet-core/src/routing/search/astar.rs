use std::collections::BinaryHeap;

use geo::{Distance, Euclidean};
use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};

use super::state::{Predecessors, State, reconstruct_path};
use crate::{WeightDimension, WeightedGraph};

/// Remaining-cost estimate between two nodes.
///
/// Straight-line distance between city positions, scaled by the network's
/// smallest time-per-distance ratio, for travel time. No connection is faster
/// than that ratio, so the estimate never exceeds the remaining time. Fares
/// are not bounded by geometry, so the cost dimension gets a zero estimate
/// and the search degenerates to Dijkstra.
pub(crate) fn heuristic(
    graph: &WeightedGraph,
    from: NodeIndex,
    to: NodeIndex,
    dimension: WeightDimension,
) -> f64 {
    match dimension {
        WeightDimension::Time => match (graph.city(from), graph.city(to)) {
            (Some(a), Some(b)) => {
                graph.time_per_distance() * Euclidean.distance(a.geometry, b.geometry)
            }
            _ => 0.0,
        },
        WeightDimension::Cost => 0.0,
    }
}

/// A* search between two nodes under one weight dimension
pub(crate) fn astar_path(
    graph: &WeightedGraph,
    start: NodeIndex,
    target: NodeIndex,
    dimension: WeightDimension,
) -> Option<(Vec<NodeIndex>, Vec<EdgeIndex>, f64)> {
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(graph.node_count());
    let mut predecessors = Predecessors::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0;

    heap.push(State::new(
        heuristic(graph, start, target, dimension),
        0.0,
        seq,
        start,
    ));
    distances.insert(start, 0.0);

    while let Some(State { distance, node, .. }) = heap.pop() {
        if distances.get(&node).is_some_and(|&best| distance > best) {
            continue;
        }
        if node == target {
            let (nodes, edges) = reconstruct_path(&predecessors, start, target)?;
            return Some((nodes, edges, distance));
        }

        for &(next, edge) in graph.adjacent(node) {
            let next_distance = distance + graph.edge_weights(edge).get(dimension);
            if distances
                .get(&next)
                .is_some_and(|&known| next_distance >= known)
            {
                continue;
            }
            distances.insert(next, next_distance);
            predecessors.insert(next, (node, edge));
            seq += 1;
            heap.push(State::new(
                next_distance + heuristic(graph, next, target, dimension),
                next_distance,
                seq,
                next,
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::search::dijkstra::dijkstra_path;
    use crate::loading::{CityRecord, ConnectionRecord};
    use crate::test_support::{sample_network, weighted_diamond};

    #[test]
    fn heuristic_is_zero_for_cost() {
        let graph = weighted_diamond();
        let a = graph.node_index("A").unwrap();
        let d = graph.node_index("D").unwrap();
        assert_eq!(heuristic(&graph, a, d, WeightDimension::Cost), 0.0);
        let estimate = heuristic(&graph, a, d, WeightDimension::Time);
        assert!((estimate - 3.0).abs() < 1e-9, "got {estimate}");
    }

    #[test]
    fn heuristic_scales_to_fastest_connection() {
        // one unit of distance takes as little as 0.1 hours on A-B
        let cities = [
            CityRecord::new("A", 0.0, 0.0),
            CityRecord::new("B", 10.0, 0.0),
            CityRecord::new("C", 10.0, 10.0),
        ];
        let connections = [
            ConnectionRecord::new("A", "B", 1.0, 1.0),
            ConnectionRecord::new("B", "C", 5.0, 1.0),
        ];
        let graph = WeightedGraph::from_tables(&cities, &connections).unwrap();
        let a = graph.node_index("A").unwrap();
        let c = graph.node_index("C").unwrap();
        let estimate = heuristic(&graph, a, c, WeightDimension::Time);
        let expected = 0.1 * 200f64.sqrt();
        assert!((estimate - expected).abs() < 1e-9, "got {estimate}");
        assert!(estimate <= 6.0);
    }

    #[test]
    fn stays_optimal_when_times_undercut_coordinate_distance() {
        // the direct line is long on the map but fast, the detour is short
        // but slow; an unscaled estimate would prefer the detour
        let cities = [
            CityRecord::new("S", 0.0, 0.0),
            CityRecord::new("M", 5.0, 1.0),
            CityRecord::new("X", 20.0, 0.0),
            CityRecord::new("T", 10.0, 0.0),
        ];
        let connections = [
            ConnectionRecord::new("S", "X", 1.0, 1.0),
            ConnectionRecord::new("X", "T", 1.0, 1.0),
            ConnectionRecord::new("S", "M", 2.0, 1.0),
            ConnectionRecord::new("M", "T", 2.0, 1.0),
        ];
        let graph = WeightedGraph::from_tables(&cities, &connections).unwrap();
        let s = graph.node_index("S").unwrap();
        let t = graph.node_index("T").unwrap();

        let (nodes, _, total) = astar_path(&graph, s, t, WeightDimension::Time).unwrap();
        assert_eq!(total, 2.0);
        assert_eq!(graph.names(&nodes), vec!["S", "X", "T"]);
    }

    #[test]
    fn heuristic_vanishes_without_measurable_connections() {
        let cities = [CityRecord::new("A", 1.0, 1.0), CityRecord::new("B", 1.0, 1.0)];
        let connections = [ConnectionRecord::new("A", "B", 3.0, 1.0)];
        let graph = WeightedGraph::from_tables(&cities, &connections).unwrap();
        assert_eq!(graph.time_per_distance(), 0.0);
    }

    #[test]
    fn matches_dijkstra_totals_on_every_pair() {
        let graph = sample_network();
        for a in graph.graph.node_indices() {
            for b in graph.graph.node_indices() {
                for dimension in WeightDimension::ALL {
                    let expected = dijkstra_path(&graph, a, b, dimension).map(|r| r.2);
                    let actual = astar_path(&graph, a, b, dimension).map(|r| r.2);
                    assert_eq!(actual, expected, "{a:?} -> {b:?} ({dimension})");
                }
            }
        }
    }
}
