//! Routes through an ordered list of required stops

use itertools::Itertools;
use log::debug;

use super::dual::{DualPathResult, TotaledPath};
use super::planner::{Algorithm, shortest_path};
use crate::{Error, WeightDimension, WeightedGraph, Weights};

/// Plans time-optimal and cost-optimal routes from `start` to `end` passing
/// through every waypoint in order.
///
/// Each consecutive pair of stops is solved with Dijkstra and the segments
/// are concatenated, dropping the repeated junction city. Totals are the
/// segment totals added in stop order.
///
/// # Errors
///
/// [`Error::InvalidNode`] if any stop is unknown, checked before routing.
/// [`Error::NoPath`] if any segment of either chain is unreachable; partial
/// routes are never returned.
pub fn plan_multi_stop_path<S: AsRef<str>>(
    graph: &WeightedGraph,
    start: &str,
    end: &str,
    waypoints: &[S],
) -> Result<DualPathResult, Error> {
    let stops: Vec<&str> = std::iter::once(start)
        .chain(waypoints.iter().map(AsRef::as_ref))
        .chain(std::iter::once(end))
        .collect();

    for stop in &stops {
        graph.node_index(stop)?;
    }

    let time_path = chain_path(graph, &stops, WeightDimension::Time)?;
    let cost_path = chain_path(graph, &stops, WeightDimension::Cost)?;
    debug!(
        "Multi-stop route {start} -> {end} via {} stops: {} / {} cities",
        waypoints.len(),
        time_path.nodes.len(),
        cost_path.nodes.len()
    );

    let mut result = DualPathResult::from_paths(
        graph,
        start,
        end,
        Algorithm::Dijkstra,
        Some(time_path),
        Some(cost_path),
    )?;
    result.waypoints = waypoints.iter().map(|w| w.as_ref().to_string()).collect();
    Ok(result)
}

/// Concatenates optimal segments between consecutive stops, accumulating
/// each segment's own totals
fn chain_path(
    graph: &WeightedGraph,
    stops: &[&str],
    dimension: WeightDimension,
) -> Result<TotaledPath, Error> {
    let mut nodes: Vec<String> = Vec::new();
    let mut totals = Weights::default();
    for (from, to) in stops.iter().tuple_windows() {
        let segment = shortest_path(graph, from, to, Algorithm::Dijkstra, dimension)?;
        let segment = TotaledPath::from_planned(graph, segment, dimension)?;
        totals = totals + segment.totals;
        let skip = usize::from(!nodes.is_empty());
        nodes.extend(segment.nodes.into_iter().skip(skip));
    }
    Ok(TotaledPath { nodes, totals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{CityRecord, ConnectionRecord};
    use crate::test_support::{ring, sample_network, two_components, weighted_diamond};

    #[test]
    fn concatenates_segments_without_repeating_junctions() {
        let graph = weighted_diamond();
        let result = plan_multi_stop_path(&graph, "B", "D", &["A"]).unwrap();
        assert_eq!(result.time_path.as_deref().unwrap(), ["B", "A", "B", "C", "D"]);
        assert_eq!(result.cost_path.as_deref().unwrap(), ["B", "A", "D"]);
        assert_eq!(result.waypoints, vec!["A"]);
        assert_eq!(result.algorithm, Algorithm::Dijkstra);
    }

    #[test]
    fn totals_equal_sum_of_segments() {
        let graph = sample_network();
        let (a, b, c) = ("Beijing", "Zhengzhou", "Shanghai");
        let result = plan_multi_stop_path(&graph, a, c, &[b]).unwrap();

        for (dimension, total) in [
            (WeightDimension::Time, result.total_time),
            (WeightDimension::Cost, result.total_cost),
        ] {
            let first = shortest_path(&graph, a, b, Algorithm::Dijkstra, dimension).unwrap();
            let second = shortest_path(&graph, b, c, Algorithm::Dijkstra, dimension).unwrap();
            assert_eq!(total, Some(first.total + second.total), "{dimension}");
        }
    }

    #[test]
    fn cross_totals_add_per_segment() {
        // 0.1 + 0.2 + 0.3 differs from 0.1 + (0.2 + 0.3) in the last bit
        let cities = [
            CityRecord::new("A", 0.0, 0.0),
            CityRecord::new("B", 1.0, 0.0),
            CityRecord::new("C", 2.0, 0.0),
            CityRecord::new("D", 3.0, 0.0),
        ];
        let connections = [
            ConnectionRecord::new("A", "B", 0.1, 0.1),
            ConnectionRecord::new("B", "C", 0.2, 0.2),
            ConnectionRecord::new("C", "D", 0.3, 0.3),
        ];
        let graph = WeightedGraph::from_tables(&cities, &connections).unwrap();
        let result = plan_multi_stop_path(&graph, "A", "D", &["B"]).unwrap();

        let first = graph.path_weights(&["A", "B"]).unwrap();
        let second = graph.path_weights(&["B", "C", "D"]).unwrap();
        assert_eq!(result.total_time, Some(first.time + second.time));
        assert_eq!(result.time_path_cost, Some(first.cost + second.cost));
        assert_eq!(result.total_cost, Some(first.cost + second.cost));
        assert_eq!(result.cost_path_time, Some(first.time + second.time));
    }

    #[test]
    fn without_waypoints_matches_dual_router() {
        let graph = ring();
        let result = plan_multi_stop_path::<&str>(&graph, "A", "C", &[]).unwrap();
        assert_eq!(result.total_time, Some(2.0));
        assert_eq!(result.total_cost, Some(2.0));
        assert!(result.waypoints.is_empty());
    }

    #[test]
    fn any_unreachable_segment_fails_the_request() {
        let graph = two_components();
        let err = plan_multi_stop_path(&graph, "A", "B", &["C"]).unwrap_err();
        assert!(matches!(err, Error::NoPath { .. }));
    }

    #[test]
    fn unknown_waypoint_is_invalid_node() {
        let graph = ring();
        let err = plan_multi_stop_path(&graph, "A", "C", &["B", "Q"]).unwrap_err();
        assert!(matches!(err, Error::InvalidNode(id) if id == "Q"));
    }

    #[test]
    fn repeated_stop_adds_nothing() {
        let graph = ring();
        let result = plan_multi_stop_path(&graph, "A", "B", &["A"]).unwrap();
        assert_eq!(result.time_path.as_deref().unwrap(), ["A", "B"]);
    }
}
