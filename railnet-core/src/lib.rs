//! Graph analytics over a weighted railway network.
//!
//! The network is loaded once into an immutable [`WeightedGraph`] and every
//! query (route planning, spanning trees, centrality, statistics) borrows it
//! read-only.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use algo::{
    AdvancedMetrics, MstStep, NetworkStats, ScoredNode, SpanningTreeAlgorithm, StepAction,
    build_spanning_tree, network_stats, top_advanced_metrics, top_betweenness,
};
pub use error::Error;
pub use loading::{CityRecord, ConnectionRecord, NetworkConfig, build_network, create_network};
pub use model::{
    City, Connection, GraphData, GraphEdge, GraphNode, Segment, WeightDimension, WeightedGraph,
    Weights,
};
pub use routing::{
    Algorithm, DualPathResult, PlannedPath, plan_dual_path, plan_multi_stop_path, shortest_path,
};

/// Number of cities reported by the ranking queries unless asked otherwise
pub const DEFAULT_TOP_N: usize = 5;

#[cfg(test)]
pub(crate) mod test_support {
    //! Small fixture networks shared by the unit tests

    use crate::{CityRecord, ConnectionRecord, WeightedGraph};

    fn build(cities: &[CityRecord], connections: &[ConnectionRecord]) -> WeightedGraph {
        WeightedGraph::from_tables(cities, connections).expect("fixture network is valid")
    }

    fn unit_cities(names: &[&str]) -> Vec<CityRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| CityRecord::new(*name, i as f64, 0.0))
            .collect()
    }

    /// A - B - C - D - A, every weight 1
    pub(crate) fn ring() -> WeightedGraph {
        let connections = [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]
            .map(|(a, b)| ConnectionRecord::new(a, b, 1.0, 1.0));
        build(&unit_cities(&["A", "B", "C", "D"]), &connections)
    }

    /// {A, B} and {C, D}, every weight 1
    pub(crate) fn two_components() -> WeightedGraph {
        let connections = [("A", "B"), ("C", "D")].map(|(a, b)| ConnectionRecord::new(a, b, 1.0, 1.0));
        build(&unit_cities(&["A", "B", "C", "D"]), &connections)
    }

    /// Fast expensive chain A - B - C - D next to a slow cheap shortcut A - D
    pub(crate) fn weighted_diamond() -> WeightedGraph {
        let connections = [
            ConnectionRecord::new("A", "B", 1.0, 5.0),
            ConnectionRecord::new("B", "C", 1.0, 5.0),
            ConnectionRecord::new("C", "D", 1.0, 5.0),
            ConnectionRecord::new("A", "D", 10.0, 2.0),
        ];
        build(&unit_cities(&["A", "B", "C", "D"]), &connections)
    }

    /// N0 - N1 - ... - N{n-1}, every weight 1
    pub(crate) fn path_graph(n: usize) -> WeightedGraph {
        let names: Vec<String> = (0..n).map(|i| format!("N{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let connections: Vec<ConnectionRecord> = names
            .windows(2)
            .map(|pair| ConnectionRecord::new(pair[0].as_str(), pair[1].as_str(), 1.0, 1.0))
            .collect();
        build(&unit_cities(&refs), &connections)
    }

    /// "Hub" joined to leaves S1..S{n-1}, every weight 1
    pub(crate) fn star(n: usize) -> WeightedGraph {
        let mut names = vec!["Hub".to_string()];
        names.extend((1..n).map(|i| format!("S{i}")));
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let connections: Vec<ConnectionRecord> = names[1..]
            .iter()
            .map(|leaf| ConnectionRecord::new("Hub", leaf.as_str(), 1.0, 1.0))
            .collect();
        build(&unit_cities(&refs), &connections)
    }

    /// Eight eastern Chinese cities. Times are whole hours no shorter than
    /// the coordinate distance so the straight-line heuristic stays admissible.
    pub(crate) fn sample_network() -> WeightedGraph {
        let cities = [
            ("Beijing", 116.4, 39.9),
            ("Tianjin", 117.2, 39.1),
            ("Jinan", 117.0, 36.7),
            ("Zhengzhou", 113.6, 34.7),
            ("Nanjing", 118.8, 32.1),
            ("Shanghai", 121.5, 31.2),
            ("Wuhan", 114.3, 30.6),
            ("Hangzhou", 120.2, 30.3),
        ]
        .map(|(name, lon, lat)| CityRecord::new(name, lon, lat));

        let connections = [
            ("Beijing", "Tianjin", 2.0, 55.0),
            ("Beijing", "Zhengzhou", 6.0, 300.0),
            ("Tianjin", "Jinan", 3.0, 180.0),
            ("Jinan", "Nanjing", 5.0, 220.0),
            ("Jinan", "Zhengzhou", 4.0, 190.0),
            ("Zhengzhou", "Wuhan", 5.0, 240.0),
            ("Zhengzhou", "Nanjing", 6.0, 250.0),
            ("Nanjing", "Shanghai", 3.0, 140.0),
            ("Nanjing", "Hangzhou", 3.0, 120.0),
            ("Shanghai", "Hangzhou", 2.0, 75.0),
            ("Wuhan", "Hangzhou", 7.0, 280.0),
        ]
        .map(|(a, b, time, cost)| ConnectionRecord::new(a, b, time, cost));

        build(&cities, &connections)
    }
}
