use log::debug;
use petgraph::algo::connected_components;
use serde::Serialize;

use crate::WeightedGraph;

/// Summary figures for the whole network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Mean number of neighbors per city
    pub avg_degree: f64,
    /// First city in enumeration order with the highest degree
    pub max_degree_city: Option<String>,
    pub max_degree: usize,
    pub is_connected: bool,
    pub component_count: usize,
}

pub fn network_stats(graph: &WeightedGraph) -> NetworkStats {
    let node_count = graph.node_count();
    let edge_count = graph.edge_count();

    let mut max_degree = 0;
    let mut max_degree_city = None;
    for idx in graph.graph.node_indices() {
        let degree = graph.degree(idx);
        if max_degree_city.is_none() || degree > max_degree {
            max_degree = degree;
            max_degree_city = Some(graph.name(idx).to_string());
        }
    }

    let avg_degree = if node_count == 0 {
        0.0
    } else {
        2.0 * edge_count as f64 / node_count as f64
    };
    let component_count = connected_components(&graph.graph);
    debug!("{node_count} cities in {component_count} components");

    NetworkStats {
        node_count,
        edge_count,
        avg_degree,
        max_degree_city,
        max_degree,
        is_connected: component_count == 1,
        component_count,
    }
}
