//! Plain view of the whole network for map front ends

use serde::Serialize;

use super::graph::WeightedGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub name: String,
    /// `[longitude, latitude]`
    pub value: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub time: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl WeightedGraph {
    /// Every city and connection in enumeration order
    pub fn graph_data(&self) -> GraphData {
        let nodes = self
            .cities()
            .map(|city| GraphNode {
                name: city.id.clone(),
                value: [city.geometry.x(), city.geometry.y()],
                category: city.category.clone(),
            })
            .collect();

        let edges = self
            .connections()
            .map(|(a, b, weights)| GraphEdge {
                source: a.id.clone(),
                target: b.id.clone(),
                time: weights.time,
                cost: weights.cost,
            })
            .collect();

        GraphData { nodes, edges }
    }
}
