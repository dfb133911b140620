//! Data model for the railway network
//!
//! Contains the cities, connections and the immutable weighted graph
//! every query runs against.

pub mod network;

// Re-export of the main model structure
pub use network::graph::WeightedGraph;

// Re-export of basic types for convenience
pub use network::components::{City, Connection, Segment, WeightDimension, Weights};
pub use network::export::{GraphData, GraphEdge, GraphNode};
