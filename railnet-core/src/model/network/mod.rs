//! Railway network model - cities, connections and the graph itself

pub mod components;
pub mod export;
pub mod graph;

pub use components::{City, Connection, Segment, WeightDimension, Weights};
pub use graph::WeightedGraph;
