//! Whole-network analyses: spanning trees, centrality and summary statistics

pub mod centrality;
pub mod ranking;
pub mod spanning_tree;
pub mod stats;
mod union_find;

pub use centrality::{
    AdvancedMetrics, average_clustering, betweenness_centrality, closeness_centrality,
    clustering_coefficients, degree_centrality, top_advanced_metrics, top_betweenness,
};
pub use ranking::ScoredNode;
pub use spanning_tree::{
    MstStep, SpanningTreeAlgorithm, StepAction, build_spanning_tree, tree_weight,
};
pub use stats::{NetworkStats, network_stats};
