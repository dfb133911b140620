pub use crate::DEFAULT_TOP_N;

// Network model and loading
pub use crate::loading::{NetworkConfig, build_network, create_network};
pub use crate::model::{City, GraphData, WeightDimension, WeightedGraph, Weights};

// Route planning
pub use crate::routing::{
    Algorithm, DualPathResult, PlannedPath, plan_dual_path, plan_multi_stop_path, shortest_path,
};

// Whole-network analyses
pub use crate::algo::{
    AdvancedMetrics, MstStep, NetworkStats, ScoredNode, SpanningTreeAlgorithm,
    build_spanning_tree, network_stats, top_advanced_metrics, top_betweenness,
};

pub use crate::Error;
