//! Single-pair path planning with a selectable search strategy

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use super::search::{astar::astar_path, bfs::bfs_path, dijkstra::dijkstra_path};
use crate::{Error, WeightDimension, WeightedGraph};

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest hops, weights ignored
    Bfs,
    /// Heuristic search, optimal like Dijkstra
    #[serde(rename = "astar")]
    AStar,
    /// Weighted shortest path
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::AStar => "astar",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A planned path with its total under the requested dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedPath {
    pub nodes: Vec<String>,
    pub total: f64,
}

impl PlannedPath {
    /// Number of connections traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Finds a path from `start` to `end` with the given strategy.
///
/// `total` is always the sum of `dimension` along the returned path; for BFS
/// that path minimizes hops rather than the weight.
///
/// # Errors
///
/// [`Error::InvalidNode`] if either city is unknown and [`Error::NoPath`] if
/// they lie in different components
pub fn shortest_path(
    graph: &WeightedGraph,
    start: &str,
    end: &str,
    algorithm: Algorithm,
    dimension: WeightDimension,
) -> Result<PlannedPath, Error> {
    let source = graph.node_index(start)?;
    let target = graph.node_index(end)?;

    if source == target {
        return Ok(PlannedPath {
            nodes: vec![start.to_string()],
            total: 0.0,
        });
    }

    let found = match algorithm {
        Algorithm::Bfs => bfs_path(graph, source, target).map(|(nodes, edges)| {
            let total = edges
                .iter()
                .map(|&edge| graph.edge_weights(edge).get(dimension))
                .sum::<f64>();
            (nodes, total)
        }),
        Algorithm::AStar => {
            astar_path(graph, source, target, dimension).map(|(nodes, _, total)| (nodes, total))
        }
        Algorithm::Dijkstra => {
            dijkstra_path(graph, source, target, dimension).map(|(nodes, _, total)| (nodes, total))
        }
    };

    let (nodes, total) = found.ok_or_else(|| Error::no_path(start, end))?;
    debug!(
        "{algorithm} {dimension} path {start} -> {end}: {} hops, total {total}",
        nodes.len() - 1
    );

    Ok(PlannedPath {
        nodes: graph.names(&nodes),
        total,
    })
}
