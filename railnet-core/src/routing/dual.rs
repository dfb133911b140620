//! Time-optimal and cost-optimal routes for one query

use log::debug;
use serde::Serialize;

use super::planner::{Algorithm, PlannedPath, shortest_path};
use crate::{Error, Segment, WeightDimension, WeightedGraph, Weights};

/// City sequence of one objective with its totals in both dimensions
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TotaledPath {
    pub(crate) nodes: Vec<String>,
    pub(crate) totals: Weights,
}

impl TotaledPath {
    /// Keeps the search total for the searched dimension and sums the other
    /// one along the path.
    pub(crate) fn from_planned(
        graph: &WeightedGraph,
        path: PlannedPath,
        dimension: WeightDimension,
    ) -> Result<Self, Error> {
        let totals = graph.path_weights(&path.nodes)?.with(dimension, path.total);
        Ok(Self {
            nodes: path.nodes,
            totals,
        })
    }
}

/// Both objectives of a route query with cross metrics and per-hop details.
///
/// `total_time`/`time_path_cost` describe the time-optimal path and
/// `total_cost`/`cost_path_time` the cost-optimal one. A missing path leaves
/// its aggregates empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualPathResult {
    pub start: String,
    pub end: String,
    pub algorithm: Algorithm,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<String>,
    pub time_path: Option<Vec<String>>,
    pub total_time: Option<f64>,
    pub time_path_cost: Option<f64>,
    pub cost_path: Option<Vec<String>>,
    pub total_cost: Option<f64>,
    pub cost_path_time: Option<f64>,
    pub time_details: Vec<Segment>,
    pub cost_details: Vec<Segment>,
}

impl DualPathResult {
    /// Assembles a result from the two optimal paths and their totals,
    /// reading segment details from the graph.
    pub(crate) fn from_paths(
        graph: &WeightedGraph,
        start: &str,
        end: &str,
        algorithm: Algorithm,
        time_path: Option<TotaledPath>,
        cost_path: Option<TotaledPath>,
    ) -> Result<Self, Error> {
        let mut result = DualPathResult {
            start: start.to_string(),
            end: end.to_string(),
            algorithm,
            waypoints: Vec::new(),
            time_path: None,
            total_time: None,
            time_path_cost: None,
            cost_path: None,
            total_cost: None,
            cost_path_time: None,
            time_details: Vec::new(),
            cost_details: Vec::new(),
        };

        if let Some(TotaledPath { nodes, totals }) = time_path {
            result.total_time = Some(totals.time);
            result.time_path_cost = Some(totals.cost);
            result.time_details = graph.path_segments(&nodes)?;
            result.time_path = Some(nodes);
        }

        if let Some(TotaledPath { nodes, totals }) = cost_path {
            result.total_cost = Some(totals.cost);
            result.cost_path_time = Some(totals.time);
            result.cost_details = graph.path_segments(&nodes)?;
            result.cost_path = Some(nodes);
        }

        Ok(result)
    }

    /// Path for one objective
    pub fn path(&self, dimension: WeightDimension) -> Option<&[String]> {
        match dimension {
            WeightDimension::Time => self.time_path.as_deref(),
            WeightDimension::Cost => self.cost_path.as_deref(),
        }
    }

    /// Time saved by taking the time-optimal path instead of the cheap one
    pub fn time_saved(&self) -> Option<f64> {
        Some(self.cost_path_time? - self.total_time?)
    }

    /// Money saved by taking the cost-optimal path instead of the fast one
    pub fn cost_saved(&self) -> Option<f64> {
        Some(self.time_path_cost? - self.total_cost?)
    }
}

/// Plans the time-optimal and cost-optimal route between two cities.
///
/// With [`Algorithm::Bfs`] a single fewest-hop path is reported as both the
/// time-optimal and the cost-optimal route. With the weighted strategies the
/// two objectives are searched independently.
///
/// # Errors
///
/// [`Error::InvalidNode`] if either city is unknown. [`Error::NoPath`] only
/// when neither objective produced a path; a single unreachable objective
/// leaves its slot empty instead.
pub fn plan_dual_path(
    graph: &WeightedGraph,
    start: &str,
    end: &str,
    algorithm: Algorithm,
) -> Result<DualPathResult, Error> {
    graph.node_index(start)?;
    graph.node_index(end)?;

    let (time_path, cost_path) = match algorithm {
        Algorithm::Bfs => {
            let path = reachable(shortest_path(
                graph,
                start,
                end,
                Algorithm::Bfs,
                WeightDimension::Time,
            ))?;
            let path = path
                .map(|p| {
                    graph.path_weights(&p.nodes).map(|totals| TotaledPath {
                        nodes: p.nodes,
                        totals,
                    })
                })
                .transpose()?;
            (path.clone(), path)
        }
        Algorithm::AStar | Algorithm::Dijkstra => {
            let time = reachable(shortest_path(
                graph,
                start,
                end,
                algorithm,
                WeightDimension::Time,
            ))?;
            let cost = reachable(shortest_path(
                graph,
                start,
                end,
                algorithm,
                WeightDimension::Cost,
            ))?;
            (
                time.map(|p| TotaledPath::from_planned(graph, p, WeightDimension::Time))
                    .transpose()?,
                cost.map(|p| TotaledPath::from_planned(graph, p, WeightDimension::Cost))
                    .transpose()?,
            )
        }
    };

    if time_path.is_none() && cost_path.is_none() {
        return Err(Error::no_path(start, end));
    }
    if time_path.is_none() || cost_path.is_none() {
        debug!("Only one objective reachable for {start} -> {end}");
    }

    DualPathResult::from_paths(graph, start, end, algorithm, time_path, cost_path)
}

/// Turns an unreachable objective into an empty slot, keeping other errors
fn reachable(result: Result<PlannedPath, Error>) -> Result<Option<PlannedPath>, Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(Error::NoPath { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
