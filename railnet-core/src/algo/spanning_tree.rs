//! Minimum spanning tree construction traced step by step.
//!
//! The steps are meant to be replayed by a front end as an animation, so
//! they are emitted in the exact order each algorithm commits its edges.
//! Rejected (cycle-forming) edges are not reported. A disconnected network
//! produces a spanning forest.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use fixedbitset::FixedBitSet;
use log::debug;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use super::union_find::DisjointSet;
use crate::{Error, WeightDimension, WeightedGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanningTreeAlgorithm {
    Kruskal,
    #[default]
    Prim,
}

impl SpanningTreeAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanningTreeAlgorithm::Kruskal => "kruskal",
            SpanningTreeAlgorithm::Prim => "prim",
        }
    }
}

impl fmt::Display for SpanningTreeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanningTreeAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(SpanningTreeAlgorithm::Kruskal),
            "prim" => Ok(SpanningTreeAlgorithm::Prim),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    /// Edge accepted into the tree
    Include,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstStep {
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub action: StepAction,
}

impl MstStep {
    fn include(graph: &WeightedGraph, source: NodeIndex, target: NodeIndex, weight: f64) -> Self {
        Self {
            source: graph.name(source).to_string(),
            target: graph.name(target).to_string(),
            weight,
            action: StepAction::Include,
        }
    }
}

/// Builds a minimum spanning tree (forest) over one weight dimension and
/// returns the inclusion steps in commit order.
pub fn build_spanning_tree(
    graph: &WeightedGraph,
    algorithm: SpanningTreeAlgorithm,
    dimension: WeightDimension,
) -> Vec<MstStep> {
    let steps = match algorithm {
        SpanningTreeAlgorithm::Kruskal => kruskal(graph, dimension),
        SpanningTreeAlgorithm::Prim => prim(graph, dimension),
    };
    debug!(
        "{algorithm} spanning tree over {dimension}: {} edges, total {}",
        steps.len(),
        tree_weight(&steps)
    );
    steps
}

/// Sum of the weights of all included edges
pub fn tree_weight(steps: &[MstStep]) -> f64 {
    steps.iter().map(|step| step.weight).sum()
}

/// Edges sorted ascending by weight; the sort is stable, so equal weights
/// keep edge creation order.
fn kruskal(graph: &WeightedGraph, dimension: WeightDimension) -> Vec<MstStep> {
    let mut edges = graph.edge_list();
    edges.sort_by(|a, b| a.2.get(dimension).total_cmp(&b.2.get(dimension)));

    let mut sets = DisjointSet::new(graph.node_count());
    let mut steps = Vec::with_capacity(graph.node_count().saturating_sub(1));

    for (a, b, weights) in edges {
        if sets.union(a.index(), b.index()) {
            steps.push(MstStep::include(graph, a, b, weights.get(dimension)));
        }
    }

    steps
}

/// Frontier candidate: an edge leaving the visited set
#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    seq: usize,
    from: NodeIndex,
    to: NodeIndex,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by weight, then by insertion order
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Grows the tree from the first city in enumeration order. When the
/// frontier runs dry the next unvisited city seeds a new tree.
fn prim(graph: &WeightedGraph, dimension: WeightDimension) -> Vec<MstStep> {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut frontier = BinaryHeap::new();
    let mut steps = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let mut seq = 0;

    let mut push_frontier =
        |frontier: &mut BinaryHeap<Candidate>, visited: &FixedBitSet, from: NodeIndex| {
            for &(to, edge) in graph.adjacent(from) {
                if !visited.contains(to.index()) {
                    frontier.push(Candidate {
                        weight: graph.edge_weights(edge).get(dimension),
                        seq,
                        from,
                        to,
                    });
                    seq += 1;
                }
            }
        };

    for root in graph.graph.node_indices() {
        if visited.contains(root.index()) {
            continue;
        }
        visited.insert(root.index());
        push_frontier(&mut frontier, &visited, root);

        while let Some(Candidate {
            weight, from, to, ..
        }) = frontier.pop()
        {
            if visited.contains(to.index()) {
                continue;
            }
            visited.insert(to.index());
            steps.push(MstStep::include(graph, from, to, weight));
            push_frontier(&mut frontier, &visited, to);
        }
    }

    steps
}
