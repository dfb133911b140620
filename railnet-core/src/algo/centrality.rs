//! Node importance metrics over the whole network.
//!
//! Every metric returns one score per city indexed by node index; the
//! `top_*` helpers rank them. Shortest paths are measured in travel time,
//! clustering uses the unweighted topology.

use std::collections::BinaryHeap;

use log::debug;
use serde::Serialize;

use super::ranking::{ScoredNode, top_n};
use crate::routing::search::dijkstra_path_weights;
use crate::routing::search::state::State;
use crate::{WeightDimension, WeightedGraph};

/// Betweenness centrality with travel-time shortest paths (Brandes).
///
/// Unnormalized scores count every unordered pair once. Normalized scores
/// divide by `(n-1)(n-2)/2`, the number of pairs a node can sit between.
pub fn betweenness_centrality(graph: &WeightedGraph, normalized: bool) -> Vec<f64> {
    let n = graph.node_count();
    let mut centrality = vec![0.0; n];

    for source in graph.graph.node_indices() {
        let s = source.index();
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut distance: Vec<Option<f64>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();
        let mut seq = 0;

        sigma[s] = 1.0;
        distance[s] = Some(0.0);
        heap.push(State::new(0.0, 0.0, seq, source));

        while let Some(State {
            distance: d, node, ..
        }) = heap.pop()
        {
            let v = node.index();
            if settled[v] {
                continue;
            }
            settled[v] = true;
            stack.push(v);

            for &(next, edge) in graph.adjacent(node) {
                let w = next.index();
                if settled[w] {
                    continue;
                }
                let candidate = d + graph.edge_weights(edge).get(WeightDimension::Time);
                match distance[w] {
                    Some(known) if candidate > known => {}
                    Some(known) if candidate == known => {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                    _ => {
                        distance[w] = Some(candidate);
                        sigma[w] = sigma[v];
                        predecessors[w].clear();
                        predecessors[w].push(v);
                        seq += 1;
                        heap.push(State::new(candidate, candidate, seq, next));
                    }
                }
            }
        }

        // Accumulate dependencies in order of non-increasing distance
        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    // Each unordered pair was counted from both ends
    let scale = if normalized {
        (n > 2).then(|| 1.0 / ((n - 1) * (n - 2)) as f64)
    } else {
        Some(0.5)
    };
    if let Some(scale) = scale {
        centrality.iter_mut().for_each(|c| *c *= scale);
    }
    centrality
}

/// Neighbor count divided by `n - 1`. A lone city scores 1.
pub fn degree_centrality(graph: &WeightedGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n == 1 {
        return vec![1.0; n];
    }
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 1.0 };
    graph
        .graph
        .node_indices()
        .map(|idx| graph.degree(idx) as f64 * scale)
        .collect()
}

/// Inverse mean travel time to reachable cities, scaled by the reachable
/// share of the network so that cities in small components rank lower.
/// Isolated cities score 0.
pub fn closeness_centrality(graph: &WeightedGraph) -> Vec<f64> {
    let n = graph.node_count();
    graph
        .graph
        .node_indices()
        .map(|idx| {
            let distances = dijkstra_path_weights(graph, idx, WeightDimension::Time, None);
            let total: f64 = distances.values().sum();
            let reachable = distances.len() as f64;
            if total > 0.0 && n > 1 {
                let others = reachable - 1.0;
                (others / total) * (others / (n - 1) as f64)
            } else {
                0.0
            }
        })
        .collect()
}

/// Local clustering coefficient: share of neighbor pairs that are
/// themselves connected. Zero for cities with fewer than two neighbors.
pub fn clustering_coefficients(graph: &WeightedGraph) -> Vec<f64> {
    graph
        .graph
        .node_indices()
        .map(|idx| {
            let neighbors: Vec<_> = graph.adjacent(idx).iter().map(|&(next, _)| next).collect();
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }
            let mut triangles = 0usize;
            for (i, &a) in neighbors.iter().enumerate() {
                for &b in &neighbors[i + 1..] {
                    if graph.are_adjacent(a, b) {
                        triangles += 1;
                    }
                }
            }
            2.0 * triangles as f64 / (k * (k - 1)) as f64
        })
        .collect()
}

pub fn average_clustering(graph: &WeightedGraph) -> f64 {
    mean(&clustering_coefficients(graph))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Cities ranked by normalized betweenness
pub fn top_betweenness(graph: &WeightedGraph, n: usize) -> Vec<ScoredNode> {
    let scores = betweenness_centrality(graph, true);
    top_n(graph, &scores, n)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedMetrics {
    pub degree: Vec<ScoredNode>,
    pub closeness: Vec<ScoredNode>,
    pub clustering: Vec<ScoredNode>,
    pub avg_clustering: f64,
}

/// Top-`n` degree, closeness and clustering rankings plus the network-wide
/// average clustering coefficient
pub fn top_advanced_metrics(graph: &WeightedGraph, n: usize) -> AdvancedMetrics {
    let clustering = clustering_coefficients(graph);
    let avg_clustering = mean(&clustering);
    debug!("Average clustering over {} cities: {avg_clustering}", clustering.len());

    AdvancedMetrics {
        degree: top_n(graph, &degree_centrality(graph), n),
        closeness: top_n(graph, &closeness_centrality(graph), n),
        clustering: top_n(graph, &clustering, n),
        avg_clustering,
    }
}
