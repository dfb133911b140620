use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::WeightedGraph;

/// A city with its metric value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredNode {
    pub name: String,
    pub score: f64,
}

/// The `n` highest scores, descending. Scores are indexed by node index and
/// equal scores keep city enumeration order.
pub(crate) fn top_n(graph: &WeightedGraph, scores: &[f64], n: usize) -> Vec<ScoredNode> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable sort keeps first-seen order among ties
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    order
        .into_iter()
        .take(n)
        .map(|idx| ScoredNode {
            name: graph.name(NodeIndex::new(idx)).to_string(),
            score: scores[idx],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ring;

    #[test]
    fn sorts_descending_and_keeps_order_on_ties() {
        let graph = ring();
        let ranked = top_n(&graph, &[0.2, 0.5, 0.2, 0.5], 3);
        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "A"]);
        assert_eq!(ranked[0].score, 0.5);
    }

    #[test]
    fn n_larger_than_graph_returns_everything() {
        let graph = ring();
        assert_eq!(top_n(&graph, &[0.0; 4], 10).len(), 4);
        assert!(top_n(&graph, &[0.0; 4], 0).is_empty());
    }
}
