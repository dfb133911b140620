//! Immutable weighted railway graph

use geo::{Distance, Euclidean};
use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

use super::components::{City, Connection, Segment, WeightDimension, Weights};
use crate::Error;

/// Simple undirected graph of cities and connections.
///
/// Cities and connections are enumerated in creation order, and so are the
/// neighbors of every city. All tie-breaks in routing, spanning trees and
/// rankings derive from this order.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    pub(crate) graph: UnGraph<City, Connection>,
    index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<(NodeIndex, EdgeIndex)>>,
    /// Lower bound on travel time per unit of coordinate distance
    time_per_distance: f64,
}

impl WeightedGraph {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            time_per_distance: 0.0,
        }
    }

    /// Adds a city, or replaces position and category of an existing one.
    /// Returns the index and whether the city was new.
    pub(crate) fn upsert_city(&mut self, city: City) -> (NodeIndex, bool) {
        if let Some(&idx) = self.index.get(&city.id) {
            self.graph[idx] = city;
            return (idx, false);
        }
        let id = city.id.clone();
        let idx = self.graph.add_node(city);
        self.index.insert(id, idx);
        self.adjacency.push(Vec::new());
        (idx, true)
    }

    /// Adds a connection, or replaces the weights of an existing one.
    /// Returns the index and whether the connection was new.
    pub(crate) fn upsert_connection(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        weights: Weights,
    ) -> (EdgeIndex, bool) {
        if let Some(edge) = self.graph.find_edge(a, b) {
            self.graph[edge].weights = weights;
            return (edge, false);
        }
        let edge = self.graph.add_edge(a, b, Connection { weights });
        self.adjacency[a.index()].push((b, edge));
        self.adjacency[b.index()].push((a, edge));
        (edge, true)
    }

    /// Recomputes the smallest ratio of travel time to straight-line length
    /// over all connections. Connections between cities at the same position
    /// carry no information and are ignored; without any usable connection
    /// the ratio is zero.
    pub(crate) fn calibrate_time_per_distance(&mut self) {
        let ratio = self
            .graph
            .edge_indices()
            .filter_map(|edge| {
                let (a, b) = self.graph.edge_endpoints(edge)?;
                let length = Euclidean.distance(self.graph[a].geometry, self.graph[b].geometry);
                (length > 0.0).then(|| self.graph[edge].weights.time / length)
            })
            .min_by(f64::total_cmp)
            .unwrap_or(0.0);
        // shaved so that `ratio * length` never rounds above an edge time
        self.time_per_distance = ratio * (1.0 - 4.0 * f64::EPSILON);
    }

    /// Travel time lower bound per unit of coordinate distance
    pub(crate) fn time_per_distance(&self) -> f64 {
        self.time_per_distance
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Resolves a city name to its node index
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if the city is not part of the network
    pub fn node_index(&self, id: &str) -> Result<NodeIndex, Error> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::InvalidNode(id.to_string()))
    }

    pub fn city(&self, idx: NodeIndex) -> Option<&City> {
        self.graph.node_weight(idx)
    }

    /// Name of a city known to exist
    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].id
    }

    /// Cities in creation order
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.graph.node_weights()
    }

    /// Connections in creation order as `(city, city, weights)`
    pub fn connections(&self) -> impl Iterator<Item = (&City, &City, Weights)> {
        self.graph.edge_indices().filter_map(move |edge| {
            let (a, b) = self.graph.edge_endpoints(edge)?;
            Some((&self.graph[a], &self.graph[b], self.graph[edge].weights))
        })
    }

    /// Endpoints and weights of every connection in creation order
    pub(crate) fn edge_list(&self) -> Vec<(NodeIndex, NodeIndex, Weights)> {
        self.graph
            .edge_indices()
            .filter_map(|edge| {
                let (a, b) = self.graph.edge_endpoints(edge)?;
                Some((a, b, self.graph[edge].weights))
            })
            .collect()
    }

    /// Neighbors with the connecting edge, in edge creation order
    pub(crate) fn adjacent(&self, idx: NodeIndex) -> &[(NodeIndex, EdgeIndex)] {
        self.adjacency
            .get(idx.index())
            .map_or(&[][..], Vec::as_slice)
    }

    pub(crate) fn edge_weights(&self, edge: EdgeIndex) -> Weights {
        self.graph[edge].weights
    }

    pub(crate) fn degree(&self, idx: NodeIndex) -> usize {
        self.adjacent(idx).len()
    }

    pub(crate) fn are_adjacent(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Neighboring city names in edge creation order
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if the city is not part of the network
    pub fn neighbors(&self, id: &str) -> Result<Vec<&str>, Error> {
        let idx = self.node_index(id)?;
        Ok(self
            .adjacent(idx)
            .iter()
            .map(|&(next, _)| self.name(next))
            .collect())
    }

    /// Both weights of the connection between two cities
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] for unknown cities and
    /// [`Error::EdgeNotFound`] if the cities are not directly connected
    pub fn weights(&self, from: &str, to: &str) -> Result<Weights, Error> {
        let a = self.node_index(from)?;
        let b = self.node_index(to)?;
        self.graph
            .find_edge(a, b)
            .map(|edge| self.graph[edge].weights)
            .ok_or_else(|| Error::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Weight of the connection between two cities in one dimension
    ///
    /// # Errors
    ///
    /// See [`WeightedGraph::weights`]
    pub fn weight(&self, from: &str, to: &str, dimension: WeightDimension) -> Result<f64, Error> {
        self.weights(from, to).map(|w| w.get(dimension))
    }

    /// Sum of both weights along a path
    ///
    /// # Errors
    ///
    /// Fails if two consecutive cities are not connected
    pub fn path_weights<S: AsRef<str>>(&self, path: &[S]) -> Result<Weights, Error> {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| self.weights(a.as_ref(), b.as_ref()))
            .sum()
    }

    /// Sum of one weight dimension along a path
    ///
    /// # Errors
    ///
    /// Fails if two consecutive cities are not connected
    pub fn path_weight<S: AsRef<str>>(
        &self,
        path: &[S],
        dimension: WeightDimension,
    ) -> Result<f64, Error> {
        self.path_weights(path).map(|w| w.get(dimension))
    }

    /// Per-hop details of a path
    ///
    /// # Errors
    ///
    /// Fails if two consecutive cities are not connected
    pub fn path_segments<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<Segment>, Error> {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| {
                let (a, b) = (a.as_ref(), b.as_ref());
                self.weights(a, b).map(|w| Segment {
                    source: a.to_string(),
                    target: b.to_string(),
                    time: w.time,
                    cost: w.cost,
                })
            })
            .collect()
    }

    pub(crate) fn names(&self, path: &[NodeIndex]) -> Vec<String> {
        path.iter().map(|&idx| self.name(idx).to_string()).collect()
    }
}
