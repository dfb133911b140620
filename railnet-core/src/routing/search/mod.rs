// Single-pair search strategies over the weighted graph

pub(crate) mod astar;
pub(crate) mod bfs;
pub mod dijkstra;
pub(crate) mod state;

pub use dijkstra::dijkstra_path_weights;
