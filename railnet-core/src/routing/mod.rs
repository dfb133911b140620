//! Route planning: single-pair search, dual-objective and multi-stop routing

pub mod dual;
pub mod multi_stop;
pub mod planner;
pub mod search;
mod to_geojson;

pub use dual::{DualPathResult, plan_dual_path};
pub use multi_stop::plan_multi_stop_path;
pub use planner::{Algorithm, PlannedPath, shortest_path};
pub use search::dijkstra_path_weights;
