//! This module is responsible for loading the static city and connection
//! tables and building the weighted railway graph.

mod builder;
mod config;
pub mod tables;

pub use builder::{build_network, create_network};
pub use config::NetworkConfig;
pub use tables::{CityRecord, ConnectionRecord};
