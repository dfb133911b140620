use std::path::PathBuf;

use serde::Deserialize;

/// Locations of the static network tables
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// CSV with `id,longitude,latitude[,category]` rows
    pub cities_path: PathBuf,
    /// CSV with `source,target,time,cost` rows
    pub connections_path: PathBuf,
}

impl NetworkConfig {
    pub fn new(cities_path: impl Into<PathBuf>, connections_path: impl Into<PathBuf>) -> Self {
        Self {
            cities_path: cities_path.into(),
            connections_path: connections_path.into(),
        }
    }
}
