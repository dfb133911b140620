use geo::Point;
use log::{info, warn};

use super::config::NetworkConfig;
use super::tables::{CityRecord, ConnectionRecord, read_table};
use crate::{City, Error, WeightedGraph, Weights};

/// Creates the railway network from the tables named in the configuration
///
/// # Errors
///
/// Returns an error if there are problems reading or validating the tables
pub fn create_network(config: &NetworkConfig) -> Result<WeightedGraph, Error> {
    validate_config(config)?;

    info!("Loading cities: {}", config.cities_path.display());
    let cities: Vec<CityRecord> = read_table(&config.cities_path)?;

    info!("Loading connections: {}", config.connections_path.display());
    let connections: Vec<ConnectionRecord> = read_table(&config.connections_path)?;

    let graph = build_network(&cities, &connections)?;
    info!(
        "Railway network created with {} cities and {} connections",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Builds the graph from in-memory tables
///
/// Connections naming unknown cities and self-loops are skipped. Repeated
/// cities and repeated city pairs replace the earlier row while keeping its
/// position in the enumeration order.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for non-finite coordinates and for
/// negative or non-finite weights
pub fn build_network(
    cities: &[CityRecord],
    connections: &[ConnectionRecord],
) -> Result<WeightedGraph, Error> {
    let mut graph = WeightedGraph::with_capacity(cities.len(), connections.len());

    for record in cities {
        if !record.longitude.is_finite() || !record.latitude.is_finite() {
            return Err(Error::InvalidData(format!(
                "City {} has non-finite coordinates",
                record.id
            )));
        }
        let city = City {
            id: record.id.clone(),
            geometry: Point::new(record.longitude, record.latitude),
            category: record.category.clone(),
        };
        let (_, inserted) = graph.upsert_city(city);
        if !inserted {
            warn!("City {} listed more than once, keeping the last row", record.id);
        }
    }

    let mut skipped = 0usize;
    for record in connections {
        validate_weights(record)?;

        let (Some(a), Some(b)) = (
            graph.node_index(&record.source).ok(),
            graph.node_index(&record.target).ok(),
        ) else {
            warn!(
                "Skipping connection {} - {}: unknown city",
                record.source, record.target
            );
            skipped += 1;
            continue;
        };

        if a == b {
            warn!("Skipping self-loop at {}", record.source);
            skipped += 1;
            continue;
        }

        let (_, inserted) = graph.upsert_connection(a, b, Weights::new(record.time, record.cost));
        if !inserted {
            warn!(
                "Connection {} - {} listed more than once, keeping the last row",
                record.source, record.target
            );
        }
    }

    if skipped > 0 {
        log::debug!("{skipped} of {} connection rows skipped", connections.len());
    }

    graph.calibrate_time_per_distance();
    Ok(graph)
}

fn validate_weights(record: &ConnectionRecord) -> Result<(), Error> {
    for (name, value) in [("time", record.time), ("cost", record.cost)] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidData(format!(
                "Connection {} - {} has invalid {name} weight {value}",
                record.source, record.target
            )));
        }
    }
    Ok(())
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    for path in [&config.cities_path, &config.connections_path] {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Table not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}

impl WeightedGraph {
    /// Builds the graph from in-memory tables, see [`build_network`]
    ///
    /// # Errors
    ///
    /// See [`build_network`]
    pub fn from_tables(
        cities: &[CityRecord],
        connections: &[ConnectionRecord],
    ) -> Result<Self, Error> {
        build_network(cities, connections)
    }
}
