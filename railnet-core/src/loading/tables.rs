//! Raw table rows and CSV readers

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub id: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
}

impl CityRecord {
    pub fn new(id: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            id: id.into(),
            longitude,
            latitude,
            category: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionRecord {
    pub source: String,
    pub target: String,
    pub time: f64,
    pub cost: f64,
}

impl ConnectionRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, time: f64, cost: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            time,
            cost,
        }
    }
}

/// Reads a headed CSV table from a file. A malformed row fails the whole table.
pub fn read_table<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    parse_table(file)
}

/// Parses a headed CSV table from any reader
pub fn parse_table<T, R>(reader: R) -> Result<Vec<T>, Error>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .map(|row| row.map_err(Error::from))
        .collect()
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
