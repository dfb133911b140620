use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid node: {0}")]
    InvalidNode(String),
    #[error("No path between {start} and {end}")]
    NoPath { start: String, end: String },
    #[error("No edge between {from} and {to}")]
    EdgeNotFound { from: String, to: String },
    #[error("Unknown weight dimension: {0}")]
    UnknownDimension(String),
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn no_path(start: &str, end: &str) -> Self {
        Error::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}
