use thiserror::Error;

/// Fatal errors. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum PortError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input collection: {0}")]
    InputShape(String),
}

pub type Result<T> = std::result::Result<T, PortError>;

/// Reasons a feature's geometry could not be reduced to a single coordinate.
///
/// These never escape the pipeline; the driver records them as skips.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("feature has no geometry")]
    Missing,

    #[error("invalid geometry: {0}")]
    Invalid(&'static str),

    #[error("unsupported geometry type: {0}")]
    Unsupported(String),

    #[error("malformed {0} coordinates")]
    Malformed(&'static str),

    #[error("{0} has no coordinates")]
    Empty(&'static str),

    #[error("polygon outer ring has {vertices} positions, at least 2 required")]
    DegeneratePolygon { vertices: usize },
}
