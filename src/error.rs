use thiserror::Error;

/// Errors raised while reading a road feature collection.
///
/// Only structurally wrong input ends up here. Missing fields, absent
/// evaluation bundles and non-numeric grades are tolerated downstream.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed feature collection: {0}")]
    Shape(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
