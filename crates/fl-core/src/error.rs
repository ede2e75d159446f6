//! Error type for `fl-core`.
//!
//! Malformed node data is never an error here: non-numeric fields are read
//! as absent and re-seeded by the simulation.  Only configuration that can
//! never produce a meaningful run is rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{field} must be finite, got {value}")]
    NotFinite {
        field: &'static str,
        value: f64,
    },
}

/// Shorthand result type for `fl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
