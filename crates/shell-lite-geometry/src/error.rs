// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for shell generation

use crate::WallRef;
use shell_lite_model::{CatalogKey, ResolveError};
use thiserror::Error;

/// Shell generation result type
pub type Result<T> = std::result::Result<T, Error>;

/// Shell generation errors
///
/// Every failure aborts the build step that raised it; nothing is retried
/// and no partial output is returned alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A length input is below its minimum, negative or not finite
    #[error("Invalid dimension {name} = {value} (minimum {minimum})")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        minimum: f64,
    },

    /// A named level is missing from the snapshot
    #[error("Level not found: {0}")]
    LevelNotFound(String),

    /// A door/window family type is missing from the catalog
    #[error("Catalog lookup failed for {0}")]
    CatalogLookupFailed(CatalogKey),

    /// The host wall has no evaluable location curve
    #[error("Wall {0} has no location curve")]
    MissingWallCurve(WallRef),

    /// The roof family type is missing from the catalog
    #[error("Roof type not found: {0}")]
    MissingRoofType(CatalogKey),

    /// The roof base level did not resolve
    #[error("Roof base level not resolved")]
    MissingBaseLevel,

    /// Bound segment endpoints coincide
    #[error("Degenerate segment: endpoints are {0} apart")]
    DegenerateSegment(f64),

    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization of configuration or plans failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The materializer reported a failure and the transaction was rolled back
    #[error("Materialization failed: {0}")]
    Materialize(String),
}

impl Error {
    /// Create an invalid dimension error
    pub fn invalid_dimension(name: &'static str, value: f64, minimum: f64) -> Self {
        Error::InvalidDimension {
            name,
            value,
            minimum,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a materialization error
    pub fn materialize(msg: impl Into<String>) -> Self {
        Error::Materialize(msg.into())
    }
}

impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::LevelNotFound(name) => Error::LevelNotFound(name),
            ResolveError::TypeNotFound(key) => Error::CatalogLookupFailed(key),
            ResolveError::InvalidUnitScale(scale) => {
                Error::Config(format!("invalid unit scale {}", scale))
            }
        }
    }
}
