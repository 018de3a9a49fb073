// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for snapshot resolution

use crate::CatalogKey;
use thiserror::Error;

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors raised while resolving names against a host snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// No level with the requested name exists in the snapshot
    #[error("Level not found: {0}")]
    LevelNotFound(String),

    /// No family type matches the requested catalog key
    #[error("Type not found: {0}")]
    TypeNotFound(CatalogKey),

    /// Unit scale is zero, negative or not finite
    #[error("Invalid unit scale: {0}")]
    InvalidUnitScale(f64),
}

impl ResolveError {
    /// Create a level-not-found error
    pub fn level_not_found(name: impl Into<String>) -> Self {
        ResolveError::LevelNotFound(name.into())
    }

    /// Create a type-not-found error
    pub fn type_not_found(key: &CatalogKey) -> Self {
        ResolveError::TypeNotFound(key.clone())
    }
}
