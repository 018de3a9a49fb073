// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Levels and named level resolution

use crate::{LevelId, ResolveError, Result};
use serde::{Deserialize, Serialize};

/// A horizontal reference plane of the host model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Host element id
    pub id: LevelId,
    /// Display name, matched exactly by [`LevelResolver::resolve`]
    pub name: String,
    /// Elevation in internal length units
    pub elevation: f64,
}

impl Level {
    /// Create a new level
    pub fn new(id: LevelId, name: impl Into<String>, elevation: f64) -> Self {
        Self {
            id,
            name: name.into(),
            elevation,
        }
    }
}

/// Named level lookup
///
/// Implementations answer queries against a fixed set of levels; resolving
/// a name never changes what later resolutions return.
pub trait LevelResolver {
    /// Resolve a level by exact name
    ///
    /// # Returns
    /// The level, or `ResolveError::LevelNotFound` carrying the name
    fn resolve(&self, name: &str) -> Result<&Level>;

    /// Resolve a level by name, returning `None` when absent
    fn find(&self, name: &str) -> Option<&Level> {
        self.resolve(name).ok()
    }
}

/// Immutable, elevation-ordered collection of the levels of a document
///
/// Built once from whatever the host enumerates and then only queried.
/// Levels are ordered by elevation, ties broken by name, so that lookups of
/// duplicated names are deterministic (the lowest one wins).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    levels: Vec<Level>,
}

impl LevelSnapshot {
    /// Collect levels into an ordered snapshot
    pub fn collect(levels: impl IntoIterator<Item = Level>) -> Self {
        let mut levels: Vec<Level> = levels.into_iter().collect();
        levels.sort_by(|a, b| {
            a.elevation
                .total_cmp(&b.elevation)
                .then_with(|| a.name.cmp(&b.name))
        });
        Self { levels }
    }

    /// Iterate levels from lowest to highest
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Number of levels in the snapshot
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if the snapshot holds no levels
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl LevelResolver for LevelSnapshot {
    fn resolve(&self, name: &str) -> Result<&Level> {
        self.levels
            .iter()
            .find(|level| level.name == name)
            .ok_or_else(|| ResolveError::level_not_found(name))
    }
}

impl FromIterator<Level> for LevelSnapshot {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        Self::collect(iter)
    }
}
