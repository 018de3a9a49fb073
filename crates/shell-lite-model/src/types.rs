// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core identifier and key types shared between the host and the geometry core

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe level identifier
///
/// Wraps the host's element id of a level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct LevelId(pub u64);

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level#{}", self.0)
    }
}

impl From<u64> for LevelId {
    fn from(id: u64) -> Self {
        LevelId(id)
    }
}

/// Type-safe family type identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct TypeId(pub u64);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

impl From<u64> for TypeId {
    fn from(id: u64) -> Self {
        TypeId(id)
    }
}

/// Catalog category of a family type
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Doors,
    Windows,
    Roofs,
}

impl Category {
    /// Get display name for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Doors => "Doors",
            Category::Windows => "Windows",
            Category::Roofs => "Roofs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Typed catalog key
///
/// A family type is identified by its category together with the family and
/// type names. Names are matched exactly.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CatalogKey {
    pub category: Category,
    pub family_name: String,
    pub type_name: String,
}

impl CatalogKey {
    /// Create a new catalog key
    pub fn new(
        category: Category,
        family_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            category,
            family_name: family_name.into(),
            type_name: type_name.into(),
        }
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' : '{}'",
            self.category, self.family_name, self.type_name
        )
    }
}
