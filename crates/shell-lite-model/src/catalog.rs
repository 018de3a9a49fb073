// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Family/type catalog keyed by category, family name and type name

use crate::{CatalogKey, ResolveError, Result, TypeId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Resolved family type
///
/// An immutable handle to a host family type. `active` mirrors the host
/// flag that must be set before an instance of the type can be placed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeHandle {
    pub id: TypeId,
    pub key: CatalogKey,
    pub active: bool,
}

impl TypeHandle {
    /// Create a new handle for an active type
    pub fn new(id: TypeId, key: CatalogKey) -> Self {
        Self {
            id,
            key,
            active: true,
        }
    }

    /// Mark the handle as inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether the host must activate the type before placing it
    pub fn needs_activation(&self) -> bool {
        !self.active
    }
}

/// Typed catalog lookup
///
/// # Example
///
/// ```ignore
/// use shell_lite_model::{CatalogKey, CatalogLookup, Category};
///
/// fn door_type(catalog: &dyn CatalogLookup) {
///     let key = CatalogKey::new(Category::Doors, "Single-Flush", "0915 x 2134mm");
///     match catalog.find_type(&key) {
///         Some(handle) => println!("Door type {}", handle.id),
///         None => println!("No such door"),
///     }
/// }
/// ```
pub trait CatalogLookup {
    /// Find a family type by key
    ///
    /// # Returns
    /// `Some(&TypeHandle)` if the key resolves, `None` otherwise
    fn find_type(&self, key: &CatalogKey) -> Option<&TypeHandle>;

    /// Find a family type or return `ResolveError::TypeNotFound`
    fn require(&self, key: &CatalogKey) -> Result<&TypeHandle> {
        self.find_type(key)
            .ok_or_else(|| ResolveError::type_not_found(key))
    }
}

/// In-memory catalog snapshot
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    types: FxHashMap<CatalogKey, TypeHandle>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type handle, replacing any handle with the same key
    pub fn insert(&mut self, handle: TypeHandle) {
        self.types.insert(handle.key.clone(), handle);
    }

    /// Builder-style registration
    pub fn with(mut self, handle: TypeHandle) -> Self {
        self.insert(handle);
        self
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl CatalogLookup for Catalog {
    fn find_type(&self, key: &CatalogKey) -> Option<&TypeHandle> {
        self.types.get(key)
    }
}

impl FromIterator<TypeHandle> for Catalog {
    fn from_iter<I: IntoIterator<Item = TypeHandle>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for handle in iter {
            catalog.insert(handle);
        }
        catalog
    }
}
