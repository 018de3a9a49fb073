// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door and window placement at wall midpoints

use crate::error::{Error, Result};
use crate::primitives::MID_PARAMETER;
use crate::walls::{WallRef, WallSpec};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use shell_lite_model::{
    CatalogKey, CatalogLookup, Category, LengthUnit, LevelId, TypeId, UnitConverter,
};
use std::fmt;

/// Kind of wall-hosted opening
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    /// Catalog category searched for this kind
    pub fn category(&self) -> Category {
        match self {
            OpeningKind::Door => Category::Doors,
            OpeningKind::Window => Category::Windows,
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningKind::Door => f.write_str("door"),
            OpeningKind::Window => f.write_str("window"),
        }
    }
}

/// Descriptor of one door or window to be created by the materializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningSpec {
    /// Host wall
    pub wall_ref: WallRef,
    pub kind: OpeningKind,
    pub family_name: String,
    pub type_name: String,
    pub type_id: TypeId,
    /// Host must activate the family type before placing it
    pub needs_activation: bool,
    /// Level the instance is placed on (the host wall's base level)
    pub level: LevelId,
    /// Sill height above the level, in internal units
    pub sill_offset: f64,
    /// Point on the wall path at the normalized midpoint parameter
    pub placement_point: Point3<f64>,
    /// Unit tangent of the wall path at the placement point
    pub facing: Vector3<f64>,
}

impl OpeningSpec {
    /// Catalog key this opening was resolved from
    pub fn catalog_key(&self) -> CatalogKey {
        CatalogKey::new(self.kind.category(), &self.family_name, &self.type_name)
    }
}

/// Places doors and windows at the midpoint of their host wall
pub struct OpeningPlacer<'a> {
    catalog: &'a dyn CatalogLookup,
    converter: &'a dyn UnitConverter,
    input_unit: LengthUnit,
}

impl<'a> OpeningPlacer<'a> {
    /// Create a placer reading sill offsets in `input_unit`
    pub fn new(
        catalog: &'a dyn CatalogLookup,
        converter: &'a dyn UnitConverter,
        input_unit: LengthUnit,
    ) -> Self {
        Self {
            catalog,
            converter,
            input_unit,
        }
    }

    /// Derive the opening descriptor for `wall`
    ///
    /// The sill offset is converted to internal units and carried through
    /// unmodified; its magnitude is not validated.
    ///
    /// # Returns
    /// The descriptor, `MissingWallCurve` if the wall has no location path,
    /// or `CatalogLookupFailed` if the family type does not resolve
    pub fn place(
        &self,
        wall: &WallSpec,
        kind: OpeningKind,
        family_name: &str,
        type_name: &str,
        sill_offset: f64,
    ) -> Result<OpeningSpec> {
        let path = wall.path.ok_or(Error::MissingWallCurve(wall.wall_ref))?;

        let key = CatalogKey::new(kind.category(), family_name, type_name);
        let handle = self.catalog.require(&key)?;

        let placement_point = path.evaluate(MID_PARAMETER);
        let facing = path.tangent(MID_PARAMETER);
        log::debug!(
            "Placing {} '{}' on {} at ({:.4}, {:.4}, {:.4})",
            kind,
            type_name,
            wall.wall_ref,
            placement_point.x,
            placement_point.y,
            placement_point.z
        );

        Ok(OpeningSpec {
            wall_ref: wall.wall_ref,
            kind,
            family_name: key.family_name,
            type_name: key.type_name,
            type_id: handle.id,
            needs_activation: handle.needs_activation(),
            level: wall.base_level,
            sill_offset: self.converter.to_internal(sill_offset, self.input_unit),
            placement_point,
            facing,
        })
    }
}
