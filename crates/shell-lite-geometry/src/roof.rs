// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Symmetric gable roof extrusion profile
//!
//! The profile is drawn in the YZ plane (x = 0) and swept along X between
//! `extrusion_start` and `extrusion_end`:
//!
//! ```text
//!              (0, 0, dH)
//!                 /\
//!               /    \
//!  (0, dY, dZ) /      \ (0, -dY, dZ)
//! ```
//!
//! `dZ` is the eave line (base level elevation plus edge offset) and `dH`
//! the ridge (eave line plus apex height).

use crate::error::{Error, Result};
use crate::primitives::Segment;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use shell_lite_model::{
    CatalogKey, CatalogLookup, LengthUnit, Level, LevelId, TypeId, UnitConverter,
};

/// Default edge offset, in millimetres
pub const DEFAULT_EDGE_OFFSET: f64 = 200.0;

/// Default eave cut code written to the host roof
pub const DEFAULT_EAVE_CUT: i32 = 33619;

/// Descriptor of the extrusion roof to be created by the materializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofProfile {
    /// Eave-to-ridge and ridge-to-eave segments, mirror images across y = 0
    pub gable_segments: [Segment; 2],
    pub base_level: LevelId,
    pub roof_type: TypeId,
    pub extrusion_start: f64,
    pub extrusion_end: f64,
    /// Constraint offset of the roof above its base level, in internal units
    pub edge_offset: f64,
    /// Opaque host eave cut code
    pub eave_cut: i32,
    /// Fascia depth, in internal units
    pub fascia_depth: f64,
}

impl RoofProfile {
    /// Height of the eave line
    pub fn eave_height(&self) -> f64 {
        self.gable_segments[0].start().z
    }

    /// Height of the ridge
    pub fn ridge_height(&self) -> f64 {
        self.gable_segments[0].end().z
    }

    /// Open profile polyline: eave, ridge, eave
    pub fn profile_points(&self) -> [Point3<f64>; 3] {
        [
            self.gable_segments[0].start(),
            self.gable_segments[0].end(),
            self.gable_segments[1].end(),
        ]
    }

    /// Length swept along X
    pub fn extrusion_length(&self) -> f64 {
        self.extrusion_end - self.extrusion_start
    }
}

/// Builds the gable profile of an extrusion roof
pub struct RoofProfileBuilder<'a> {
    catalog: &'a dyn CatalogLookup,
    converter: &'a dyn UnitConverter,
    input_unit: LengthUnit,
    eave_cut: i32,
}

impl<'a> RoofProfileBuilder<'a> {
    /// Create a builder reading lengths in `input_unit`
    pub fn new(
        catalog: &'a dyn CatalogLookup,
        converter: &'a dyn UnitConverter,
        input_unit: LengthUnit,
    ) -> Self {
        Self {
            catalog,
            converter,
            input_unit,
            eave_cut: DEFAULT_EAVE_CUT,
        }
    }

    /// Override the eave cut code
    pub fn with_eave_cut(mut self, eave_cut: i32) -> Self {
        self.eave_cut = eave_cut;
        self
    }

    /// Build the roof profile
    ///
    /// # Arguments
    /// * `roof_type` - Catalog key of the roof type
    /// * `width`, `depth` - Footprint extents in the input unit
    /// * `apex_height` - Ridge rise above the eave line, in the input unit
    /// * `base_level` - Resolved base level, `None` if resolution failed
    /// * `edge_offset` - Eave line offset above the base level, in the input unit
    ///
    /// A zero `apex_height` yields a flat profile of two horizontal segments.
    ///
    /// # Returns
    /// The profile, `MissingBaseLevel` if `base_level` is `None`, or
    /// `MissingRoofType` if `roof_type` does not resolve
    pub fn build(
        &self,
        roof_type: &CatalogKey,
        width: f64,
        depth: f64,
        apex_height: f64,
        base_level: Option<&Level>,
        edge_offset: f64,
    ) -> Result<RoofProfile> {
        let base_level = base_level.ok_or(Error::MissingBaseLevel)?;
        let handle = self
            .catalog
            .find_type(roof_type)
            .ok_or_else(|| Error::MissingRoofType(roof_type.clone()))?;

        for (name, value) in [("width", width), ("depth", depth)] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(Error::invalid_dimension(name, value, 0.0));
            }
        }
        if !(apex_height >= 0.0) || !apex_height.is_finite() {
            return Err(Error::invalid_dimension("apex_height", apex_height, 0.0));
        }
        if !edge_offset.is_finite() {
            return Err(Error::invalid_dimension("edge_offset", edge_offset, 0.0));
        }

        let edge_offset = self.converter.to_internal(edge_offset, self.input_unit);
        let d_y = self.converter.to_internal(depth, self.input_unit) / 2.0;
        let d_x = self.converter.to_internal(width, self.input_unit) / 2.0;
        let d_z = base_level.elevation + edge_offset;
        let d_h = d_z + self.converter.to_internal(apex_height, self.input_unit);
        log::debug!(
            "Roof on '{}': eave z={} ridge z={} half-span={} half-length={}",
            base_level.name,
            d_z,
            d_h,
            d_y,
            d_x
        );

        let eave_left = Point3::new(0.0, d_y, d_z);
        let ridge = Point3::new(0.0, 0.0, d_h);
        let eave_right = Point3::new(0.0, -d_y, d_z);

        Ok(RoofProfile {
            gable_segments: [
                Segment::bound(eave_left, ridge)?,
                Segment::bound(ridge, eave_right)?,
            ],
            base_level: base_level.id,
            roof_type: handle.id,
            extrusion_start: -d_x,
            extrusion_end: d_x,
            edge_offset,
            eave_cut: self.eave_cut,
            fascia_depth: edge_offset,
        })
    }
}
