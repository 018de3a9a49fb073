// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangular wall loop construction
//!
//! The footprint is centred on the origin. Boundary points are emitted in a
//! single fixed winding, starting at the (-x, -y) corner and running up the
//! -X side first:
//!
//! ```text
//!   p1 (-dx, dy) ──── p2 (dx, dy)
//!      │                  │
//!   p0 (-dx,-dy) ──── p3 (dx,-dy)      p4 = p0
//! ```
//!
//! Wall centrelines are inset by half the wall thickness on every side, so a
//! zero thickness yields the raw half-extents.

use crate::error::{Error, Result};
use crate::primitives::{Segment, WallPath};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use shell_lite_model::{LengthUnit, Level, LevelId, UnitConverter};
use std::fmt;

/// Minimum footprint width and depth, in the caller's unit
pub const MIN_DIMENSION: f64 = 50.0;

/// Corner signs of the loop, in emission order
const CORNER_SIGNS: [(f64, f64); 4] = [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)];

/// Position of a wall within the loop it was built in
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct WallRef(pub usize);

impl fmt::Display for WallRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wall[{}]", self.0)
    }
}

/// Descriptor of one wall to be created by the materializer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub wall_ref: WallRef,
    /// Location curve in plan; `None` only for walls sourced from the host
    /// whose location is not a curve
    pub path: Option<WallPath>,
    pub base_level: LevelId,
    /// Level the top of the wall is constrained to
    pub top_level: LevelId,
    /// Thickness in internal units
    pub thickness: f64,
    pub is_structural: bool,
}

impl WallSpec {
    /// The straight location segment, if any
    pub fn segment(&self) -> Option<&Segment> {
        self.path.as_ref().and_then(WallPath::as_segment)
    }
}

/// Builds the closed four-wall loop of a rectangular footprint
pub struct RectangleLoopBuilder<'a> {
    converter: &'a dyn UnitConverter,
    input_unit: LengthUnit,
    min_dimension: f64,
}

impl<'a> RectangleLoopBuilder<'a> {
    /// Create a builder reading lengths in `input_unit`
    pub fn new(converter: &'a dyn UnitConverter, input_unit: LengthUnit) -> Self {
        Self {
            converter,
            input_unit,
            min_dimension: MIN_DIMENSION,
        }
    }

    /// Override the minimum width/depth (in the input unit)
    pub fn with_min_dimension(mut self, min_dimension: f64) -> Self {
        self.min_dimension = min_dimension;
        self
    }

    /// Compute the five boundary points of the loop (first == last)
    ///
    /// Width, depth and thickness are given in the input unit; the returned
    /// points are in internal units.
    pub fn boundary_points(
        &self,
        width: f64,
        depth: f64,
        thickness: f64,
    ) -> Result<[Point3<f64>; 5]> {
        // NaN fails these comparisons and is rejected with the rest
        if !(width >= self.min_dimension) || !width.is_finite() {
            return Err(Error::invalid_dimension("width", width, self.min_dimension));
        }
        if !(depth >= self.min_dimension) || !depth.is_finite() {
            return Err(Error::invalid_dimension("depth", depth, self.min_dimension));
        }
        if !(thickness >= 0.0) || !thickness.is_finite() {
            return Err(Error::invalid_dimension("thickness", thickness, 0.0));
        }

        let width = self.converter.to_internal(width, self.input_unit);
        let depth = self.converter.to_internal(depth, self.input_unit);
        let inset = self.converter.to_internal(thickness, self.input_unit) / 2.0;

        let dx = width / 2.0 - inset;
        let dy = depth / 2.0 - inset;
        if !(dx > 0.0 && dy > 0.0) {
            return Err(Error::invalid_dimension("thickness", thickness, 0.0));
        }
        log::debug!("Wall loop half-extents dx={} dy={} (inset {})", dx, dy, inset);

        let corner = |i: usize| {
            let (sx, sy) = CORNER_SIGNS[i];
            Point3::new(sx * dx, sy * dy, 0.0)
        };
        Ok([corner(0), corner(1), corner(2), corner(3), corner(0)])
    }

    /// Build the four walls of the loop
    ///
    /// # Arguments
    /// * `width`, `depth` - Footprint extents in the input unit
    /// * `thickness` - Wall thickness in the input unit
    /// * `base_level` / `top_level` - Resolved constraint levels
    /// * `is_structural` - Structural flag carried onto every wall
    ///
    /// # Returns
    /// Four walls in loop order, or `InvalidDimension` if width or depth is
    /// below the minimum or not finite
    pub fn build(
        &self,
        width: f64,
        depth: f64,
        thickness: f64,
        base_level: &Level,
        top_level: &Level,
        is_structural: bool,
    ) -> Result<[WallSpec; 4]> {
        let points = self.boundary_points(width, depth, thickness)?;
        let thickness = self.converter.to_internal(thickness, self.input_unit);

        let wall = |i: usize| -> Result<WallSpec> {
            let segment = Segment::bound(points[i], points[i + 1])?;
            Ok(WallSpec {
                wall_ref: WallRef(i),
                path: Some(WallPath::Line(segment)),
                base_level: base_level.id,
                top_level: top_level.id,
                thickness,
                is_structural,
            })
        };

        Ok([wall(0)?, wall(1)?, wall(2)?, wall(3)?])
    }
}
