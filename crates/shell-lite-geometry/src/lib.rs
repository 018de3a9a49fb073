// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Shell-Lite Geometry
//!
//! Parametric geometry of a rectangular building shell: a closed four-wall
//! loop between two levels, a door or window centred on each wall, and a
//! symmetric gable roof extrusion profile.
//!
//! ## Overview
//!
//! - **Wall loop**: [`RectangleLoopBuilder`] turns width/depth/thickness into
//!   four [`WallSpec`]s in a fixed winding
//! - **Openings**: [`OpeningPlacer`] places a door/window at the midpoint of
//!   its host wall
//! - **Roof**: [`RoofProfileBuilder`] derives the gable profile and edge
//!   parameters
//! - **Orchestration**: [`ShellBuilder`] runs all three against one
//!   [`ShellSnapshot`] and returns a [`ShellPlan`]
//!
//! The builders are pure: they produce descriptors and never touch the host.
//! A host applies a plan through the [`Materializer`] trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shell_lite_geometry::{materialize, ShellBuilder, ShellConfig, ShellSnapshot};
//!
//! let config = ShellConfig::from_json(r#"{ "width": 12000, "wall_thickness": 200 }"#)?;
//! let plan = ShellBuilder::new(config).build(&snapshot)?;
//! materialize(&plan, &mut host)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod materializer;
pub mod openings;
pub mod primitives;
pub mod roof;
pub mod walls;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

// Re-export main types
pub use builder::{ShellBuilder, ShellPlan, ShellSnapshot};
pub use config::{OpeningConfig, OpeningLayout, RoofConfig, ShellConfig};
pub use error::{Error, Result};
pub use materializer::{materialize, MaterializeError, MaterializeReport, Materializer};
pub use openings::{OpeningKind, OpeningPlacer, OpeningSpec};
pub use primitives::{midpoint, ArcPath, Segment, WallPath, MID_PARAMETER};
pub use roof::{RoofProfile, RoofProfileBuilder, DEFAULT_EAVE_CUT, DEFAULT_EDGE_OFFSET};
pub use walls::{RectangleLoopBuilder, WallRef, WallSpec, MIN_DIMENSION};

#[cfg(test)]
mod tests {
    use super::*;
    use shell_lite_model::{LengthUnit, Level, LevelId, ScaleConverter};

    #[test]
    fn test_basic_loop() {
        let mm = ScaleConverter::identity(LengthUnit::Millimetres);
        let base = Level::new(LevelId(1), "Level 1", 0.0);
        let top = Level::new(LevelId(2), "Level 2", 4000.0);
        let walls = RectangleLoopBuilder::new(&mm, LengthUnit::Millimetres)
            .build(10000.0, 5000.0, 0.0, &base, &top, false)
            .unwrap();

        let total: f64 = walls
            .iter()
            .filter_map(|w| w.path.as_ref())
            .map(WallPath::length)
            .sum();
        assert_eq!(total, 30000.0);
    }
}
