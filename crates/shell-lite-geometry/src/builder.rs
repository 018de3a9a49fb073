// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shell Builder - Sequences walls, openings and roof into one plan
//!
//! A build reads exclusively from one [`ShellSnapshot`] taken before any
//! computation starts. The steps run in dependency order
//! (walls → openings → roof) and the first failure ends the build; no
//! partially filled plan is ever returned.

use crate::config::ShellConfig;
use crate::error::Result;
use crate::openings::{OpeningPlacer, OpeningSpec};
use crate::roof::{RoofProfile, RoofProfileBuilder};
use crate::walls::{RectangleLoopBuilder, WallSpec};
use serde::{Deserialize, Serialize};
use shell_lite_model::{Catalog, LevelResolver, LevelSnapshot, ScaleConverter, UnitConverter};

/// Consistent view of the host document used by one build
#[derive(Clone, Debug, Default)]
pub struct ShellSnapshot {
    pub levels: LevelSnapshot,
    pub catalog: Catalog,
}

impl ShellSnapshot {
    pub fn new(levels: LevelSnapshot, catalog: Catalog) -> Self {
        Self { levels, catalog }
    }
}

/// Everything the materializer needs to create one shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellPlan {
    pub walls: [WallSpec; 4],
    pub openings: Vec<OpeningSpec>,
    pub roof: RoofProfile,
}

impl ShellPlan {
    /// Serialize to pretty-printed JSON for an out-of-process materializer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a plan previously written by [`ShellPlan::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Openings hosted by the wall at `index`
    pub fn openings_on(&self, index: usize) -> impl Iterator<Item = &OpeningSpec> {
        self.openings
            .iter()
            .filter(move |opening| opening.wall_ref.0 == index)
    }
}

/// Builds a [`ShellPlan`] from a configuration and a snapshot
///
/// # Example
///
/// ```ignore
/// use shell_lite_geometry::{ShellBuilder, ShellConfig, ShellSnapshot};
///
/// let builder = ShellBuilder::new(ShellConfig::default());
/// let plan = builder.build(&snapshot)?;
/// println!("{} walls, {} openings", plan.walls.len(), plan.openings.len());
/// ```
pub struct ShellBuilder<C: UnitConverter = ScaleConverter> {
    config: ShellConfig,
    converter: C,
}

impl ShellBuilder<ScaleConverter> {
    /// Create a builder for a host whose internal unit is the foot
    pub fn new(config: ShellConfig) -> Self {
        Self::with_converter(config, ScaleConverter::feet())
    }
}

impl<C: UnitConverter> ShellBuilder<C> {
    /// Create a builder with a specific unit converter
    pub fn with_converter(config: ShellConfig, converter: C) -> Self {
        Self { config, converter }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Run the full build against `snapshot`
    pub fn build(&self, snapshot: &ShellSnapshot) -> Result<ShellPlan> {
        log::info!(
            "Building shell {}x{}{} on '{}'..'{}'",
            self.config.width,
            self.config.depth,
            self.config.input_unit.symbol(),
            self.config.base_level,
            self.config.top_level
        );

        let plan = self.run(snapshot);
        match &plan {
            Ok(plan) => log::info!(
                "Shell built: {} walls, {} openings, ridge at {:.1}{}",
                plan.walls.len(),
                plan.openings.len(),
                self.converter
                    .from_internal(plan.roof.ridge_height(), self.config.input_unit),
                self.config.input_unit.symbol()
            ),
            Err(err) => log::warn!("Shell build aborted: {}", err),
        }
        plan
    }

    fn run(&self, snapshot: &ShellSnapshot) -> Result<ShellPlan> {
        let config = &self.config;
        config.validate()?;

        let base_level = snapshot.levels.resolve(&config.base_level)?;
        let top_level = snapshot.levels.resolve(&config.top_level)?;

        let walls = RectangleLoopBuilder::new(&self.converter, config.input_unit)
            .with_min_dimension(config.min_dimension)
            .build(
                config.width,
                config.depth,
                config.wall_thickness,
                base_level,
                top_level,
                config.structural,
            )?;

        let placer = OpeningPlacer::new(&snapshot.catalog, &self.converter, config.input_unit);
        let mut openings = Vec::with_capacity(walls.len());
        for (index, wall) in walls.iter().enumerate() {
            let Some(kind) = config.layout.kind_for(index) else {
                continue;
            };
            let opening = config.opening(kind);
            openings.push(placer.place(
                wall,
                kind,
                &opening.family_name,
                &opening.type_name,
                opening.sill_offset,
            )?);
        }

        let roof = RoofProfileBuilder::new(&snapshot.catalog, &self.converter, config.input_unit)
            .with_eave_cut(config.roof.eave_cut)
            .build(
                &config.roof.catalog_key(),
                config.width,
                config.depth,
                config.roof.apex_height,
                snapshot.levels.find(&config.roof.level),
                config.roof.edge_offset,
            )?;

        Ok(ShellPlan {
            walls,
            openings,
            roof,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpeningLayout;
    use crate::openings::OpeningKind;
    use crate::Error;
    use shell_lite_model::{CatalogKey, Category, LengthUnit, Level, LevelId, TypeHandle, TypeId};

    fn snapshot() -> ShellSnapshot {
        let levels = LevelSnapshot::collect(vec![
            Level::new(LevelId(1), "Level 1", 0.0),
            Level::new(LevelId(2), "Level 2", 4000.0),
        ]);
        let catalog = Catalog::new()
            .with(TypeHandle::new(
                TypeId(11),
                CatalogKey::new(Category::Doors, "Single-Flush", "0915 x 2134mm"),
            ))
            .with(TypeHandle::new(
                TypeId(12),
                CatalogKey::new(Category::Windows, "Fixed", "0915 x 1830mm"),
            ))
            .with(TypeHandle::new(
                TypeId(13),
                CatalogKey::new(Category::Roofs, "Basic Roof", "Generic - 400mm"),
            ));
        ShellSnapshot::new(levels, catalog)
    }

    fn mm_builder(config: ShellConfig) -> ShellBuilder<ScaleConverter> {
        ShellBuilder::with_converter(config, ScaleConverter::identity(LengthUnit::Millimetres))
    }

    #[test]
    fn test_default_build() {
        let plan = mm_builder(ShellConfig::default()).build(&snapshot()).unwrap();

        assert_eq!(plan.walls.len(), 4);
        assert_eq!(plan.openings.len(), 4);
        assert_eq!(plan.openings[0].kind, OpeningKind::Door);
        assert_eq!(plan.openings[0].sill_offset, 0.0);
        for opening in &plan.openings[1..] {
            assert_eq!(opening.kind, OpeningKind::Window);
            assert_eq!(opening.sill_offset, 304.0);
        }
        assert_eq!(plan.roof.base_level, LevelId(2));
        assert_eq!(plan.roof.eave_height(), 4200.0);
        assert_eq!(plan.roof.ridge_height(), 5700.0);
    }

    #[test]
    fn test_one_opening_per_wall() {
        let plan = mm_builder(ShellConfig::default()).build(&snapshot()).unwrap();
        for index in 0..4 {
            assert_eq!(plan.openings_on(index).count(), 1);
        }
    }

    #[test]
    fn test_walls_only_layout() {
        let config = ShellConfig {
            layout: OpeningLayout::None,
            ..ShellConfig::default()
        };
        let plan = mm_builder(config).build(&snapshot()).unwrap();
        assert!(plan.openings.is_empty());
    }

    #[test]
    fn test_missing_level_is_terminal() {
        let config = ShellConfig {
            top_level: "Level 9".to_string(),
            ..ShellConfig::default()
        };
        let err = mm_builder(config).build(&snapshot()).unwrap_err();
        assert!(matches!(err, Error::LevelNotFound(name) if name == "Level 9"));
    }

    #[test]
    fn test_missing_roof_level() {
        let mut config = ShellConfig::default();
        config.roof.level = "Attic".to_string();
        let err = mm_builder(config).build(&snapshot()).unwrap_err();
        assert!(matches!(err, Error::MissingBaseLevel));
    }

    #[test]
    fn test_missing_window_type_aborts_build() {
        let mut config = ShellConfig::default();
        config.window.type_name = "9999 x 9999mm".to_string();
        let err = mm_builder(config).build(&snapshot()).unwrap_err();
        assert!(matches!(
            err,
            Error::CatalogLookupFailed(key) if key.category == Category::Windows
        ));
    }

    #[test]
    fn test_small_footprint_rejected() {
        let config = ShellConfig {
            depth: 40.0,
            ..ShellConfig::default()
        };
        let err = mm_builder(config).build(&snapshot()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { name: "depth", .. }));
    }

    #[test]
    fn test_plan_json_roundtrip() {
        let plan = mm_builder(ShellConfig::default()).build(&snapshot()).unwrap();
        let json = plan.to_json().unwrap();
        assert!(json.contains("\"gable_segments\""));
        assert_eq!(ShellPlan::from_json(&json).unwrap(), plan);
    }

    #[test]
    fn test_flat_roof_config_builds() {
        let mut config = ShellConfig::default();
        config.roof.apex_height = 0.0;
        assert!(config.validate().is_ok());

        let plan = mm_builder(config).build(&snapshot()).unwrap();
        assert_eq!(plan.roof.eave_height(), 4200.0);
        assert_eq!(plan.roof.ridge_height(), 4200.0);
    }

    #[test]
    fn test_plan_with_collapsed_segment_rejected() {
        let plan = mm_builder(ShellConfig::default()).build(&snapshot()).unwrap();
        let mut value = serde_json::to_value(&plan).unwrap();
        let start = value["roof"]["gable_segments"][0]["start"].clone();
        value["roof"]["gable_segments"][0]["end"] = start;

        let err = ShellPlan::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = ShellBuilder::new(ShellConfig::default());
        let snapshot = snapshot();
        assert_eq!(builder.build(&snapshot).unwrap(), builder.build(&snapshot).unwrap());
    }
}
