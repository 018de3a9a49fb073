// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shell configuration
//!
//! Every recognized option lives here with its default. Lengths are in
//! [`ShellConfig::input_unit`] unless stated otherwise.
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `width` × `depth` | 10000 × 5000 | footprint extents |
//! | `wall_thickness` | 0 | inset of wall centrelines |
//! | `min_dimension` | 50 | smallest accepted width/depth |
//! | `door.sill_offset` | 0 | door sill above the base level |
//! | `window.sill_offset` | 304 | window sill above the base level |
//! | `roof.apex_height` | 1500 | ridge rise above the eave line |
//! | `roof.edge_offset` | 200 | eave line above the roof level, also fascia depth |
//! | `roof.eave_cut` | 33619 | host eave cut code, written verbatim |

use crate::error::{Error, Result};
use crate::openings::OpeningKind;
use crate::roof::{DEFAULT_EAVE_CUT, DEFAULT_EDGE_OFFSET};
use crate::walls::MIN_DIMENSION;
use serde::{Deserialize, Serialize};
use shell_lite_model::{CatalogKey, Category, LengthUnit};

/// Which walls receive which openings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpeningLayout {
    /// Door on the first wall, a window on each of the other three
    #[default]
    DoorThenWindows,
    /// Walls only
    None,
}

impl OpeningLayout {
    /// Opening kind for the wall at `index` in loop order
    pub fn kind_for(&self, index: usize) -> Option<OpeningKind> {
        match self {
            OpeningLayout::DoorThenWindows if index == 0 => Some(OpeningKind::Door),
            OpeningLayout::DoorThenWindows => Some(OpeningKind::Window),
            OpeningLayout::None => None,
        }
    }
}

/// Family type and sill height of one opening kind
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpeningConfig {
    pub family_name: String,
    pub type_name: String,
    #[serde(default)]
    pub sill_offset: f64,
}

impl OpeningConfig {
    pub fn new(
        family_name: impl Into<String>,
        type_name: impl Into<String>,
        sill_offset: f64,
    ) -> Self {
        Self {
            family_name: family_name.into(),
            type_name: type_name.into(),
            sill_offset,
        }
    }
}

/// Roof options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofConfig {
    pub family_name: String,
    pub type_name: String,
    /// Name of the level the roof is constrained to
    pub level: String,
    pub apex_height: f64,
    pub edge_offset: f64,
    pub eave_cut: i32,
}

impl RoofConfig {
    pub fn catalog_key(&self) -> CatalogKey {
        CatalogKey::new(Category::Roofs, &self.family_name, &self.type_name)
    }
}

impl Default for RoofConfig {
    fn default() -> Self {
        Self {
            family_name: "Basic Roof".to_string(),
            type_name: "Generic - 400mm".to_string(),
            level: "Level 2".to_string(),
            apex_height: 1500.0,
            edge_offset: DEFAULT_EDGE_OFFSET,
            eave_cut: DEFAULT_EAVE_CUT,
        }
    }
}

/// Complete input of one shell build
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub input_unit: LengthUnit,
    pub width: f64,
    pub depth: f64,
    pub wall_thickness: f64,
    pub min_dimension: f64,
    pub structural: bool,
    pub base_level: String,
    pub top_level: String,
    pub layout: OpeningLayout,
    pub door: OpeningConfig,
    pub window: OpeningConfig,
    pub roof: RoofConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            input_unit: LengthUnit::Millimetres,
            width: 10000.0,
            depth: 5000.0,
            wall_thickness: 0.0,
            min_dimension: MIN_DIMENSION,
            structural: false,
            base_level: "Level 1".to_string(),
            top_level: "Level 2".to_string(),
            layout: OpeningLayout::DoorThenWindows,
            door: OpeningConfig::new("Single-Flush", "0915 x 2134mm", 0.0),
            window: OpeningConfig::new("Fixed", "0915 x 1830mm", 304.0),
            roof: RoofConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Opening options for `kind`
    pub fn opening(&self, kind: OpeningKind) -> &OpeningConfig {
        match kind {
            OpeningKind::Door => &self.door,
            OpeningKind::Window => &self.window,
        }
    }

    /// Reject lengths that are not finite or are negative
    ///
    /// Width/depth against `min_dimension` is left to the wall builder so
    /// that the failure surfaces as `InvalidDimension`.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("width", self.width),
            ("depth", self.depth),
            ("wall_thickness", self.wall_thickness),
            ("min_dimension", self.min_dimension),
            ("roof.apex_height", self.roof.apex_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::config(format!(
                    "{} must be a non-negative length, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("door.sill_offset", self.door.sill_offset),
            ("window.sill_offset", self.window.sill_offset),
            ("roof.edge_offset", self.roof.edge_offset),
        ] {
            if !value.is_finite() {
                return Err(Error::config(format!("{} must be finite, got {}", name, value)));
            }
        }
        if self.base_level.is_empty() || self.top_level.is_empty() || self.roof.level.is_empty() {
            return Err(Error::config("level names must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.width, 10000.0);
        assert_eq!(config.depth, 5000.0);
        assert_eq!(config.min_dimension, 50.0);
        assert_eq!(config.door.sill_offset, 0.0);
        assert_eq!(config.window.sill_offset, 304.0);
        assert_eq!(config.roof.edge_offset, 200.0);
        assert_eq!(config.input_unit, LengthUnit::Millimetres);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_partial_json() {
        let config = ShellConfig::from_json(
            r#"{
                "width": 12000,
                "wall_thickness": 300,
                "structural": true,
                "window": {
                    "family_name": "Casement",
                    "type_name": "0610 x 1220mm",
                    "sill_offset": 900
                },
                "roof": { "apex_height": 2000 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.width, 12000.0);
        assert_eq!(config.depth, 5000.0);
        assert_eq!(config.wall_thickness, 300.0);
        assert!(config.structural);
        assert_eq!(config.window.family_name, "Casement");
        assert_eq!(config.window.sill_offset, 900.0);
        assert_eq!(config.roof.apex_height, 2000.0);
        assert_eq!(config.roof.family_name, "Basic Roof");
        assert_eq!(config.roof.eave_cut, DEFAULT_EAVE_CUT);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ShellConfig {
            layout: OpeningLayout::None,
            input_unit: LengthUnit::Metres,
            ..ShellConfig::default()
        };
        let parsed = ShellConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_negative_thickness() {
        let err = ShellConfig::from_json(r#"{ "wall_thickness": -5 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ShellConfig::from_json(r#"{ "width": "wide" }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_layout() {
        let layout = OpeningLayout::DoorThenWindows;
        assert_eq!(layout.kind_for(0), Some(OpeningKind::Door));
        assert_eq!(layout.kind_for(3), Some(OpeningKind::Window));
        assert_eq!(OpeningLayout::None.kind_for(0), None);
    }
}
