// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and conversion into host internal units

use crate::{ResolveError, Result};
use serde::{Deserialize, Serialize};

/// Common unit scales for reference (unit to metres)
pub mod scales {
    /// Meters to meters (identity)
    pub const METRE: f64 = 1.0;
    /// Millimeters to meters
    pub const MILLIMETRE: f64 = 0.001;
    /// Centimeters to meters
    pub const CENTIMETRE: f64 = 0.01;
    /// Inches to meters
    pub const INCH: f64 = 0.0254;
    /// Feet to meters
    pub const FOOT: f64 = 0.3048;
}

/// Length unit of user-facing values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Millimetres,
    Centimetres,
    Metres,
    Inches,
    Feet,
}

impl LengthUnit {
    /// Length of one unit in metres
    pub fn metre_scale(&self) -> f64 {
        match self {
            LengthUnit::Millimetres => scales::MILLIMETRE,
            LengthUnit::Centimetres => scales::CENTIMETRE,
            LengthUnit::Metres => scales::METRE,
            LengthUnit::Inches => scales::INCH,
            LengthUnit::Feet => scales::FOOT,
        }
    }

    /// Short symbol for messages
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimetres => "mm",
            LengthUnit::Centimetres => "cm",
            LengthUnit::Metres => "m",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
        }
    }
}

/// Conversion from user units into the host's internal length unit
pub trait UnitConverter {
    /// Convert `value` expressed in `unit` into internal units
    fn to_internal(&self, value: f64, unit: LengthUnit) -> f64;

    /// Convert `value` from internal units back into `unit`
    fn from_internal(&self, value: f64, unit: LengthUnit) -> f64;
}

/// Linear unit converter parameterised by the internal unit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConverter {
    /// Length of one internal unit in metres
    internal_scale: f64,
}

impl ScaleConverter {
    /// Create a converter whose internal unit is `metres_per_unit` metres long
    pub fn new(metres_per_unit: f64) -> Result<Self> {
        if !metres_per_unit.is_finite() || metres_per_unit <= 0.0 {
            return Err(ResolveError::InvalidUnitScale(metres_per_unit));
        }
        Ok(Self {
            internal_scale: metres_per_unit,
        })
    }

    /// Internal unit is the decimal foot
    pub fn feet() -> Self {
        Self::identity(LengthUnit::Feet)
    }

    /// Internal unit equals `unit`; values in that unit pass through unchanged
    pub fn identity(unit: LengthUnit) -> Self {
        Self {
            internal_scale: unit.metre_scale(),
        }
    }

    /// Length of one internal unit in metres
    pub fn internal_scale(&self) -> f64 {
        self.internal_scale
    }
}

impl Default for ScaleConverter {
    fn default() -> Self {
        Self::feet()
    }
}

impl UnitConverter for ScaleConverter {
    fn to_internal(&self, value: f64, unit: LengthUnit) -> f64 {
        let scale = unit.metre_scale();
        if scale == self.internal_scale {
            return value;
        }
        value * scale / self.internal_scale
    }

    fn from_internal(&self, value: f64, unit: LengthUnit) -> f64 {
        let scale = unit.metre_scale();
        if scale == self.internal_scale {
            return value;
        }
        value * self.internal_scale / scale
    }
}
