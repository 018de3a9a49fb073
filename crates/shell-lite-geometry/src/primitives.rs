// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry primitives: bound segments, arcs and parametric evaluation
//!
//! All paths are parameterised over the normalized range `t ∈ [0, 1]`.
//! Out-of-range parameters are clamped. For a [`Segment`] the parameter is
//! proportional to arc length; for an [`ArcPath`] it is proportional to the
//! swept angle, which for a circle is again proportional to arc length. So
//! `evaluate(0.5)` is the geometric midpoint for both path kinds.

use crate::error::{Error, Result};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Minimum length of a bound segment in internal units
pub const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// Normalized parameter of a path's midpoint
pub const MID_PARAMETER: f64 = 0.5;

/// Midpoint of two points
///
/// Bit-identical to [`Segment::evaluate`] at `t = 0.5`.
#[inline]
pub fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    lerp(a, b, MID_PARAMETER)
}

#[inline]
fn lerp(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}

/// Bound straight path between two distinct points
///
/// Deserialization goes through [`Segment::bound`], so a parsed segment is
/// never degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentEnds")]
pub struct Segment {
    start: Point3<f64>,
    end: Point3<f64>,
}

#[derive(Deserialize)]
struct SegmentEnds {
    start: Point3<f64>,
    end: Point3<f64>,
}

impl TryFrom<SegmentEnds> for Segment {
    type Error = Error;

    fn try_from(ends: SegmentEnds) -> Result<Self> {
        Segment::bound(ends.start, ends.end)
    }
}

impl Segment {
    /// Create a bound segment
    ///
    /// Fails with `DegenerateSegment` when the endpoints are closer than
    /// [`MIN_SEGMENT_LENGTH`].
    pub fn bound(start: Point3<f64>, end: Point3<f64>) -> Result<Self> {
        let length = (end - start).norm();
        if !(length > MIN_SEGMENT_LENGTH) {
            return Err(Error::DegenerateSegment(length));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Point3<f64> {
        self.start
    }

    pub fn end(&self) -> Point3<f64> {
        self.end
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Unit direction from start to end
    pub fn direction(&self) -> Vector3<f64> {
        (self.end - self.start) / self.length()
    }

    /// Point at normalized parameter `t`
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        lerp(&self.start, &self.end, t.clamp(0.0, 1.0))
    }

    pub fn midpoint(&self) -> Point3<f64> {
        midpoint(&self.start, &self.end)
    }
}

/// Circular arc in a horizontal plane
///
/// Angles are in radians measured from +X towards +Y; a negative sweep
/// (`end_angle < start_angle`) runs clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArcParams")]
pub struct ArcPath {
    center: Point3<f64>,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

#[derive(Deserialize)]
struct ArcParams {
    center: Point3<f64>,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl TryFrom<ArcParams> for ArcPath {
    type Error = Error;

    fn try_from(params: ArcParams) -> Result<Self> {
        ArcPath::new(params.center, params.radius, params.start_angle, params.end_angle)
    }
}

impl ArcPath {
    /// Create an arc from centre, radius and bounding angles
    pub fn new(
        center: Point3<f64>,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if !(radius > MIN_SEGMENT_LENGTH) || !radius.is_finite() {
            return Err(Error::invalid_dimension("radius", radius, MIN_SEGMENT_LENGTH));
        }
        let arc = Self {
            center,
            radius,
            start_angle,
            end_angle,
        };
        let length = arc.length();
        if !(length > MIN_SEGMENT_LENGTH) {
            return Err(Error::DegenerateSegment(length));
        }
        Ok(arc)
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed swept angle
    pub fn sweep_angle(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle().abs()
    }

    fn angle_at(&self, t: f64) -> f64 {
        self.start_angle + t.clamp(0.0, 1.0) * self.sweep_angle()
    }

    /// Point at normalized parameter `t`
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        let angle = self.angle_at(t);
        self.center + Vector3::new(angle.cos(), angle.sin(), 0.0) * self.radius
    }

    /// Unit tangent in the direction of travel
    pub fn tangent(&self, t: f64) -> Vector3<f64> {
        let angle = self.angle_at(t);
        let dir = if self.sweep_angle() >= 0.0 { 1.0 } else { -1.0 };
        Vector3::new(-angle.sin(), angle.cos(), 0.0) * dir
    }
}

/// Location curve of a wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WallPath {
    Line(Segment),
    Arc(ArcPath),
}

impl WallPath {
    /// Point at normalized parameter `t`
    pub fn evaluate(&self, t: f64) -> Point3<f64> {
        match self {
            WallPath::Line(segment) => segment.evaluate(t),
            WallPath::Arc(arc) => arc.evaluate(t),
        }
    }

    /// Unit tangent at normalized parameter `t`
    pub fn tangent(&self, t: f64) -> Vector3<f64> {
        match self {
            WallPath::Line(segment) => segment.direction(),
            WallPath::Arc(arc) => arc.tangent(t),
        }
    }

    pub fn start(&self) -> Point3<f64> {
        self.evaluate(0.0)
    }

    pub fn end(&self) -> Point3<f64> {
        self.evaluate(1.0)
    }

    pub fn length(&self) -> f64 {
        match self {
            WallPath::Line(segment) => segment.length(),
            WallPath::Arc(arc) => arc.length(),
        }
    }

    /// The straight segment, if this is a line
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            WallPath::Line(segment) => Some(segment),
            WallPath::Arc(_) => None,
        }
    }
}

impl From<Segment> for WallPath {
    fn from(segment: Segment) -> Self {
        WallPath::Line(segment)
    }
}

impl From<ArcPath> for WallPath {
    fn from(arc: ArcPath) -> Self {
        WallPath::Arc(arc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_bound_rejects_degenerate() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            Segment::bound(p, p),
            Err(Error::DegenerateSegment(_))
        ));
    }

    #[test]
    fn test_segment_evaluate() {
        let seg = Segment::bound(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)).unwrap();
        assert_eq!(seg.evaluate(0.0), seg.start());
        assert_eq!(seg.evaluate(1.0), seg.end());
        assert_eq!(seg.evaluate(0.25), Point3::new(2.5, 0.0, 0.0));
        // Clamped
        assert_eq!(seg.evaluate(2.0), seg.end());
        assert_eq!(seg.evaluate(-1.0), seg.start());
        assert_eq!(seg.length(), 10.0);
        assert_eq!(seg.direction(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_midpoint_matches_evaluate() {
        let a = Point3::new(-16.404, -8.202, 0.0);
        let b = Point3::new(-16.404, 8.202, 0.0);
        let seg = Segment::bound(a, b).unwrap();
        assert_eq!(seg.evaluate(MID_PARAMETER), midpoint(&a, &b));
        assert_eq!(seg.midpoint(), Point3::new(-16.404, 0.0, 0.0));
    }

    #[test]
    fn test_deserialize_rejects_degenerate() {
        let p = serde_json::to_string(&Point3::new(1.0, 2.0, 3.0)).unwrap();
        let json = format!(r#"{{ "start": {p}, "end": {p} }}"#);
        assert!(serde_json::from_str::<Segment>(&json).is_err());

        let seg = Segment::bound(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)).unwrap();
        let parsed: Segment = serde_json::from_str(&serde_json::to_string(&seg).unwrap()).unwrap();
        assert_eq!(parsed, seg);
        assert_eq!(parsed.length(), 5.0);
    }

    #[test]
    fn test_deserialize_rejects_zero_radius_arc() {
        let arc = ArcPath::new(Point3::origin(), 2.0, 0.0, PI).unwrap();
        let mut value = serde_json::to_value(WallPath::from(arc)).unwrap();
        value["radius"] = serde_json::json!(0.0);
        assert!(serde_json::from_value::<WallPath>(value).is_err());
    }

    #[test]
    fn test_arc_midpoint_is_geometric_midpoint() {
        let arc = ArcPath::new(Point3::origin(), 2.0, 0.0, PI).unwrap();
        let mid = arc.evaluate(MID_PARAMETER);
        assert_relative_eq!(mid.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(arc.length(), 2.0 * PI, epsilon = 1e-12);

        let tangent = arc.tangent(MID_PARAMETER);
        assert_relative_eq!(tangent.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(tangent.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clockwise_arc_tangent() {
        let arc = ArcPath::new(Point3::origin(), 1.0, FRAC_PI_2, 0.0).unwrap();
        let tangent = arc.tangent(0.0);
        assert_relative_eq!(tangent.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(tangent.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arc_rejects_bad_input() {
        assert!(ArcPath::new(Point3::origin(), 0.0, 0.0, PI).is_err());
        assert!(ArcPath::new(Point3::origin(), 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_wall_path_dispatch() {
        let seg = Segment::bound(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 6.0, 0.0)).unwrap();
        let path = WallPath::from(seg);
        assert_eq!(path.start(), seg.start());
        assert_eq!(path.end(), seg.end());
        assert_eq!(path.length(), 6.0);
        assert_eq!(path.tangent(0.3), Vector3::new(0.0, 1.0, 0.0));
        assert!(path.as_segment().is_some());
    }
}
