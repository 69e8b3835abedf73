//! Knob geometry and the affine transform applied to the knob image.

use serde::{Deserialize, Serialize};

use crate::error::{KnobError, KnobResult};

/// A point in knob-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Center and radius of the knob, as laid out by the host.
///
/// Construction rejects a radius that is zero, negative or not finite, so hit
/// testing and angle computation never run against degenerate geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct KnobGeometry {
    center: Point,
    radius: f64,
}

#[derive(Deserialize)]
struct RawGeometry {
    center: Point,
    radius: f64,
}

impl TryFrom<RawGeometry> for KnobGeometry {
    type Error = KnobError;

    fn try_from(raw: RawGeometry) -> KnobResult<Self> {
        Self::new(raw.center, raw.radius)
    }
}

impl Default for KnobGeometry {
    /// A knob filling a 200 x 200 view.
    fn default() -> Self {
        Self {
            center: Point::new(100.0, 100.0),
            radius: 100.0,
        }
    }
}

impl KnobGeometry {
    pub fn new(center: Point, radius: f64) -> KnobResult<Self> {
        if !radius.is_finite() || radius <= 0.0 || !center.x.is_finite() || !center.y.is_finite()
        {
            return Err(KnobError::DegenerateGeometry { radius });
        }
        Ok(Self { center, radius })
    }

    /// Geometry of a knob filling a view of the given bounds.
    ///
    /// The center is the middle of the bounds and the radius is half of the
    /// shorter side.
    pub fn from_bounds(width: f64, height: f64) -> KnobResult<Self> {
        Self::new(Point::new(width / 2.0, height / 2.0), width.min(height) / 2.0)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `point` falls inside the hit radius (boundary included).
    pub fn contains(&self, point: Point) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Angle of `point` around the center, in radians, as `atan2(dy, dx)`.
    pub fn angle_of(&self, point: Point) -> f64 {
        (point.y - self.center.y).atan2(point.x - self.center.x)
    }
}

/// 2D affine transform in the `[a b; c d; tx ty]` row-vector layout.
///
/// A point maps to `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// A pure rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Compose a rotation by `angle` radians onto this transform.
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos * self.a + sin * self.c,
            b: cos * self.b + sin * self.d,
            c: cos * self.c - sin * self.a,
            d: cos * self.d - sin * self.b,
            tx: self.tx,
            ty: self.ty,
        }
    }

    /// Rotation component of the transform, in `(-π, π]`.
    pub fn rotation_angle(&self) -> f64 {
        self.b.atan2(self.a)
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
