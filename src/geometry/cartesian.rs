use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use approx::AbsDiffEq;

use crate::error::{ParseError, Result};
use crate::math::format::format_triplet;
use crate::math::{equals_with, AngleUnit, Point3, Vector3, EPSILON};
use crate::partition::Octant;

use super::parse::{parse_number, split_triplet};
use super::{Coordinates, CylindricalPoint, SphericalPoint};

/// A point expressed in Cartesian `(x, y, z)` coordinates.
///
/// Every triple is already canonical, so the fields are public.
///
/// The textual forms are `xyz: [x, y, z]` and `(x, y, z)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    /// Prefix of the bracketed textual form.
    pub const PREFIX: &'static str = "xyz:";

    /// Template used by the [`Display`](fmt::Display) implementation.
    pub const DEFAULT_TEMPLATE: &'static str = "xyz: [%.2f, %.2f, %.2f]";

    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the origin.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the coordinates as an offset from the origin.
    #[must_use]
    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the point translated by `(dx, dy, dz)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        *self + Vector3::new(dx, dy, dz)
    }

    /// Re-expresses the point relative to a new origin located at `(x, y, z)`.
    #[must_use]
    pub fn move_origin_to(&self, x: f64, y: f64, z: f64) -> Self {
        self.translate(-x, -y, -z)
    }

    /// Returns the point with every coordinate multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_vector(self.to_vector() * factor)
    }

    /// Converts to cylindrical `(ρ, φ, z)` coordinates.
    ///
    /// `ρ = √(x² + y²)`, `φ = atan2(y, x)`, `z = z`.
    #[must_use]
    pub fn to_cylindrical(&self) -> CylindricalPoint {
        let rho = self.x.hypot(self.y);
        let phi = self.y.atan2(self.x);
        CylindricalPoint::new(rho, phi, self.z)
    }

    /// Converts to spherical `(ρ, θ, φ)` coordinates.
    ///
    /// `ρ = √(x² + y² + z²)`, `θ = acos(z / ρ)`, `φ = atan2(y, x)`.
    /// θ is evaluated as `atan2(√(x² + y²), z)`, which stays accurate close
    /// to the polar axis. The origin maps to [`SphericalPoint::zero`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_spherical(&self) -> SphericalPoint {
        let rho = self.to_vector().norm();
        if rho == 0.0 {
            return SphericalPoint::zero();
        }

        let theta = self.x.hypot(self.y).atan2(self.z);
        let phi = self.y.atan2(self.x);
        SphericalPoint::new(rho, theta, phi)
    }

    /// Returns the octant holding this point.
    #[must_use]
    pub fn octant(&self) -> Octant {
        Octant::from_point(self)
    }

    fn from_vector(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Coordinates for CartesianPoint {
    fn to_cartesian(&self) -> CartesianPoint {
        *self
    }

    fn distance(&self, other: &Self) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        equals_with(self.x, other.x, epsilon)
            && equals_with(self.y, other.y, epsilon)
            && equals_with(self.z, other.z, epsilon)
    }

    /// No component is angular, so `unit` is ignored.
    fn format_with(&self, template: &str, _unit: AngleUnit) -> Result<String> {
        Ok(format_triplet(template, [self.x, self.y, self.z])?)
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xyz: [{:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}

impl FromStr for CartesianPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [x, y, z] = split_triplet(s, Self::PREFIX)?;
        Ok(Self::new(parse_number(x)?, parse_number(y)?, parse_number(z)?))
    }
}

impl AbsDiffEq for CartesianPoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.approx_eq(other, epsilon)
    }
}

impl Add<Vector3> for CartesianPoint {
    type Output = Self;

    fn add(self, offset: Vector3) -> Self {
        Self::from_vector(self.to_vector() + offset)
    }
}

impl Sub<Vector3> for CartesianPoint {
    type Output = Self;

    fn sub(self, offset: Vector3) -> Self {
        Self::from_vector(self.to_vector() - offset)
    }
}

impl Sub for CartesianPoint {
    type Output = Vector3;

    fn sub(self, other: Self) -> Vector3 {
        self.to_vector() - other.to_vector()
    }
}

impl From<Point3> for CartesianPoint {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<CartesianPoint> for Point3 {
    fn from(p: CartesianPoint) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}
