use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use approx::AbsDiffEq;

use crate::error::{ParseError, Result};
use crate::math::format::format_triplet;
use crate::math::{
    angle_equals_with, equals_with, normalize_angle, parse_angle, AngleUnit, EPSILON,
};

use super::parse::{parse_number, split_triplet};
use super::{CartesianPoint, Coordinates, CylindricalPoint};

/// A point expressed in spherical `(ρ, θ, φ)` coordinates.
///
/// * `ρ` - radial distance, the distance to the origin
/// * `θ` - polar angle (inclination) from the positive z axis, in radians
/// * `φ` - azimuth, the rotation from the initial meridian plane, in radians
///
/// The point is always stored in canonical form:
///
/// * `ρ ≥ 0` and `θ ∈ [0, π]`
/// * at the origin, `θ = φ = 0`
/// * on the polar axis (`ρ sin θ` below [`EPSILON`]), `φ = 0`
/// * otherwise `φ ∈ [0, 2π)`
///
/// The textual forms are `rtp: [ρ, θ, φ]` and `(ρ, θ, φ)`, where both angles
/// are read as radians, or as degrees when they carry a `°` sign.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphericalPoint {
    rho: f64,
    theta: f64,
    phi: f64,
}

impl SphericalPoint {
    /// Prefix of the bracketed textual form.
    pub const PREFIX: &'static str = "rtp:";

    /// Template used by the [`Display`](fmt::Display) implementation, with
    /// both angles in degrees.
    pub const DEFAULT_TEMPLATE: &'static str = "(%.2f, %.2f°, %.2f°)";

    /// Creates a new point and brings it to canonical form.
    #[must_use]
    pub fn new(rho: f64, theta: f64, phi: f64) -> Self {
        let (rho, theta, phi) = canonical(rho, theta, phi);
        Self { rho, theta, phi }
    }

    /// Returns the origin.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the radial distance, always non-negative.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the polar angle in radians, in `[0, π]`.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the azimuth in radians, in `[0, 2π)`.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Returns `true` if the point lies on the polar axis, where the azimuth
    /// carries no information. The origin is on the axis.
    #[must_use]
    pub fn is_on_axis(&self) -> bool {
        on_axis(self.rho, self.theta)
    }

    /// Converts to cylindrical `(r, φ, z)` coordinates.
    ///
    /// `r = ρ sin θ`, `φ = φ`, `z = ρ cos θ`.
    #[must_use]
    pub fn to_cylindrical(&self) -> CylindricalPoint {
        let (sin, cos) = self.theta.sin_cos();
        CylindricalPoint::new(self.rho * sin, self.phi, self.rho * cos)
    }
}

/// Brings `(ρ, θ, φ)` to canonical form.
///
/// 1. At the origin both angles are meaningless and set to 0.
/// 2. `(−ρ, θ, φ)` is `(ρ, −θ, φ − π)`.
/// 3. `(ρ, −θ, φ)` is `(ρ, θ, φ + π)`.
/// 4. θ is reduced to `[0, 2π)`, then `(ρ, θ, φ)` with `θ > π` is folded to
///    `(ρ, 2π − θ, φ + π)`.
/// 5. On the polar axis the azimuth is meaningless and set to 0. θ keeps its
///    value so the point itself is not moved.
/// 6. Otherwise φ is reduced to `[0, 2π)`.
#[allow(clippy::float_cmp)]
fn canonical(rho: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    if rho == 0.0 {
        tracing::trace!(theta, phi, "spherical point at origin, angles dropped");
        return (0.0, 0.0, 0.0);
    }

    let (rho, theta, phi) = if rho < 0.0 {
        (-rho, -theta, phi - PI)
    } else {
        (rho, theta, phi)
    };

    let (theta, phi) = if theta < 0.0 {
        (-theta, phi + PI)
    } else {
        (theta, phi)
    };

    let theta = normalize_angle(theta);
    let (theta, phi) = if theta > PI {
        (TAU - theta, phi + PI)
    } else {
        (theta, phi)
    };

    if on_axis(rho, theta) {
        tracing::trace!(rho, theta, phi, "spherical point on polar axis, azimuth dropped");
        return (rho, theta, 0.0);
    }

    (rho, theta, normalize_angle(phi))
}

/// A point is on the polar axis when its distance to the z axis, `ρ sin θ`,
/// is below [`EPSILON`].
fn on_axis(rho: f64, theta: f64) -> bool {
    (rho * theta.sin()).abs() < EPSILON
}

impl Coordinates for SphericalPoint {
    /// `x = ρ sin θ cos φ`, `y = ρ sin θ sin φ`, `z = ρ cos θ`.
    fn to_cartesian(&self) -> CartesianPoint {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        CartesianPoint::new(
            self.rho * sin_theta * cos_phi,
            self.rho * sin_theta * sin_phi,
            self.rho * cos_theta,
        )
    }

    /// Spherical law of cosines.
    ///
    /// The trigonometry compounds rounding errors: the distance between two
    /// identical points is only zero within about `1e-5`.
    fn distance(&self, other: &Self) -> f64 {
        let delta_phi = self.phi - other.phi;
        let angular = self.theta.sin() * other.theta.sin() * delta_phi.cos()
            + self.theta.cos() * other.theta.cos();

        let squared =
            self.rho * self.rho + other.rho * other.rho - 2.0 * self.rho * other.rho * angular;
        squared.max(0.0).sqrt()
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        equals_with(self.rho, other.rho, epsilon)
            && equals_with(self.theta, other.theta, epsilon)
            && angle_equals_with(self.phi, other.phi, epsilon)
    }

    fn format_with(&self, template: &str, unit: AngleUnit) -> Result<String> {
        Ok(format_triplet(
            template,
            [
                self.rho,
                unit.from_radians(self.theta),
                unit.from_radians(self.phi),
            ],
        )?)
    }
}

impl fmt::Display for SphericalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}°, {:.2}°)",
            self.rho,
            self.theta.to_degrees(),
            self.phi.to_degrees()
        )
    }
}

impl FromStr for SphericalPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [rho, theta, phi] = split_triplet(s, Self::PREFIX)?;
        Ok(Self::new(
            parse_number(rho)?,
            parse_angle(theta)?,
            parse_angle(phi)?,
        ))
    }
}

impl AbsDiffEq for SphericalPoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.approx_eq(other, epsilon)
    }
}
