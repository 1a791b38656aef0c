use std::f64::consts::{PI, TAU};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use approx::AbsDiffEq;

use crate::error::{ArgumentError, ParseError, Result};
use crate::math::format::format_triplet;
use crate::math::{
    angle_equals_with, equals_with, normalize_angle, parse_angle, AngleUnit, EPSILON,
};

use super::parse::{parse_number, split_triplet};
use super::{CartesianPoint, Coordinates, SphericalPoint};

/// Number of sections used when the caller has no preference.
pub const DEFAULT_SECTION_COUNT: NonZeroU32 = match NonZeroU32::new(6) {
    Some(count) => count,
    None => panic!("section count must be non-zero"),
};

/// A point expressed in cylindrical `(ρ, φ, z)` coordinates, also known as
/// polar+z.
///
/// Useful for shapes like a tower, where polar coordinates describe the
/// horizontal position but the height is not measured from a center.
///
/// The point is always stored in canonical form: `ρ ≥ 0` and `φ ∈ [0, 2π)`.
/// The textual forms are `rpz: [ρ, φ, z]` and `(ρ, φ, z)`, where `φ` is read
/// as radians, or as degrees when it carries a `°` sign.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CylindricalPoint {
    rho: f64,
    phi: f64,
    z: f64,
}

impl CylindricalPoint {
    /// Prefix of the bracketed textual form.
    pub const PREFIX: &'static str = "rpz:";

    /// Template used by the [`Display`](fmt::Display) implementation, with
    /// the azimuth in degrees.
    pub const DEFAULT_TEMPLATE: &'static str = "rpz: [%.2f, %.2f°, %.2f]";

    /// Creates a new point and brings it to canonical form.
    ///
    /// # Arguments
    ///
    /// * `rho` - Radial distance from the axis; a negative value points the
    ///   other way, `(−ρ, φ, z)` being the same point as `(ρ, φ + π, z)`
    /// * `phi` - Azimuth in radians
    /// * `z` - Height
    #[must_use]
    pub fn new(rho: f64, phi: f64, z: f64) -> Self {
        let (rho, phi) = canonical(rho, phi);
        Self { rho, phi, z }
    }

    /// Returns the point on the axis at height zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the radial distance, always non-negative.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the azimuth in radians, in `[0, 2π)`.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Returns the height.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Converts to spherical `(ρ, θ, φ)` coordinates. The azimuth is kept.
    #[must_use]
    pub fn to_spherical(&self) -> SphericalPoint {
        let rho = self.rho.hypot(self.z);
        let theta = self.rho.atan2(self.z);
        SphericalPoint::new(rho, theta, self.phi)
    }

    /// Returns the section the azimuth belongs to when the circle is cut
    /// into `count` equal parts. See [`calculate_section`].
    #[must_use]
    pub fn section(&self, count: NonZeroU32) -> u32 {
        calculate_section(self.phi, count)
    }
}

/// `(−ρ, φ)` denotes the same point as `(ρ, φ + π)`.
fn canonical(rho: f64, phi: f64) -> (f64, f64) {
    if rho < 0.0 {
        (-rho, normalize_angle(phi + PI))
    } else {
        (rho, normalize_angle(phi))
    }
}

/// Calculates the section an angle belongs to.
///
/// The circle is cut into `count` equal sections, like a pie, numbered from
/// 1 starting at angle 0 in the direction of increasing angle:
///
/// ```text
///        o  o              o  o
///     o 6    1 o        o 4 | 1  o
///    o          o      o ___|___  o
///    o          o      o  3 | 2   o
///     o 4    3 o        o   |    o
///        o  o              o  o
///
///       n = 6             n = 4
/// ```
///
/// A section includes its starting boundary and excludes its ending one,
/// so with 4 sections `π/2` belongs to section 2, and an angle just below
/// 0 wraps into the last section. A non-finite angle falls in section 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_section(angle: f64, count: NonZeroU32) -> u32 {
    let count = f64::from(count.get());
    let index = (normalize_angle(angle) / (TAU / count)).floor();

    // Rounding can land an angle just below 2π on `count` itself.
    let index = if index.is_finite() {
        index.clamp(0.0, count - 1.0)
    } else {
        0.0
    };

    index as u32 + 1
}

/// Returns the `[start, end)` angular range, in radians, covered by a
/// section when the circle is cut into `count` parts.
///
/// # Errors
///
/// Returns [`ArgumentError::Section`] if `section` is not in `1..=count`.
pub fn section_bounds(section: u32, count: NonZeroU32) -> Result<(f64, f64)> {
    if section == 0 || section > count.get() {
        return Err(ArgumentError::Section {
            section,
            count: count.get(),
        }
        .into());
    }

    let width = TAU / f64::from(count.get());
    Ok((
        f64::from(section - 1) * width,
        f64::from(section) * width,
    ))
}

impl Coordinates for CylindricalPoint {
    /// `x = ρ cos φ`, `y = ρ sin φ`, `z = z`.
    fn to_cartesian(&self) -> CartesianPoint {
        let (sin, cos) = self.phi.sin_cos();
        CartesianPoint::new(self.rho * cos, self.rho * sin, self.z)
    }

    /// Law of cosines on the horizontal plane, plus the height difference.
    fn distance(&self, other: &Self) -> f64 {
        let delta_phi = self.phi - other.phi;
        let delta_z = self.z - other.z;
        let squared = self.rho * self.rho + other.rho * other.rho
            - 2.0 * self.rho * other.rho * delta_phi.cos()
            + delta_z * delta_z;

        // Identical points may leave a tiny negative residue.
        squared.max(0.0).sqrt()
    }

    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        equals_with(self.rho, other.rho, epsilon)
            && angle_equals_with(self.phi, other.phi, epsilon)
            && equals_with(self.z, other.z, epsilon)
    }

    fn format_with(&self, template: &str, unit: AngleUnit) -> Result<String> {
        Ok(format_triplet(
            template,
            [self.rho, unit.from_radians(self.phi), self.z],
        )?)
    }
}

impl fmt::Display for CylindricalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rpz: [{:.2}, {:.2}°, {:.2}]",
            self.rho,
            self.phi.to_degrees(),
            self.z
        )
    }
}

impl FromStr for CylindricalPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [rho, phi, z] = split_triplet(s, Self::PREFIX)?;
        Ok(Self::new(
            parse_number(rho)?,
            parse_angle(phi)?,
            parse_number(z)?,
        ))
    }
}

impl AbsDiffEq for CylindricalPoint {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.approx_eq(other, epsilon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

    fn sections(count: u32) -> NonZeroU32 {
        NonZeroU32::new(count).unwrap()
    }

    #[test]
    fn zero() {
        assert!(CylindricalPoint::zero().equals(&CylindricalPoint::new(0.0, 0.0, 0.0)));
    }

    #[rstest]
    #[case("(1, 2, 3)", CylindricalPoint::new(1.0, 2.0, 3.0))]
    #[case("(1, -2, 3)", CylindricalPoint::new(1.0, -2.0, 3.0))]
    #[case("(1, 90°, 3)", CylindricalPoint::new(1.0, FRAC_PI_2, 3.0))]
    #[case("(1, -90°, 3)", CylindricalPoint::new(1.0, -FRAC_PI_2, 3.0))]
    #[case("(1, 90 °, 3)", CylindricalPoint::new(1.0, FRAC_PI_2, 3.0))]
    #[case("rpz: [1.70, 5, 0]", CylindricalPoint::new(1.7, 5.0, 0.0))]
    fn parse_valid(#[case] expression: &str, #[case] expected: CylindricalPoint) {
        let actual: CylindricalPoint = expression.parse().unwrap();
        assert_abs_diff_eq!(actual, expected);
    }

    #[rstest]
    #[case("I'm at the center of the cylinder.")]
    #[case("rpz: [1, 2]")]
    #[case("(1, north, 3)")]
    #[case("rpz: [1, 2, 3")]
    fn parse_invalid(#[case] expression: &str) {
        assert!(expression.parse::<CylindricalPoint>().is_err());
    }

    #[test]
    fn parse_invalid_angle_reports_angle() {
        let err = "(1, north, 3)".parse::<CylindricalPoint>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidAngle(_)));
    }

    #[test]
    fn format_in_radians() {
        let point = CylindricalPoint::new(1.7, FRAC_PI_2, 0.0);
        assert_eq!(
            point
                .format_with("(%01.2f, %01.2f, %01.2f)", AngleUnit::Radians)
                .unwrap(),
            "(1.70, 1.57, 0.00)"
        );
    }

    #[test]
    fn display_in_degrees() {
        let point = CylindricalPoint::new(1.7, FRAC_PI_2, 0.0);
        assert_eq!(point.to_string(), "rpz: [1.70, 90.00°, 0.00]");
        assert_eq!(
            point
                .format_with(CylindricalPoint::DEFAULT_TEMPLATE, AngleUnit::Degrees)
                .unwrap(),
            point.to_string()
        );
    }

    #[test]
    fn normalize_negative_rho() {
        let expected = CylindricalPoint::new(4.0, 270_f64.to_radians(), 5.0);
        let actual = CylindricalPoint::new(-4.0, FRAC_PI_2, 5.0);
        assert!(actual.equals(&expected));
        assert!(actual.rho() > 0.0);
    }

    #[test]
    fn normalize_wraps_phi() {
        let point = CylindricalPoint::new(1.0, -FRAC_PI_2, 0.0);
        assert!((point.phi() - 3.0 * FRAC_PI_2).abs() < EPSILON);

        let point = CylindricalPoint::new(1.0, 5.0 * TAU + 1.0, 0.0);
        assert!((point.phi() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn normalize_is_idempotent() {
        let point = CylindricalPoint::new(-3.0, -7.5, 2.0);
        let again = CylindricalPoint::new(point.rho(), point.phi(), point.z());
        assert_eq!(point, again);
    }

    #[test]
    fn equality_across_wrap_point() {
        let a = CylindricalPoint::new(1.0, -EPSILON / 4.0, 0.0);
        let b = CylindricalPoint::new(1.0, 0.0, 0.0);
        assert!(a.equals(&b));
    }

    #[test]
    fn distance_between_identical_points_is_zero() {
        let point = CylindricalPoint::new(1.0, FRAC_PI_4, 3.0);
        let copy = point;
        assert!(point.distance(&copy).abs() < EPSILON);
    }

    #[test]
    fn distance_matches_cartesian() {
        let a = CylindricalPoint::new(2.0, FRAC_PI_6, -1.0);
        let b = CylindricalPoint::new(5.0, 2.0, 4.0);
        let expected = a.to_cartesian().distance(&b.to_cartesian());
        assert!((a.distance(&b) - expected).abs() < 1e-9);
        assert!((b.distance(&a) - expected).abs() < 1e-9);
    }

    #[test]
    fn to_cartesian() {
        let expected = CartesianPoint::new(5.0 * 3_f64.sqrt() / 2.0, 5.0 / 2.0, 4.0);
        let point = CylindricalPoint::new(5.0, FRAC_PI_6, 4.0);
        assert!(expected.equals(&point.to_cartesian()));
    }

    #[test]
    fn to_spherical_keeps_phi() {
        let point = CylindricalPoint::new(1.0, FRAC_PI_2, 3.0);
        assert!((point.phi() - point.to_spherical().phi()).abs() < f64::EPSILON);
    }

    #[test]
    fn to_spherical() {
        let point = CylindricalPoint::new(3.0, FRAC_PI_4, 4.0).to_spherical();
        assert!((point.rho() - 5.0).abs() < EPSILON);
        assert!((point.theta() - 3_f64.atan2(4.0)).abs() < EPSILON);
        assert!((point.phi() - FRAC_PI_4).abs() < EPSILON);
    }

    #[rstest]
    // 0 and ε are always in the first section
    #[case(0.0, 4, 1)]
    #[case(0.0, 6, 1)]
    #[case(EPSILON, 4, 1)]
    #[case(EPSILON, 6, 1)]
    #[case(FRAC_PI_2, 6, 2)]
    #[case(30_f64.to_radians(), 4, 1)]
    #[case(100_f64.to_radians(), 4, 2)]
    #[case(250_f64.to_radians(), 4, 3)]
    #[case(320_f64.to_radians(), 4, 4)]
    // boundaries belong to the section they start
    #[case(PI, 4, 3)]
    #[case(FRAC_PI_2, 4, 2)]
    #[case(PI, 6, 4)]
    #[case(PI - EPSILON, 4, 2)]
    #[case(FRAC_PI_2 - EPSILON, 4, 1)]
    #[case(PI - EPSILON, 6, 3)]
    #[case(PI + EPSILON, 4, 3)]
    #[case(FRAC_PI_2 + EPSILON, 4, 2)]
    #[case(PI + EPSILON, 6, 4)]
    // 2π - ε is always in the last section
    #[case(-EPSILON, 4, 4)]
    #[case(-EPSILON, 6, 6)]
    fn calculate_sections(#[case] angle: f64, #[case] count: u32, #[case] expected: u32) {
        assert_eq!(calculate_section(angle, sections(count)), expected);
    }

    #[rstest]
    #[case(0.0, 4, 1)]
    #[case(FRAC_PI_2, 4, 2)]
    #[case(PI, 6, 4)]
    #[case(-EPSILON, 6, 6)]
    fn point_section(#[case] phi: f64, #[case] count: u32, #[case] expected: u32) {
        let point = CylindricalPoint::new(1.0, phi, 5.0);
        assert_eq!(point.section(sections(count)), expected);
    }

    #[test]
    fn single_section_holds_everything() {
        assert_eq!(calculate_section(0.0, sections(1)), 1);
        assert_eq!(calculate_section(TAU - EPSILON, sections(1)), 1);
    }

    #[test]
    fn default_section_count_is_six() {
        assert_eq!(DEFAULT_SECTION_COUNT.get(), 6);
        let point = CylindricalPoint::new(1.0, PI, 0.0);
        assert_eq!(point.section(DEFAULT_SECTION_COUNT), 4);
    }

    #[test]
    fn nan_angle_falls_in_first_section() {
        assert_eq!(calculate_section(f64::NAN, sections(4)), 1);
    }

    #[test]
    fn section_bounds_cover_circle() {
        let (start, end) = section_bounds(2, sections(4)).unwrap();
        assert!((start - FRAC_PI_2).abs() < EPSILON);
        assert!((end - PI).abs() < EPSILON);

        let (_, end) = section_bounds(4, sections(4)).unwrap();
        assert!((end - TAU).abs() < EPSILON);
    }

    #[test]
    fn section_bounds_out_of_range() {
        assert!(matches!(
            section_bounds(0, sections(4)),
            Err(GeoError::InvalidArgument(ArgumentError::Section { .. }))
        ));
        assert!(matches!(
            section_bounds(5, sections(4)),
            Err(GeoError::InvalidArgument(ArgumentError::Section {
                section: 5,
                count: 4
            }))
        ));
    }
}
