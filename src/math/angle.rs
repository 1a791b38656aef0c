use std::f64::consts::{PI, TAU};

use crate::error::ParseError;

use super::EPSILON;

/// Marker that switches [`parse_angle`] to degrees.
pub const DEGREE_SIGN: char = '°';

/// Unit used when rendering angular components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Expresses an angle given in radians in this unit.
    #[must_use]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians.to_degrees(),
        }
    }

    /// Converts an angle expressed in this unit to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => value.to_radians(),
        }
    }
}

/// Returns `true` when `left` and `right` differ by less than [`EPSILON`].
#[must_use]
pub fn equals(left: f64, right: f64) -> bool {
    equals_with(left, right, EPSILON)
}

/// Returns `true` when `left` and `right` differ by less than `epsilon`.
#[must_use]
pub fn equals_with(left: f64, right: f64, epsilon: f64) -> bool {
    (left - right).abs() < epsilon
}

/// Normalizes an angle in radians into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    normalize_angle_from(angle, 0.0)
}

/// Normalizes an angle in radians into `[from, from + 2π)`.
///
/// Runs in constant time whatever the magnitude of `angle`.
/// Non-finite input is returned unchanged.
#[must_use]
pub fn normalize_angle_from(angle: f64, from: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }

    let wrapped = from + (angle - from).rem_euclid(TAU);

    // rem_euclid may round up to exactly 2π for tiny negative offsets.
    if wrapped >= from + TAU {
        from
    } else {
        wrapped
    }
}

/// Returns `true` when both angles denote the same direction, within [`EPSILON`].
#[must_use]
pub fn angle_equals(left: f64, right: f64) -> bool {
    angle_equals_with(left, right, EPSILON)
}

/// Returns `true` when both angles denote the same direction, within `epsilon`.
///
/// The comparison is made on the shortest signed difference, so `2π - ε/2`
/// and `0` compare equal.
#[must_use]
pub fn angle_equals_with(left: f64, right: f64, epsilon: f64) -> bool {
    normalize_angle_from(left - right, -PI).abs() < epsilon
}

/// Parses an angle expression and returns its value in radians.
///
/// A bare number is read as radians, a number carrying the `°` sign as
/// degrees. Whitespace anywhere in the expression is ignored, so `"90 °"`
/// and `" 1.5 "` are both accepted.
///
/// # Errors
///
/// Returns [`ParseError::InvalidAngle`] if what remains is not a finite
/// decimal number.
pub fn parse_angle(expression: &str) -> Result<f64, ParseError> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let (number, unit) = if compact.contains(DEGREE_SIGN) {
        (compact.replace(DEGREE_SIGN, ""), AngleUnit::Degrees)
    } else {
        (compact, AngleUnit::Radians)
    };

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(unit.to_radians(value)),
        _ => {
            tracing::debug!(expression, "rejected angle expression");
            Err(ParseError::InvalidAngle(expression.to_owned()))
        }
    }
}
