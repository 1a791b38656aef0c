use std::fmt;

use crate::error::{ArgumentError, Result};
use crate::geometry::CartesianPoint;

/// Sign of each axis for octants 0 to 8.
const BASE_VECTORS: [[i8; 3]; 9] = [
    [0, 0, 0],
    [-1, 1, -1],
    [1, 1, -1],
    [-1, -1, -1],
    [1, -1, -1],
    [-1, 1, 1],
    [1, 1, 1],
    [-1, -1, 1],
    [1, -1, 1],
];

/// One of the eight parts of a cube sliced in two along x, y and z, or the
/// cube center itself.
///
/// Octants are numbered 1 to 8; 0 is reserved for the exact origin:
///
/// ```text
///              _____ _____
///            /  5  /  6  /|
///           /- - -/- - -/ |
///          /_____/____ /| |
///         |     |     | |/|
///         |  7  |  8  | / | 2
///         |_____|_____|/| |
///         |     |     | |/
///         |  3  |  4  | /
///         |_____|_____|/
/// ```
///
/// A coordinate equal to zero counts as positive, except for the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octant(u8);

impl Octant {
    /// The cube center.
    pub const ORIGIN: Self = Self(0);

    /// The eight octants around the origin.
    pub const ALL: [Self; 8] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// Returns the octant with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Octant`] if `id` is not in `0..=8`.
    pub fn new(id: i64) -> Result<Self> {
        match u8::try_from(id) {
            Ok(id) if usize::from(id) < BASE_VECTORS.len() => Ok(Self(id)),
            _ => Err(ArgumentError::Octant(id).into()),
        }
    }

    /// Classifies the `(x, y, z)` coordinates.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn classify(x: f64, y: f64, z: f64) -> Self {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Self::ORIGIN;
        }

        let mut id = 1;
        if x >= 0.0 {
            id += 1;
        }
        if y < 0.0 {
            id += 2;
        }
        if z >= 0.0 {
            id += 4;
        }
        Self(id)
    }

    /// Classifies a Cartesian point.
    #[must_use]
    pub fn from_point(point: &CartesianPoint) -> Self {
        Self::classify(point.x, point.y, point.z)
    }

    /// Parses a Cartesian point expression, then classifies it.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is not a valid Cartesian point.
    pub fn from_expression(expression: &str) -> Result<Self> {
        let point: CartesianPoint = expression.parse()?;
        Ok(Self::from_point(&point))
    }

    /// Returns the octant id, 0 to 8.
    #[must_use]
    pub fn id(self) -> u8 {
        self.0
    }

    /// Returns `true` for the cube center.
    #[must_use]
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// Returns the direction of the octant from the origin as a sign per
    /// axis, e.g. `[1, -1, -1]` for octant 4. The origin yields `[0, 0, 0]`.
    #[must_use]
    pub fn base_vector(self) -> [i8; 3] {
        BASE_VECTORS[usize::from(self.0)]
    }
}

/// Looks up the base vector of an octant id.
///
/// # Errors
///
/// Returns [`ArgumentError::Octant`] if `id` is not in `0..=8`.
pub fn base_vector(id: i64) -> Result<[i8; 3]> {
    Octant::new(id).map(Octant::base_vector)
}

impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0.0, 0.0, 0.0)]
    #[case(1, -42.0, 42.0, -42.0)]
    #[case(2, 42.0, 42.0, -42.0)]
    #[case(3, -42.0, -42.0, -42.0)]
    #[case(4, 42.0, -42.0, -42.0)]
    #[case(5, -42.0, 42.0, 42.0)]
    #[case(6, 42.0, 42.0, 42.0)]
    #[case(7, -42.0, -42.0, 42.0)]
    #[case(8, 42.0, -42.0, 42.0)]
    fn classify(#[case] expected: u8, #[case] x: f64, #[case] y: f64, #[case] z: f64) {
        assert_eq!(Octant::classify(x, y, z).id(), expected);
    }

    #[test]
    fn zero_coordinates_count_as_positive() {
        assert_eq!(Octant::classify(0.0, 0.0, 1.0).id(), 6);
        assert_eq!(Octant::classify(-1.0, 0.0, 0.0).id(), 5);
    }

    #[test]
    fn base_vector_of_octant_six() {
        assert_eq!(base_vector(6).unwrap(), [1, 1, 1]);
        assert_eq!(Octant::ORIGIN.base_vector(), [0, 0, 0]);
    }

    #[test]
    fn base_vector_of_unknown_octant() {
        assert!(matches!(
            base_vector(666),
            Err(GeoError::InvalidArgument(ArgumentError::Octant(666)))
        ));
        assert!(matches!(
            base_vector(-1),
            Err(GeoError::InvalidArgument(ArgumentError::Octant(-1)))
        ));
        assert!(Octant::new(9).is_err());
    }

    #[test]
    fn base_vector_points_into_its_octant() {
        for octant in Octant::ALL {
            let [x, y, z] = octant.base_vector();
            assert_eq!(
                Octant::classify(f64::from(x), f64::from(y), f64::from(z)),
                octant
            );
        }
    }

    #[test]
    fn from_point() {
        let point = CartesianPoint::new(8.0, 8.0, 8.0);
        assert_eq!(Octant::from_point(&point).id(), 6);
    }

    #[test]
    fn from_expression() {
        assert_eq!(Octant::from_expression("(8, 8, 8)").unwrap().id(), 6);
        assert_eq!(Octant::from_expression("xyz: [0, 0, 0]").unwrap(), Octant::ORIGIN);
        assert!(matches!(
            Octant::from_expression("the center of the cube"),
            Err(GeoError::Parse(_))
        ));
    }

    #[test]
    fn display_is_id() {
        assert_eq!(Octant::new(4).unwrap().to_string(), "4");
        assert!(Octant::ORIGIN.is_origin());
    }
}
