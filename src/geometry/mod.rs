pub mod cartesian;
pub mod cylindrical;
pub(crate) mod parse;
pub mod spherical;

pub use cartesian::CartesianPoint;
pub use cylindrical::{calculate_section, section_bounds, CylindricalPoint, DEFAULT_SECTION_COUNT};
pub use spherical::SphericalPoint;

use crate::error::Result;
use crate::math::{AngleUnit, EPSILON};

/// Behaviour shared by the three coordinate representations.
///
/// All implementors hold their coordinates in canonical form, so two values
/// denoting the same physical point compare equal through [`approx_eq`].
///
/// [`approx_eq`]: Coordinates::approx_eq
pub trait Coordinates: Copy {
    /// Converts the point to Cartesian coordinates.
    fn to_cartesian(&self) -> CartesianPoint;

    /// Computes the Euclidean distance to another point of the same system.
    fn distance(&self, other: &Self) -> f64;

    /// Compares the canonical components of both points within `epsilon`.
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;

    /// Compares both points within the default [`EPSILON`].
    fn equals(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }

    /// Renders the coordinates through a printf-style template holding three
    /// placeholders. Angular components are expressed in `unit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed.
    fn format_with(&self, template: &str, unit: AngleUnit) -> Result<String>;
}
