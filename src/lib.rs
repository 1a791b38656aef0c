//! Points in Cartesian, cylindrical and spherical coordinates.
//!
//! Each representation keeps its coordinates in a canonical form, so that
//! equality, distance and conversions between systems behave consistently.
//! The crate also classifies points into octants and angular sections.
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//! use geocoords::{Coordinates, CylindricalPoint};
//!
//! let point = CylindricalPoint::new(-4.0, FRAC_PI_2, 5.0);
//! assert!(point.equals(&"rpz: [4, 270°, 5]".parse().unwrap()));
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod partition;

pub use error::{ArgumentError, GeoError, ParseError, Result};
pub use geometry::{CartesianPoint, Coordinates, CylindricalPoint, SphericalPoint};
pub use math::{AngleUnit, EPSILON};
pub use partition::Octant;
