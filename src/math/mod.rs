pub mod angle;
pub mod format;

pub use angle::{
    angle_equals, angle_equals_with, equals, equals_with, normalize_angle, normalize_angle_from,
    parse_angle, AngleUnit,
};

/// 3D point type used for interop with linear algebra code.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type used for offsets.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Default tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-6;
