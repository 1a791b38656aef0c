pub mod octant;

pub use octant::{base_vector, Octant};
