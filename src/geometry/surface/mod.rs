//! Surfaces carried by faces. Only what measuring and rotating a body
//! needs is modelled: position, orientation and size.

mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;
