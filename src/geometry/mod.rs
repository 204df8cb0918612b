pub mod curve;
pub mod surface;

pub use curve::{Arc, Curve, CurveDomain, Line};
pub use surface::{Cylinder, Plane, Sphere};
