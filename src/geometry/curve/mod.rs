mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// A parametric curve that can be evaluated and measured along a direction.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns the smallest and largest value of `dot(P(t), direction)`
    /// for `t` in `[t_start, t_end]` (in either order).
    ///
    /// `direction` need not be unit length.
    fn range_along(&self, direction: &Vector3, t_start: f64, t_end: f64) -> (f64, f64);
}
