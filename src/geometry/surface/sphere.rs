use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A full spherical surface.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("sphere radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the range of `dot(P, direction)` over the whole sphere.
    #[must_use]
    pub fn range_along(&self, direction: &Vector3) -> (f64, f64) {
        let mid = self.center.coords.dot(direction);
        let half = self.radius * direction.norm();
        (mid - half, mid + half)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn range_along_axis_is_center_plus_minus_radius() {
        let sphere = Sphere::new(Point3::new(1.0, 0.0, 0.0), 2.0).unwrap();
        let (lo, hi) = sphere.range_along(&Vector3::x());
        assert_relative_eq!(lo, -1.0);
        assert_relative_eq!(hi, 3.0);
    }

    #[test]
    fn range_scales_with_direction_length() {
        let sphere = Sphere::new(Point3::origin(), 1.5).unwrap();
        let (lo, hi) = sphere.range_along(&Vector3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(hi - lo, 6.0);
    }
}
