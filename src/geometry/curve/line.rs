use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// An infinite line parameterized by arc length.
///
/// `P(t) = origin + t * direction` with a unit `direction`, so the
/// length of the segment `[t0, t1]` is `|t1 - t0|`.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Creates the line through `start` and `end`, returning it with the
    /// parameter of `end` (`start` sits at `t = 0`).
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn through(start: Point3, end: Point3) -> Result<(Self, f64)> {
        let chord = end - start;
        let t_end = chord.norm();
        Ok((Self::new(start, chord)?, t_end))
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.origin + self.direction * t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn range_along(&self, direction: &Vector3, t_start: f64, t_end: f64) -> (f64, f64) {
        let a = (self.origin + self.direction * t_start).coords.dot(direction);
        let b = (self.origin + self.direction * t_end).coords.dot(direction);
        (a.min(b), a.max(b))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn through_is_arc_length_parameterized() {
        let (line, t_end) = Line::through(Point3::new(1.0, 1.0, 0.0), Point3::new(4.0, 5.0, 0.0)).unwrap();
        assert_relative_eq!(t_end, 5.0, epsilon = 1e-12);
        let end = line.evaluate(t_end).unwrap();
        assert_relative_eq!(end, Point3::new(4.0, 5.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_rejected() {
        let p = Point3::new(2.0, 2.0, 2.0);
        assert!(Line::through(p, p).is_err());
    }

    #[test]
    fn range_along_orders_endpoints() {
        let (line, t_end) = Line::through(Point3::new(3.0, 0.0, 0.0), Point3::new(-1.0, 0.0, 0.0)).unwrap();
        let (lo, hi) = line.range_along(&Vector3::x(), 0.0, t_end);
        assert_relative_eq!(lo, -1.0, epsilon = 1e-12);
        assert_relative_eq!(hi, 3.0, epsilon = 1e-12);
    }
}
