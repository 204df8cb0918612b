use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{perpendicular, Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The parametric form sweeps from `start_angle`
/// to `end_angle` (in radians) around the normal axis.
#[derive(Debug, Clone)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the normal is zero-length,
    /// the reference direction is not perpendicular to the normal, or the
    /// angles are non-finite or sweep more than a full turn.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }

        if !start_angle.is_finite()
            || !end_angle.is_finite()
            || Self::sweep(start_angle, end_angle) > TAU + TOLERANCE
        {
            return Err(GeometryError::ParameterOutOfRange(format!(
                "arc sweep from {start_angle} to {end_angle}"
            ))
            .into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > 1e-9 {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
        })
    }

    /// Creates a full circle around `normal`, starting at an arbitrary but
    /// deterministic reference direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the normal is zero-length.
    pub fn full_circle(center: Point3, radius: f64, normal: Vector3) -> Result<Self> {
        let ref_dir = perpendicular(&normal).ok_or(GeometryError::ZeroVector)?;
        Self::new(center, radius, normal, ref_dir, 0.0, TAU)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the reference direction (angle = 0).
    #[must_use]
    pub fn ref_dir(&self) -> &Vector3 {
        &self.ref_dir
    }

    /// Returns the angle swept between `t_start` and `t_end`.
    #[must_use]
    pub fn sweep(t_start: f64, t_end: f64) -> f64 {
        (t_end - t_start).abs()
    }

    /// Returns whether the arc spans a full turn.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        (Self::sweep(self.start_angle, self.end_angle) - TAU).abs() < TOLERANCE
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let binormal = self.binormal();
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        Ok(self.center + self.ref_dir * x + binormal * y)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    // dot(P(t), d) = dot(c, d) + r * (a cos t + b sin t), extremal where
    // t = atan2(b, a) (+ pi for the minimum).
    fn range_along(&self, direction: &Vector3, t_start: f64, t_end: f64) -> (f64, f64) {
        let (lo, hi) = if t_start <= t_end {
            (t_start, t_end)
        } else {
            (t_end, t_start)
        };
        let base = self.center.coords.dot(direction);
        let a = self.ref_dir.dot(direction);
        let b = self.binormal().dot(direction);
        let value = |t: f64| base + self.radius * (a * t.cos() + b * t.sin());

        let mut min = value(lo).min(value(hi));
        let mut max = value(lo).max(value(hi));

        if a.hypot(b) > TOLERANCE {
            let phase = b.atan2(a);
            for critical in [phase, phase + PI] {
                let mut t = critical + ((lo - critical) / TAU).ceil() * TAU;
                while t <= hi {
                    let v = value(t);
                    min = min.min(v);
                    max = max.max(v);
                    t += TAU;
                }
            }
        }
        (min, max)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use approx::assert_relative_eq;

    fn unit_arc(start: f64, end: f64) -> Arc {
        Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), start, end).unwrap()
    }

    #[test]
    fn quarter_arc_range_hits_no_interior_extreme() {
        let arc = unit_arc(0.0, FRAC_PI_2);
        let (lo, hi) = arc.range_along(&Vector3::x(), 0.0, FRAC_PI_2);
        assert_relative_eq!(lo, 0.0, epsilon = 1e-12);
        assert_relative_eq!(hi, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn half_arc_range_includes_apex() {
        let arc = unit_arc(0.0, PI);
        let (lo, hi) = arc.range_along(&Vector3::y(), 0.0, PI);
        assert_relative_eq!(lo, 0.0, epsilon = 1e-12);
        assert_relative_eq!(hi, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn full_circle_range_is_diameter() {
        let arc = Arc::full_circle(Point3::new(1.0, 2.0, 3.0), 2.0, Vector3::new(1.0, 1.0, 0.0)).unwrap();
        assert!(arc.is_full_circle());
        let (lo, hi) = arc.range_along(&Vector3::z(), 0.0, TAU);
        assert_relative_eq!(lo, 1.0, epsilon = 1e-9);
        assert_relative_eq!(hi, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn sweep_beyond_full_turn_rejected() {
        let arc = Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), 0.0, TAU + 0.1);
        assert!(matches!(
            arc,
            Err(crate::error::CutlistError::Geometry(GeometryError::ParameterOutOfRange(_)))
        ));
        assert!(Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), -PI, PI).is_ok());
    }

    #[test]
    fn non_perpendicular_reference_rejected() {
        let arc = Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::new(1.0, 0.0, 1.0), 0.0, PI);
        assert!(arc.is_err());
    }
}
