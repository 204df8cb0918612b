use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite cylindrical surface around an axis line.
#[derive(Debug, Clone)]
pub struct Cylinder {
    center: Point3,
    radius: f64,
    axis: Vector3,
}

impl Cylinder {
    /// Creates a cylinder of `radius` around the line through `center`
    /// along `axis`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the axis is zero-length.
    pub fn new(center: Point3, radius: f64, axis: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder radius must be positive".into()).into(),
            );
        }
        let len = axis.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            center,
            radius,
            axis: axis / len,
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit axis direction.
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_is_normalized() {
        let cylinder = Cylinder::new(Point3::origin(), 1.0, Vector3::new(0.0, 0.0, 7.0));
        assert!(cylinder.is_ok_and(|c| (c.axis().norm() - 1.0).abs() < 1e-12));
        assert!(Cylinder::new(Point3::origin(), 0.0, Vector3::z()).is_err());
    }
}
