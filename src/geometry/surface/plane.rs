use crate::error::{GeometryError, Result};
use crate::math::{perpendicular, Point3, Vector2, Vector3, TOLERANCE};

/// An infinite plane with a local `(u, v)` frame.
///
/// `u_dir` is derived from the normal, so two planes with the same normal
/// share the same frame.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane through `origin` with the given normal.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        let u_dir = perpendicular(&normal).ok_or(GeometryError::ZeroVector)?;
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Unit normal.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Expresses a 3D vector in the plane's `(u, v)` frame, dropping the
    /// out-of-plane component.
    #[must_use]
    pub fn to_local(&self, v: &Vector3) -> Vector2 {
        Vector2::new(v.dot(&self.u_dir), v.dot(&self.v_dir))
    }
}
