use crate::error::{GeometryError, Result};
use crate::math::{Point3, Rotation3, Vector3};
use crate::topology::{FaceSurface, SolidId, TopologyStore};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from its two corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Returns the size of the box along each axis.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }
}

/// Computes the exact axis-aligned bounding box of a solid, optionally
/// measured in a rotated frame.
///
/// Bounds come from the boundary curves (lines and arcs, including arc
/// bulges between vertices) and from full spherical faces.
pub struct BoundingBox {
    solid: SolidId,
    frame: Option<Rotation3>,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query in world axes.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid, frame: None }
    }

    /// Measures the box of the solid after applying `rotation` about the
    /// origin.
    #[must_use]
    pub fn in_frame(mut self, rotation: Rotation3) -> Self {
        self.frame = Some(rotation);
        self
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if a topology entity is missing, or
    /// [`GeometryError::Degenerate`] if the solid has no bounding geometry.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        // (R p)_i = row_i(R) . p, so each frame axis is measured along a row.
        let matrix = self.frame.map_or_else(nalgebra::Matrix3::identity, |r| *r.matrix());
        let axes: [Vector3; 3] = [0, 1, 2].map(|i| matrix.row(i).transpose());

        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut include = |axis: usize, (lo, hi): (f64, f64)| {
            min[axis] = min[axis].min(lo);
            max[axis] = max[axis].max(hi);
        };

        for face_id in store.solid_faces(self.solid)? {
            let face = store.face(face_id)?;
            if let FaceSurface::Sphere(sphere) = &face.surface {
                for (i, axis) in axes.iter().enumerate() {
                    include(i, sphere.range_along(axis));
                }
            }
            let mut wires = vec![face.outer_wire];
            wires.extend_from_slice(&face.inner_wires);
            for wire in wires {
                for step in &store.wire(wire)?.edges {
                    let edge = store.edge(step.edge)?;
                    let curve = edge.curve.as_curve();
                    for (i, axis) in axes.iter().enumerate() {
                        include(i, curve.range_along(axis, edge.t_start, edge.t_end));
                    }
                }
            }
        }

        if (0..3).any(|i| !(min[i].is_finite() && max[i].is_finite())) {
            return Err(GeometryError::Degenerate("solid has no bounding geometry".into()).into());
        }
        Ok(Aabb::new(min, max))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;
    use crate::operations::creation::{MakeBox, MakeCylinder, MakeSphere};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn offset_box_bounds() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(1.0, 2.0, 3.0), p(3.0, 5.0, 7.0))
            .execute(&mut store)
            .unwrap();
        let aabb = BoundingBox::new(solid).execute(&store).unwrap();
        assert_relative_eq!(aabb.min, p(1.0, 2.0, 3.0), epsilon = 1e-12);
        assert_relative_eq!(aabb.max, p(3.0, 5.0, 7.0), epsilon = 1e-12);
    }

    #[test]
    fn rotated_frame_grows_square_box() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0))
            .execute(&mut store)
            .unwrap();
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4);
        let aabb = BoundingBox::new(solid).in_frame(rotation).execute(&store).unwrap();
        let e = aabb.extents();
        assert_relative_eq!(e.x, 2f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(e.y, 2f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(e.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cylinder_bounds_include_circle_bulge() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(p(0.0, 0.0, 0.0), 2.0, Vector3::new(0.0, 0.0, 5.0))
            .execute(&mut store)
            .unwrap();
        let aabb = BoundingBox::new(solid).execute(&store).unwrap();
        assert_relative_eq!(aabb.extents(), Vector3::new(4.0, 4.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn sphere_bounds() {
        let mut store = TopologyStore::new();
        let solid = MakeSphere::new(p(0.0, 0.0, 0.0), 3.0).execute(&mut store).unwrap();
        let aabb = BoundingBox::new(solid).execute(&store).unwrap();
        assert_relative_eq!(aabb.min.z, -3.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.z, 3.0, epsilon = 1e-12);
    }
}
