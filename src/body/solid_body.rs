use crate::error::Result;
use crate::math::{Point3, Rotation3, TOLERANCE};
use crate::operations::query::{Aabb, BoundingBox, Length};
use crate::topology::{SolidId, TopologyStore};

use super::{BodyGeometry, EdgeSample, FaceSample};

/// A solid in a [`TopologyStore`], exposed as a [`BodyGeometry`].
#[derive(Debug, Clone)]
pub struct SolidBody<'a> {
    store: &'a TopologyStore,
    solid: SolidId,
    name: String,
    material: Option<String>,
    visible: bool,
}

impl<'a> SolidBody<'a> {
    /// Wraps a solid under a display name. The body starts visible and
    /// without a material.
    #[must_use]
    pub fn new(store: &'a TopologyStore, solid: SolidId, name: impl Into<String>) -> Self {
        Self {
            store,
            solid,
            name: name.into(),
            material: None,
            visible: true,
        }
    }

    /// Assigns a material.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Sets the visibility flag.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl BodyGeometry for SolidBody<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_solid(&self) -> bool {
        true
    }

    fn faces(&self) -> Result<Vec<FaceSample>> {
        let store = self.store;
        let mut faces = Vec::new();
        for face_id in store.solid_faces(self.solid)? {
            let face = store.face(face_id)?;
            let wire = store.wire(face.outer_wire)?;

            let mut outer_edges = Vec::with_capacity(wire.edges.len());
            for step in &wire.edges {
                let edge = store.edge(step.edge)?;
                let (from, to) = if step.forward {
                    (edge.start, edge.end)
                } else {
                    (edge.end, edge.start)
                };
                outer_edges.push(EdgeSample {
                    start: store.vertex(from)?.point,
                    end: store.vertex(to)?.point,
                    length: Length::new(step.edge).execute(store)?,
                    is_linear: edge.curve.is_linear(),
                });
            }

            let plane = face.surface.as_plane();
            let origin = plane.map_or_else(
                || outer_edges.first().map_or(Point3::origin(), |e| e.start),
                |p| *p.origin(),
            );
            faces.push(FaceSample {
                normal: plane.map(|p| *p.plane_normal()).filter(|n| n.norm() > TOLERANCE),
                origin,
                outer_edges,
            });
        }
        Ok(faces)
    }

    fn bounding_box(&self) -> Result<Aabb> {
        BoundingBox::new(self.solid).execute(self.store)
    }

    fn bounding_box_in(&self, rotation: &Rotation3) -> Result<Aabb> {
        BoundingBox::new(self.solid).in_frame(*rotation).execute(self.store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::{MakeBox, MakeCylinder, MakeSphere};
    use approx::assert_relative_eq;

    #[test]
    fn box_faces_are_planar_with_four_straight_edges() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(Point3::origin(), Point3::new(6.0, 2.0, 0.5))
            .execute(&mut store)
            .unwrap();
        let body = SolidBody::new(&store, solid, "Shelf").with_material("Pine");

        let faces = body.faces().unwrap();
        assert_eq!(faces.len(), 6);
        for face in &faces {
            assert!(face.normal.is_some());
            assert_eq!(face.outer_edges.len(), 4);
            assert!(face.outer_edges.iter().all(|e| e.is_linear));
        }
        // Bottom face perimeter: 2 * (6 + 2).
        let perimeter: f64 = faces[0].outer_edges.iter().map(|e| e.length).sum();
        assert_relative_eq!(perimeter, 16.0, epsilon = 1e-12);
        assert_eq!(body.material(), Some("Pine"));
    }

    #[test]
    fn cylinder_caps_have_only_curved_edges() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(Point3::origin(), 1.0, Vector3::new(0.0, 0.0, 3.0))
            .execute(&mut store)
            .unwrap();
        let faces = SolidBody::new(&store, solid, "Dowel").faces().unwrap();
        assert_eq!(faces.iter().filter(|f| f.normal.is_some()).count(), 2);
        assert!(faces.iter().flat_map(|f| &f.outer_edges).all(|e| !e.is_linear));
    }

    #[test]
    fn sphere_has_no_planar_faces() {
        let mut store = TopologyStore::new();
        let solid = MakeSphere::new(Point3::origin(), 2.0).execute(&mut store).unwrap();
        let body = SolidBody::new(&store, solid, "Knob");
        assert!(body.faces().unwrap().iter().all(|f| f.normal.is_none()));
        assert_relative_eq!(
            body.bounding_box().unwrap().extents(),
            Vector3::new(4.0, 4.0, 4.0),
            epsilon = 1e-12
        );
    }
}
