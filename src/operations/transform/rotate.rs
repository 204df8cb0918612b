use std::collections::HashSet;

use crate::error::Result;
use crate::geometry::curve::{Arc, Curve, Line};
use crate::geometry::surface::{Cylinder, Plane, Sphere};
use crate::math::{Point3, Rotation3};
use crate::topology::{EdgeCurve, EdgeId, FaceSurface, SolidId, TopologyStore, VertexId};

/// Rotates a solid rigidly about a pivot point, in place.
pub struct Rotate {
    solid: SolidId,
    pivot: Point3,
    rotation: Rotation3,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    #[must_use]
    pub fn new(solid: SolidId, pivot: Point3, rotation: Rotation3) -> Self {
        Self {
            solid,
            pivot,
            rotation,
        }
    }

    /// Executes the rotation.
    ///
    /// Vertices, edge curves, and face surfaces shared by several faces are
    /// moved exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if any topology entity is missing.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<()> {
        let faces = store.solid_faces(self.solid)?;

        let mut edges: Vec<EdgeId> = Vec::new();
        let mut seen_edges = HashSet::new();
        for &face_id in &faces {
            let face = store.face(face_id)?;
            let mut wires = vec![face.outer_wire];
            wires.extend_from_slice(&face.inner_wires);
            for wire in wires {
                for step in &store.wire(wire)?.edges {
                    if seen_edges.insert(step.edge) {
                        edges.push(step.edge);
                    }
                }
            }
        }

        let mut seen_vertices: HashSet<VertexId> = HashSet::new();
        for &edge_id in &edges {
            let edge = store.edge(edge_id)?;
            let (start, end) = (edge.start, edge.end);
            for vertex_id in [start, end] {
                if seen_vertices.insert(vertex_id) {
                    let vertex = store.vertex_mut(vertex_id)?;
                    vertex.point = self.point(&vertex.point);
                }
            }

            let curve = match &store.edge(edge_id)?.curve {
                EdgeCurve::Line(line) => EdgeCurve::Line(Line::new(
                    self.point(line.origin()),
                    self.rotation * line.direction(),
                )?),
                EdgeCurve::Arc(arc) => {
                    let domain = arc.domain();
                    EdgeCurve::Arc(Arc::new(
                        self.point(arc.center()),
                        arc.radius(),
                        self.rotation * arc.normal(),
                        self.rotation * arc.ref_dir(),
                        domain.t_min,
                        domain.t_max,
                    )?)
                }
            };
            store.edge_mut(edge_id)?.curve = curve;
        }

        for face_id in faces {
            let surface = match &store.face(face_id)?.surface {
                FaceSurface::Plane(plane) => FaceSurface::Plane(Plane::from_normal(
                    self.point(plane.origin()),
                    self.rotation * plane.plane_normal(),
                )?),
                FaceSurface::Cylinder(cylinder) => FaceSurface::Cylinder(Cylinder::new(
                    self.point(cylinder.center()),
                    cylinder.radius(),
                    self.rotation * cylinder.axis(),
                )?),
                FaceSurface::Sphere(sphere) => {
                    FaceSurface::Sphere(Sphere::new(self.point(sphere.center()), sphere.radius())?)
                }
            };
            store.face_mut(face_id)?.surface = surface;
        }

        Ok(())
    }

    fn point(&self, p: &Point3) -> Point3 {
        self.pivot + self.rotation * (p - self.pivot)
    }
}
