use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::geometry::curve::{Arc, Curve};
use crate::geometry::surface::{Cylinder, Plane};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, EdgeId, FaceData, FaceSurface, ShellData, SolidId, TopologyStore,
    VertexData, WireData, WireEdge,
};

use super::MakeSolid;

/// Creates a right circular cylinder.
///
/// The result has two planar caps bounded by full-circle edges and one
/// cylindrical side face. None of its edges are straight.
pub struct MakeCylinder {
    base_center: Point3,
    radius: f64,
    axis: Vector3,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    ///
    /// * `axis` - Direction and height of the cylinder (its length is the height).
    #[must_use]
    pub fn new(base_center: Point3, radius: f64, axis: Vector3) -> Self {
        Self {
            base_center,
            radius,
            axis,
        }
    }

    /// Executes the operation, creating the cylinder in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the radius or height is
    /// near zero.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.radius < TOLERANCE || self.axis.norm() < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "cylinder radius and height must be positive".into(),
            )
            .into());
        }
        let top_center = self.base_center + self.axis;

        let bottom_edge = circle_edge(store, self.base_center, self.radius, self.axis)?;
        let top_edge = circle_edge(store, top_center, self.radius, self.axis)?;

        let bottom_wire = store.add_wire(WireData {
            edges: vec![WireEdge::new(bottom_edge, false)],
            is_closed: true,
        });
        let bottom = store.add_face(FaceData {
            surface: FaceSurface::Plane(Plane::from_normal(self.base_center, -self.axis)?),
            outer_wire: bottom_wire,
            inner_wires: vec![],
        });

        let top_wire = store.add_wire(WireData {
            edges: vec![WireEdge::new(top_edge, true)],
            is_closed: true,
        });
        let top = store.add_face(FaceData {
            surface: FaceSurface::Plane(Plane::from_normal(top_center, self.axis)?),
            outer_wire: top_wire,
            inner_wires: vec![],
        });

        let side_wire = store.add_wire(WireData {
            edges: vec![WireEdge::new(bottom_edge, true), WireEdge::new(top_edge, false)],
            is_closed: true,
        });
        let side = store.add_face(FaceData {
            surface: FaceSurface::Cylinder(Cylinder::new(self.base_center, self.radius, self.axis)?),
            outer_wire: side_wire,
            inner_wires: vec![],
        });

        let shell = store.add_shell(ShellData {
            faces: vec![bottom, top, side],
            is_closed: true,
        });
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

/// Adds a closed circular edge whose single vertex sits at parameter 0.
fn circle_edge(
    store: &mut TopologyStore,
    center: Point3,
    radius: f64,
    normal: Vector3,
) -> Result<EdgeId> {
    let arc = Arc::full_circle(center, radius, normal)?;
    let seam = store.add_vertex(VertexData::new(arc.evaluate(0.0)?));
    Ok(store.add_edge(EdgeData {
        start: seam,
        end: seam,
        curve: EdgeCurve::Arc(arc),
        t_start: 0.0,
        t_end: TAU,
    }))
}
