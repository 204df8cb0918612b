use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::surface::Plane;
use crate::math::newell_normal;
use crate::topology::{FaceData, FaceId, FaceSurface, TopologyStore, WireId};

/// Creates a planar face bounded by a closed polyline wire.
///
/// The plane normal follows the wire's winding (Newell's method), so a
/// counter-clockwise loop seen from above yields an upward normal.
pub struct MakeFace {
    outer_wire: WireId,
    inner_wires: Vec<WireId>,
}

impl MakeFace {
    /// Creates a new `MakeFace` operation.
    #[must_use]
    pub fn new(outer_wire: WireId, inner_wires: Vec<WireId>) -> Self {
        Self {
            outer_wire,
            inner_wires,
        }
    }

    /// Executes the operation, creating the face in the topology store.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::WireNotClosed`] for an open outer wire, or a
    /// geometry error when its points are collinear.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId> {
        if !store.wire(self.outer_wire)?.is_closed {
            return Err(TopologyError::WireNotClosed.into());
        }
        for &inner in &self.inner_wires {
            if !store.wire(inner)?.is_closed {
                return Err(TopologyError::WireNotClosed.into());
            }
        }

        let points = store.wire_points(self.outer_wire)?;
        let normal = newell_normal(&points).ok_or_else(|| {
            GeometryError::Degenerate("face boundary is collinear".into())
        })?;
        let plane = Plane::from_normal(points[0], normal)?;

        Ok(store.add_face(FaceData {
            surface: FaceSurface::Plane(plane),
            outer_wire: self.outer_wire,
            inner_wires: self.inner_wires.clone(),
        }))
    }
}
