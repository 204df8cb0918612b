use crate::error::{OperationError, Result};
use crate::math::{newell_normal, Point3, Vector3, TOLERANCE};
use crate::operations::creation::{MakeFace, MakeSolid, MakeWire};
use crate::topology::{FaceId, ShellData, SolidId, TopologyStore};

/// Extrudes a planar polygonal face along a direction vector into a prism.
///
/// The direction need not be perpendicular to the face, so sheared and
/// arbitrarily oriented boards can be built from any profile.
pub struct Extrude {
    face: FaceId,
    direction: Vector3,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the extrusion, creating the solid in the topology store.
    ///
    /// Face order of the result is bottom, top, then one side per profile
    /// edge in wire order.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the direction is zero-length
    /// or parallel to the face, the face has holes, or its boundary contains
    /// curved edges.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.direction.norm() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("extrude direction must be non-zero".into()).into(),
            );
        }

        let face = store.face(self.face)?;
        if !face.inner_wires.is_empty() {
            return Err(OperationError::InvalidInput(
                "extrusion of faces with holes is not supported".into(),
            )
            .into());
        }
        let outer_wire = face.outer_wire;
        for step in &store.wire(outer_wire)?.edges {
            if !store.edge(step.edge)?.curve.is_linear() {
                return Err(OperationError::InvalidInput(
                    "extrusion profile must be polygonal".into(),
                )
                .into());
            }
        }

        let base_points = store.wire_points(outer_wire)?;
        let normal = newell_normal(&base_points).ok_or_else(|| {
            OperationError::Failed("degenerate polygon: cannot compute normal".into())
        })?;
        if normal.dot(&self.direction).abs() < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "extrude direction lies in the profile plane".into(),
            )
            .into());
        }

        // Wind the base so its normal agrees with the direction: the bottom
        // copy is then reversed (outward below) and the sides face outward.
        let base_points: Vec<Point3> = if normal.dot(&self.direction) > 0.0 {
            base_points
        } else {
            base_points.into_iter().rev().collect()
        };

        let bottom_points: Vec<Point3> = base_points.iter().rev().copied().collect();
        let top_points: Vec<Point3> = base_points.iter().map(|&p| p + self.direction).collect();

        let n = base_points.len();
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(planar_face(store, bottom_points)?);
        faces.push(planar_face(store, top_points.clone())?);
        for i in 0..n {
            let j = (i + 1) % n;
            let quad = vec![base_points[i], base_points[j], top_points[j], top_points[i]];
            faces.push(planar_face(store, quad)?);
        }

        let shell = store.add_shell(ShellData {
            faces,
            is_closed: true,
        });
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

fn planar_face(store: &mut TopologyStore, points: Vec<Point3>) -> Result<FaceId> {
    let wire = MakeWire::new(points, true).execute(store)?;
    MakeFace::new(wire, vec![]).execute(store)
}
