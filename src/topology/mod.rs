pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeCurve, EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceSurface};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{WireData, WireEdge, WireId};

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Arena owning every vertex, edge, wire, face, shell and solid.
///
/// Entities refer to each other through typed slotmap keys. Kernel
/// operations mutate the store; analysis only ever reads it.
#[derive(Debug, Default)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

fn missing(kind: &str) -> TopologyError {
    TopologyError::EntityNotFound(kind.to_string())
}

impl TopologyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices.get(id).ok_or_else(|| missing("vertex"))
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices.get_mut(id).ok_or_else(|| missing("vertex"))
    }

    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges.get(id).ok_or_else(|| missing("edge"))
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges.get_mut(id).ok_or_else(|| missing("edge"))
    }

    pub fn add_wire(&mut self, data: WireData) -> WireId {
        self.wires.insert(data)
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn wire(&self, id: WireId) -> Result<&WireData, TopologyError> {
        self.wires.get(id).ok_or_else(|| missing("wire"))
    }

    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces.get(id).ok_or_else(|| missing("face"))
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces.get_mut(id).ok_or_else(|| missing("face"))
    }

    pub fn add_shell(&mut self, data: ShellData) -> ShellId {
        self.shells.insert(data)
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn shell(&self, id: ShellId) -> Result<&ShellData, TopologyError> {
        self.shells.get(id).ok_or_else(|| missing("shell"))
    }

    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// # Errors
    ///
    /// [`TopologyError::EntityNotFound`] for a stale or foreign id.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids.get(id).ok_or_else(|| missing("solid"))
    }

    /// Every face of a solid: the outer shell first, then voids, each in
    /// shell order. This order is stable for the life of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its shells is missing.
    pub fn solid_faces(&self, id: SolidId) -> Result<Vec<FaceId>, TopologyError> {
        let solid = self.solid(id)?;
        let mut faces = self.shell(solid.outer_shell)?.faces.clone();
        for &shell in &solid.inner_shells {
            faces.extend_from_slice(&self.shell(shell)?.faces);
        }
        Ok(faces)
    }

    /// Positions where each edge use of a wire begins, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire, an edge, or a vertex is missing.
    pub fn wire_points(&self, id: WireId) -> Result<Vec<Point3>, TopologyError> {
        let wire = self.wire(id)?;
        let mut points = Vec::with_capacity(wire.edges.len());
        for step in &wire.edges {
            let edge = self.edge(step.edge)?;
            let vertex = if step.forward { edge.start } else { edge.end };
            points.push(self.vertex(vertex)?.point);
        }
        Ok(points)
    }
}
