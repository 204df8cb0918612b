use crate::geometry::surface::{Cylinder, Plane, Sphere};

use super::wire::WireId;

slotmap::new_key_type! {
    pub struct FaceId;
}

/// Carrier surface of a face. Only planar faces can orient a body.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    Plane(Plane),
    Cylinder(Cylinder),
    Sphere(Sphere),
}

impl FaceSurface {
    /// Returns the plane when the face is planar.
    #[must_use]
    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            Self::Plane(plane) => Some(plane),
            Self::Cylinder(_) | Self::Sphere(_) => None,
        }
    }
}

/// A trimmed patch of a surface.
///
/// Perimeter-based ranking reads `outer_wire` only; `inner_wires` are holes.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub surface: FaceSurface,
    pub outer_wire: WireId,
    pub inner_wires: Vec<WireId>,
}
