use crate::error::Result;
use crate::geometry::surface::Sphere;
use crate::math::Point3;
use crate::topology::{FaceData, FaceSurface, ShellData, SolidId, TopologyStore, WireData};

use super::MakeSolid;

/// Creates a sphere solid from center and radius.
///
/// The sphere is a single boundary-less spherical face: it has no
/// planar faces and no edges.
pub struct MakeSphere {
    center: Point3,
    radius: f64,
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Executes the operation, creating the sphere in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is near zero.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let sphere = Sphere::new(self.center, self.radius)?;
        let boundary = store.add_wire(WireData {
            edges: vec![],
            is_closed: true,
        });
        let face = store.add_face(FaceData {
            surface: FaceSurface::Sphere(sphere),
            outer_wire: boundary,
            inner_wires: vec![],
        });
        let shell = store.add_shell(ShellData {
            faces: vec![face],
            is_closed: true,
        });
        MakeSolid::new(shell, vec![]).execute(store)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sphere_has_one_face_without_edges() {
        let mut store = TopologyStore::new();
        let solid = MakeSphere::new(Point3::origin(), 3.0).execute(&mut store).unwrap();
        let faces = store.solid_faces(solid).unwrap();
        assert_eq!(faces.len(), 1);
        let face = store.face(faces[0]).unwrap();
        assert!(face.surface.as_plane().is_none());
        assert!(store.wire(face.outer_wire).unwrap().edges.is_empty());
    }

    #[test]
    fn zero_radius_fails() {
        let mut store = TopologyStore::new();
        assert!(MakeSphere::new(Point3::origin(), 0.0).execute(&mut store).is_err());
    }
}
