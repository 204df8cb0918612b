use crate::geometry::surface::Plane;
use crate::math::{Vector2, Vector3, TOLERANCE};

use super::PlanarFace;

/// Relative slack under which two edge lengths count as tied.
const LENGTH_TIE: f64 = 1e-9;

/// The straight edge that fixes a body's in-plane orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedEdge {
    /// Position of the edge in the face's outer loop.
    pub index: usize,
    /// Unit direction, projected into the face plane.
    pub direction: Vector3,
    /// The same direction in the face plane's local `(u, v)` frame.
    pub local: Vector2,
    /// Distance between the edge's endpoints.
    pub length: f64,
}

/// Finds the longest straight edge on a planar face.
///
/// Curved edges are never candidates, whatever their length. Ties go to the
/// first edge in loop order.
pub struct LongestStraightEdge<'a> {
    face: &'a PlanarFace,
}

impl<'a> LongestStraightEdge<'a> {
    /// Creates a new `LongestStraightEdge` query.
    #[must_use]
    pub fn new(face: &'a PlanarFace) -> Self {
        Self { face }
    }

    /// Executes the query, returning `None` when the face has no usable
    /// straight edge.
    #[must_use]
    pub fn execute(&self) -> Option<OrientedEdge> {
        let normal = self.face.normal;
        let mut best: Option<(usize, Vector3, f64)> = None;

        for (index, edge) in self.face.edges.iter().enumerate() {
            if !edge.is_linear {
                continue;
            }
            let chord = edge.end - edge.start;
            let length = chord.norm();
            let in_plane = chord - normal * normal.dot(&chord);
            if in_plane.norm() < TOLERANCE {
                continue;
            }
            let wins = match best {
                None => true,
                Some((_, _, top)) => length > top + LENGTH_TIE * top.max(1.0),
            };
            if wins {
                best = Some((index, in_plane.normalize(), length));
            }
        }

        let (index, direction, length) = best?;
        let local = Plane::from_normal(self.face.origin, normal)
            .map(|plane| plane.to_local(&direction))
            .ok()?;
        Some(OrientedEdge {
            index,
            direction,
            local,
            length,
        })
    }
}
