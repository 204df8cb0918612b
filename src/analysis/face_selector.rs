use crate::body::{EdgeSample, FaceSample};
use crate::math::{Point3, Vector3};

/// Relative slack under which two perimeters count as tied.
const PERIMETER_TIE: f64 = 1e-9;

/// The planar face chosen to orient a body.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarFace {
    /// Position of the face in the body's face enumeration.
    pub index: usize,
    /// Unit normal of the face.
    pub normal: Vector3,
    /// Sum of the outer boundary edge lengths.
    pub perimeter: f64,
    /// A point on the face.
    pub origin: Point3,
    /// The outer boundary edges.
    pub edges: Vec<EdgeSample>,
}

/// Finds the planar face with the largest outer perimeter.
///
/// Inner loops (holes) are not part of the perimeter. When several faces
/// tie, the first one in enumeration order wins.
pub struct LargestPlanarFace<'a> {
    faces: &'a [FaceSample],
}

impl<'a> LargestPlanarFace<'a> {
    /// Creates a new `LargestPlanarFace` query over faces in host order.
    #[must_use]
    pub fn new(faces: &'a [FaceSample]) -> Self {
        Self { faces }
    }

    /// Executes the query, returning `None` when no face is planar.
    #[must_use]
    pub fn execute(&self) -> Option<PlanarFace> {
        let mut best: Option<(usize, Vector3, f64)> = None;
        for (index, face) in self.faces.iter().enumerate() {
            let Some(normal) = face.normal else {
                continue;
            };
            let perimeter: f64 = face.outer_edges.iter().map(|e| e.length).sum();
            let wins = match best {
                None => true,
                Some((_, _, top)) => perimeter > top + PERIMETER_TIE * top.max(1.0),
            };
            if wins {
                best = Some((index, normal, perimeter));
            }
        }

        best.map(|(index, normal, perimeter)| {
            let face = &self.faces[index];
            PlanarFace {
                index,
                normal: normal.normalize(),
                perimeter,
                origin: face.origin,
                edges: face.outer_edges.clone(),
            }
        })
    }
}
