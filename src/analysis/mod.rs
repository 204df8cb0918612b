//! Per-body geometry analysis: from a [`BodyGeometry`] to an [`Extent`].
//!
//! The pipeline runs face selection, edge orientation, frame alignment and
//! box measurement in that order, falling back to the host's
//! axis-aligned box whenever a step has nothing to work with.

mod dimensions;
mod edge_orientation;
mod extent;
mod face_selector;
mod orientation;

pub use dimensions::{Axis, Dimensions};
pub use edge_orientation::{LongestStraightEdge, OrientedEdge};
pub use extent::{Extent, ExtentSource};
pub use face_selector::{LargestPlanarFace, PlanarFace};
pub use orientation::AlignFrame;

use tracing::debug;

use crate::body::BodyGeometry;
use crate::cutlist::LengthUnit;
use crate::error::AnalysisError;
use crate::math::Rotation3;

/// Extent of one body and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub extent: Extent,
    pub source: ExtentSource,
}

/// Measures a body, oriented by its largest planar face when allowed.
pub struct MeasureBody<'a> {
    body: &'a dyn BodyGeometry,
    use_rotation: bool,
    unit: LengthUnit,
}

impl<'a> MeasureBody<'a> {
    /// Creates a new `MeasureBody` query with the orientation heuristic on.
    #[must_use]
    pub fn new(body: &'a dyn BodyGeometry, unit: LengthUnit) -> Self {
        Self {
            body,
            use_rotation: true,
            unit,
        }
    }

    /// Enables or disables the orientation heuristic.
    #[must_use]
    pub fn with_rotation(mut self, use_rotation: bool) -> Self {
        self.use_rotation = use_rotation;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::GeometryUnavailable`] if not even the host
    /// box is available, or [`AnalysisError::DegenerateGeometry`] if the
    /// measured extent is flat.
    pub fn execute(&self) -> Result<Measurement, AnalysisError> {
        let name = self.body.name();

        if self.use_rotation && self.body.is_solid() {
            if let Some((rotation, source)) = self.orientation() {
                match self.body.bounding_box_in(&rotation) {
                    Ok(aabb) => {
                        let extent = Extent::from_aabb(&aabb, self.unit).check()?;
                        return Ok(Measurement { extent, source });
                    }
                    Err(err) => {
                        debug!(body = name, error = %err, "rotated box unavailable, using host box");
                    }
                }
            }
        }

        let aabb = self
            .body
            .bounding_box()
            .map_err(|err| AnalysisError::GeometryUnavailable(err.to_string()))?;
        let extent = Extent::from_aabb(&aabb, self.unit).check()?;
        Ok(Measurement {
            extent,
            source: ExtentSource::HostBox,
        })
    }

    fn orientation(&self) -> Option<(Rotation3, ExtentSource)> {
        let name = self.body.name();
        let faces = match self.body.faces() {
            Ok(faces) => faces,
            Err(err) => {
                debug!(body = name, error = %err, "faces unavailable");
                return None;
            }
        };

        let Some(face) = LargestPlanarFace::new(&faces).execute() else {
            debug!(body = name, "no planar face");
            return None;
        };
        let Some(edge) = LongestStraightEdge::new(&face).execute() else {
            debug!(body = name, face = face.index, "no straight edge");
            return None;
        };
        let Some(rotation) = AlignFrame::new(face.normal, edge.direction).execute() else {
            debug!(body = name, face = face.index, edge = edge.index, "edge parallel to normal");
            return None;
        };

        debug!(
            body = name,
            face = face.index,
            perimeter = face.perimeter,
            edge = edge.index,
            "oriented"
        );
        Some((
            rotation,
            ExtentSource::Oriented {
                face: face.index,
                edge: edge.index,
            },
        ))
    }
}
