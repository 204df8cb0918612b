//! Read-only view of host geometry.
//!
//! Analysis never owns or mutates bodies: everything it needs is queried
//! through [`BodyGeometry`], so any kernel (or a host CAD application)
//! can sit behind it.

mod solid_body;

pub use solid_body::SolidBody;

use crate::error::Result;
use crate::math::{Point3, Rotation3, Vector3};
use crate::operations::query::Aabb;

/// One boundary edge of a face.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSample {
    /// Where the boundary walk enters the edge.
    pub start: Point3,
    /// Where the boundary walk leaves the edge.
    pub end: Point3,
    /// Curve length (arc length for curved edges).
    pub length: f64,
    /// `true` for straight segments.
    pub is_linear: bool,
}

/// One face of a body, in the host's enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSample {
    /// Outward unit normal for planar faces, `None` for curved ones.
    pub normal: Option<Vector3>,
    /// A point on the face.
    pub origin: Point3,
    /// Edges of the outer boundary loop, in loop order. Holes are not listed.
    pub outer_edges: Vec<EdgeSample>,
}

/// Capabilities the cut-list pipeline needs from a body.
pub trait BodyGeometry {
    /// Display name of the body.
    fn name(&self) -> &str;

    /// Assigned material, if any.
    fn material(&self) -> Option<&str>;

    /// Whether the body is currently shown.
    fn is_visible(&self) -> bool;

    /// `false` for mesh or surface-only bodies.
    fn is_solid(&self) -> bool;

    /// Faces in a stable order that does not change between calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot enumerate the faces.
    fn faces(&self) -> Result<Vec<FaceSample>>;

    /// Host-computed bounding box in world axes.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has no bounds for the body.
    fn bounding_box(&self) -> Result<Aabb>;

    /// Bounding box of the body after applying `rotation` about the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the rotated bounds cannot be computed.
    fn bounding_box_in(&self, rotation: &Rotation3) -> Result<Aabb>;
}
