use crate::geometry::curve::{Arc, Curve, Line};

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve associated with an edge.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A straight segment.
    Line(Line),
    /// A circular arc, possibly a full circle.
    Arc(Arc),
}

impl EdgeCurve {
    /// Returns the curve behind this edge.
    #[must_use]
    pub fn as_curve(&self) -> &dyn Curve {
        match self {
            Self::Line(line) => line,
            Self::Arc(arc) => arc,
        }
    }

    /// Returns `true` for straight edges.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Line(_))
    }
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices (the same vertex twice for a closed
/// circle) and carries the curve between them over `[t_start, t_end]`.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}
