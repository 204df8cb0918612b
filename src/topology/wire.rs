use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the topology store.
    pub struct WireId;
}

/// An edge use within a wire, with its traversal direction.
#[derive(Debug, Clone, Copy)]
pub struct WireEdge {
    /// The edge identifier.
    pub edge: EdgeId,
    /// `true` when the wire walks the edge from start to end.
    pub forward: bool,
}

impl WireEdge {
    /// Creates a new edge use.
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }
}

/// An ordered sequence of edge uses forming a connected path.
///
/// A wire may be empty: a closed surface such as a full sphere has a face
/// with no boundary.
#[derive(Debug, Clone)]
pub struct WireData {
    /// The ordered sequence of edge uses.
    pub edges: Vec<WireEdge>,
    /// Whether this wire forms a closed loop.
    pub is_closed: bool,
}
