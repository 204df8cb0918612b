use crate::math::Point3;

slotmap::new_key_type! {
    pub struct VertexId;
}

/// A corner shared by every edge that meets there.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub point: Point3,
}

impl VertexData {
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
