use super::face::FaceId;

slotmap::new_key_type! {
    pub struct ShellId;
}

/// Faces bounding one side of a solid.
///
/// `faces` is never reordered after construction; face ranking breaks ties
/// by this order.
#[derive(Debug, Clone)]
pub struct ShellData {
    pub faces: Vec<FaceId>,
    /// False for open sheets.
    pub is_closed: bool,
}
