use crate::analysis::Dimensions;

/// One measured part, ready for grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct PartRecord {
    pub name: String,
    /// `None` for unassigned materials; an empty label counts as unassigned.
    pub material: Option<String>,
    pub dimensions: Dimensions,
    pub count: usize,
}

impl PartRecord {
    /// Creates a record for a single part.
    #[must_use]
    pub fn new(name: impl Into<String>, material: Option<&str>, dimensions: Dimensions) -> Self {
        Self {
            name: name.into(),
            material: material.filter(|m| !m.is_empty()).map(str::to_string),
            dimensions,
            count: 1,
        }
    }
}
