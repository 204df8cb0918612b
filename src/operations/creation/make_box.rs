use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::shaping::Extrude;
use crate::topology::{SolidId, TopologyStore};

use super::{MakeFace, MakeWire};

/// Creates an axis-aligned box solid from two corner points.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation: a rectangle in the bottom plane extruded
    /// up to the top corner. Face order is bottom, top, then the sides
    /// starting from the `-Y` side.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if any side of the box is
    /// not strictly positive.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let size = self.max_corner - self.min_corner;
        if size.iter().any(|&s| s < TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "box sides must be positive, got {} x {} x {}",
                size.x, size.y, size.z
            ))
            .into());
        }

        let (lo, hi) = (self.min_corner, self.max_corner);
        let base = vec![
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
        ];
        let wire = MakeWire::new(base, true).execute(store)?;
        let face = MakeFace::new(wire, vec![]).execute(store)?;
        Extrude::new(face, Vector3::new(0.0, 0.0, size.z)).execute(store)
    }
}
