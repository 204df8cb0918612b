use crate::cutlist::LengthUnit;
use crate::error::AnalysisError;
use crate::math::TOLERANCE;
use crate::operations::query::Aabb;

/// Axis-aligned size of a body, tagged with the unit it was measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub unit: LengthUnit,
}

impl Extent {
    /// Creates a new extent.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, unit: LengthUnit) -> Self {
        Self { x, y, z, unit }
    }

    /// Takes the size of an axis-aligned box.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb, unit: LengthUnit) -> Self {
        let size = aabb.extents();
        Self::new(size.x, size.y, size.z, unit)
    }

    /// The three sizes in axis order.
    #[must_use]
    pub fn values(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Rejects extents with a zero, negative or non-finite size.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateGeometry`] carrying the offending
    /// sizes.
    pub fn check(self) -> Result<Self, AnalysisError> {
        if self.values().iter().all(|v| v.is_finite() && *v >= TOLERANCE) {
            Ok(self)
        } else {
            Err(AnalysisError::DegenerateGeometry {
                x: self.x,
                y: self.y,
                z: self.z,
            })
        }
    }
}

/// Which path produced an [`Extent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentSource {
    /// Measured after orienting by face `face` and its edge `edge`.
    Oriented { face: usize, edge: usize },
    /// Taken from the host's axis-aligned box.
    HostBox,
}
