//! Settings for a cut-list extraction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::LengthUnit;

const ROUNDING_ULPS: f64 = 4.0;

/// How close two dimension values must be to count as equal.
///
/// Comparisons are per axis and inclusive: values exactly `ε` apart match.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tolerance {
    /// `|a - b| <= ε`, with `ε` in the carried length unit.
    Absolute(f64),
    /// `|a - b| <= ε * max(|a|, |b|)`.
    Relative(f64),
}

impl Tolerance {
    /// The raw `ε`.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        match self {
            Self::Absolute(eps) | Self::Relative(eps) => eps,
        }
    }

    /// Returns whether `a` and `b` are equal within this tolerance.
    ///
    /// A few ULPs of slack absorb the rounding in `a - b`, so values written
    /// exactly `ε` apart in decimal still match.
    #[must_use]
    pub fn allows(self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        let magnitude = a.abs().max(b.abs());
        let bound = match self {
            Self::Absolute(eps) => eps,
            Self::Relative(eps) => eps * magnitude,
        };
        diff <= bound + ROUNDING_ULPS * f64::EPSILON * magnitude.max(bound)
    }

    fn validate(self) -> Result<(), ConfigError> {
        let eps = self.epsilon();
        if !eps.is_finite() {
            return Err(ConfigError::NonFiniteTolerance);
        }
        if eps < 0.0 {
            return Err(ConfigError::NegativeTolerance(eps));
        }
        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::Absolute(1e-4)
    }
}

/// Configuration for [`super::ExtractCutlist`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CutlistConfig {
    /// Dimension tolerance, in the same unit as `unit`.
    pub tolerance: Tolerance,

    /// Unit of every measured value.
    pub unit: LengthUnit,

    /// When set, parts only group with parts of the same material.
    /// When cleared, entries carry no material.
    pub match_material: bool,

    /// Orient each body by its largest planar face before measuring.
    /// When cleared, every body uses its host bounding box.
    pub use_rotation: bool,

    /// Skip bodies that are hidden in the host.
    pub ignore_hidden: bool,

    /// Skip occurrences of externally referenced components.
    pub ignore_external: bool,

    /// Joins component and body names into a qualified part name.
    pub name_separator: String,
}

impl Default for CutlistConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            unit: LengthUnit::default(),
            match_material: true,
            use_rotation: true,
            ignore_hidden: true,
            ignore_external: false,
            name_separator: "/".to_string(),
        }
    }
}

impl CutlistConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dimension tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the carried length unit.
    #[must_use]
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Enables or disables material matching.
    #[must_use]
    pub fn with_match_material(mut self, match_material: bool) -> Self {
        self.match_material = match_material;
        self
    }

    /// Enables or disables the orientation heuristic.
    #[must_use]
    pub fn with_rotation(mut self, use_rotation: bool) -> Self {
        self.use_rotation = use_rotation;
        self
    }

    /// Sets whether hidden bodies are skipped.
    #[must_use]
    pub fn with_ignore_hidden(mut self, ignore_hidden: bool) -> Self {
        self.ignore_hidden = ignore_hidden;
        self
    }

    /// Sets whether external occurrences are skipped.
    #[must_use]
    pub fn with_ignore_external(mut self, ignore_external: bool) -> Self {
        self.ignore_external = ignore_external;
        self
    }

    /// Sets the separator used for qualified part names.
    #[must_use]
    pub fn with_name_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }

    /// Checks the settings before any body is analyzed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a negative or non-finite tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tolerance.validate()
    }
}
