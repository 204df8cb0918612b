use std::fmt;

use tracing::{debug, info, warn};

use crate::analysis::{Dimensions, MeasureBody};
use crate::body::BodyGeometry;
use crate::error::{AnalysisError, Result};

use super::{Cutlist, CutlistConfig, Grouping, PartRecord};

/// A body to list, under its qualified name.
#[derive(Clone)]
pub struct Part<'a> {
    pub name: String,
    pub body: &'a dyn BodyGeometry,
}

impl<'a> Part<'a> {
    /// Creates a part with an explicit name.
    #[must_use]
    pub fn new(name: impl Into<String>, body: &'a dyn BodyGeometry) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Creates a part named after the body itself.
    #[must_use]
    pub fn from_body(body: &'a dyn BodyGeometry) -> Self {
        Self {
            name: body.name().to_string(),
            body,
        }
    }
}

impl fmt::Debug for Part<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Part").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A body left out of the cut list, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyWarning {
    pub name: String,
    pub error: AnalysisError,
}

impl fmt::Display for BodyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.error)
    }
}

/// Builds a cut list from a sequence of parts.
///
/// Parts are measured and grouped one at a time in the given order. A part
/// that cannot be measured is reported as a [`BodyWarning`] and the rest
/// of the batch continues.
///
/// # Examples
///
/// ```
/// use cutlist::body::SolidBody;
/// use cutlist::cutlist::{CutlistConfig, ExtractCutlist, Part};
/// use cutlist::math::Point3;
/// use cutlist::operations::creation::MakeBox;
/// use cutlist::topology::TopologyStore;
///
/// let mut store = TopologyStore::new();
/// let a = MakeBox::new(Point3::origin(), Point3::new(6.0, 2.0, 0.5)).execute(&mut store)?;
/// let b = MakeBox::new(Point3::origin(), Point3::new(2.0, 6.0, 0.5)).execute(&mut store)?;
/// let a = SolidBody::new(&store, a, "shelf").with_material("Pine");
/// let b = SolidBody::new(&store, b, "side").with_material("Pine");
///
/// let cutlist = ExtractCutlist::new(CutlistConfig::default())?
///     .execute(&[Part::from_body(&a), Part::from_body(&b)]);
/// assert_eq!(cutlist.entries().len(), 1);
/// assert_eq!(cutlist.entries()[0].count(), 2);
/// # Ok::<(), cutlist::error::CutlistError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExtractCutlist {
    config: CutlistConfig,
}

impl ExtractCutlist {
    /// Creates a new extraction after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid tolerance.
    pub fn new(config: CutlistConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the settings in use.
    #[must_use]
    pub fn config(&self) -> &CutlistConfig {
        &self.config
    }

    /// Measures one body into a record, without grouping it.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisError`] if the body cannot be measured.
    pub fn measure(&self, part: &Part<'_>) -> std::result::Result<PartRecord, AnalysisError> {
        let config = &self.config;
        let measurement = MeasureBody::new(part.body, config.unit)
            .with_rotation(config.use_rotation)
            .execute()?;
        let dimensions = Dimensions::classify(&measurement.extent, config.tolerance);
        debug!(
            part = %part.name,
            source = ?measurement.source,
            length = dimensions.length,
            width = dimensions.width,
            height = dimensions.height,
            "measured"
        );
        Ok(PartRecord::new(part.name.as_str(), part.body.material(), dimensions))
    }

    /// Executes the extraction.
    #[must_use]
    pub fn execute(&self, parts: &[Part<'_>]) -> Cutlist {
        let config = &self.config;
        let mut grouping = Grouping::new(config.tolerance, config.match_material);
        let mut warnings = Vec::new();
        let mut skipped = 0usize;

        for part in parts {
            if config.ignore_hidden && !part.body.is_visible() {
                debug!(part = %part.name, "skipping hidden body");
                skipped += 1;
                continue;
            }
            match self.measure(part) {
                Ok(record) => {
                    grouping.add(record);
                }
                Err(error) => {
                    warn!(part = %part.name, %error, "body excluded from cut list");
                    warnings.push(BodyWarning {
                        name: part.name.clone(),
                        error,
                    });
                }
            }
        }

        let entries = grouping.finish();
        info!(
            parts = parts.len(),
            skipped,
            entries = entries.len(),
            warnings = warnings.len(),
            "cut list extracted"
        );
        Cutlist::new(entries, warnings, config.unit)
    }
}
