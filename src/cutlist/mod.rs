//! Cut-list extraction: measured parts grouped into entries.

mod config;
mod extract;
mod grouping;
mod record;
mod unit;

pub use config::{CutlistConfig, Tolerance};
pub use extract::{BodyWarning, ExtractCutlist, Part};
pub use grouping::{CutlistEntry, Grouping};
pub use record::PartRecord;
pub use unit::LengthUnit;

/// The result of an extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutlist {
    entries: Vec<CutlistEntry>,
    warnings: Vec<BodyWarning>,
    unit: LengthUnit,
}

impl Cutlist {
    #[must_use]
    pub fn new(entries: Vec<CutlistEntry>, warnings: Vec<BodyWarning>, unit: LengthUnit) -> Self {
        Self {
            entries,
            warnings,
            unit,
        }
    }

    /// Entries in the order their groups were first seen.
    #[must_use]
    pub fn entries(&self) -> &[CutlistEntry] {
        &self.entries
    }

    /// Bodies that were left out.
    #[must_use]
    pub fn warnings(&self) -> &[BodyWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Total number of parts across all entries.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(CutlistEntry::count).sum()
    }

    /// Entries in export order: material ascending (unassigned first), then
    /// count descending, then length, width and height descending.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<&CutlistEntry> {
        let mut sorted: Vec<&CutlistEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.cmp_presentation(b));
        sorted
    }

    /// Consumes the list, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<CutlistEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Dimensions, Extent};

    fn record(name: &str, material: Option<&str>, x: f64, y: f64, z: f64) -> PartRecord {
        let dims = Dimensions::classify(
            &Extent::new(x, y, z, LengthUnit::Centimeter),
            Tolerance::default(),
        );
        PartRecord::new(name, material, dims)
    }

    #[test]
    fn sorted_entries_follow_export_order() {
        let mut grouping = Grouping::new(Tolerance::default(), true);
        grouping.add(record("oak", Some("Oak"), 5.0, 1.0, 1.0));
        grouping.add(record("short", Some("Pine"), 3.0, 1.0, 1.0));
        grouping.add(record("long", Some("Pine"), 9.0, 1.0, 1.0));
        grouping.add(record("bare", None, 1.0, 1.0, 1.0));
        grouping.add(record("short2", Some("Pine"), 3.0, 1.0, 1.0));

        let cutlist = Cutlist::new(grouping.finish(), Vec::new(), LengthUnit::Centimeter);
        let order: Vec<&str> = cutlist
            .sorted_entries()
            .iter()
            .map(|e| e.names()[0].as_str())
            .collect();
        assert_eq!(order, ["bare", "oak", "short", "long"]);

        let canonical: Vec<&str> = cutlist.entries().iter().map(|e| e.names()[0].as_str()).collect();
        assert_eq!(canonical, ["oak", "short", "long", "bare"]);
        assert_eq!(cutlist.total_count(), 5);
    }
}
