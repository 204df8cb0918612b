use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::analysis::Dimensions;

use super::{PartRecord, Tolerance};

/// One row of a cut list: interchangeable parts with their names.
///
/// Dimensions and material come from the first record of the group and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CutlistEntry {
    count: usize,
    material: Option<String>,
    dimensions: Dimensions,
    names: Vec<String>,
}

impl CutlistEntry {
    fn from_record(record: PartRecord) -> Self {
        Self {
            count: record.count,
            material: record.material,
            dimensions: record.dimensions,
            names: vec![record.name],
        }
    }

    /// Number of parts in the group.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Part names in arrival order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn cmp_presentation(&self, other: &Self) -> Ordering {
        self.material
            .cmp(&other.material)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.dimensions.cmp_desc(&other.dimensions))
    }
}

/// Greedy first-fit grouping of part records.
///
/// Each record joins the first existing entry it matches, scanning in
/// creation order, or starts a new entry. The result therefore depends on
/// arrival order, and entries stay in the order they were created.
#[derive(Debug, Clone)]
pub struct Grouping {
    tolerance: Tolerance,
    match_material: bool,
    entries: Vec<CutlistEntry>,
}

impl Grouping {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new(tolerance: Tolerance, match_material: bool) -> Self {
        Self {
            tolerance,
            match_material,
            entries: Vec::new(),
        }
    }

    /// Folds a record in and returns the index of the entry it landed in.
    ///
    /// With material matching off the record's material is dropped, so
    /// every entry reports no material.
    pub fn add(&mut self, mut record: PartRecord) -> usize {
        if !self.match_material {
            record.material = None;
        }

        let found = self.entries.iter().position(|entry| self.matches(entry, &record));
        match found {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.count += record.count;
                entry.names.push(record.name);
                index
            }
            None => {
                self.entries.push(CutlistEntry::from_record(record));
                self.entries.len() - 1
            }
        }
    }

    fn matches(&self, entry: &CutlistEntry, record: &PartRecord) -> bool {
        if self.match_material && entry.material != record.material {
            return false;
        }
        let dims = if record.dimensions.unit == entry.dimensions.unit {
            record.dimensions
        } else {
            record.dimensions.to_unit(entry.dimensions.unit)
        };
        entry.dimensions.matches(&dims, self.tolerance)
    }

    /// Entries created so far, in creation order.
    #[must_use]
    pub fn entries(&self) -> &[CutlistEntry] {
        &self.entries
    }

    /// Finishes grouping.
    #[must_use]
    pub fn finish(self) -> Vec<CutlistEntry> {
        self.entries
    }
}
