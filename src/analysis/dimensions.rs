use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::cutlist::{LengthUnit, Tolerance};

use super::Extent;

/// A measurement axis, ordered by tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

/// Stock dimensions with `length >= width >= height`.
///
/// `axes` records which extent axis each value came from, in the same
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: LengthUnit,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub axes: [Axis; 3],
}

impl Dimensions {
    /// Sorts an extent into descending order.
    ///
    /// Values are ordered exactly, so the result is always a descending
    /// permutation of the extent. Values that lie within `ties` of their
    /// neighbour form a tie run; within a run the axes are labelled in
    /// `X, Y, Z` priority order regardless of which one is marginally
    /// larger.
    #[must_use]
    pub fn classify(extent: &Extent, ties: Tolerance) -> Self {
        let values = extent.values();
        let mut order = Axis::ALL;
        // Stable: exact ties keep X before Y before Z.
        order.sort_by(|&a, &b| values[b as usize].total_cmp(&values[a as usize]));

        let sorted = order.map(|axis| values[axis as usize]);
        let mut axes = order;
        let mut start = 0;
        for i in 1..=3 {
            if i == 3 || !ties.allows(sorted[i - 1], sorted[i]) {
                axes[start..i].sort_unstable();
                start = i;
            }
        }

        Self {
            length: sorted[0],
            width: sorted[1],
            height: sorted[2],
            unit: extent.unit,
            axes,
        }
    }

    /// The three values, longest first.
    #[must_use]
    pub fn values(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }

    /// Per-axis comparison under `tolerance`. Units must already agree.
    #[must_use]
    pub fn matches(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.values()
            .iter()
            .zip(other.values())
            .all(|(&a, b)| tolerance.allows(a, b))
    }

    /// Re-expresses the values in another unit.
    #[must_use]
    pub fn to_unit(&self, unit: LengthUnit) -> Self {
        let convert = |v: f64| self.unit.convert(v, unit);
        Self {
            length: convert(self.length),
            width: convert(self.width),
            height: convert(self.height),
            unit,
            axes: self.axes,
        }
    }

    /// Descending comparison used for presentation order.
    pub(crate) fn cmp_desc(&self, other: &Self) -> Ordering {
        other
            .length
            .total_cmp(&self.length)
            .then_with(|| other.width.total_cmp(&self.width))
            .then_with(|| other.height.total_cmp(&self.height))
    }
}

/// Honors a precision, so `{:.2}` rounds every value.
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, w, h, unit) = (self.length, self.width, self.height, self.unit);
        match f.precision() {
            Some(p) => write!(f, "{l:.p$} x {w:.p$} x {h:.p$} {unit}"),
            None => write!(f, "{l} x {w} x {h} {unit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CM: LengthUnit = LengthUnit::Centimeter;

    fn classify(x: f64, y: f64, z: f64) -> Dimensions {
        Dimensions::classify(&Extent::new(x, y, z, CM), Tolerance::Absolute(1e-4))
    }

    #[test]
    fn sorts_descending() {
        let dims = classify(2.0, 0.5, 6.0);
        assert_eq!(dims.values(), [6.0, 2.0, 0.5]);
        assert_eq!(dims.axes, [Axis::Z, Axis::X, Axis::Y]);
    }

    #[test]
    fn every_permutation_yields_same_values() {
        let v = [6.0, 2.0, 0.5];
        for [a, b, c] in [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            assert_eq!(classify(v[a], v[b], v[c]).values(), [6.0, 2.0, 0.5]);
        }
    }

    #[test]
    fn near_ties_relabel_by_axis_priority() {
        let dims = classify(3.0, 3.00005, 1.0);
        assert_eq!(dims.values(), [3.00005, 3.0, 1.0]);
        assert_eq!(dims.axes, [Axis::X, Axis::Y, Axis::Z]);

        let cube = classify(2.0, 2.0, 2.0);
        assert_eq!(cube.axes, [Axis::X, Axis::Y, Axis::Z]);
    }

    #[test]
    fn ordering_holds_with_wide_tolerance() {
        let dims = Dimensions::classify(&Extent::new(1.0, 5.0, 1.2, CM), Tolerance::Absolute(10.0));
        assert!(dims.length >= dims.width && dims.width >= dims.height);
        assert_eq!(dims.values(), [5.0, 1.2, 1.0]);
    }

    #[test]
    fn inclusive_match_boundary() {
        let a = classify(6.0, 2.0, 0.5);
        let b = classify(6.0, 2.5, 0.5);
        assert!(a.matches(&b, Tolerance::Absolute(0.5)));
        assert!(!a.matches(&b, Tolerance::Absolute(0.499_999)));
        assert!(a.matches(&b, Tolerance::Relative(0.2)));
    }

    #[test]
    fn to_unit_scales_values() {
        let dims = classify(10.0, 2.54, 1.0).to_unit(LengthUnit::Inch);
        assert_relative_eq!(dims.width, 1.0, epsilon = 1e-12);
        assert_eq!(dims.unit, LengthUnit::Inch);
        assert_eq!(format!("{}", classify(6.0, 2.0, 0.5)), "6 x 2 x 0.5 cm");
        assert_eq!(format!("{:.1}", classify(6.04, 2.0, 0.5)), "6.0 x 2.0 x 0.5 cm");
    }
}
