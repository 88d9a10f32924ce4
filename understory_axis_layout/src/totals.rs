// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregation of child sizes along a stacking axis.

use kurbo::Size;

use crate::Axis;

/// Running totals over a sequence of child sizes.
///
/// `extent` is the sum of extent-axis lengths and `cross` the maximum
/// cross-axis length. Both start at zero, so an empty stack totals `0 × 0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StackTotals {
    /// Sum of extent-axis lengths.
    pub extent: f64,
    /// Maximum cross-axis length.
    pub cross: f64,
}

impl StackTotals {
    /// Aggregate `sizes` along `axis`.
    pub fn from_sizes<I>(axis: Axis, sizes: I) -> Self
    where
        I: IntoIterator<Item = Size>,
    {
        let mut totals = Self::default();
        for size in sizes {
            totals.add(axis, size);
        }
        totals
    }

    /// Fold one more child size into the totals.
    pub fn add(&mut self, axis: Axis, size: Size) {
        self.extent += axis.extent(size);
        self.cross = self.cross.max(axis.cross_size(size));
    }

    /// Returns `true` if the summed extent is strictly greater than `bound`.
    ///
    /// An infinite `bound` never overflows.
    #[must_use]
    pub fn overflows(&self, bound: f64) -> bool {
        self.extent > bound
    }

    /// Amount by which the summed extent exceeds `bound`, floored at zero.
    #[must_use]
    pub fn overflow(&self, bound: f64) -> f64 {
        (self.extent - bound).max(0.0)
    }
}
