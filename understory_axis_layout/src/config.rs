// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack configuration.

use crate::Axis;

/// Configuration shared by [`measure`](crate::measure) and [`arrange`](crate::arrange).
///
/// Hosts with their own property system are expected to keep these values
/// wherever they like and pass a fresh copy into each layout pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StackConfig {
    /// Axis children are stacked along. Defaults to [`Axis::Vertical`].
    pub axis: Axis,
    /// Index of the child that absorbs overflow. Defaults to `0`.
    ///
    /// Not validated: an index past the end of the child list disables
    /// shrinking.
    pub shrink_index: usize,
}

impl StackConfig {
    /// Create a configuration with the given axis and shrink index.
    pub const fn new(axis: Axis, shrink_index: usize) -> Self {
        Self { axis, shrink_index }
    }

    /// Stack children left to right.
    pub const fn horizontal() -> Self {
        Self::new(Axis::Horizontal, 0)
    }

    /// Stack children top to bottom.
    pub const fn vertical() -> Self {
        Self::new(Axis::Vertical, 0)
    }

    /// Replace the axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Replace the shrink index.
    #[must_use]
    pub const fn with_shrink_index(mut self, shrink_index: usize) -> Self {
        self.shrink_index = shrink_index;
        self
    }

    /// Returns the shrink target for a stack of `len` children, if it is in range.
    #[must_use]
    pub const fn shrink_target(&self, len: usize) -> Option<usize> {
        if self.shrink_index < len {
            Some(self.shrink_index)
        } else {
            None
        }
    }
}
