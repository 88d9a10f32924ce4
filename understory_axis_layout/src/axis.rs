// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking axis and helpers for splitting geometry into extent and cross parts.

use kurbo::{Point, Rect, Size};

/// The axis along which a stack places its children.
///
/// The *extent* dimension is the one children are summed along (width for
/// [`Axis::Horizontal`], height for [`Axis::Vertical`]). The *cross* dimension
/// is the perpendicular one, which is sized by the largest child and never
/// shrunk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Children are placed left to right; width is the extent.
    Horizontal,
    /// Children are placed top to bottom; height is the extent.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns the extent-axis component of `size`.
    #[must_use]
    pub const fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns the cross-axis component of `size`.
    #[must_use]
    pub const fn cross_size(self, size: Size) -> f64 {
        self.cross().extent(size)
    }

    /// Builds a [`Size`] from an extent-axis and a cross-axis length.
    #[must_use]
    pub const fn pack_size(self, extent: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(extent, cross),
            Self::Vertical => Size::new(cross, extent),
        }
    }

    /// Builds a [`Point`] from an extent-axis and a cross-axis coordinate.
    #[must_use]
    pub const fn pack_point(self, extent: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(extent, cross),
            Self::Vertical => Point::new(cross, extent),
        }
    }

    /// Returns the far edge of `rect` along this axis.
    #[must_use]
    pub const fn end_of(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x1,
            Self::Vertical => rect.y1,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::Axis;

    #[test]
    fn default_is_vertical() {
        assert_eq!(Axis::default(), Axis::Vertical);
    }

    #[test]
    fn split_and_pack_follow_the_axis() {
        let size = Size::new(80.0, 30.0);
        assert_eq!(Axis::Vertical.extent(size), 30.0);
        assert_eq!(Axis::Vertical.cross_size(size), 80.0);
        assert_eq!(Axis::Horizontal.extent(size), 80.0);
        assert_eq!(Axis::Horizontal.cross_size(size), 30.0);

        assert_eq!(Axis::Vertical.pack_size(30.0, 80.0), size);
        assert_eq!(Axis::Horizontal.pack_size(80.0, 30.0), size);
        assert_eq!(Axis::Vertical.pack_point(5.0, 0.0), Point::new(0.0, 5.0));
        assert_eq!(Axis::Horizontal.pack_point(5.0, 0.0), Point::new(5.0, 0.0));
    }

    #[test]
    fn end_of_reads_the_far_edge() {
        let rect = Rect::new(1.0, 2.0, 10.0, 20.0);
        assert_eq!(Axis::Horizontal.end_of(rect), 10.0);
        assert_eq!(Axis::Vertical.end_of(rect), 20.0);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
