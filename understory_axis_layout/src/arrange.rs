// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrangement pass.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::{Axis, LayoutHost, StackConfig, StackTotals};

/// Result of [`arrange_sizes`].
#[derive(Clone, Debug, PartialEq)]
pub struct ArrangedStack {
    /// Occupied size. Always the final size that was passed in.
    pub size: Size,
    /// Amount by which the desired extents exceeded the final extent (`>= 0`).
    pub overflow: f64,
    /// Placement of each child, in child order.
    pub placements: Vec<Rect>,
}

impl ArrangedStack {
    /// Extent actually covered by the placed children.
    ///
    /// This can be larger than the final extent when the overflow is bigger
    /// than the shrink target, since no other child is ever reduced.
    #[must_use]
    pub fn content_extent(&self, axis: Axis) -> f64 {
        self.placements.last().map_or(0.0, |rect| axis.end_of(*rect))
    }
}

/// Walks children in order, handing out contiguous rectangles.
#[derive(Debug)]
struct Cursor {
    axis: Axis,
    overflow: f64,
    target: Option<usize>,
    offset: f64,
}

impl Cursor {
    fn new(axis: Axis, totals: StackTotals, final_size: Size, target: Option<usize>) -> Self {
        let overflow = totals.overflow(axis.extent(final_size));
        if overflow > 0.0 {
            trace!("arranging with {overflow} overflow, shrink target {target:?}");
        }
        Self {
            axis,
            overflow,
            target,
            offset: 0.0,
        }
    }

    fn place(&mut self, index: usize, desired: Size) -> Rect {
        let axis = self.axis;
        let mut size = desired;
        if self.overflow > 0.0 && self.target == Some(index) {
            let extent = (axis.extent(desired) - self.overflow).max(0.0);
            trace!("shrinking child {index} from {} to {extent}", axis.extent(desired));
            size = axis.pack_size(extent, axis.cross_size(desired));
        }
        // Not `Rect::from_origin_size`: that normalizes, and a negative extent
        // must stay anchored at the cursor it moves back.
        let origin = axis.pack_point(self.offset, 0.0);
        self.offset += axis.extent(size);
        Rect::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }
}

/// Position `children` contiguously along the stacking axis within `final_size`.
///
/// Children are placed from the origin in order, each at the running offset
/// on the extent axis and at zero on the cross axis, with their desired size
/// as last measured. If those sizes add up to more than the final extent, the
/// child at [`StackConfig::shrink_index`] gives up the difference on the extent
/// axis, collapsing to zero at worst. Its cross size, and every other child,
/// are left alone.
///
/// This never measures: it reads [`LayoutHost::desired_size`] and recomputes
/// its own totals. Each child receives exactly one
/// [`place_child`](LayoutHost::place_child) call. The return value is
/// `final_size`, whether or not the children fill it.
///
/// Sizes are not validated. A negative desired size yields a rectangle whose
/// far edge lies before its origin (it is not normalized), and the next child
/// starts at that far edge.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_axis_layout::{SizedChildren, StackConfig, arrange};
///
/// let mut children = SizedChildren::from_sizes([Size::new(30.0, 10.0), Size::new(50.0, 20.0)]);
/// let handles = children.handles();
/// let occupied = arrange(
///     &mut children,
///     &handles,
///     Size::new(60.0, 20.0),
///     &StackConfig::horizontal(),
/// );
/// assert_eq!(occupied, Size::new(60.0, 20.0));
/// // The first child absorbs the 20 units of overflow.
/// assert_eq!(children.placement(0), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
/// assert_eq!(children.placement(1), Some(Rect::new(10.0, 0.0, 60.0, 20.0)));
/// ```
pub fn arrange<H>(
    host: &mut H,
    children: &[H::Child],
    final_size: Size,
    config: &StackConfig,
) -> Size
where
    H: LayoutHost + ?Sized,
{
    let axis = config.axis;
    let totals = StackTotals::from_sizes(axis, children.iter().map(|&c| host.desired_size(c)));
    let mut cursor = Cursor::new(
        axis,
        totals,
        final_size,
        config.shrink_target(children.len()),
    );
    for (index, &child) in children.iter().enumerate() {
        let rect = cursor.place(index, host.desired_size(child));
        host.place_child(child, rect);
    }
    final_size
}

/// Run the arrangement pass over plain desired sizes.
///
/// This is [`arrange`] for callers that keep their own child storage: the
/// placements come back in an [`ArrangedStack`] instead of through a host.
///
/// ```rust
/// use kurbo::Size;
/// use understory_axis_layout::{StackConfig, arrange_sizes};
///
/// let sizes = [Size::new(80.0, 50.0), Size::new(80.0, 100.0), Size::new(80.0, 50.0)];
/// let config = StackConfig::vertical().with_shrink_index(1);
/// let arranged = arrange_sizes(&sizes, Size::new(100.0, 150.0), &config);
///
/// assert_eq!(arranged.overflow, 50.0);
/// assert_eq!(arranged.placements[1].height(), 50.0);
/// assert_eq!(arranged.placements[2].y0, 100.0);
/// ```
pub fn arrange_sizes(desired: &[Size], final_size: Size, config: &StackConfig) -> ArrangedStack {
    let axis = config.axis;
    let totals = StackTotals::from_sizes(axis, desired.iter().copied());
    let mut cursor = Cursor::new(
        axis,
        totals,
        final_size,
        config.shrink_target(desired.len()),
    );
    let placements = desired
        .iter()
        .enumerate()
        .map(|(index, &size)| cursor.place(index, size))
        .collect();
    ArrangedStack {
        size: final_size,
        overflow: cursor.overflow,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use super::{arrange, arrange_sizes};
    use crate::{Axis, SizedChildren, StackConfig};

    const COLUMN: [Size; 3] = [
        Size::new(80.0, 50.0),
        Size::new(80.0, 100.0),
        Size::new(80.0, 50.0),
    ];

    #[test]
    fn overflow_shrinks_only_the_target() {
        let config = StackConfig::vertical().with_shrink_index(1);
        let arranged = arrange_sizes(&COLUMN, Size::new(100.0, 150.0), &config);
        assert_eq!(arranged.size, Size::new(100.0, 150.0));
        assert_eq!(arranged.overflow, 50.0);
        assert_eq!(
            arranged.placements,
            [
                Rect::new(0.0, 0.0, 80.0, 50.0),
                Rect::new(0.0, 50.0, 80.0, 100.0),
                Rect::new(0.0, 100.0, 80.0, 150.0),
            ]
        );
    }

    #[test]
    fn fitting_children_keep_their_sizes() {
        let config = StackConfig::vertical().with_shrink_index(1);
        let arranged = arrange_sizes(&COLUMN, Size::new(80.0, 200.0), &config);
        assert_eq!(arranged.size, Size::new(80.0, 200.0));
        assert_eq!(arranged.overflow, 0.0);
        let sizes: Vec<Size> = arranged.placements.iter().map(Rect::size).collect();
        assert_eq!(sizes, COLUMN);
    }

    #[test]
    fn out_of_range_target_never_shrinks() {
        let config = StackConfig::vertical().with_shrink_index(5);
        let final_size = Size::new(100.0, 150.0);
        let arranged = arrange_sizes(&COLUMN, final_size, &config);
        assert_eq!(arranged.size, final_size);
        assert_eq!(arranged.overflow, 50.0);
        let sizes: Vec<Size> = arranged.placements.iter().map(Rect::size).collect();
        assert_eq!(sizes, COLUMN);
        assert_eq!(arranged.content_extent(Axis::Vertical), 200.0);
    }

    #[test]
    fn target_collapses_without_redistribution() {
        let config = StackConfig::vertical().with_shrink_index(0);
        let arranged = arrange_sizes(&COLUMN, Size::new(80.0, 100.0), &config);
        // Overflow is 100, the target only has 50 to give.
        assert_eq!(arranged.overflow, 100.0);
        assert_eq!(arranged.placements[0], Rect::new(0.0, 0.0, 80.0, 0.0));
        assert_eq!(arranged.placements[1], Rect::new(0.0, 0.0, 80.0, 100.0));
        assert_eq!(arranged.placements[2], Rect::new(0.0, 100.0, 80.0, 150.0));
        assert_eq!(arranged.content_extent(Axis::Vertical), 150.0);
    }

    #[test]
    fn placements_are_contiguous_along_either_axis() {
        let sizes = [
            Size::new(10.0, 5.0),
            Size::new(20.0, 15.0),
            Size::new(30.0, 25.0),
            Size::new(40.0, 35.0),
        ];
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let config = StackConfig::new(axis, 2);
            let arranged = arrange_sizes(&sizes, Size::new(60.0, 60.0), &config);
            let mut offset = 0.0;
            for rect in &arranged.placements {
                let origin = Size::new(rect.x0, rect.y0);
                assert_eq!(axis.extent(origin), offset);
                assert_eq!(axis.cross_size(origin), 0.0);
                offset += axis.extent(rect.size());
            }
            assert_eq!(arranged.content_extent(axis), offset);
        }
    }

    #[test]
    fn cross_axis_is_never_shrunk() {
        let sizes = [Size::new(100.0, 40.0), Size::new(50.0, 90.0)];
        let config = StackConfig::horizontal().with_shrink_index(1);
        let arranged = arrange_sizes(&sizes, Size::new(120.0, 10.0), &config);
        assert_eq!(arranged.placements[1], Rect::new(100.0, 0.0, 120.0, 90.0));
    }

    #[test]
    fn negative_extent_is_placed_without_normalizing() {
        let sizes = [Size::new(10.0, -20.0), Size::new(10.0, 30.0)];
        let config = StackConfig::vertical().with_shrink_index(5);
        let arranged = arrange_sizes(&sizes, Size::new(10.0, 100.0), &config);
        assert_eq!(arranged.placements[0], Rect::new(0.0, 0.0, 10.0, -20.0));
        assert_eq!(arranged.placements[0].height(), -20.0);
        assert_eq!(arranged.placements[1], Rect::new(0.0, -20.0, 10.0, 10.0));
        assert_eq!(arranged.content_extent(Axis::Vertical), 10.0);
    }

    #[test]
    fn empty_stack_echoes_final_size() {
        let arranged = arrange_sizes(&[], Size::new(30.0, 40.0), &StackConfig::default());
        assert!(arranged.placements.is_empty());
        assert_eq!(arranged.size, Size::new(30.0, 40.0));
        assert_eq!(arranged.content_extent(Axis::Vertical), 0.0);
    }

    #[test]
    fn arrange_reads_desired_sizes_from_host() {
        let mut children = SizedChildren::from_sizes(COLUMN);
        let handles = children.handles();
        let config = StackConfig::vertical().with_shrink_index(1);
        let final_size = Size::new(100.0, 150.0);
        let occupied = arrange(&mut children, &handles, final_size, &config);
        assert_eq!(occupied, final_size);
        assert_eq!(
            children.placements(),
            arrange_sizes(&COLUMN, final_size, &config).placements
        );
        // Arrangement does not touch desired sizes.
        assert_eq!(children.desired(1), Some(Size::new(80.0, 100.0)));
    }
}
