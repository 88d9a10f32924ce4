// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement pass.

use kurbo::Size;

use crate::{LayoutHost, StackConfig, StackTotals};

/// Measure a stack of `children` against `available` and return its desired size.
///
/// Every child is first measured against the full `available` size. If the
/// summed extent then exceeds the available extent and
/// [`StackConfig::shrink_index`] names a child, that child alone is measured a
/// second time with the full cross bound and the available extent reduced by
/// the overflow (floored at zero). The second measurement is for the host's
/// benefit: it may update the child's desired size ahead of
/// [`arrange`](crate::arrange), but the totals computed here are not revised.
/// Whatever overflow remains is absorbed by the arrangement pass.
///
/// The returned size is the summed extent and the largest cross size, each
/// clamped to `available`. Either component of `available` may be infinite,
/// in which case nothing can overflow on that axis.
///
/// ```rust
/// use kurbo::Size;
/// use understory_axis_layout::{SizedChildren, StackConfig, measure};
///
/// let mut children = SizedChildren::from_sizes([
///     Size::new(80.0, 50.0),
///     Size::new(80.0, 100.0),
///     Size::new(80.0, 50.0),
/// ]);
/// let handles = children.handles();
/// let config = StackConfig::vertical().with_shrink_index(1);
///
/// let desired = measure(&mut children, &handles, Size::new(100.0, 150.0), &config);
/// assert_eq!(desired, Size::new(80.0, 150.0));
/// // The middle child was offered 150 - 50 = 100 units of height, which it fits in.
/// assert_eq!(children.desired(1), Some(Size::new(80.0, 100.0)));
/// ```
pub fn measure<H>(
    host: &mut H,
    children: &[H::Child],
    available: Size,
    config: &StackConfig,
) -> Size
where
    H: LayoutHost + ?Sized,
{
    debug_assert!(
        !available.width.is_nan() && !available.height.is_nan(),
        "available size must not be NaN; got {available:?}"
    );
    let axis = config.axis;
    let target = config.shrink_target(children.len());

    let mut totals = StackTotals::default();
    for &child in children {
        let size = host.measure_child(child, available);
        totals.add(axis, size);
    }

    let available_extent = axis.extent(available);
    if totals.overflows(available_extent) {
        let overflow = totals.extent - available_extent;
        trace!(
            "stack overflows by {overflow} ({} > {available_extent})",
            totals.extent
        );
        if let Some(&child) = target.and_then(|index| children.get(index)) {
            let bound = (available_extent - overflow).max(0.0);
            trace!(
                "remeasuring shrink target {} with extent bound {bound}",
                config.shrink_index
            );
            let constraint = axis.pack_size(bound, axis.cross_size(available));
            host.measure_child(child, constraint);
        }
    }

    axis.pack_size(
        totals.extent.min(available_extent),
        totals.cross.min(axis.cross_size(available)),
    )
}
