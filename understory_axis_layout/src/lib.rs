// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_axis_layout --heading-base-level=0

//! Understory Axis Layout: a single-axis stack with one shrinkable child.
//!
//! This crate lays out an ordered list of rectangular children along one axis.
//! Every child gets its preferred size, unless the children together are longer
//! than the space available. In that case exactly one designated child, the
//! *shrink target*, gives up the overflow on the stacking axis. A typical use is
//! a toolbar or header where a title label should truncate before the buttons
//! next to it are squeezed.
//!
//! Layout happens in two independent passes, modelled after the usual
//! measure/arrange protocol of retained UI toolkits:
//!
//! - [`measure`]: measures every child against the available size, and if the
//!   total overflows, re-measures the shrink target into a reduced bound. Returns
//!   the desired size of the whole stack, clamped to what was offered.
//! - [`arrange`]: places children contiguously from the origin using the sizes
//!   the host recorded during measurement, shrinking the target by whatever
//!   still overflows the final size. Returns the final size unchanged.
//!
//! Both passes are configured by a [`StackConfig`] (an [`Axis`] and a
//! `shrink_index`) and talk to the caller's children through the [`LayoutHost`]
//! trait. Neither pass keeps state between calls.
//!
//! ## Not a widget system
//!
//! This crate does not own children, store properties, or track invalidation.
//! Host frameworks are responsible for:
//!
//! - Owning the child widgets or boxes and handing out copyable handles.
//! - Measuring a child when asked and remembering the result
//!   ([`LayoutHost::measure_child`] / [`LayoutHost::desired_size`]).
//! - Applying the rectangles reported through [`LayoutHost::place_child`], for
//!   example by updating an `understory_box_tree::Tree`.
//! - Deciding when layout needs to run again.
//!
//! Hosts whose children are plain sizes can use [`SizedChildren`]. Callers that
//! only need the placement math can use [`arrange_sizes`].
//!
//! ## Minimal example
//!
//! A column whose middle child absorbs overflow:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_axis_layout::{SizedChildren, StackConfig, arrange, measure};
//!
//! let mut children = SizedChildren::from_sizes([
//!     Size::new(80.0, 50.0),
//!     Size::new(80.0, 100.0),
//!     Size::new(80.0, 50.0),
//! ]);
//! let handles = children.handles();
//! let config = StackConfig::vertical().with_shrink_index(1);
//!
//! // Only 150 units of height for 200 units of content.
//! let available = Size::new(100.0, 150.0);
//! let desired = measure(&mut children, &handles, available, &config);
//! assert_eq!(desired, Size::new(80.0, 150.0));
//!
//! let occupied = arrange(&mut children, &handles, available, &config);
//! assert_eq!(occupied, available);
//! assert_eq!(children.placement(0), Some(Rect::new(0.0, 0.0, 80.0, 50.0)));
//! assert_eq!(children.placement(1), Some(Rect::new(0.0, 50.0, 80.0, 100.0)));
//! assert_eq!(children.placement(2), Some(Rect::new(0.0, 100.0, 80.0, 150.0)));
//! ```
//!
//! ## Edge cases
//!
//! - A `shrink_index` past the end of the child list disables shrinking. It is
//!   not an error.
//! - Either component of the available size may be `f64::INFINITY`; an
//!   unbounded extent never overflows.
//! - When the overflow is larger than the shrink target, the target collapses
//!   to zero and nothing else is reduced, so placements may run past the final
//!   size.
//! - Sizes are expected to be non-negative and not NaN. NaN available sizes are
//!   caught by debug assertions; nothing else is validated.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `log`: emits `trace`-level records through the `log` facade when a stack
//!   overflows and when the shrink target is re-measured or shrunk.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

mod arrange;
mod axis;
mod config;
mod host;
mod measure;
mod totals;

pub use arrange::{ArrangedStack, arrange, arrange_sizes};
pub use axis::Axis;
pub use config::StackConfig;
pub use host::{LayoutHost, SizedChildren};
pub use measure::measure;
pub use totals::StackTotals;
