// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host boundary: how the layout passes talk to the caller's children.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

/// Access to the children of a stack, as seen by the layout passes.
///
/// The host owns the children. The engine only hands back the opaque
/// [`Child`](LayoutHost::Child) handles it was given, asks for measurements,
/// reads the sizes those measurements produced, and reports placements.
///
/// Implementations are expected to remember the result of the most recent
/// [`measure_child`](LayoutHost::measure_child) call per child and return it
/// from [`desired_size`](LayoutHost::desired_size). [`arrange`](crate::arrange)
/// relies on that and never measures.
pub trait LayoutHost {
    /// Handle identifying one child.
    type Child: Copy;

    /// Measure `child` against `constraint` and return its preferred size.
    ///
    /// Either component of `constraint` may be `f64::INFINITY`.
    fn measure_child(&mut self, child: Self::Child, constraint: Size) -> Size;

    /// Size produced by the most recent measurement of `child`.
    fn desired_size(&self, child: Self::Child) -> Size;

    /// Record the final placement of `child` in the stack's local coordinates.
    fn place_child(&mut self, child: Self::Child, rect: Rect);
}

/// A [`LayoutHost`] for children that are nothing more than a preferred size.
///
/// Handles are indices into the list. Measuring a child returns its
/// preferred size clamped into the offered constraint (and at zero), and
/// remembers it as the child's desired size. Placements are stored per child
/// and start out as [`Rect::ZERO`].
///
/// ```rust
/// use kurbo::Size;
/// use understory_axis_layout::{LayoutHost, SizedChildren};
///
/// let mut children = SizedChildren::from_sizes([Size::new(40.0, 20.0)]);
/// let measured = children.measure_child(0, Size::new(30.0, f64::INFINITY));
/// assert_eq!(measured, Size::new(30.0, 20.0));
/// assert_eq!(children.desired(0), Some(measured));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SizedChildren {
    preferred: Vec<Size>,
    desired: Vec<Size>,
    placements: Vec<Rect>,
}

impl SizedChildren {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from preferred sizes.
    ///
    /// Until measured, each child's desired size is its preferred size.
    pub fn from_sizes<I>(sizes: I) -> Self
    where
        I: IntoIterator<Item = Size>,
    {
        let mut children = Self::new();
        for size in sizes {
            children.push(size);
        }
        children
    }

    /// Append a child and return its handle.
    pub fn push(&mut self, preferred: Size) -> usize {
        self.preferred.push(preferred);
        self.desired.push(preferred);
        self.placements.push(Rect::ZERO);
        self.preferred.len() - 1
    }

    /// Change the preferred size of an existing child.
    ///
    /// The desired size is reset to the new preferred size. Returns `false`
    /// if `index` is out of range.
    pub fn set_preferred(&mut self, index: usize, preferred: Size) -> bool {
        let (Some(slot), Some(desired)) =
            (self.preferred.get_mut(index), self.desired.get_mut(index))
        else {
            return false;
        };
        *slot = preferred;
        *desired = preferred;
        true
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.preferred.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.preferred.is_empty()
    }

    /// Handles of all children, in order.
    pub fn handles(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    /// Preferred size of a child.
    pub fn preferred(&self, index: usize) -> Option<Size> {
        self.preferred.get(index).copied()
    }

    /// Size produced by the most recent measurement of a child.
    pub fn desired(&self, index: usize) -> Option<Size> {
        self.desired.get(index).copied()
    }

    /// Most recent placement of a child.
    pub fn placement(&self, index: usize) -> Option<Rect> {
        self.placements.get(index).copied()
    }

    /// Most recent placements of all children, in order.
    pub fn placements(&self) -> &[Rect] {
        &self.placements
    }
}

impl LayoutHost for SizedChildren {
    type Child = usize;

    fn measure_child(&mut self, child: usize, constraint: Size) -> Size {
        let (Some(preferred), Some(desired)) =
            (self.preferred.get(child), self.desired.get_mut(child))
        else {
            return Size::ZERO;
        };
        let size = Size::new(
            preferred.width.min(constraint.width).max(0.0),
            preferred.height.min(constraint.height).max(0.0),
        );
        *desired = size;
        size
    }

    fn desired_size(&self, child: usize) -> Size {
        self.desired(child).unwrap_or(Size::ZERO)
    }

    fn place_child(&mut self, child: usize, rect: Rect) {
        if let Some(slot) = self.placements.get_mut(child) {
            *slot = rect;
        }
    }
}
