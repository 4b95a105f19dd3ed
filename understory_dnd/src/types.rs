// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for drop target resolution: axes, box models, flags, and
//! the droppable/draggable records the resolver consumes.
//!
//! ## Coordinate spaces
//!
//! Two spaces appear on a [`Droppable`]:
//! - `client`: the viewport-relative [`BoxModel`]. Its content box is used only
//!   for nesting comparisons.
//! - `subject`: page-space geometry. Its `active` region is used for every
//!   overlap and position test.
//!
//! Converting between the two is the caller's job. This crate never mixes them.

use kurbo::{Insets, Point, Rect, Vec2};

/// Orientation of a list of draggables inside a droppable.
///
/// A vertical list stacks items top to bottom, so its cross axis is horizontal.
/// A horizontal list lays items out left to right, so its cross axis is vertical.
///
/// Rectangles follow `kurbo`'s y-down convention: `y0` is the top edge and `y1`
/// the bottom edge.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Items flow along y; cross axis is x (left/right).
    #[default]
    Vertical,
    /// Items flow along x; cross axis is y (top/bottom).
    Horizontal,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross_axis(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Coordinate of `p` along this axis.
    #[inline]
    pub const fn line(self, p: Point) -> f64 {
        match self {
            Self::Vertical => p.y,
            Self::Horizontal => p.x,
        }
    }

    /// Leading edge of `r` along this axis (top or left).
    #[inline]
    pub const fn start(self, r: Rect) -> f64 {
        match self {
            Self::Vertical => r.y0,
            Self::Horizontal => r.x0,
        }
    }

    /// Trailing edge of `r` along this axis (bottom or right).
    #[inline]
    pub const fn end(self, r: Rect) -> f64 {
        match self {
            Self::Vertical => r.y1,
            Self::Horizontal => r.x1,
        }
    }

    /// Extent of `r` along this axis (height or width).
    #[inline]
    pub fn size(self, r: Rect) -> f64 {
        self.end(r) - self.start(r)
    }

    /// Coordinate of `p` along the cross axis.
    #[inline]
    pub const fn cross_axis_line(self, p: Point) -> f64 {
        self.cross_axis().line(p)
    }

    /// Leading edge of `r` along the cross axis.
    #[inline]
    pub const fn cross_axis_start(self, r: Rect) -> f64 {
        self.cross_axis().start(r)
    }

    /// Trailing edge of `r` along the cross axis.
    #[inline]
    pub const fn cross_axis_end(self, r: Rect) -> f64 {
        self.cross_axis().end(r)
    }

    /// Extent of `r` along the cross axis.
    #[inline]
    pub fn cross_axis_size(self, r: Rect) -> f64 {
        self.cross_axis().size(r)
    }
}

/// A measured box: border box plus the margin, border, and padding around it.
///
/// Derived boxes nest as `margin ⊇ border ⊇ padding ⊇ content`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxModel {
    /// The border box as measured.
    pub border_box: Rect,
    /// Space outside the border box.
    pub margin: Insets,
    /// Border widths.
    pub border: Insets,
    /// Space between the border and the content.
    pub padding: Insets,
}

impl BoxModel {
    /// A box model with zero margin, border, and padding.
    pub const fn from_border_box(border_box: Rect) -> Self {
        Self {
            border_box,
            margin: Insets::ZERO,
            border: Insets::ZERO,
            padding: Insets::ZERO,
        }
    }

    /// Set the margin.
    pub const fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Set the border widths.
    pub const fn with_border(mut self, border: Insets) -> Self {
        self.border = border;
        self
    }

    /// Set the padding.
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Border box grown by the margin.
    pub fn margin_box(&self) -> Rect {
        self.border_box + self.margin
    }

    /// Border box shrunk by the border widths.
    pub fn padding_box(&self) -> Rect {
        self.border_box - self.border
    }

    /// Padding box shrunk by the padding.
    pub fn content_box(&self) -> Rect {
        self.padding_box() - self.padding
    }

    /// The same box model moved by `offset` (for example the window scroll).
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            border_box: self.border_box + offset,
            ..*self
        }
    }
}

bitflags::bitflags! {
    /// Droppable state flags.
    ///
    /// Only [`ENABLED`](Self::ENABLED) is consulted by the resolver; the rest
    /// travel with the record for the drag state machine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DroppableFlags: u8 {
        /// The droppable accepts drops.
        const ENABLED         = 0b0000_0001;
        /// Dropping onto an item combines with it instead of reordering.
        const COMBINE_ENABLED = 0b0000_0010;
        /// The droppable does not move with page scroll.
        const FIXED_ON_PAGE   = 0b0000_0100;
    }
}

impl Default for DroppableFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Page-space geometry of a droppable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Subject {
    /// Full page-space margin box.
    pub page: Rect,
    /// Visible part of `page` after clipping by scroll containers.
    ///
    /// `None` when fully obscured; such a droppable is never a candidate.
    pub active: Option<Rect>,
}

impl Subject {
    /// A fully visible subject.
    pub const fn visible(page: Rect) -> Self {
        Self {
            page,
            active: Some(page),
        }
    }
}

/// A drop target snapshot.
///
/// ```
/// use kurbo::Rect;
/// use understory_dnd::{Axis, BoxModel, Droppable, DroppableFlags};
///
/// let list = Droppable::new(
///     "todo",
///     Axis::Vertical,
///     BoxModel::from_border_box(Rect::new(0.0, 0.0, 200.0, 600.0)),
/// );
/// assert!(list.is_enabled());
/// assert_eq!(list.subject.active, Some(Rect::new(0.0, 0.0, 200.0, 600.0)));
///
/// let off = list.with_flags(DroppableFlags::empty());
/// assert!(!off.is_enabled());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Droppable<K> {
    /// Stable identifier returned by the resolver.
    pub id: K,
    /// List orientation; selects the cross axis for edge rules.
    pub axis: Axis,
    /// State flags.
    pub flags: DroppableFlags,
    /// Client-space box model. Its content box drives nesting resolution.
    pub client: BoxModel,
    /// Page-space geometry. Its active region drives overlap tests.
    pub subject: Subject,
}

impl<K> Droppable<K> {
    /// An enabled droppable whose page space equals its client space.
    pub fn new(id: K, axis: Axis, client: BoxModel) -> Self {
        Self {
            id,
            axis,
            flags: DroppableFlags::default(),
            client,
            subject: Subject::visible(client.margin_box()),
        }
    }

    /// Replace the flags.
    pub fn with_flags(mut self, flags: DroppableFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the visible region. Pass `None` for a fully obscured droppable.
    pub fn with_active(mut self, active: Option<Rect>) -> Self {
        self.subject.active = active;
        self
    }

    /// Move the page-space geometry by `offset`, leaving client space as is.
    pub fn with_page_offset(mut self, offset: Vec2) -> Self {
        self.subject.page = self.subject.page + offset;
        self.subject.active = self.subject.active.map(|r| r + offset);
        self
    }

    /// Whether the droppable accepts drops.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(DroppableFlags::ENABLED)
    }
}

/// The item being dragged.
///
/// The resolver takes its live `page_border_box` separately; this record only
/// identifies the drag.
#[derive(Clone, Debug, PartialEq)]
pub struct Draggable<D, K> {
    /// Identifier of the dragged item.
    pub id: D,
    /// Droppable the drag started in.
    pub home: K,
    /// Index within the home droppable.
    pub index: usize,
    /// Client-space box model at drag start.
    pub client: BoxModel,
    /// Page-space box model at drag start.
    pub page: BoxModel,
}

impl<D, K> Draggable<D, K> {
    /// A draggable whose page space equals its client space.
    pub fn new(id: D, home: K, index: usize, client: BoxModel) -> Self {
        Self {
            id,
            home,
            index,
            client,
            page: client,
        }
    }
}
