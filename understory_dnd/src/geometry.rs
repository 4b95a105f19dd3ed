// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle comparisons used by the filter and the nesting resolver.
//!
//! Note the mix of strict and inclusive tests:
//! - [`has_overlap`] is strict. Rectangles that only share an edge do not overlap.
//! - [`is_within`], [`is_position_in_frame`] and [`contains_rect`] are inclusive.
//!
//! Inputs are assumed finite. Comparisons involving NaN evaluate to `false`.

use kurbo::{Point, Rect};

/// Whether the interiors of `a` and `b` intersect.
///
/// ```
/// use kurbo::Rect;
/// use understory_dnd::geometry::has_overlap;
///
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(has_overlap(a, Rect::new(5.0, 5.0, 15.0, 15.0)));
/// // Touching at an edge is not overlap.
/// assert!(!has_overlap(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
/// ```
#[inline]
pub fn has_overlap(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Whether `value` lies in `lower..=upper`.
#[inline]
pub fn is_within(lower: f64, upper: f64, value: f64) -> bool {
    lower <= value && value <= upper
}

/// Whether `p` lies inside `frame`, edges included.
///
/// Unlike [`Rect::contains`], the right and bottom edges count as inside.
#[inline]
pub fn is_position_in_frame(frame: Rect, p: Point) -> bool {
    is_within(frame.x0, frame.x1, p.x) && is_within(frame.y0, frame.y1, p.y)
}

/// Whether `inner` fits inside `outer`, edges included.
///
/// Equal rectangles contain each other.
#[inline]
pub fn contains_rect(outer: Rect, inner: Rect) -> bool {
    inner.y0 >= outer.y0 && inner.y1 <= outer.y1 && inner.x0 >= outer.x0 && inner.x1 <= outer.x1
}

/// Whether any coordinate of `r` is NaN.
#[inline]
pub(crate) fn is_nan(r: Rect) -> bool {
    r.x0.is_nan() || r.y0.is_nan() || r.x1.is_nan() || r.y1.is_nan()
}
