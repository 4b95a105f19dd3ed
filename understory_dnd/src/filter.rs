// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate selection: which droppables is the dragged item plausibly over?
//!
//! ## Rules
//!
//! Each droppable runs through these steps in order. The first one that decides wins.
//!
//! 1. Disabled droppables are rejected.
//! 2. Droppables without a visible active region are rejected.
//! 3. Droppables whose active region does not strictly overlap the dragged box are rejected.
//! 4. If the dragged box's center is inside the active region (edges included), accept.
//! 5. Otherwise look at the droppable's cross axis:
//!    - the dragged box spans the whole active region on that axis: accept;
//!    - its start edge is inside the region: accept if it is strictly before the region's center line;
//!    - otherwise: accept if its end edge is strictly after the center line.
//!
//! An edge sitting exactly on the center line is not enough. Requiring an edge to
//! cross the midpoint keeps a box between two adjacent lists from qualifying for
//! both through its edges alone.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::geometry::{has_overlap, is_nan, is_position_in_frame, is_within};
use crate::types::Droppable;

/// Outcome of running one droppable through the candidate rules.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// Rejected: the droppable is disabled.
    Disabled,
    /// Rejected: the droppable has no visible region.
    Hidden,
    /// Rejected: no strict overlap with the dragged box.
    NoOverlap,
    /// Accepted: the dragged box's center is inside the active region.
    CenterInside,
    /// Accepted: the dragged box spans the active region on the cross axis.
    CoversCrossAxis,
    /// Accepted: the start edge crossed the cross-axis center line.
    StartPastCenter,
    /// Accepted: the end edge crossed the cross-axis center line.
    EndPastCenter,
    /// Rejected: the contained edge has not crossed the cross-axis center line.
    ShortOfCenter,
}

impl Verdict {
    /// Whether this verdict makes the droppable a candidate.
    #[inline]
    pub const fn accepts(self) -> bool {
        matches!(
            self,
            Self::CenterInside | Self::CoversCrossAxis | Self::StartPastCenter | Self::EndPastCenter
        )
    }
}

/// Run the candidate rules for a single droppable.
///
/// `page_border_box` is the dragged item's current page-space border box.
///
/// ```
/// use kurbo::Rect;
/// use understory_dnd::{Axis, BoxModel, Droppable};
/// use understory_dnd::filter::{is_candidate, Verdict};
///
/// let list = Droppable::new(
///     1_u32,
///     Axis::Vertical,
///     BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 100.0)),
/// );
/// let dragging = Rect::new(40.0, 40.0, 60.0, 60.0);
/// assert_eq!(is_candidate(dragging, &list), Verdict::CenterInside);
/// ```
pub fn is_candidate<K>(page_border_box: Rect, droppable: &Droppable<K>) -> Verdict {
    if !droppable.is_enabled() {
        return Verdict::Disabled;
    }

    let Some(active) = droppable.subject.active else {
        return Verdict::Hidden;
    };

    debug_assert!(
        !is_nan(page_border_box) && !is_nan(active),
        "drop target geometry must not contain NaN"
    );

    if !has_overlap(page_border_box, active) {
        return Verdict::NoOverlap;
    }

    if is_position_in_frame(active, page_border_box.center()) {
        return Verdict::CenterInside;
    }

    let axis = droppable.axis;
    let child_center = axis.cross_axis_line(active.center());
    let cross_axis_start = axis.cross_axis_start(page_border_box);
    let cross_axis_end = axis.cross_axis_end(page_border_box);

    let lower = axis.cross_axis_start(active);
    let upper = axis.cross_axis_end(active);
    let is_start_contained = is_within(lower, upper, cross_axis_start);
    let is_end_contained = is_within(lower, upper, cross_axis_end);

    if !is_start_contained && !is_end_contained {
        return Verdict::CoversCrossAxis;
    }

    if is_start_contained {
        return if cross_axis_start < child_center {
            Verdict::StartPastCenter
        } else {
            Verdict::ShortOfCenter
        };
    }

    if cross_axis_end > child_center {
        Verdict::EndPastCenter
    } else {
        Verdict::ShortOfCenter
    }
}

/// Collect every droppable that passes [`is_candidate`], in iteration order.
pub fn candidates<'a, K, I>(page_border_box: Rect, droppables: I) -> Vec<&'a Droppable<K>>
where
    K: Debug + 'a,
    I: IntoIterator<Item = &'a Droppable<K>>,
{
    droppables
        .into_iter()
        .filter(|d| {
            let verdict = is_candidate(page_border_box, *d);
            tracing::trace!(droppable = ?d.id, ?verdict, "candidate check");
            verdict.accepts()
        })
        .collect()
}
