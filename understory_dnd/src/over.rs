// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry point: which droppable is the dragged item over?
//!
//! ## Flow
//!
//! 1. Run every droppable through the [`filter`](crate::filter) rules.
//! 2. No candidates: the item is over nothing.
//! 3. One candidate: that is the answer.
//! 4. Several: the [`NestingPolicy`] picks one.
//!
//! Evaluation is pure. Call it on every pointer move with fresh snapshots.

use core::fmt::Debug;

use kurbo::Rect;

use crate::filter::candidates;
use crate::nesting::NestingPolicy;
use crate::types::{Draggable, Droppable};

/// Configurable drop target resolver.
///
/// ## Usage
///
/// - Construct with [`Resolver::new`] for the default containment-chain nesting.
/// - Optionally call [`Resolver::set_nesting_policy`].
/// - Call [`Resolver::resolve`] for every drag movement.
///
/// For the default configuration, [`droppable_over`] is a shorthand.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Resolver {
    nesting: NestingPolicy,
}

impl Resolver {
    /// Create a resolver with default policies.
    pub const fn new() -> Self {
        Self {
            nesting: NestingPolicy::ContainmentChain,
        }
    }

    /// Create a resolver with an explicit nesting policy.
    pub const fn with_nesting_policy(nesting: NestingPolicy) -> Self {
        Self { nesting }
    }

    /// Set the policy used when several droppables are candidates.
    pub fn set_nesting_policy(&mut self, nesting: NestingPolicy) {
        self.nesting = nesting;
    }

    /// The policy used when several droppables are candidates.
    pub fn nesting_policy(&self) -> NestingPolicy {
        self.nesting
    }

    /// Resolve the droppable the dragged item is over, if any.
    ///
    /// - `page_border_box`: the dragged item's current page-space border box.
    /// - `draggable`: the record of the dragged item. Axis information comes from each droppable.
    /// - `droppables`: every droppable, in a stable order. Earlier entries win unresolvable ties.
    pub fn resolve<'a, D, K, I>(
        &self,
        page_border_box: Rect,
        draggable: &Draggable<D, K>,
        droppables: I,
    ) -> Option<K>
    where
        D: Debug,
        K: Copy + Debug + 'a,
        I: IntoIterator<Item = &'a Droppable<K>>,
    {
        let _span = tracing::trace_span!("droppable_over", draggable = ?draggable.id).entered();

        let found = candidates(page_border_box, droppables);
        match found.as_slice() {
            [] => None,
            [only] => Some(only.id),
            many => {
                tracing::debug!(
                    count = many.len(),
                    policy = ?self.nesting,
                    "several droppables qualify, resolving nesting"
                );
                self.nesting.select(many)
            }
        }
    }
}

/// Resolve the droppable the dragged item is over with default policies.
///
/// See [`Resolver::resolve`].
///
/// ```
/// use kurbo::Rect;
/// use understory_dnd::{droppable_over, Axis, BoxModel, Draggable, Droppable};
///
/// let board = Droppable::new("board", Axis::Horizontal, BoxModel::from_border_box(Rect::new(0.0, 0.0, 900.0, 600.0)));
/// let column = Droppable::new("column", Axis::Vertical, BoxModel::from_border_box(Rect::new(20.0, 20.0, 300.0, 580.0)));
/// let card = Draggable::new(7_u32, "column", 0, BoxModel::from_border_box(Rect::new(30.0, 30.0, 290.0, 90.0)));
///
/// // Over the column, which sits inside the board.
/// let dragging = Rect::new(40.0, 200.0, 300.0, 260.0);
/// assert_eq!(droppable_over(dragging, &card, [&board, &column]), Some("column"));
///
/// // Outside everything.
/// let away = Rect::new(1000.0, 0.0, 1200.0, 60.0);
/// assert_eq!(droppable_over(away, &card, [&board, &column]), None);
/// ```
pub fn droppable_over<'a, D, K, I>(
    page_border_box: Rect,
    draggable: &Draggable<D, K>,
    droppables: I,
) -> Option<K>
where
    D: Debug,
    K: Copy + Debug + 'a,
    I: IntoIterator<Item = &'a Droppable<K>>,
{
    Resolver::new().resolve(page_border_box, draggable, droppables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Axis, BoxModel, DroppableFlags};
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Insets;

    fn r(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect::new(left, top, right, bottom)
    }

    fn droppable(id: u32, axis: Axis, rect: Rect) -> Droppable<u32> {
        Droppable::new(id, axis, BoxModel::from_border_box(rect))
    }

    fn draggable() -> Draggable<u32, u32> {
        Draggable::new(100, 1, 0, BoxModel::from_border_box(r(0.0, 0.0, 20.0, 20.0)))
    }

    #[test]
    fn centered_inside_single_droppable() {
        let d = droppable(1, Axis::Vertical, r(0.0, 0.0, 100.0, 100.0));
        let dragging = r(40.0, 40.0, 60.0, 60.0);
        assert_eq!(droppable_over(dragging, &draggable(), [&d]), Some(1));
    }

    #[test]
    fn outside_everything_is_none() {
        let ds = vec![
            droppable(1, Axis::Vertical, r(0.0, 0.0, 100.0, 100.0)),
            droppable(2, Axis::Horizontal, r(200.0, 0.0, 300.0, 100.0)),
        ];
        let dragging = r(120.0, 150.0, 180.0, 190.0);
        assert_eq!(droppable_over(dragging, &draggable(), &ds), None);
    }

    #[test]
    fn empty_droppables_is_none() {
        let ds: Vec<Droppable<u32>> = Vec::new();
        assert_eq!(
            droppable_over(r(0.0, 0.0, 10.0, 10.0), &draggable(), &ds),
            None
        );
    }

    #[test]
    fn no_overlap_never_selected_for_any_axis() {
        let dragging = r(100.0, 0.0, 200.0, 100.0);
        for axis in [Axis::Vertical, Axis::Horizontal] {
            // Shares an edge only.
            let d = droppable(1, axis, r(0.0, 0.0, 100.0, 100.0));
            assert_eq!(droppable_over(dragging, &draggable(), [&d]), None);
        }
    }

    #[test]
    fn disabled_or_hidden_never_selected() {
        let dragging = r(40.0, 40.0, 60.0, 60.0);
        let off = droppable(1, Axis::Vertical, r(0.0, 0.0, 100.0, 100.0))
            .with_flags(DroppableFlags::empty());
        let hidden = droppable(2, Axis::Vertical, r(0.0, 0.0, 100.0, 100.0)).with_active(None);
        assert_eq!(droppable_over(dragging, &draggable(), [&off, &hidden]), None);
    }

    #[test]
    fn disabled_inner_falls_back_to_outer() {
        let dragging = r(140.0, 140.0, 160.0, 160.0);
        let outer = droppable(1, Axis::Vertical, r(0.0, 0.0, 300.0, 300.0));
        let inner = droppable(2, Axis::Vertical, r(100.0, 100.0, 200.0, 200.0))
            .with_flags(DroppableFlags::empty());
        assert_eq!(
            droppable_over(dragging, &draggable(), [&outer, &inner]),
            Some(1)
        );
    }

    #[test]
    fn start_edge_past_cross_axis_center() {
        // Vertical list x 0..100; dragged box x 10..50 with its center below the list.
        let d = droppable(1, Axis::Vertical, r(0.0, 0.0, 100.0, 100.0));
        let dragging = r(10.0, 80.0, 50.0, 200.0);
        assert_eq!(droppable_over(dragging, &draggable(), [&d]), Some(1));
    }

    #[test]
    fn single_candidate_skips_nesting() {
        // Only `b` qualifies even though `a` would contain it.
        let a = droppable(1, Axis::Vertical, r(0.0, 0.0, 1000.0, 1000.0)).with_active(None);
        let b = droppable(2, Axis::Vertical, r(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            droppable_over(r(40.0, 40.0, 60.0, 60.0), &draggable(), [&a, &b]),
            Some(2)
        );
    }

    #[test]
    fn innermost_of_three_nested() {
        let a = droppable(1, Axis::Vertical, r(0.0, 0.0, 300.0, 300.0));
        let b = droppable(2, Axis::Horizontal, r(50.0, 50.0, 250.0, 250.0));
        let c = droppable(3, Axis::Vertical, r(100.0, 100.0, 200.0, 200.0));
        let dragging = r(140.0, 140.0, 160.0, 160.0);
        assert_eq!(
            droppable_over(dragging, &draggable(), [&a, &b, &c]),
            Some(3)
        );
        assert_eq!(
            droppable_over(dragging, &draggable(), [&c, &a, &b]),
            Some(3)
        );
    }

    #[test]
    fn large_item_over_siblings_picks_first_scanned() {
        let left = droppable(1, Axis::Vertical, r(0.0, 0.0, 100.0, 300.0));
        let right = droppable(2, Axis::Vertical, r(100.0, 0.0, 200.0, 300.0));
        let dragging = r(-50.0, 100.0, 250.0, 200.0);
        assert_eq!(
            droppable_over(dragging, &draggable(), [&left, &right]),
            Some(1)
        );
        assert_eq!(
            droppable_over(dragging, &draggable(), [&right, &left]),
            Some(2)
        );
    }

    #[test]
    fn nesting_uses_client_content_box_not_active_region() {
        // The outer list is scrolled so its page-space region moved, but
        // containment is still judged in client space.
        let outer = droppable(1, Axis::Vertical, r(0.0, 0.0, 300.0, 300.0))
            .with_page_offset(kurbo::Vec2::new(0.0, 50.0));
        let mut inner = droppable(2, Axis::Vertical, r(0.0, 0.0, 300.0, 300.0));
        inner.client = inner.client.with_padding(Insets::uniform(20.0));
        let dragging = r(140.0, 140.0, 160.0, 160.0);
        assert_eq!(
            droppable_over(dragging, &draggable(), [&outer, &inner]),
            Some(2)
        );
    }

    #[test]
    fn accepts_map_values_in_key_order() {
        let mut map = BTreeMap::new();
        map.insert(2_u32, droppable(2, Axis::Vertical, r(100.0, 0.0, 200.0, 300.0)));
        map.insert(1_u32, droppable(1, Axis::Vertical, r(0.0, 0.0, 100.0, 300.0)));
        let dragging = r(-50.0, 100.0, 250.0, 200.0);
        assert_eq!(droppable_over(dragging, &draggable(), map.values()), Some(1));
    }

    #[test]
    fn repeated_calls_agree() {
        let ds = vec![
            droppable(1, Axis::Vertical, r(0.0, 0.0, 300.0, 300.0)),
            droppable(2, Axis::Vertical, r(100.0, 100.0, 200.0, 200.0)),
        ];
        let dragging = r(140.0, 140.0, 160.0, 160.0);
        let first = droppable_over(dragging, &draggable(), &ds);
        let second = droppable_over(dragging, &draggable(), &ds);
        assert_eq!(first, second);
        assert_eq!(first, Some(2));
    }

    #[test]
    fn resolver_policy_changes_selection() {
        let a = droppable(1, Axis::Vertical, r(0.0, 0.0, 400.0, 400.0));
        let c = droppable(3, Axis::Vertical, r(150.0, 150.0, 260.0, 260.0));
        let b = droppable(2, Axis::Vertical, r(0.0, 0.0, 220.0, 220.0));
        let d = droppable(4, Axis::Vertical, r(100.0, 100.0, 210.0, 210.0));
        let dragging = r(190.0, 190.0, 210.0, 210.0);

        let mut resolver = Resolver::new();
        assert_eq!(resolver.nesting_policy(), NestingPolicy::ContainmentChain);
        assert_eq!(
            resolver.resolve(dragging, &draggable(), [&a, &c, &b, &d]),
            Some(3)
        );

        resolver.set_nesting_policy(NestingPolicy::DeepestContainment);
        assert_eq!(
            resolver.resolve(dragging, &draggable(), [&a, &c, &b, &d]),
            Some(4)
        );
        assert_eq!(
            Resolver::with_nesting_policy(NestingPolicy::DeepestContainment),
            resolver
        );
    }
}
