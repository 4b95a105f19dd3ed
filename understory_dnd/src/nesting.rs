// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nesting resolution: pick one droppable when several are candidates.
//!
//! Several candidates usually means nested lists or a very large dragged item.
//! The innermost list wins, so dropping into a sub-list takes priority over
//! its parent. Containment is judged on client-space content boxes.
//!
//! Two strategies are available through [`NestingPolicy`]:
//! - [`innermost`] makes one pass and compares each candidate against the
//!   current selection only. It is exact for a chain of nested lists. Sibling
//!   candidates that do not contain each other leave the earlier one selected.
//! - [`deepest`] counts, for every candidate, how many other candidates contain it
//!   and selects the highest count. It also handles several independent subtrees.
//!
//! Neither strategy handles droppables whose negative margins push a child's
//! content box outside its parent's.

use crate::geometry::contains_rect;
use crate::types::Droppable;

/// Strategy for choosing among several candidates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum NestingPolicy {
    /// Single pass against the running selection. See [`innermost`].
    #[default]
    ContainmentChain,
    /// Maximum containment depth across all candidates. See [`deepest`].
    DeepestContainment,
}

impl NestingPolicy {
    /// Apply this policy to `candidates`.
    pub fn select<K: Copy>(self, candidates: &[&Droppable<K>]) -> Option<K> {
        match self {
            Self::ContainmentChain => innermost(candidates),
            Self::DeepestContainment => deepest(candidates),
        }
    }
}

/// Select the innermost candidate of a containment chain.
///
/// Starting from the first candidate, each later candidate whose content box
/// fits inside the current selection's (edges included) becomes the selection.
/// Returns `None` only for an empty slice.
///
/// ```
/// use kurbo::Rect;
/// use understory_dnd::{Axis, BoxModel, Droppable};
/// use understory_dnd::nesting::innermost;
///
/// let outer = Droppable::new('a', Axis::Vertical, BoxModel::from_border_box(Rect::new(0.0, 0.0, 300.0, 300.0)));
/// let inner = Droppable::new('b', Axis::Vertical, BoxModel::from_border_box(Rect::new(50.0, 50.0, 250.0, 250.0)));
/// assert_eq!(innermost(&[&outer, &inner]), Some('b'));
/// assert_eq!(innermost(&[&inner, &outer]), Some('b'));
/// ```
pub fn innermost<K: Copy>(candidates: &[&Droppable<K>]) -> Option<K> {
    let mut selected = candidates.first()?;
    for candidate in &candidates[1..] {
        if contains_rect(
            selected.client.content_box(),
            candidate.client.content_box(),
        ) {
            selected = candidate;
        }
    }
    Some(selected.id)
}

/// Select the candidate contained by the most other candidates.
///
/// Ties go to the earliest candidate. Returns `None` only for an empty slice.
pub fn deepest<K: Copy>(candidates: &[&Droppable<K>]) -> Option<K> {
    let mut best: Option<(usize, &Droppable<K>)> = None;
    for (i, &candidate) in candidates.iter().enumerate() {
        let content = candidate.client.content_box();
        let depth = candidates
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != i && contains_rect(other.client.content_box(), content))
            .count();
        match best {
            Some((d, _)) if d >= depth => {}
            _ => best = Some((depth, candidate)),
        }
    }
    best.map(|(_, d)| d.id)
}
