// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dnd --heading-base-level=0

//! Understory DnD: Kurbo-native drop target resolution.
//!
//! During a drag, this crate answers one question: which droppable is the dragged item over?
//!
//! - Filters droppables by enabled state, visibility, and strict overlap with the dragged box.
//! - Applies axis-aware edge rules when the dragged box straddles a list's cross-axis boundary.
//! - Prefers the innermost droppable when nested lists all qualify.
//!
//! ## Not a drag state machine
//!
//! This crate does not track pointers, measure elements, or convert coordinate spaces.
//! Upstream code measures each droppable's client box model and visible page-space region,
//! tracks where the dragged item currently is, and calls [`droppable_over`] on every move.
//! The result is either one droppable identifier or `None`.
//!
//! ## Coordinate spaces
//!
//! - Overlap and position tests use page space: the dragged `page_border_box` against each
//!   droppable's [`Subject::active`] region.
//! - Nesting resolution uses client space: each droppable's [`BoxModel::content_box`].
//!
//! ## API overview
//!
//! - [`Droppable`]: a drop target snapshot with an [`Axis`], [`DroppableFlags`], a client
//!   [`BoxModel`], and a page-space [`Subject`].
//! - [`Draggable`]: the record of the item being dragged.
//! - [`droppable_over`]: the entry point with default policies.
//! - [`Resolver`]: the entry point with a configurable [`NestingPolicy`].
//! - [`filter::is_candidate`] and [`filter::candidates`]: the per-droppable rules and their [`Verdict`].
//! - [`nesting::innermost`] and [`nesting::deepest`]: the two nesting strategies.
//! - [`geometry`]: the strict overlap test and the inclusive containment helpers.
//!
//! ## Limitations
//!
//! Nested droppables with negative margins, where a child's content box escapes its parent's,
//! are not resolved correctly.
//!
//! ## Diagnostics
//!
//! Each evaluation runs in a `droppable_over` [`tracing`] span. Candidate checks are
//! emitted at `trace` level and nesting resolution at `debug` level. No subscriber is installed.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_dnd::{droppable_over, Axis, BoxModel, Draggable, Droppable};
//!
//! // A vertical list with a nested sub-list.
//! let list = Droppable::new(
//!     1_u32,
//!     Axis::Vertical,
//!     BoxModel::from_border_box(Rect::new(0.0, 0.0, 300.0, 800.0)),
//! );
//! let sub_list = Droppable::new(
//!     2_u32,
//!     Axis::Vertical,
//!     BoxModel::from_border_box(Rect::new(20.0, 200.0, 280.0, 400.0)),
//! );
//! let item = Draggable::new(
//!     "item-0",
//!     1_u32,
//!     0,
//!     BoxModel::from_border_box(Rect::new(0.0, 0.0, 260.0, 60.0)),
//! );
//! let droppables = [list, sub_list];
//!
//! // Inside the sub-list: the innermost wins.
//! let dragging = Rect::new(20.0, 250.0, 280.0, 310.0);
//! assert_eq!(droppable_over(dragging, &item, &droppables), Some(2));
//!
//! // Below the sub-list but still inside the list.
//! let dragging = Rect::new(20.0, 600.0, 280.0, 660.0);
//! assert_eq!(droppable_over(dragging, &item, &droppables), Some(1));
//!
//! // Off to the side.
//! let dragging = Rect::new(400.0, 250.0, 660.0, 310.0);
//! assert_eq!(droppable_over(dragging, &item, &droppables), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod filter;
pub mod geometry;
pub mod nesting;
pub mod over;
pub mod types;

pub use filter::Verdict;
pub use nesting::NestingPolicy;
pub use over::{Resolver, droppable_over};
pub use types::{Axis, BoxModel, Draggable, Droppable, DroppableFlags, Subject};
