// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate verdicts for clipped, hidden, and disabled droppables.
//!
//! Only the active region of a droppable counts. A list scrolled inside a short
//! container is clipped to the container, a collapsed list has no active region
//! at all, and a disabled list never qualifies.
//!
//! Run:
//! - `cargo run -p understory_demos --example dnd_scroll_clip`

use kurbo::Rect;
use understory_dnd::filter::is_candidate;
use understory_dnd::{
    Axis, BoxModel, Draggable, Droppable, DroppableFlags, Verdict, droppable_over,
};

fn list(id: &'static str, rect: Rect) -> Droppable<&'static str> {
    Droppable::new(id, Axis::Vertical, BoxModel::from_border_box(rect))
}

fn main() {
    let droppables = [
        // Content is 1200 tall but its scroll container only shows the first 400.
        list("backlog", Rect::new(0.0, 0.0, 300.0, 1200.0))
            .with_active(Some(Rect::new(0.0, 0.0, 300.0, 400.0))),
        list("archive", Rect::new(0.0, 420.0, 300.0, 800.0)).with_flags(DroppableFlags::empty()),
        list("collapsed", Rect::new(0.0, 420.0, 300.0, 800.0)).with_active(None),
        list("sprint", Rect::new(0.0, 420.0, 300.0, 800.0)),
    ];

    let item = Draggable::new(
        42_u32,
        "backlog",
        3,
        BoxModel::from_border_box(Rect::new(20.0, 200.0, 280.0, 260.0)),
    );
    let dragging = Rect::new(20.0, 500.0, 280.0, 560.0);

    println!("== Verdicts ==");
    let verdicts: Vec<_> = droppables
        .iter()
        .map(|d| {
            let v = is_candidate(dragging, d);
            println!("  {:>10}: {:?}", d.id, v);
            v
        })
        .collect();

    assert_eq!(
        verdicts,
        vec![
            Verdict::NoOverlap,
            Verdict::Disabled,
            Verdict::Hidden,
            Verdict::CenterInside,
        ]
    );

    let over = droppable_over(dragging, &item, &droppables);
    println!("== Over ==\n  {over:?}");
    assert_eq!(over, Some("sprint"));
}
