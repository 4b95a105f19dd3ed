// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a card across a board of columns.
//!
//! The board itself is a horizontal droppable containing three vertical columns.
//! Moving a card from one column to the next passes through the gutter, where
//! neither column qualifies and the board is the only match.
//!
//! Run:
//! - `cargo run -p understory_demos --example dnd_board`

use kurbo::Rect;
use understory_dnd::{Axis, BoxModel, Draggable, Droppable, droppable_over};

fn column(id: &'static str, x0: f64) -> Droppable<&'static str> {
    Droppable::new(
        id,
        Axis::Vertical,
        BoxModel::from_border_box(Rect::new(x0, 20.0, x0 + 290.0, 680.0)),
    )
}

fn main() {
    let droppables = [
        Droppable::new(
            "board",
            Axis::Horizontal,
            BoxModel::from_border_box(Rect::new(0.0, 0.0, 960.0, 700.0)),
        ),
        column("todo", 20.0),
        column("doing", 330.0),
        column("done", 640.0),
    ];

    let card = Draggable::new(
        "card-1",
        "todo",
        0,
        BoxModel::from_border_box(Rect::new(30.0, 300.0, 290.0, 360.0)),
    );

    println!("== Dragging {:?} to the right ==", card.id);
    let mut path = Vec::new();
    for x0 in [30.0, 110.0, 190.0, 270.0, 350.0] {
        let dragging = Rect::new(x0, 300.0, x0 + 260.0, 360.0);
        let over = droppable_over(dragging, &card, &droppables);
        println!("  x={x0:>5}: over {over:?}");
        path.push(over);
    }

    assert_eq!(
        path,
        vec![
            Some("todo"),
            Some("todo"),
            Some("board"),
            Some("doing"),
            Some("doing"),
        ]
    );

    // Far outside the board.
    let away = Rect::new(1200.0, 300.0, 1460.0, 360.0);
    assert_eq!(droppable_over(away, &card, &droppables), None);
}
