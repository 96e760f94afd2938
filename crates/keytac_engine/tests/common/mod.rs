//! Shared helpers for driving a controller through key events.

#![allow(dead_code)]

use keytac_engine::{Cell, Controller, Direction, Directive, InputEvent, Playable};

/// Steers the cursor to `target` with directional events.
pub fn steer(controller: &mut Controller, target: Cell) {
    loop {
        let here = controller.state().cursor().cell();
        let direction = if here.row() > target.row() {
            Direction::Up
        } else if here.row() < target.row() {
            Direction::Down
        } else if here.col() > target.col() {
            Direction::Left
        } else if here.col() < target.col() {
            Direction::Right
        } else {
            return;
        };
        assert_eq!(
            controller.handle_input(InputEvent::Move(direction)),
            Directive::Redraw
        );
    }
}

/// Steers to `(row, col)` and presses select.
pub fn play(controller: &mut Controller, row: usize, col: usize) -> Directive {
    let cell = Cell::new(row, col).expect("test cell in range");
    steer(controller, cell);
    controller.handle_input(InputEvent::Select)
}
