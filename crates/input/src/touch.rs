//! Software touch state with move filtering.
//!
//! Touch controllers report the contact position on every poll. Sending each
//! sample would flood the UI queue with sub-pixel jitter, so a new position
//! becomes a move event only once it is far enough from the last reported
//! one: [`FIRST_MOVE_PIXEL_LIMIT`] for the first move after the press,
//! [`MOVE_PIXEL_LIMIT`] afterwards.
//!
//! As with buttons, the state only changes when the UI accepted the event.

use platform::config::{FIRST_MOVE_PIXEL_LIMIT, MOVE_PIXEL_LIMIT};
use platform::EventSink;

use crate::generator::EventGenerator;

/// Tracks whether the application sees the touch as down, and where.
pub struct TouchHelper {
    first_move_limit: u32,
    move_limit: u32,
    /// Last position the application was told about; `None` while up.
    last: Option<(i32, i32)>,
    moved: bool,
}

impl TouchHelper {
    /// Helper with the board's default move thresholds.
    pub const fn new() -> Self {
        Self::with_limits(FIRST_MOVE_PIXEL_LIMIT, MOVE_PIXEL_LIMIT)
    }

    /// Helper with custom move thresholds, in pixels.
    pub const fn with_limits(first_move_limit: u32, move_limit: u32) -> Self {
        Self {
            first_move_limit,
            move_limit,
            last: None,
            moved: false,
        }
    }

    /// Whether the application currently sees the touch as down.
    pub fn is_pressed(&self) -> bool {
        self.last.is_some()
    }

    /// Last position reported to the application, if down.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.last
    }

    /// Contact sampled at `(x, y)`.
    ///
    /// The first contact is a press; while down, this behaves like
    /// [`moved`](Self::moved).
    pub fn pressed<S: EventSink>(&mut self, generator: &mut EventGenerator<S>, x: i32, y: i32) {
        if self.last.is_some() {
            self.moved(generator, x, y);
        } else if generator.touch_pressed(x, y).is_ok() {
            self.last = Some((x, y));
            self.moved = false;
        }
    }

    /// Contact moved to `(x, y)`. Ignored while up.
    pub fn moved<S: EventSink>(&mut self, generator: &mut EventGenerator<S>, x: i32, y: i32) {
        let Some((last_x, last_y)) = self.last else {
            return;
        };

        let limit = if self.moved {
            self.move_limit
        } else {
            self.first_move_limit
        };
        if x.abs_diff(last_x) <= limit && y.abs_diff(last_y) <= limit {
            return;
        }

        if generator.touch_moved(x, y).is_ok() {
            self.last = Some((x, y));
            self.moved = true;
        }
    }

    /// Contact lifted. Ignored while up.
    pub fn released<S: EventSink>(&mut self, generator: &mut EventGenerator<S>) {
        if self.last.is_some() && generator.touch_released().is_ok() {
            self.last = None;
            self.moved = false;
        }
    }
}

impl Default for TouchHelper {
    fn default() -> Self {
        Self::new()
    }
}
