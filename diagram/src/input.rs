//! Gesture state machine for the diagram viewer.
//!
//! `Gesture` tracks the active pointer interaction between down/start and
//! up/end events, carrying just enough context to turn the next move event
//! into an incremental camera mutation. Mouse drag and single-finger touch
//! share the `Dragging` variant; two fingers switch to `Pinching`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// The active gesture being tracked between pointer events.
#[derive(Debug, Clone, Copy, Default)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// One pointer (mouse drag or single touch) panning the diagram.
    Dragging {
        /// Screen position at the previous event, used to compute the pan delta.
        last_screen: Point,
    },
    /// Two-finger pinch changing the zoom level.
    Pinching {
        /// Distance between the touch points at the previous event.
        last_distance: f64,
    },
}

/// Straight-line distance between two touch points.
#[must_use]
pub fn touch_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
