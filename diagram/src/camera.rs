#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_RATE};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state for the diagram surface.
///
/// `offset_x` / `offset_y` are CSS pixel translations applied after scaling.
/// `scale` stays within `[MIN_SCALE, MAX_SCALE]` through every operation.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { scale: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl Camera {
    /// Zoom by a wheel delta, keeping the content under `pointer` fixed.
    ///
    /// The offset is corrected by `(pointer - offset) * (ratio - 1)` so the
    /// point under the cursor stays put while the rest of the diagram scales
    /// around it. A clamped scale produces a ratio of 1 and no movement.
    pub fn zoom_at(&mut self, pointer: Point, delta_y: f64) {
        let new_scale = clamp_scale(self.scale - delta_y * WHEEL_ZOOM_RATE);
        let ratio = new_scale / self.scale;
        self.offset_x -= (pointer.x - self.offset_x) * (ratio - 1.0);
        self.offset_y -= (pointer.y - self.offset_y) * (ratio - 1.0);
        self.scale = new_scale;
    }

    /// Multiply the scale by a pinch ratio.
    ///
    /// Unlike [`Camera::zoom_at`] this applies no offset correction: pinch
    /// zoom scales around the transform origin, not the gesture midpoint.
    /// That asymmetry matches the shipped touch behavior and is covered by
    /// tests; do not "fix" it here without changing the viewer contract.
    pub fn pinch_scale(&mut self, ratio: f64) {
        self.scale = clamp_scale(self.scale * ratio);
    }

    /// Translate the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Restore scale 1 and the origin offset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
