//! Shared numeric constants for the diagram crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Minimum zoom scale the camera ever reports.
pub const MIN_SCALE: f64 = 0.8;

/// Maximum zoom scale the camera ever reports.
pub const MAX_SCALE: f64 = 2.5;

/// Scale change per vertical wheel pixel. Wheel up (negative delta) zooms in.
pub const WHEEL_ZOOM_RATE: f64 = 0.001;

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width below which the diagram renders its mobile layout.
/// Crossing this boundary in either direction resets the camera.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
