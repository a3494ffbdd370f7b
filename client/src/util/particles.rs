//! Motion model for the decorative particle background.
//!
//! Pure math so the movement rules are testable natively; the component
//! layer owns the canvas element, the animation loop, and resize plumbing.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

/// Pointer influence radius in CSS pixels.
pub const REPEL_RADIUS: f64 = 120.0;

/// Maximum per-frame push applied to a particle at the pointer's center.
pub const REPEL_STRENGTH: f64 = 0.6;

/// One drifting dot.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// Advance one frame: repel from the pointer, drift by velocity, and
    /// wrap around the viewport edges.
    pub fn step(&mut self, width: f64, height: f64, pointer: Option<(f64, f64)>) {
        if let Some((px, py)) = pointer {
            let dx = self.x - px;
            let dy = self.y - py;
            let dist = dx.hypot(dy);
            if dist > 0.0 && dist < REPEL_RADIUS {
                let push = (REPEL_RADIUS - dist) / REPEL_RADIUS * REPEL_STRENGTH;
                self.x += dx / dist * push;
                self.y += dy / dist * push;
            }
        }
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }
}

/// Particle count for a viewport, scaled by area within fixed bounds.
#[must_use]
pub fn particle_count(width: f64, height: f64) -> usize {
    let by_area = (width * height) / 18_000.0;
    by_area.clamp(24.0, 96.0) as usize
}

/// Wrap a coordinate into `[0, max)`, re-entering from the opposite edge.
fn wrap(v: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return v;
    }
    if v < 0.0 {
        v + max
    } else if v >= max {
        v - max
    } else {
        v
    }
}
