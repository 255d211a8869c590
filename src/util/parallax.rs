//! Pointer-driven parallax offsets for the decorative particles.
//!
//! Particle `i` (1-based, document order) moves by
//! `(mx, my) * PARTICLE_TRAVEL_PX * PARTICLE_SPEED_STEP * i`, where `mx`/`my`
//! are the pointer position normalized to `[-0.5, 0.5]` around the viewport
//! center. Later particles drift further. No easing: the latest pointer
//! position fully determines every transform.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::{PARTICLE_SPEED_STEP, PARTICLE_TRAVEL_PX};

/// Pointer position normalized around the viewport center.
///
/// A degenerate viewport (zero or negative size) yields a centered pointer.
#[must_use]
pub fn normalized_pointer(x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
    let axis = |pos: f64, extent: f64| if extent > 0.0 { pos / extent - 0.5 } else { 0.0 };
    (axis(x, viewport_w), axis(y, viewport_h))
}

/// Translation in CSS pixels for the particle at 1-based `index`.
#[must_use]
pub fn particle_offset(index: usize, mx: f64, my: f64) -> (f64, f64) {
    let speed = PARTICLE_SPEED_STEP * index_to_f64(index);
    (mx * PARTICLE_TRAVEL_PX * speed, my * PARTICLE_TRAVEL_PX * speed)
}

/// CSS `transform` values for `count` particles given a pointer position.
#[must_use]
pub fn particle_transforms(count: usize, x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> Vec<String> {
    let (mx, my) = normalized_pointer(x, y, viewport_w, viewport_h);
    (1..=count)
        .map(|index| {
            let (dx, dy) = particle_offset(index, mx, my);
            format!("translate({dx}px, {dy}px)")
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn index_to_f64(index: usize) -> f64 {
    index as f64
}
