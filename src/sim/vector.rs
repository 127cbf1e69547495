//! 2D vector helpers
//!
//! Entities own their position, velocity and acceleration as plain `Vec2`
//! values. `Vec2` is `Copy`, so in-place add (`+=`), scale (`*=`, with
//! `*= 0.0` clearing) and copying (`let c = v;`) never alias another
//! entity's vector.

use glam::Vec2;

pub type Vector2 = Vec2;

/// Map `val` from range `from` to range `to` (affine, unclamped)
#[inline]
pub fn map_range(from: (f64, f64), to: (f64, f64), val: f64) -> f64 {
    let ((a1, a2), (b1, b2)) = (from, to);
    b1 + (val - a1) * (b2 - b1) / (a2 - a1)
}
