//! Wall collision for the viewport box
//!
//! Each axis is handled on its own: a corner hit reflects both components in
//! the same tick. A body moving faster than its margin per tick can overshoot
//! the wall before the clamp pulls it back; that is accepted.

use glam::Vec2;

use crate::viewport::Viewport;

/// Which walls were hit during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Reflect along one axis.
///
/// `pos` is the tentative (already advanced) coordinate. Returns the clamped
/// coordinate, the possibly negated velocity, and whether a wall was touched.
#[inline]
pub fn reflect_axis(pos: f32, vel: f32, margin: f32, extent: f32) -> (f32, f32, bool) {
    let far = extent - margin;
    if pos <= margin || pos >= far {
        // max(min) rather than clamp: the range is empty when extent < 2 * margin
        (pos.min(far).max(margin), -vel, true)
    } else {
        (pos, vel, false)
    }
}

/// Advance a body by one tick and bounce it off the viewport edges
pub fn step_in_viewport(pos: &mut Vec2, vel: &mut Vec2, margin: f32, viewport: Viewport) -> WallHit {
    let next = *pos + *vel;

    let (x, vx, hit_x) = reflect_axis(next.x, vel.x, margin, viewport.width);
    let (y, vy, hit_y) = reflect_axis(next.y, vel.y, margin, viewport.height);

    *pos = Vec2::new(x, y);
    *vel = Vec2::new(vx, vy);

    WallHit { x: hit_x, y: hit_y }
}
