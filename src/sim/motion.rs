//! Scalar motion helpers shared by vehicles and the ball
//!
//! Everything here works in per-tick units: friction is a multiplier applied
//! once per tick and velocity is added to position once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};

/// Playable area reported by the host, origin at the top-left corner
///
/// Passed in every tick so a resized canvas takes effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Which walls a body touched during its last step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Per-tick friction decay
#[inline]
pub fn apply_friction(vel: Vec2, friction: f32) -> Vec2 {
    vel * friction
}

/// Scale velocity down to `max_speed`, preserving direction
///
/// Only divides when the speed exceeds the limit, so a zero vector passes
/// through untouched.
#[inline]
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed && speed > 0.0 {
        vel * (max_speed / speed)
    } else {
        vel
    }
}

/// Resolve one axis against `[half_extent, bound - half_extent]`
///
/// Returns the corrected `(position, velocity)` and which side was crossed:
/// `Some(false)` for the low wall, `Some(true)` for the high wall. The low
/// wall is tested first, so a bound smaller than the body pins it to the high
/// wall.
#[inline]
pub fn bounce_axis(
    pos: f32,
    vel: f32,
    half_extent: f32,
    bound: f32,
    restitution: f32,
) -> (f32, f32, Option<bool>) {
    let (mut pos, mut vel, mut hit) = (pos, vel, None);
    if pos < half_extent {
        pos = half_extent;
        vel *= restitution;
        hit = Some(false);
    }
    if pos > bound - half_extent {
        pos = bound - half_extent;
        vel *= restitution;
        hit = Some(true);
    }
    (pos, vel, hit)
}

/// Resolve both axes independently and report the walls touched
pub fn bounce_in_field(
    pos: &mut Vec2,
    vel: &mut Vec2,
    half_extents: Vec2,
    field: Field,
    restitution: f32,
) -> WallContacts {
    let mut contacts = WallContacts::default();

    let (x, vx, hit_x) = bounce_axis(pos.x, vel.x, half_extents.x, field.width, restitution);
    match hit_x {
        Some(false) => contacts.left = true,
        Some(true) => contacts.right = true,
        None => {}
    }

    let (y, vy, hit_y) = bounce_axis(pos.y, vel.y, half_extents.y, field.height, restitution);
    match hit_y {
        Some(false) => contacts.top = true,
        Some(true) => contacts.bottom = true,
        None => {}
    }

    *pos = Vec2::new(x, y);
    *vel = Vec2::new(vx, vy);
    contacts
}
