//! Rocket Soccer - two rocket cars, one ball, two goals
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (vehicles, ball, collisions, scoring)
//! - `renderer`: Draw-command generation and the Canvas 2D backend
//! - `settings`: Player preferences (key bindings, HUD toggles)
//! - `tuning`: Data-driven physics constants
//! - `error`: Configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
///
/// Values are in pixels and per-tick units; the simulation advances exactly one
/// tick per display refresh.
pub mod consts {
    /// Vehicle footprint
    pub const CAR_WIDTH: f32 = 35.0;
    pub const CAR_HEIGHT: f32 = 25.0;

    /// Vehicle motion
    pub const CAR_ACCELERATION: f32 = 0.4;
    pub const CAR_MAX_SPEED: f32 = 10.0;
    pub const CAR_FRICTION: f32 = 0.96;
    /// Reverse thrust as a fraction of forward acceleration
    pub const CAR_REVERSE_FACTOR: f32 = 0.5;
    /// Heading change per tick while a turn button is held (radians)
    pub const CAR_TURN_STEP: f32 = 0.1;
    /// Velocity multiplier on wall contact (inverts and dampens)
    pub const CAR_WALL_RESTITUTION: f32 = -0.5;

    /// Boost economy
    pub const BOOST_THRUST: f32 = 0.7;
    pub const BOOST_DRAIN: f32 = 1.5;
    pub const BOOST_RECHARGE: f32 = 1.2;
    pub const BOOST_MAX: f32 = 150.0;
    /// Reserve granted at spawn and after every goal (not BOOST_MAX)
    pub const BOOST_START: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_FRICTION: f32 = 0.99;
    pub const BALL_GRAVITY: f32 = 0.0;
    pub const BALL_WALL_RESTITUTION: f32 = -0.8;

    /// Ball hit response: speed = BASE + vehicle_speed * SPEED_FACTOR
    pub const HIT_BASE_FORCE: f32 = 12.0;
    pub const HIT_SPEED_FACTOR: f32 = 1.5;

    /// Spawn points
    pub const RED_SPAWN: (f32, f32) = (200.0, 400.0);
    pub const BLUE_SPAWN: (f32, f32) = (1000.0, 400.0);
    pub const BALL_SPAWN: (f32, f32) = (600.0, 400.0);

    /// Half the height of the scoring band around the field's vertical midline
    pub const GOAL_HALF_HEIGHT: f32 = 100.0;

    /// Field size used before the host reports one
    pub const DEFAULT_FIELD_WIDTH: f32 = 1200.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 800.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
///
/// The zero vector maps to (0, 0): `atan2(0, 0)` is defined as 0.
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    if pos == Vec2::ZERO {
        return (0.0, 0.0);
    }
    (pos.length(), pos.y.atan2(pos.x))
}
