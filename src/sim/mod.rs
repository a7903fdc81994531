//! Fixed-step match simulation
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - One tick per call, no delta time
//! - Fixed update order (red before blue, cars before ball)
//! - Field size passed in every tick, never cached

pub mod ball;
pub mod collision;
pub mod input;
pub mod motion;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use ball::Ball;
pub use collision::{CollisionResult, resolve_ball_collisions};
pub use input::{Button, ButtonState, ControlBinding, Controls, InputSnapshot};
pub use motion::{Field, WallContacts, apply_friction, bounce_axis, bounce_in_field, clamp_speed};
pub use snapshot::{BallView, RenderSnapshot, VehicleView};
pub use state::{GameEvent, GameState, GoalBand, MatchPhase, MatchState, Team, detect_goal};
pub use tick::{TickOutput, tick};
pub use vehicle::Vehicle;
