//! Data-driven game balance
//!
//! Every physics constant lives here so a JSON file can override any subset
//! of them. Missing fields fall back to the values in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Vehicle footprint, motion and boost economy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleTuning {
    pub width: f32,
    pub height: f32,
    pub acceleration: f32,
    pub max_speed: f32,
    /// Per-tick velocity multiplier
    pub friction: f32,
    pub reverse_factor: f32,
    /// Heading change per tick (radians)
    pub turn_step: f32,
    pub wall_restitution: f32,
    pub boost_thrust: f32,
    pub boost_drain: f32,
    pub boost_recharge: f32,
    pub max_boost: f32,
    pub starting_boost: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            width: CAR_WIDTH,
            height: CAR_HEIGHT,
            acceleration: CAR_ACCELERATION,
            max_speed: CAR_MAX_SPEED,
            friction: CAR_FRICTION,
            reverse_factor: CAR_REVERSE_FACTOR,
            turn_step: CAR_TURN_STEP,
            wall_restitution: CAR_WALL_RESTITUTION,
            boost_thrust: BOOST_THRUST,
            boost_drain: BOOST_DRAIN,
            boost_recharge: BOOST_RECHARGE,
            max_boost: BOOST_MAX,
            starting_boost: BOOST_START,
        }
    }
}

impl VehicleTuning {
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Ball size, decay and hit response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallTuning {
    pub radius: f32,
    pub friction: f32,
    /// Added to vertical velocity every tick (inert by default)
    pub gravity: f32,
    pub wall_restitution: f32,
    pub hit_base_force: f32,
    pub hit_speed_factor: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            friction: BALL_FRICTION,
            gravity: BALL_GRAVITY,
            wall_restitution: BALL_WALL_RESTITUTION,
            hit_base_force: HIT_BASE_FORCE,
            hit_speed_factor: HIT_SPEED_FACTOR,
        }
    }
}

/// Spawn points and goal mouths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub red_spawn: Vec2,
    pub blue_spawn: Vec2,
    pub ball_spawn: Vec2,
    /// Field size the spawn points were laid out for; smaller fields get the
    /// lineup scaled down from it
    pub layout_size: Vec2,
    pub goal_half_height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            red_spawn: Vec2::new(RED_SPAWN.0, RED_SPAWN.1),
            blue_spawn: Vec2::new(BLUE_SPAWN.0, BLUE_SPAWN.1),
            ball_spawn: Vec2::new(BALL_SPAWN.0, BALL_SPAWN.1),
            layout_size: Vec2::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
            goal_half_height: GOAL_HALF_HEIGHT,
        }
    }
}

/// Complete tuning table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub vehicle: VehicleTuning,
    pub ball: BallTuning,
    pub arena: ArenaTuning,
}

impl Tuning {
    /// Parse a (possibly partial) tuning table and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a tuning file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.vehicle;
        positive("vehicle.width", v.width)?;
        positive("vehicle.height", v.height)?;
        non_negative("vehicle.acceleration", v.acceleration)?;
        positive("vehicle.max_speed", v.max_speed)?;
        friction("vehicle.friction", v.friction)?;
        non_negative("vehicle.reverse_factor", v.reverse_factor)?;
        non_negative("vehicle.turn_step", v.turn_step)?;
        restitution("vehicle.wall_restitution", v.wall_restitution)?;
        non_negative("vehicle.boost_thrust", v.boost_thrust)?;
        non_negative("vehicle.boost_drain", v.boost_drain)?;
        non_negative("vehicle.boost_recharge", v.boost_recharge)?;
        positive("vehicle.max_boost", v.max_boost)?;
        non_negative("vehicle.starting_boost", v.starting_boost)?;
        if v.starting_boost > v.max_boost {
            return Err(ConfigError::invalid(
                "vehicle.starting_boost",
                format!("{} exceeds max_boost {}", v.starting_boost, v.max_boost),
            ));
        }

        let b = &self.ball;
        positive("ball.radius", b.radius)?;
        friction("ball.friction", b.friction)?;
        finite("ball.gravity", b.gravity)?;
        restitution("ball.wall_restitution", b.wall_restitution)?;
        non_negative("ball.hit_base_force", b.hit_base_force)?;
        non_negative("ball.hit_speed_factor", b.hit_speed_factor)?;

        let a = &self.arena;
        for (field, p) in [
            ("arena.red_spawn", a.red_spawn),
            ("arena.blue_spawn", a.blue_spawn),
            ("arena.ball_spawn", a.ball_spawn),
        ] {
            if !p.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }
        positive("arena.layout_size.x", a.layout_size.x)?;
        positive("arena.layout_size.y", a.layout_size.y)?;
        positive("arena.goal_half_height", a.goal_half_height)?;

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be finite"))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be > 0")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be >= 0")))
    }
}

fn friction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be in (0, 1]")))
    }
}

fn restitution(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (-1.0..=0.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be in [-1, 0]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "vehicle": { "max_speed": 14.0 } }"#).unwrap();
        assert_eq!(tuning.vehicle.max_speed, 14.0);
        assert_eq!(tuning.vehicle.acceleration, CAR_ACCELERATION);
        assert_eq!(tuning.ball, BallTuning::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_rejects_starting_boost_above_max() {
        let err = Tuning::from_json(r#"{ "vehicle": { "starting_boost": 200.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "vehicle.starting_boost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_friction_above_one() {
        let err = Tuning::from_json(r#"{ "ball": { "friction": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ball.friction", .. }));
    }

    #[test]
    fn test_rejects_positive_restitution() {
        let mut tuning = Tuning::default();
        tuning.vehicle.wall_restitution = 0.5;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_rejects_empty_layout_size() {
        let err = Tuning::from_json(r#"{ "arena": { "layout_size": [0.0, 800.0] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "arena.layout_size.x", .. }));
    }

    #[test]
    fn test_spawn_points_parse_as_arrays() {
        let tuning = Tuning::from_json(r#"{ "arena": { "ball_spawn": [640.0, 360.0] } }"#).unwrap();
        assert_eq!(tuning.arena.ball_spawn, Vec2::new(640.0, 360.0));
        assert_eq!(tuning.arena.red_spawn, Vec2::new(200.0, 400.0));
    }
}
