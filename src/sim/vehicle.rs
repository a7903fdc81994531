//! Rocket car entity
//!
//! Heading is independent of velocity: the car thrusts along its nose but
//! keeps sliding in whatever direction it was already moving, bleeding speed
//! through friction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::{ButtonState, ControlBinding, InputSnapshot};
use super::motion::{Field, WallContacts, apply_friction, bounce_in_field, clamp_speed};
use super::state::Team;
use crate::normalize_angle;
use crate::tuning::VehicleTuning;

/// A player-controlled rocket car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub team: Team,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing direction (radians, normalized to [-π, π))
    pub heading: f32,
    /// Boost reserve, always within [0, tuning.max_boost]
    pub boost: f32,
    /// Whether boost thrust was applied this tick (drives the flame)
    pub boosting: bool,
    /// Where the car returns to after a goal
    pub spawn: Vec2,
    pub tuning: VehicleTuning,
}

impl Vehicle {
    pub fn new(team: Team, spawn: Vec2, tuning: VehicleTuning) -> Self {
        Self {
            team,
            pos: spawn,
            vel: Vec2::ZERO,
            heading: 0.0,
            boost: tuning.starting_boost,
            boosting: false,
            spawn,
            tuning,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Unit vector along the heading
    #[inline]
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.tuning.half_extents()
    }

    /// Radius used for ball contact (half the car's length, not its box)
    #[inline]
    pub fn contact_radius(&self) -> f32 {
        self.tuning.width / 2.0
    }

    /// Boost reserve as a fraction of the maximum (for the HUD bar)
    #[inline]
    pub fn boost_ratio(&self) -> f32 {
        self.boost / self.tuning.max_boost
    }

    /// Read this player's buttons once and apply them
    pub fn apply_input(&mut self, keys: &InputSnapshot, binding: &ControlBinding) {
        let buttons = binding.resolve(keys);
        self.apply_buttons(buttons);
    }

    /// Thrust, steer and spend boost for one tick
    ///
    /// Forward/reverse use the heading from the start of the tick; boost uses
    /// the heading after this tick's turn.
    pub fn apply_buttons(&mut self, buttons: ButtonState) {
        let facing = self.facing();
        let accel = self.tuning.acceleration;

        if buttons.forward {
            self.vel += facing * accel;
        }
        if buttons.reverse {
            self.vel -= facing * accel * self.tuning.reverse_factor;
        }
        if buttons.turn_left {
            self.heading -= self.tuning.turn_step;
        }
        if buttons.turn_right {
            self.heading += self.tuning.turn_step;
        }
        self.heading = normalize_angle(self.heading);

        if buttons.boost && self.boost > 0.0 {
            let thrust = self.facing() * self.tuning.boost_thrust;
            self.boosting = true;
            self.vel += thrust;
            self.boost = (self.boost - self.tuning.boost_drain).max(0.0);
        } else {
            self.boosting = false;
        }

        // Recharge runs every tick, boosting or not
        self.boost = (self.boost + self.tuning.boost_recharge).min(self.tuning.max_boost);
    }

    /// Integrate one tick: friction, speed cap, move, bounce off walls
    pub fn step(&mut self, field: Field) -> WallContacts {
        self.vel = apply_friction(self.vel, self.tuning.friction);
        self.vel = clamp_speed(self.vel, self.tuning.max_speed);
        self.pos += self.vel;

        let half = self.half_extents();
        bounce_in_field(
            &mut self.pos,
            &mut self.vel,
            half,
            field,
            self.tuning.wall_restitution,
        )
    }

    /// Return to spawn with zero velocity and the starting boost reserve
    ///
    /// Heading is kept; kickoff never re-aims the cars.
    pub fn reset(&mut self) {
        self.reset_at(self.spawn);
    }

    /// Like [`reset`](Self::reset) but lining up at `pos` instead of the spawn
    pub fn reset_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.boost = self.tuning.starting_boost;
        self.boosting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn red() -> Vehicle {
        Vehicle::new(Team::Red, Vec2::new(200.0, 400.0), VehicleTuning::default())
    }

    fn forward() -> ButtonState {
        ButtonState {
            forward: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_forward_from_rest() {
        let mut car = red();
        car.apply_buttons(forward());
        assert!((car.vel - Vec2::new(0.4, 0.0)).length() < 1e-6);

        car.step(Field::default());
        assert!((car.vel.x - 0.4 * 0.96).abs() < 1e-6);
        assert!(car.vel.y.abs() < 1e-6);
        assert!((car.pos.x - (200.0 + 0.4 * 0.96)).abs() < 1e-4);
    }

    #[test]
    fn test_reverse_is_half_strength() {
        let mut car = red();
        car.apply_buttons(ButtonState {
            reverse: true,
            ..Default::default()
        });
        assert!((car.vel.x + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_turning_changes_heading_not_velocity() {
        let mut car = red();
        car.vel = Vec2::new(3.0, 0.0);
        car.apply_buttons(ButtonState {
            turn_right: true,
            ..Default::default()
        });
        assert!((car.heading - 0.1).abs() < 1e-6);
        assert_eq!(car.vel, Vec2::new(3.0, 0.0));

        car.apply_buttons(ButtonState {
            turn_left: true,
            ..Default::default()
        });
        car.apply_buttons(ButtonState {
            turn_left: true,
            ..Default::default()
        });
        assert!((car.heading + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_boost_applies_thrust_and_net_drain() {
        let mut car = red();
        car.apply_buttons(ButtonState {
            boost: true,
            ..Default::default()
        });
        assert!(car.boosting);
        assert!((car.vel.x - 0.7).abs() < 1e-6);
        // 100 - 1.5 + 1.2
        assert!((car.boost - 99.7).abs() < 1e-4);
    }

    #[test]
    fn test_boost_empty_only_recharges() {
        let mut car = red();
        car.boost = 0.0;
        car.apply_buttons(ButtonState {
            boost: true,
            ..Default::default()
        });
        assert!(!car.boosting);
        assert_eq!(car.vel, Vec2::ZERO);
        assert!((car.boost - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_boost_drain_floors_at_zero() {
        let mut car = red();
        car.boost = 0.5;
        car.apply_buttons(ButtonState {
            boost: true,
            ..Default::default()
        });
        assert!(car.boosting);
        assert!((car.boost - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_recharge_caps_at_max() {
        let mut car = red();
        car.boost = 149.5;
        car.apply_buttons(ButtonState::default());
        assert_eq!(car.boost, 150.0);
        assert!(!car.boosting);
    }

    #[test]
    fn test_speed_capped() {
        let mut car = red();
        car.vel = Vec2::new(40.0, 30.0);
        car.step(Field::default());
        assert!((car.speed() - 10.0).abs() < 1e-4);
        // Direction preserved
        assert!((car.vel.x / car.vel.y - 40.0 / 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_dampens() {
        let mut car = red();
        car.pos = Vec2::new(18.0, 400.0);
        car.vel = Vec2::new(-5.0, 0.0);
        let contacts = car.step(Field::default());
        assert!(contacts.left);
        assert_eq!(car.pos.x, 17.5);
        assert!((car.vel.x - 5.0 * 0.96 * 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_bottom_wall_uses_half_height() {
        let mut car = red();
        car.pos = Vec2::new(600.0, 790.0);
        car.vel = Vec2::new(0.0, 8.0);
        let contacts = car.step(Field::new(1200.0, 800.0));
        assert!(contacts.bottom);
        assert_eq!(car.pos.y, 787.5);
        assert!(car.vel.y < 0.0);
    }

    #[test]
    fn test_step_pulls_car_back_into_shrunken_field() {
        let mut car = Vehicle::new(Team::Blue, Vec2::new(1000.0, 400.0), VehicleTuning::default());
        let contacts = car.step(Field::new(480.0, 800.0));
        assert!(contacts.right);
        assert!(!contacts.left);
        assert_eq!(car.pos, Vec2::new(462.5, 400.0));
        assert_eq!(car.vel, Vec2::ZERO);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut car = red();
        car.pos = Vec2::new(900.0, 100.0);
        car.vel = Vec2::new(4.0, -2.0);
        car.boost = 3.0;
        car.boosting = true;
        car.heading = 1.0;
        car.reset();
        assert_eq!(car.pos, Vec2::new(200.0, 400.0));
        assert_eq!(car.vel, Vec2::ZERO);
        assert_eq!(car.boost, 100.0);
        assert!(!car.boosting);
        assert_eq!(car.heading, 1.0);
    }

    fn buttons() -> impl Strategy<Value = ButtonState> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(forward, reverse, turn_left, turn_right, boost)| ButtonState {
                forward,
                reverse,
                turn_left,
                turn_right,
                boost,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            start_vel in (-50.0f32..50.0, -50.0f32..50.0),
            start_boost in 0.0f32..=150.0,
            inputs in proptest::collection::vec(buttons(), 1..200),
        ) {
            let field = Field::new(1200.0, 800.0);
            let mut car = red();
            car.vel = Vec2::new(start_vel.0, start_vel.1);
            car.boost = start_boost;

            for b in inputs {
                car.apply_buttons(b);
                prop_assert!(car.boost >= 0.0 && car.boost <= car.tuning.max_boost);

                car.step(field);
                prop_assert!(car.speed() <= car.tuning.max_speed * (1.0 + 1e-5));

                let half = car.half_extents();
                prop_assert!(car.pos.x >= half.x && car.pos.x <= field.width - half.x);
                prop_assert!(car.pos.y >= half.y && car.pos.y <= field.height - half.y);
            }
        }
    }
}
