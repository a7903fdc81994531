//! The ball
//!
//! Decays through friction, bounces off walls, and gets launched away from
//! any car that touches it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::{Field, WallContacts, apply_friction, bounce_in_field};
use super::vehicle::Vehicle;
use crate::tuning::BallTuning;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Where the ball returns to after a goal
    pub spawn: Vec2,
    pub tuning: BallTuning,
}

impl Ball {
    pub fn new(spawn: Vec2, tuning: BallTuning) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            radius: tuning.radius,
            spawn,
            tuning,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Integrate one tick and report which walls were hit
    ///
    /// The contacts are what goal detection uses: the ball is clamped back
    /// inside the field here, so its position alone can no longer show that
    /// it crossed the line.
    pub fn step(&mut self, field: Field) -> WallContacts {
        self.vel.y += self.tuning.gravity;
        self.vel = apply_friction(self.vel, self.tuning.friction);
        self.pos += self.vel;

        bounce_in_field(
            &mut self.pos,
            &mut self.vel,
            Vec2::splat(self.radius),
            field,
            self.tuning.wall_restitution,
        )
    }

    /// Launch the ball away from `vehicle` if they overlap
    ///
    /// Contact uses the car's half-length as a circle radius. On contact the
    /// ball's velocity is replaced (not added to) by a kick pointing from the
    /// car's center to the ball's, with strength growing with the car's
    /// speed. Concentric centers kick along +x.
    pub fn collide_with_vehicle(&mut self, vehicle: &Vehicle) -> bool {
        let offset = self.pos - vehicle.pos;
        let (distance, angle) = cartesian_to_polar(offset);
        if distance >= self.radius + vehicle.contact_radius() {
            return false;
        }

        let force = self.tuning.hit_base_force + vehicle.speed() * self.tuning.hit_speed_factor;
        self.vel = polar_to_cartesian(force, angle);
        true
    }

    /// Back to the kickoff spot, at rest
    pub fn reset(&mut self) {
        self.reset_at(self.spawn);
    }

    /// At rest on `pos`
    pub fn reset_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Team;
    use crate::tuning::VehicleTuning;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(600.0, 400.0), BallTuning::default());
        ball.pos = Vec2::new(x, y);
        ball
    }

    fn car_at(x: f32, y: f32) -> Vehicle {
        let mut car = Vehicle::new(Team::Red, Vec2::new(200.0, 400.0), VehicleTuning::default());
        car.pos = Vec2::new(x, y);
        car
    }

    #[test]
    fn test_step_applies_friction_then_moves() {
        let mut ball = ball_at(600.0, 400.0);
        ball.vel = Vec2::new(10.0, -5.0);
        let contacts = ball.step(Field::default());
        assert!(!contacts.any());
        assert!((ball.vel - Vec2::new(9.9, -4.95)).length() < 1e-5);
        assert!((ball.pos - Vec2::new(609.9, 395.05)).length() < 1e-3);
    }

    #[test]
    fn test_gravity_is_inert_by_default() {
        let mut ball = ball_at(600.0, 400.0);
        for _ in 0..10 {
            ball.step(Field::default());
        }
        assert_eq!(ball.pos, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_gravity_bias_pulls_down() {
        let mut tuning = BallTuning::default();
        tuning.gravity = 0.5;
        let mut ball = Ball::new(Vec2::new(600.0, 400.0), tuning);
        ball.step(Field::default());
        assert!(ball.vel.y > 0.0);
        assert!(ball.pos.y > 400.0);
    }

    #[test]
    fn test_wall_bounce_restitution() {
        let mut ball = ball_at(1185.0, 400.0);
        ball.vel = Vec2::new(10.0, 0.0);
        let contacts = ball.step(Field::new(1200.0, 800.0));
        assert!(contacts.right);
        assert_eq!(ball.pos.x, 1190.0);
        assert!((ball.vel.x - -(10.0 * 0.99 * 0.8)).abs() < 1e-4);
    }

    #[test]
    fn test_collision_overwrites_velocity() {
        let mut ball = ball_at(220.0, 400.0);
        ball.vel = Vec2::new(-50.0, 20.0);
        let car = car_at(200.0, 400.0);
        assert!(ball.collide_with_vehicle(&car));
        assert!((ball.vel - Vec2::new(12.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_collision_scales_with_car_speed() {
        let mut ball = ball_at(200.0, 420.0);
        let mut car = car_at(200.0, 400.0);
        car.vel = Vec2::new(6.0, 8.0);
        assert!(ball.collide_with_vehicle(&car));
        // Straight down, 12 + 10 * 1.5
        assert!(ball.vel.x.abs() < 1e-4);
        assert!((ball.vel.y - 27.0).abs() < 1e-4);
    }

    #[test]
    fn test_concentric_collision_kicks_along_x() {
        let mut ball = ball_at(200.0, 400.0);
        ball.vel = Vec2::new(3.0, 3.0);
        let car = car_at(200.0, 400.0);
        assert!(ball.collide_with_vehicle(&car));
        assert_eq!(ball.vel, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn test_no_collision_at_threshold() {
        // radius 10 + half-length 17.5
        let mut ball = ball_at(227.5, 400.0);
        ball.vel = Vec2::new(1.0, 0.0);
        let car = car_at(200.0, 400.0);
        assert!(!ball.collide_with_vehicle(&car));
        assert_eq!(ball.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut ball = ball_at(20.0, 30.0);
        ball.vel = Vec2::new(5.0, 5.0);
        ball.reset();
        assert_eq!(ball.pos, Vec2::new(600.0, 400.0));
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_ball_stays_in_field(
            x in -200.0f32..1400.0,
            y in -200.0f32..1000.0,
            vx in -80.0f32..80.0,
            vy in -80.0f32..80.0,
            w in 100.0f32..2000.0,
            h in 100.0f32..2000.0,
        ) {
            let field = Field::new(w, h);
            let mut ball = ball_at(x, y);
            ball.vel = Vec2::new(vx, vy);
            for _ in 0..20 {
                ball.step(field);
                prop_assert!(ball.pos.x >= ball.radius && ball.pos.x <= w - ball.radius);
                prop_assert!(ball.pos.y >= ball.radius && ball.pos.y <= h - ball.radius);
            }
        }
    }
}
