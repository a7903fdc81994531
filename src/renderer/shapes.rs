//! Rocket car geometry
//!
//! Outlines are defined in car-local space (nose along +x, centered on the
//! car) and placed in the world by rotating with the heading and translating
//! to the car's position.

use glam::Vec2;

use crate::sim::VehicleView;

/// Rotate car-local points by `heading` and move them to `pos`
pub fn to_world(local: &[Vec2], pos: Vec2, heading: f32) -> Vec<Vec2> {
    let rot = Vec2::from_angle(heading);
    local.iter().map(|&p| pos + rot.rotate(p)).collect()
}

/// Arrowhead hull: nose, top tail corner, tail notch, bottom tail corner
pub fn body(car: &VehicleView) -> Vec<Vec2> {
    let (w, h) = (car.width, car.height);
    to_world(
        &[
            Vec2::new(w / 2.0, 0.0),
            Vec2::new(-w / 2.0, -h / 2.0),
            Vec2::new(-w / 3.0, 0.0),
            Vec2::new(-w / 2.0, h / 2.0),
        ],
        car.pos,
        car.heading,
    )
}

/// Small triangle at the tip
pub fn nose_cone(car: &VehicleView) -> Vec<Vec2> {
    let w = car.width;
    to_world(
        &[
            Vec2::new(w / 2.0, 0.0),
            Vec2::new(w / 2.0 - 5.0, -4.0),
            Vec2::new(w / 2.0 - 5.0, 4.0),
        ],
        car.pos,
        car.heading,
    )
}

/// Cockpit window center (radius 3)
pub fn window_center(car: &VehicleView) -> Vec2 {
    to_world(&[Vec2::new(-car.width / 8.0, 0.0)], car.pos, car.heading)[0]
}

pub const WINDOW_RADIUS: f32 = 3.0;

/// Both tail fins: (left, right) when looking along the nose
pub fn fins(car: &VehicleView) -> [Vec<Vec2>; 2] {
    let (w, h) = (car.width, car.height);
    let left = [
        Vec2::new(-w / 3.0, 0.0),
        Vec2::new(-w / 2.5, h / 2.0 + 3.0),
        Vec2::new(-w / 2.0, h / 2.0),
    ];
    let right = [
        Vec2::new(-w / 3.0, 0.0),
        Vec2::new(-w / 2.5, -h / 2.0 - 3.0),
        Vec2::new(-w / 2.0, -h / 2.0),
    ];
    [
        to_world(&left, car.pos, car.heading),
        to_world(&right, car.pos, car.heading),
    ]
}

/// Exhaust flames behind the tail: (upper, lower)
pub fn flames(car: &VehicleView) -> [Vec<Vec2>; 2] {
    let (w, h) = (car.width, car.height);
    let upper = [
        Vec2::new(-w / 2.0, -h / 3.0),
        Vec2::new(-w / 2.0 - 8.0, -h / 4.0),
        Vec2::new(-w / 2.0 - 5.0, 0.0),
    ];
    let lower = [
        Vec2::new(-w / 2.0, h / 3.0),
        Vec2::new(-w / 2.0 - 8.0, h / 4.0),
        Vec2::new(-w / 2.0 - 5.0, 0.0),
    ];
    [
        to_world(&upper, car.pos, car.heading),
        to_world(&lower, car.pos, car.heading),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Team;
    use std::f32::consts::FRAC_PI_2;

    fn view(heading: f32) -> VehicleView {
        VehicleView {
            team: Team::Red,
            pos: Vec2::new(100.0, 50.0),
            heading,
            boost_ratio: 1.0,
            boosting: false,
            width: 35.0,
            height: 25.0,
        }
    }

    #[test]
    fn test_body_nose_points_along_heading() {
        let hull = body(&view(0.0));
        assert_eq!(hull.len(), 4);
        assert!((hull[0] - Vec2::new(117.5, 50.0)).length() < 1e-4);

        // Facing +y (down the screen)
        let hull = body(&view(FRAC_PI_2));
        assert!((hull[0] - Vec2::new(100.0, 67.5)).length() < 1e-4);
    }

    #[test]
    fn test_window_sits_behind_center() {
        let c = window_center(&view(0.0));
        assert!((c - Vec2::new(100.0 - 35.0 / 8.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_fins_are_mirrored() {
        let [left, right] = fins(&view(0.0));
        assert!((left[1].y - 50.0 + (right[1].y - 50.0)).abs() < 1e-4);
        assert!((left[1].x - right[1].x).abs() < 1e-4);
    }

    #[test]
    fn test_flames_behind_tail() {
        let [upper, lower] = flames(&view(0.0));
        let tail_x = 100.0 - 17.5;
        assert!(upper.iter().chain(lower.iter()).all(|p| p.x <= tail_x + 1e-4));
    }
}
