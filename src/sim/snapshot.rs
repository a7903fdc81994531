//! Per-tick render output
//!
//! A flat copy of what the renderer draws, so drawing never borrows the live
//! simulation state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::Field;
use super::state::{GameState, GoalBand, Team};
use super::vehicle::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleView {
    pub team: Team,
    pub pos: Vec2,
    pub heading: f32,
    /// Boost reserve / max boost, in [0, 1]
    pub boost_ratio: f32,
    pub boosting: bool,
    pub width: f32,
    pub height: f32,
}

impl VehicleView {
    pub fn of(vehicle: &Vehicle) -> Self {
        Self {
            team: vehicle.team,
            pos: vehicle.pos,
            heading: vehicle.heading,
            boost_ratio: vehicle.boost_ratio(),
            boosting: vehicle.boosting,
            width: vehicle.tuning.width,
            height: vehicle.tuning.height,
        }
    }

    pub fn color(&self) -> &'static str {
        self.team.color()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub field: Field,
    pub goal_band: GoalBand,
    pub red: VehicleView,
    pub blue: VehicleView,
    pub ball: BallView,
    pub red_score: u32,
    pub blue_score: u32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, field: Field) -> Self {
        Self {
            tick: state.time_ticks,
            field,
            goal_band: state.goal_band(field),
            red: VehicleView::of(&state.red),
            blue: VehicleView::of(&state.blue),
            ball: BallView {
                pos: state.ball.pos,
                radius: state.ball.radius,
            },
            red_score: state.score.red_score,
            blue_score: state.score.blue_score,
        }
    }

    pub fn vehicles(&self) -> [&VehicleView; 2] {
        [&self.red, &self.blue]
    }
}
