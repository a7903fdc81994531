//! Ball-versus-car contact pass
//!
//! Each car is tested on its own, red first, then blue. There is no
//! exclusivity: if the ball overlaps both cars in the same tick both kicks
//! apply in order and the blue car's kick is the one the ball keeps.

use super::ball::Ball;
use super::state::Team;
use super::vehicle::Vehicle;

/// Which cars touched the ball this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub red: bool,
    pub blue: bool,
}

impl CollisionResult {
    pub fn any(&self) -> bool {
        self.red || self.blue
    }

    /// The car whose kick determined the ball's velocity
    pub fn decisive(&self) -> Option<Team> {
        if self.blue {
            Some(Team::Blue)
        } else if self.red {
            Some(Team::Red)
        } else {
            None
        }
    }

    /// Teams in the order their kicks were applied
    pub fn touched(&self) -> impl Iterator<Item = Team> {
        [(Team::Red, self.red), (Team::Blue, self.blue)]
            .into_iter()
            .filter_map(|(team, hit)| hit.then_some(team))
    }
}

/// Run the ordered contact pass for one tick
pub fn resolve_ball_collisions(ball: &mut Ball, red: &Vehicle, blue: &Vehicle) -> CollisionResult {
    let red = ball.collide_with_vehicle(red);
    let blue = ball.collide_with_vehicle(blue);
    CollisionResult { red, blue }
}
