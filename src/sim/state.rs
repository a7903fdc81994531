//! Match state and scoring
//!
//! Everything the host needs to keep between ticks lives in [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::motion::{Field, WallContacts};
use super::vehicle::Vehicle;
use crate::tuning::Tuning;

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Defends the left goal, scores on the right
    Red,
    /// Defends the right goal, scores on the left
    Blue,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Red => "Red",
            Team::Blue => "Blue",
        }
    }

    /// Color tag handed to the renderer
    pub fn color(&self) -> &'static str {
        match self {
            Team::Red => "#ff3333",
            Team::Blue => "#3333ff",
        }
    }
}

/// Current phase of the match
///
/// Play is open-ended: there is no pause, halftime or final whistle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Lined up but no tick has run; the first tick fits the lineup to the
    /// field it is played on
    #[default]
    Kickoff,
    InProgress,
}

/// Scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub red_score: u32,
    pub blue_score: u32,
    /// When false the host has stopped the match and ticks advance nothing
    pub running: bool,
    pub phase: MatchPhase,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            red_score: 0,
            blue_score: 0,
            running: true,
            phase: MatchPhase::Kickoff,
        }
    }
}

impl MatchState {
    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red_score,
            Team::Blue => self.blue_score,
        }
    }

    /// Credit one goal and return the team's new total
    pub fn record_goal(&mut self, scorer: Team) -> u32 {
        let total = match scorer {
            Team::Red => &mut self.red_score,
            Team::Blue => &mut self.blue_score,
        };
        *total = total.saturating_add(1);
        *total
    }
}

/// Vertical interval of both goal mouths, open at both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalBand {
    pub top: f32,
    pub bottom: f32,
}

impl GoalBand {
    /// Band centered on the field's horizontal midline
    pub fn for_field(field: Field, half_height: f32) -> Self {
        let mid = field.center().y;
        Self {
            top: mid - half_height,
            bottom: mid + half_height,
        }
    }

    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y > self.top && y < self.bottom
    }
}

/// Decide whether the ball went in this tick; returns the scoring team
///
/// The right goal is checked first and the two checks exclude each other, so
/// at most one team scores per tick. A crossing counts if the ball's edge is
/// past the line or the ball hit that wall during this tick's step, and only
/// while it was travelling toward that wall (`entry_vx` is the horizontal
/// velocity the ball started the step with). A ball pulled back in by a
/// shrinking field, or resting against the line, has not crossed it.
pub fn detect_goal(
    ball: &Ball,
    entry_vx: f32,
    contacts: WallContacts,
    field: Field,
    band: GoalBand,
) -> Option<Team> {
    if !band.contains(ball.pos.y) {
        return None;
    }
    if entry_vx > 0.0 && (contacts.right || ball.pos.x + ball.radius > field.width) {
        Some(Team::Red)
    } else if entry_vx < 0.0 && (contacts.left || ball.pos.x - ball.radius < 0.0) {
        Some(Team::Blue)
    } else {
        None
    }
}

/// Something the host may want to react to (sound, log, HUD flash)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A car kicked the ball
    BallTouched { team: Team },
    /// A goal was scored and all entities went back to spawn
    Goal {
        scorer: Team,
        red_score: u32,
        blue_score: u32,
    },
}

/// Complete match state owned by the host and passed into every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub red: Vehicle,
    pub blue: Vehicle,
    pub ball: Ball,
    pub score: MatchState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tuning: Tuning,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh kickoff with both cars and the ball at their spawn points
    pub fn new(tuning: Tuning) -> Self {
        let red = Vehicle::new(Team::Red, tuning.arena.red_spawn, tuning.vehicle.clone());
        let blue = Vehicle::new(Team::Blue, tuning.arena.blue_spawn, tuning.vehicle.clone());
        let ball = Ball::new(tuning.arena.ball_spawn, tuning.ball.clone());
        Self {
            red,
            blue,
            ball,
            score: MatchState::default(),
            time_ticks: 0,
            tuning,
        }
    }

    pub fn goal_band(&self, field: Field) -> GoalBand {
        GoalBand::for_field(field, self.tuning.arena.goal_half_height)
    }

    /// Whether every spawn point lies inside `field` with room for its body
    pub fn lineup_fits(&self, field: Field) -> bool {
        let fits = |spawn: Vec2, half: Vec2| {
            spawn.cmpge(half).all() && spawn.cmple(field.size() - half).all()
        };
        let ball_half = Vec2::splat(self.ball.radius);
        fits(self.red.spawn, self.red.half_extents())
            && fits(self.blue.spawn, self.blue.half_extents())
            && fits(self.ball.spawn, ball_half)
    }

    /// Kickoff positions: both cars and the ball back to spawn, at rest
    ///
    /// On a field too small for the fixed spawns the lineup is scaled from
    /// `arena.layout_size` to `field` and kept inside the walls, so no body
    /// starts outside the field or on top of another.
    pub fn reset_positions(&mut self, field: Field) {
        if self.lineup_fits(field) {
            self.red.reset();
            self.blue.reset();
            self.ball.reset();
        } else {
            let scale = field.size() / self.tuning.arena.layout_size;
            let place = |spawn: Vec2, half: Vec2| (spawn * scale).max(half).min(field.size() - half);

            let red = place(self.red.spawn, self.red.half_extents());
            let blue = place(self.blue.spawn, self.blue.half_extents());
            let ball = place(self.ball.spawn, Vec2::splat(self.ball.radius));
            self.red.reset_at(red);
            self.blue.reset_at(blue);
            self.ball.reset_at(ball);
            log::debug!("Lineup scaled to {}x{}", field.width, field.height);
        }
        log::debug!("Kickoff reset at tick {}", self.time_ticks);
    }

    /// Credit a goal, reset positions, and describe what happened
    pub fn score_goal(&mut self, scorer: Team, field: Field) -> GameEvent {
        let total = self.score.record_goal(scorer);
        match scorer {
            Team::Red => log::info!("🔴 Red scores! Total: {}", total),
            Team::Blue => log::info!("🔵 Blue scores! Total: {}", total),
        }
        self.reset_positions(field);
        GameEvent::Goal {
            scorer,
            red_score: self.score.red_score,
            blue_score: self.score.blue_score,
        }
    }
}
