//! Frame orchestrator
//!
//! One call per display refresh. There is no delta time: every tunable is a
//! per-tick quantity, so a 120 Hz display plays the match twice as fast as a
//! 60 Hz one.

use super::collision::resolve_ball_collisions;
use super::input::{Controls, InputSnapshot};
use super::motion::Field;
use super::snapshot::RenderSnapshot;
use super::state::{GameEvent, GameState, MatchPhase, Team, detect_goal};

/// What one tick produced
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub events: Vec<GameEvent>,
    pub snapshot: RenderSnapshot,
}

/// Advance the match by one tick
///
/// Order is fixed: input (red, blue), car physics (red, blue), ball physics,
/// ball contacts (red, blue), goal check and reset, snapshot. `field` is the
/// current canvas size and is re-read every tick. The first tick of a match
/// re-lines the entities up if the fixed spawns don't fit `field`.
pub fn tick(
    state: &mut GameState,
    keys: &InputSnapshot,
    controls: &Controls,
    field: Field,
) -> TickOutput {
    let mut events = Vec::new();

    if !state.score.running {
        return TickOutput {
            events,
            snapshot: RenderSnapshot::capture(state, field),
        };
    }

    if state.score.phase == MatchPhase::Kickoff {
        if !state.lineup_fits(field) {
            state.reset_positions(field);
        }
        state.score.phase = MatchPhase::InProgress;
    }

    state.time_ticks += 1;

    state.red.apply_input(keys, controls.binding(Team::Red));
    state.blue.apply_input(keys, controls.binding(Team::Blue));

    state.red.step(field);
    state.blue.step(field);
    let entry_vx = state.ball.vel.x;
    let contacts = state.ball.step(field);

    let hits = resolve_ball_collisions(&mut state.ball, &state.red, &state.blue);
    for team in hits.touched() {
        log::debug!("{} touched the ball at tick {}", team.as_str(), state.time_ticks);
        events.push(GameEvent::BallTouched { team });
    }

    let band = state.goal_band(field);
    if let Some(scorer) = detect_goal(&state.ball, entry_vx, contacts, field, band) {
        events.push(state.score_goal(scorer, field));
    }

    TickOutput {
        events,
        snapshot: RenderSnapshot::capture(state, field),
    }
}
