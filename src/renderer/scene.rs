//! Frame description as a flat list of 2D draw commands
//!
//! Building the list is pure, so the whole look of a frame can be checked
//! without a canvas. The backend in `canvas` just replays it.

use glam::Vec2;

use super::shapes;
use crate::settings::Settings;
use crate::sim::{RenderSnapshot, VehicleView};

/// Pitch and marking colors
pub mod colors {
    pub const PITCH: &str = "#1a4d2e";
    pub const LINE: &str = "#fff";
    pub const RED_GOAL_AREA: &str = "rgba(255, 0, 0, 0.15)";
    pub const BLUE_GOAL_AREA: &str = "rgba(0, 0, 255, 0.15)";
    pub const RED_GOAL_BOX: &str = "#ff6666";
    pub const BLUE_GOAL_BOX: &str = "#6666ff";
    pub const NOSE: &str = "#ffff00";
    pub const WINDOW: &str = "#00ffff";
    pub const FLAME_OUTER: &str = "#ff6600";
    pub const FLAME_INNER: &str = "#ffaa00";
    pub const BOOST_BAR_BG: &str = "#333";
    pub const BOOST_BAR: &str = "#00ff00";
    pub const BALL: &str = "#ff9900";
    pub const RED_SCORE: &str = "rgba(255, 100, 100, 0.8)";
    pub const BLUE_SCORE: &str = "rgba(100, 100, 255, 0.8)";
}

/// Painted goal box (decorative; scoring uses the tuning's goal band)
pub const GOAL_BOX_DEPTH: f32 = 80.0;
pub const GOAL_BOX_HALF_HEIGHT: f32 = 80.0;
pub const CENTER_CIRCLE_RADIUS: f32 = 80.0;
pub const CENTER_DOT_RADIUS: f32 = 5.0;
pub const BOOST_BAR_SIZE: Vec2 = Vec2::new(40.0, 8.0);
/// Boost bar top-left relative to the car center
pub const BOOST_BAR_OFFSET: Vec2 = Vec2::new(-20.0, 25.0);
pub const SCORE_FONT: &str = "bold 60px Arial";
pub const SCORE_BASELINE: f32 = 100.0;
/// Fins are drawn slightly transparent
pub const FIN_ALPHA: f32 = 0.7;

/// One drawing operation in canvas pixel space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        size: Vec2,
    },
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
        line_width: f32,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: &'static str,
        alpha: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: &'static str,
        line_width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: &'static str,
        line_width: f32,
        /// Dash pattern (on, off); solid when None
        dash: Option<[f32; 2]>,
    },
    /// Horizontally centered text
    Text {
        pos: Vec2,
        text: String,
        color: &'static str,
        font: &'static str,
    },
}

/// Describe a full frame
pub fn build_scene(snap: &RenderSnapshot, settings: &Settings) -> Vec<DrawCmd> {
    let size = snap.field.size();
    let mut cmds = Vec::with_capacity(64);

    cmds.push(DrawCmd::Clear { size });
    cmds.push(DrawCmd::FillRect {
        pos: Vec2::ZERO,
        size,
        color: colors::PITCH,
    });

    if settings.show_field_markings {
        field_markings(size, &mut cmds);
    }

    for car in snap.vehicles() {
        vehicle(car, settings.show_boost_bars, &mut cmds);
    }

    cmds.push(DrawCmd::FillCircle {
        center: snap.ball.pos,
        radius: snap.ball.radius,
        color: colors::BALL,
    });
    cmds.push(DrawCmd::StrokeCircle {
        center: snap.ball.pos,
        radius: snap.ball.radius,
        color: colors::LINE,
        line_width: 1.0,
    });

    if settings.show_score {
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(size.x / 4.0, SCORE_BASELINE),
            text: snap.red_score.to_string(),
            color: colors::RED_SCORE,
            font: SCORE_FONT,
        });
        cmds.push(DrawCmd::Text {
            pos: Vec2::new(size.x / 4.0 * 3.0, SCORE_BASELINE),
            text: snap.blue_score.to_string(),
            color: colors::BLUE_SCORE,
            font: SCORE_FONT,
        });
    }

    cmds
}

fn field_markings(size: Vec2, cmds: &mut Vec<DrawCmd>) {
    let center = size / 2.0;

    cmds.push(DrawCmd::StrokeRect {
        pos: Vec2::ZERO,
        size,
        color: colors::LINE,
        line_width: 2.0,
    });
    cmds.push(DrawCmd::Line {
        from: Vec2::new(center.x, 0.0),
        to: Vec2::new(center.x, size.y),
        color: colors::LINE,
        line_width: 2.0,
        dash: Some([15.0, 15.0]),
    });
    cmds.push(DrawCmd::StrokeCircle {
        center,
        radius: CENTER_CIRCLE_RADIUS,
        color: colors::LINE,
        line_width: 2.0,
    });
    cmds.push(DrawCmd::FillCircle {
        center,
        radius: CENTER_DOT_RADIUS,
        color: colors::LINE,
    });

    let box_size = Vec2::new(GOAL_BOX_DEPTH, GOAL_BOX_HALF_HEIGHT * 2.0);
    let left = Vec2::new(0.0, center.y - GOAL_BOX_HALF_HEIGHT);
    let right = Vec2::new(size.x - GOAL_BOX_DEPTH, center.y - GOAL_BOX_HALF_HEIGHT);

    cmds.push(DrawCmd::FillRect {
        pos: left,
        size: box_size,
        color: colors::RED_GOAL_AREA,
    });
    cmds.push(DrawCmd::FillRect {
        pos: right,
        size: box_size,
        color: colors::BLUE_GOAL_AREA,
    });
    cmds.push(DrawCmd::StrokeRect {
        pos: left,
        size: box_size,
        color: colors::RED_GOAL_BOX,
        line_width: 2.0,
    });
    cmds.push(DrawCmd::StrokeRect {
        pos: right,
        size: box_size,
        color: colors::BLUE_GOAL_BOX,
        line_width: 2.0,
    });
}

fn vehicle(car: &VehicleView, boost_bar: bool, cmds: &mut Vec<DrawCmd>) {
    cmds.push(DrawCmd::FillPolygon {
        points: shapes::body(car),
        color: car.color(),
        alpha: 1.0,
    });
    cmds.push(DrawCmd::FillPolygon {
        points: shapes::nose_cone(car),
        color: colors::NOSE,
        alpha: 1.0,
    });
    cmds.push(DrawCmd::FillCircle {
        center: shapes::window_center(car),
        radius: shapes::WINDOW_RADIUS,
        color: colors::WINDOW,
    });
    for fin in shapes::fins(car) {
        cmds.push(DrawCmd::FillPolygon {
            points: fin,
            color: car.color(),
            alpha: FIN_ALPHA,
        });
    }

    if car.boosting {
        let [upper, lower] = shapes::flames(car);
        cmds.push(DrawCmd::FillPolygon {
            points: upper,
            color: colors::FLAME_OUTER,
            alpha: 1.0,
        });
        cmds.push(DrawCmd::FillPolygon {
            points: lower,
            color: colors::FLAME_INNER,
            alpha: 1.0,
        });
    }

    if boost_bar {
        let pos = car.pos + BOOST_BAR_OFFSET;
        let fill = BOOST_BAR_SIZE.x * car.boost_ratio.clamp(0.0, 1.0);
        cmds.push(DrawCmd::FillRect {
            pos,
            size: BOOST_BAR_SIZE,
            color: colors::BOOST_BAR_BG,
        });
        cmds.push(DrawCmd::FillRect {
            pos,
            size: Vec2::new(fill, BOOST_BAR_SIZE.y),
            color: colors::BOOST_BAR,
        });
        cmds.push(DrawCmd::StrokeRect {
            pos,
            size: BOOST_BAR_SIZE,
            color: colors::LINE,
            line_width: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Field, GameState};

    fn snapshot() -> RenderSnapshot {
        RenderSnapshot::capture(&GameState::default(), Field::new(1200.0, 800.0))
    }

    fn count(cmds: &[DrawCmd], pred: impl Fn(&DrawCmd) -> bool) -> usize {
        cmds.iter().filter(|c| pred(*c)).count()
    }

    #[test]
    fn test_scene_starts_with_clear_and_pitch() {
        let cmds = build_scene(&snapshot(), &Settings::default());
        assert_eq!(cmds[0], DrawCmd::Clear { size: Vec2::new(1200.0, 800.0) });
        assert!(matches!(cmds[1], DrawCmd::FillRect { color: colors::PITCH, .. }));
    }

    #[test]
    fn test_flame_only_while_boosting() {
        let mut snap = snapshot();
        let flames = |cmds: &[DrawCmd]| {
            count(cmds, |c| matches!(c, DrawCmd::FillPolygon { color: colors::FLAME_OUTER, .. }))
        };
        assert_eq!(flames(&build_scene(&snap, &Settings::default())), 0);

        snap.blue.boosting = true;
        assert_eq!(flames(&build_scene(&snap, &Settings::default())), 1);
    }

    #[test]
    fn test_boost_bar_width_tracks_ratio() {
        let mut snap = snapshot();
        snap.red.boost_ratio = 0.25;
        let cmds = build_scene(&snap, &Settings::default());
        let bar = cmds.iter().find_map(|c| match c {
            DrawCmd::FillRect {
                pos,
                size,
                color: colors::BOOST_BAR,
            } if *pos == snap.red.pos + BOOST_BAR_OFFSET => Some(*size),
            _ => None,
        });
        assert_eq!(bar, Some(Vec2::new(10.0, 8.0)));
    }

    #[test]
    fn test_scores_drawn_at_quarter_points() {
        let mut snap = snapshot();
        snap.red_score = 2;
        snap.blue_score = 5;
        let cmds = build_scene(&snap, &Settings::default());
        let texts: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { pos, text, .. } => Some((*pos, text.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                (Vec2::new(300.0, 100.0), "2".to_string()),
                (Vec2::new(900.0, 100.0), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_toggles_hide_hud_and_markings() {
        let settings = Settings {
            show_boost_bars: false,
            show_field_markings: false,
            show_score: false,
            ..Settings::default()
        };
        let cmds = build_scene(&snapshot(), &settings);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Text { .. })), 0);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Line { .. })), 0);
        assert_eq!(
            count(&cmds, |c| matches!(c, DrawCmd::FillRect { color: colors::BOOST_BAR, .. })),
            0
        );
    }

    #[test]
    fn test_goal_boxes_hug_side_walls() {
        let cmds = build_scene(&snapshot(), &Settings::default());
        let boxes: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::StrokeRect { pos, color, .. }
                    if *color == colors::RED_GOAL_BOX || *color == colors::BLUE_GOAL_BOX =>
                {
                    Some(*pos)
                }
                _ => None,
            })
            .collect();
        assert_eq!(boxes, vec![Vec2::new(0.0, 320.0), Vec2::new(1120.0, 320.0)]);
    }
}
