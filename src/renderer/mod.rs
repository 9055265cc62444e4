//! 2D field rendering
//!
//! Immediate mode: every frame issues the same fixed sequence of canvas-style
//! primitives on a `Surface`. Nothing is retained between frames.

pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use std::f32::consts::TAU;

use crate::consts::*;
use crate::sim::{Ball, Field, GameState, Player};
use crate::tuning::Tuning;

/// Field palette
pub mod colors {
    pub const GRASS: &str = "#2d5016";
    pub const LINE: &str = "#d4d4d8";
    pub const GOAL_NET: &str = "#1a1a1a";
    pub const PLAYER_FILL: &str = "#22c55e";
    pub const PLAYER_BORDER: &str = "#16a34a";
    pub const BALL_FILL: &str = "#f5f5f4";
    pub const BALL_BORDER: &str = "#1a1a1a";
}

/// Drawing primitives of a 2D canvas
pub trait Surface {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn fill(&mut self);
    fn stroke(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_fill_style(&mut self, color: &str) {
        (**self).set_fill_style(color)
    }
    fn set_stroke_style(&mut self, color: &str) {
        (**self).set_stroke_style(color)
    }
    fn set_line_width(&mut self, width: f32) {
        (**self).set_line_width(width)
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        (**self).fill_rect(x, y, w, h)
    }
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        (**self).stroke_rect(x, y, w, h)
    }
    fn begin_path(&mut self) {
        (**self).begin_path()
    }
    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y)
    }
    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y)
    }
    fn arc(&mut self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        (**self).arc(x, y, radius, start_angle, end_angle)
    }
    fn fill(&mut self) {
        (**self).fill()
    }
    fn stroke(&mut self) {
        (**self).stroke()
    }
}

/// Draw one complete frame: pitch, then player, then ball
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState, tuning: &Tuning) {
    draw_pitch(surface, &tuning.field);
    draw_player(surface, &state.player, tuning.player_size);
    draw_ball(surface, &state.ball, tuning.ball_radius());
}

/// Grass, halfway line, centre circle, goal and the bottom area
pub fn draw_pitch<S: Surface + ?Sized>(surface: &mut S, field: &Field) {
    surface.set_fill_style(colors::GRASS);
    surface.fill_rect(0.0, 0.0, field.width, field.height);

    surface.set_stroke_style(colors::LINE);
    surface.set_line_width(LINE_WIDTH);

    let center = field.center();

    // Halfway line
    surface.begin_path();
    surface.move_to(0.0, center.y);
    surface.line_to(field.width, center.y);
    surface.stroke();

    // Centre circle
    surface.begin_path();
    surface.arc(center.x, center.y, CENTER_CIRCLE_RADIUS, 0.0, TAU);
    surface.stroke();

    // Goal, drawn slightly wider than the scoring span
    let goal_x = field.goal_left() - GOAL_FRAME_MARGIN;
    let goal_w = field.goal_width + 2.0 * GOAL_FRAME_MARGIN;
    surface.set_fill_style(colors::GOAL_NET);
    surface.fill_rect(goal_x, 0.0, goal_w, field.goal_height);
    surface.set_stroke_style(colors::LINE);
    surface.stroke_rect(goal_x, 0.0, goal_w, field.goal_height);

    // Bottom area
    surface.stroke_rect(
        field.goal_left() - BOTTOM_AREA_MARGIN,
        field.height - BOTTOM_AREA_HEIGHT,
        field.goal_width + 2.0 * BOTTOM_AREA_MARGIN,
        BOTTOM_AREA_HEIGHT,
    );
}

pub fn draw_player<S: Surface + ?Sized>(surface: &mut S, player: &Player, size: f32) {
    let x = player.pos.x - size / 2.0;
    let y = player.pos.y - size / 2.0;

    surface.set_fill_style(colors::PLAYER_FILL);
    surface.fill_rect(x, y, size, size);
    surface.set_stroke_style(colors::PLAYER_BORDER);
    surface.set_line_width(LINE_WIDTH);
    surface.stroke_rect(x, y, size, size);
}

pub fn draw_ball<S: Surface + ?Sized>(surface: &mut S, ball: &Ball, radius: f32) {
    surface.set_fill_style(colors::BALL_FILL);
    surface.begin_path();
    surface.arc(ball.pos.x, ball.pos.y, radius, 0.0, TAU);
    surface.fill();
    surface.set_stroke_style(colors::BALL_BORDER);
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &GameState, tuning: &Tuning) -> Vec<DrawCommand> {
        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, state, tuning);
        surface.take()
    }

    #[test]
    fn test_frame_is_idempotent() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning.field);
        assert_eq!(render(&state, &tuning), render(&state, &tuning));
    }

    #[test]
    fn test_draw_does_not_touch_state() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning.field);
        let before = format!("{:?}", state);
        render(&state, &tuning);
        assert_eq!(format!("{:?}", state), before);
    }

    #[test]
    fn test_background_first_ball_last() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning.field);
        let cmds = render(&state, &tuning);

        assert_eq!(cmds[0], DrawCommand::FillStyle(colors::GRASS.to_string()));
        assert_eq!(cmds[1], DrawCommand::FillRect { x: 0.0, y: 0.0, w: 400.0, h: 600.0 });
        assert_eq!(cmds.last(), Some(&DrawCommand::Stroke));
        assert!(cmds.contains(&DrawCommand::Arc {
            x: 200.0,
            y: 300.0,
            radius: 5.0,
            start: 0.0,
            end: TAU,
        }));
    }

    #[test]
    fn test_goal_and_player_geometry() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning.field);
        let cmds = render(&state, &tuning);

        // Goal frame is 4px wider than the mouth on each side
        assert!(cmds.contains(&DrawCommand::FillRect { x: 156.0, y: 0.0, w: 88.0, h: 20.0 }));
        // Bottom area
        assert!(cmds.contains(&DrawCommand::StrokeRect { x: 130.0, y: 520.0, w: 140.0, h: 80.0 }));
        // Player square centred on (200, 550)
        assert!(cmds.contains(&DrawCommand::FillRect { x: 190.0, y: 540.0, w: 20.0, h: 20.0 }));
    }
}
