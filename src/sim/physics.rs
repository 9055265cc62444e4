//! Per-frame physics
//!
//! Fixed-step explicit Euler: every call advances exactly one display frame,
//! whatever the real elapsed time was.

use glam::Vec2;

use super::input::HeldKeys;
use super::state::{Ball, Player};
use crate::tuning::Tuning;

/// Which velocity components a wall bounce reversed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    /// Hit the left or right edge
    pub x: bool,
    /// Hit the top or bottom edge
    pub y: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Move the player one step per held key and keep the square inside the field
pub fn move_player(player: &mut Player, keys: &HeldKeys, tuning: &Tuning) {
    let half = tuning.player_half();
    let field = &tuning.field;

    let next = player.pos + keys.direction() * tuning.player_speed;
    player.pos = Vec2::new(
        next.x.clamp(half, field.width - half),
        next.y.clamp(half, field.height - half),
    );
}

/// Advance the ball one step, then apply friction and snap residual drift to zero
pub fn integrate_ball(ball: &mut Ball, tuning: &Tuning) {
    ball.pos += ball.vel;
    ball.vel *= tuning.ball_friction;

    if ball.vel.x.abs() < tuning.ball_min_speed {
        ball.vel.x = 0.0;
    }
    if ball.vel.y.abs() < tuning.ball_min_speed {
        ball.vel.y = 0.0;
    }
}

/// Reflect the ball off any edge it reached, damping the reflected component.
///
/// All four edges behave the same here; the goal mouth is handled separately.
pub fn bounce_walls(ball: &mut Ball, tuning: &Tuning) -> WallBounce {
    let r = tuning.ball_radius();
    let field = &tuning.field;
    let mut bounce = WallBounce::default();

    if ball.pos.x <= r || ball.pos.x >= field.width - r {
        ball.vel.x *= -tuning.wall_restitution;
        ball.pos.x = ball.pos.x.clamp(r, field.width - r);
        bounce.x = true;
    }
    if ball.pos.y <= r || ball.pos.y >= field.height - r {
        ball.vel.y *= -tuning.wall_restitution;
        ball.pos.y = ball.pos.y.clamp(r, field.height - r);
        bounce.y = true;
    }

    bounce
}

/// Kick the ball if the player touches it.
///
/// The new velocity replaces the old one outright and points from the
/// player's centre through the ball's. Returns the new velocity on contact.
pub fn kick(ball: &mut Ball, player: &Player, tuning: &Tuning) -> Option<Vec2> {
    let delta = ball.pos - player.pos;
    if delta.length() >= tuning.contact_distance() {
        return None;
    }

    let angle = delta.y.atan2(delta.x);
    ball.vel = Vec2::new(angle.cos(), angle.sin()) * tuning.kick_power;
    Some(ball.vel)
}
