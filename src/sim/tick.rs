//! Fixed-step frame update
//!
//! One call is one display frame. Within a frame the ball sees, in order:
//! integration, wall bounce, kick, goal check.

use super::goal::check_goal;
use super::input::HeldKeys;
use super::physics::{bounce_walls, integrate_ball, kick, move_player};
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Advance the game by one frame. Does nothing unless running.
///
/// `keys` is read as it stands at call time. Returns whether a step ran.
pub fn tick(state: &mut GameState, keys: &HeldKeys, tuning: &Tuning) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }

    state.time_ticks += 1;

    move_player(&mut state.player, keys, tuning);

    let mut ball = state.ball;
    integrate_ball(&mut ball, tuning);
    let bounce = bounce_walls(&mut ball, tuning);
    if bounce.any() {
        log::trace!("tick {}: wall bounce {:?}", state.time_ticks, bounce);
    }

    if let Some(vel) = kick(&mut ball, &state.player, tuning) {
        state.events.push(GameEvent::BallKicked { vel });
    }

    check_goal(state, &mut ball, &tuning.field);
    state.ball = ball;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::MoveKey;
    use crate::sim::state::Ball;
    use glam::Vec2;

    fn running() -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning.field);
        state.phase = GamePhase::Running;
        (state, tuning)
    }

    #[test]
    fn test_idle_does_not_step() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning.field);
        state.ball.vel = Vec2::new(3.0, 3.0);
        let keys: HeldKeys = [MoveKey::Up].into_iter().collect();

        assert!(!tick(&mut state, &keys, &tuning));
        assert_eq!(state.ball.pos, tuning.field.center());
        assert_eq!(state.player.pos, tuning.field.player_spawn());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_running_moves_player() {
        let (mut state, tuning) = running();
        let keys: HeldKeys = [MoveKey::Up].into_iter().collect();
        assert!(tick(&mut state, &keys, &tuning));
        assert_eq!(state.player.pos, Vec2::new(200.0, 545.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_kick_raises_event() {
        let (mut state, tuning) = running();
        state.player.pos = Vec2::new(200.0, 312.0);
        assert!(tick(&mut state, &HeldKeys::new(), &tuning));

        // Ball sits straight above the player, so it is kicked upward
        assert!((state.ball.vel.y + tuning.kick_power).abs() < 1e-5);
        assert!(matches!(
            state.drain_events().as_slice(),
            [GameEvent::BallKicked { .. }]
        ));
    }

    #[test]
    fn test_bounce_then_goal_same_frame() {
        let (mut state, tuning) = running();
        // Heading out through the top edge inside the goal span
        state.ball = Ball {
            pos: Vec2::new(200.0, 4.0),
            vel: Vec2::new(0.0, -6.0),
        };
        tick(&mut state, &HeldKeys::new(), &tuning);

        assert_eq!(state.score, 1);
        assert_eq!(state.ball, Ball::at_center(&tuning.field));
        assert_eq!(state.drain_events(), vec![GameEvent::GoalScored { score: 1 }]);
    }

    #[test]
    fn test_top_wall_outside_goal_only_bounces() {
        let (mut state, tuning) = running();
        state.ball = Ball {
            pos: Vec2::new(50.0, 8.0),
            vel: Vec2::new(0.0, -6.0),
        };
        tick(&mut state, &HeldKeys::new(), &tuning);

        assert_eq!(state.score, 0);
        assert_eq!(state.ball.pos.y, 5.0);
        assert!(state.ball.vel.y > 0.0);
    }
}
