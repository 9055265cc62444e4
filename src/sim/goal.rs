//! Goal detection

use glam::Vec2;

use super::state::{Ball, Field, GameEvent, GameState};

/// True if `pos` lies in the goal mouth. Every edge is inclusive.
pub fn in_goal_mouth(pos: Vec2, field: &Field) -> bool {
    pos.y <= field.goal_height && pos.x >= field.goal_left() && pos.x <= field.goal_right()
}

/// Score a goal if the pending ball position is in the mouth.
///
/// On a goal the score goes up by one, a `GoalScored` event is queued and
/// the ball goes back to the centre spot at rest.
pub fn check_goal(state: &mut GameState, pending: &mut Ball, field: &Field) -> bool {
    if !in_goal_mouth(pending.pos, field) {
        return false;
    }

    state.score += 1;
    state.events.push(GameEvent::GoalScored { score: state.score });
    *pending = Ball::at_center(field);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(1.0, -2.0),
        }
    }

    #[test]
    fn test_goal_at_top_center() {
        let field = Field::default();
        let mut state = GameState::new(&field);
        let mut ball = ball_at(200.0, 0.0);

        assert!(check_goal(&mut state, &mut ball, &field));
        assert_eq!(state.score, 1);
        assert_eq!(ball, Ball::at_center(&field));
        assert_eq!(state.events, vec![GameEvent::GoalScored { score: 1 }]);
    }

    #[test]
    fn test_no_goal_in_corner() {
        let field = Field::default();
        let mut state = GameState::new(&field);
        let mut ball = ball_at(0.0, 0.0);

        assert!(!check_goal(&mut state, &mut ball, &field));
        assert_eq!(state.score, 0);
        assert_eq!(ball.pos, Vec2::ZERO);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_mouth_edges_inclusive() {
        let field = Field::default();
        assert!(in_goal_mouth(Vec2::new(160.0, 20.0), &field));
        assert!(in_goal_mouth(Vec2::new(240.0, 20.0), &field));
        assert!(!in_goal_mouth(Vec2::new(159.9, 10.0), &field));
        assert!(!in_goal_mouth(Vec2::new(240.1, 10.0), &field));
        assert!(!in_goal_mouth(Vec2::new(200.0, 20.1), &field));
    }

    #[test]
    fn test_score_accumulates() {
        let field = Field::default();
        let mut state = GameState::new(&field);
        for expected in 1..=3 {
            let mut ball = ball_at(200.0, 5.0);
            assert!(check_goal(&mut state, &mut ball, &field));
            assert_eq!(state.score, expected);
        }
    }
}
