//! Game state and core simulation types
//!
//! Everything mutated by a frame lives here. Nothing is persisted; a fresh
//! state is built at mount and on every restart.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not stepping; the last frame stays on screen
    #[default]
    Idle,
    /// One tick per display refresh
    Running,
}

/// Something that happened during a tick, drained by the controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball entered the goal mouth; carries the updated score
    GoalScored { score: u32 },
    /// Player touched the ball and overwrote its velocity
    BallKicked { vel: Vec2 },
}

/// Fixed rectangular play area with the goal mouth on its top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    /// Horizontal span of the goal mouth, centered
    pub goal_width: f32,
    /// Depth of the goal band measured from the top edge
    pub goal_height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            goal_width: GOAL_WIDTH,
            goal_height: GOAL_HEIGHT,
        }
    }
}

impl Field {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the player starts each game
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - PLAYER_SPAWN_OFFSET)
    }

    /// Left edge of the goal mouth
    pub fn goal_left(&self) -> f32 {
        (self.width - self.goal_width) / 2.0
    }

    /// Right edge of the goal mouth
    pub fn goal_right(&self) -> f32 {
        self.goal_left() + self.goal_width
    }
}

/// Directly controlled player square (no velocity)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the square
    pub pos: Vec2,
}

impl Player {
    pub fn spawn(field: &Field) -> Self {
        Self {
            pos: field.player_spawn(),
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball at rest on the centre spot
    pub fn at_center(field: &Field) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub ball: Ball,
    /// Goals scored since the last start
    pub score: u32,
    /// Frames stepped since the last start
    pub time_ticks: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh idle state with everything on its spawn point
    pub fn new(field: &Field) -> Self {
        Self {
            phase: GamePhase::Idle,
            player: Player::spawn(field),
            ball: Ball::at_center(field),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Put player, ball and score back to their initial values.
    /// The phase is left to the caller.
    pub fn reset(&mut self, field: &Field) {
        self.player = Player::spawn(field);
        self.ball = Ball::at_center(field);
        self.score = 0;
        self.time_ticks = 0;
        self.events.clear();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_mouth_is_centered() {
        let field = Field::default();
        assert_eq!(field.goal_left(), 160.0);
        assert_eq!(field.goal_right(), 240.0);
    }

    #[test]
    fn test_new_state_spawn_points() {
        let field = Field::default();
        let state = GameState::new(&field);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.pos, Vec2::new(200.0, 550.0));
        assert_eq!(state.ball.pos, Vec2::new(200.0, 300.0));
        assert!(state.ball.is_at_rest());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_reset_keeps_phase() {
        let field = Field::default();
        let mut state = GameState::new(&field);
        state.phase = GamePhase::Running;
        state.score = 4;
        state.ball.vel = Vec2::new(3.0, -1.0);
        state.events.push(GameEvent::GoalScored { score: 4 });

        state.reset(&field);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.ball.is_at_rest());
        assert!(state.events.is_empty());
    }
}
