//! Retro Soccer - a top-down arcade kick-about
//!
//! Core modules:
//! - `sim`: Per-frame simulation (player movement, ball physics, goals)
//! - `renderer`: Immediate-mode 2D drawing of the field
//! - `game`: Idle/Running controller driving one tick per display refresh
//! - `notify`: User-facing notification sink
//! - `platform`: Browser glue (keyboard, animation frames, DOM)
//! - `tuning`: Data-driven field geometry and physics coefficients

pub mod game;
pub mod notify;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::GameController;
pub use notify::{LogNotifier, Notification, Notifier, Severity};
pub use tuning::Tuning;

/// Reference geometry and physics constants
pub mod consts {
    /// Field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player is a square of this side length
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Ball diameter
    pub const BALL_SIZE: f32 = 10.0;

    /// Goal mouth on the top edge, centered horizontally
    pub const GOAL_WIDTH: f32 = 80.0;
    pub const GOAL_HEIGHT: f32 = 20.0;

    /// Player displacement per frame per held key
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Velocity multiplier applied every frame
    pub const BALL_FRICTION: f32 = 0.95;
    /// Velocity components below this magnitude snap to zero
    pub const BALL_MIN_SPEED: f32 = 0.1;
    /// Fraction of velocity kept (and reversed) on a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.8;
    /// Ball speed right after a kick
    pub const KICK_POWER: f32 = 8.0;

    /// Player spawns this far above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;

    /// Field markings
    pub const CENTER_CIRCLE_RADIUS: f32 = 40.0;
    pub const GOAL_FRAME_MARGIN: f32 = 4.0;
    pub const BOTTOM_AREA_MARGIN: f32 = 30.0;
    pub const BOTTOM_AREA_HEIGHT: f32 = 80.0;
    pub const LINE_WIDTH: f32 = 2.0;
}
