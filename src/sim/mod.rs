//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-frame step, no wall-clock time
//! - Events are queued on the state, never sent anywhere
//! - No rendering or platform dependencies

pub mod goal;
pub mod input;
pub mod physics;
pub mod state;
pub mod tick;

pub use goal::{check_goal, in_goal_mouth};
pub use input::{HeldKeys, MoveKey};
pub use physics::{WallBounce, bounce_walls, integrate_ball, kick, move_player};
pub use state::{Ball, Field, GameEvent, GamePhase, GameState, Player};
pub use tick::tick;
