//! Platform abstraction layer
//!
//! Browser glue for:
//! - Frame scheduling (`requestAnimationFrame` bookkeeping)
//! - Keyboard listener lifecycle
//! - Page hide handling (back/forward cache vs unload)
//! - DOM notifications and HUD

pub mod frame;
pub mod lifecycle;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod keyboard;

pub use frame::FrameLoop;
pub use lifecycle::PageHide;
