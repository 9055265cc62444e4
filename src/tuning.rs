//! Data-driven game balance
//!
//! Field geometry and physics coefficients. Defaults reproduce the reference
//! game; overrides are read from LocalStorage on the web build.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Field;

/// Physics and geometry knobs for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Field bounds and goal mouth
    pub field: Field,

    // === Bodies ===
    /// Side length of the player square
    pub player_size: f32,
    /// Ball diameter
    pub ball_size: f32,

    // === Physics (per frame) ===
    /// Player displacement per held key
    pub player_speed: f32,
    /// Ball velocity multiplier, must be in (0, 1)
    pub ball_friction: f32,
    /// Velocity components below this snap to zero
    pub ball_min_speed: f32,
    /// Bounce damping, must be in (0, 1)
    pub wall_restitution: f32,
    /// Ball speed after a kick
    pub kick_power: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field: Field::default(),

            player_size: PLAYER_SIZE,
            ball_size: BALL_SIZE,

            player_speed: PLAYER_SPEED,
            ball_friction: BALL_FRICTION,
            ball_min_speed: BALL_MIN_SPEED,
            wall_restitution: WALL_RESTITUTION,
            kick_power: KICK_POWER,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "retro_soccer_tuning";

    /// Parse tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Half the player's extent (clamp margin)
    pub fn player_half(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Ball radius (wall collision margin)
    pub fn ball_radius(&self) -> f32 {
        self.ball_size / 2.0
    }

    /// Centre distance below which player and ball touch
    pub fn contact_distance(&self) -> f32 {
        (self.player_size + self.ball_size) / 2.0
    }

    /// Replace out-of-range values with defaults so the physics invariants hold
    pub fn sanitized(mut self) -> Self {
        let defaults = Tuning::default();

        self.field.width = positive_or(self.field.width, defaults.field.width, "field.width");
        self.field.height = positive_or(self.field.height, defaults.field.height, "field.height");
        self.player_size = positive_or(self.player_size, defaults.player_size, "player_size");
        self.ball_size = positive_or(self.ball_size, defaults.ball_size, "ball_size");
        self.player_speed = positive_or(self.player_speed, defaults.player_speed, "player_speed");
        self.kick_power = positive_or(self.kick_power, defaults.kick_power, "kick_power");

        self.ball_friction =
            unit_or(self.ball_friction, defaults.ball_friction, "ball_friction");
        self.wall_restitution =
            unit_or(self.wall_restitution, defaults.wall_restitution, "wall_restitution");

        if self.ball_min_speed.is_nan() || self.ball_min_speed < 0.0 {
            log::warn!("ball_min_speed {} out of range, using default", self.ball_min_speed);
            self.ball_min_speed = defaults.ball_min_speed;
        }

        // Bodies must fit inside the field or the clamp ranges invert
        let min_side = self.field.width.min(self.field.height);
        if self.player_size > min_side || self.ball_size > min_side {
            log::warn!("bodies larger than field, using default sizes");
            self.player_size = defaults.player_size.min(min_side);
            self.ball_size = defaults.ball_size.min(min_side);
        }

        self.field.goal_width = self.field.goal_width.clamp(0.0, self.field.width);
        self.field.goal_height = self.field.goal_height.clamp(0.0, self.field.height);

        self
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn positive_or(value: f32, default: f32, name: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{} = {} out of range, using default", name, value);
        default
    }
}

fn unit_or(value: f32, default: f32, name: &str) -> f32 {
    if value > 0.0 && value < 1.0 {
        value
    } else {
        log::warn!("{} = {} not in (0, 1), using default", name, value);
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let t = Tuning::default();
        assert_eq!(t.field.width, 400.0);
        assert_eq!(t.field.height, 600.0);
        assert_eq!(t.player_half(), 10.0);
        assert_eq!(t.ball_radius(), 5.0);
        assert_eq!(t.contact_distance(), 15.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "kick_power": 12.0 }"#).unwrap();
        assert_eq!(t.kick_power, 12.0);
        assert_eq!(t.ball_friction, BALL_FRICTION);
        assert_eq!(t.field, Field::default());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("{ kick_power: }").is_err());
    }

    #[test]
    fn test_sanitize_rejects_non_damping_coefficients() {
        let t = Tuning {
            ball_friction: 1.0,
            wall_restitution: -0.5,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.ball_friction, BALL_FRICTION);
        assert_eq!(t.wall_restitution, WALL_RESTITUTION);
    }

    #[test]
    fn test_sanitize_fits_goal_inside_field() {
        let mut t = Tuning::default();
        t.field.goal_width = 1000.0;
        t.field.goal_height = -3.0;
        let t = t.sanitized();
        assert_eq!(t.field.goal_width, t.field.width);
        assert_eq!(t.field.goal_height, 0.0);
    }
}
