//! Held movement keys
//!
//! Key events arrive between frames and are folded into a small set that the
//! tick reads once per frame.

use glam::Vec2;

/// One of the four movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [MoveKey::Up, MoveKey::Down, MoveKey::Left, MoveKey::Right];

    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(MoveKey::Up),
            "ArrowDown" => Some(MoveKey::Down),
            "ArrowLeft" => Some(MoveKey::Left),
            "ArrowRight" => Some(MoveKey::Right),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            MoveKey::Up => 1,
            MoveKey::Down => 1 << 1,
            MoveKey::Left => 1 << 2,
            MoveKey::Right => 1 << 3,
        }
    }
}

/// Set of currently held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    mask: u8,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held. Returns false if it already was.
    pub fn press(&mut self, key: MoveKey) -> bool {
        let was_held = self.is_held(key);
        self.mask |= key.bit();
        !was_held
    }

    /// Mark a key as released. Returns false if it was not held.
    pub fn release(&mut self, key: MoveKey) -> bool {
        let was_held = self.is_held(key);
        self.mask &= !key.bit();
        was_held
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.mask & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Per-axis direction, each component in {-1, 0, 1} (screen y grows down).
    /// Axes are independent, so diagonals are not normalized.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(MoveKey::Left) {
            dir.x -= 1.0;
        }
        if self.is_held(MoveKey::Right) {
            dir.x += 1.0;
        }
        if self.is_held(MoveKey::Up) {
            dir.y -= 1.0;
        }
        if self.is_held(MoveKey::Down) {
            dir.y += 1.0;
        }
        dir
    }
}

impl FromIterator<MoveKey> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = MoveKey>>(iter: I) -> Self {
        let mut keys = HeldKeys::new();
        for key in iter {
            keys.press(key);
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(MoveKey::from_key("ArrowUp"), Some(MoveKey::Up));
        assert_eq!(MoveKey::from_key("ArrowDown"), Some(MoveKey::Down));
        assert_eq!(MoveKey::from_key("ArrowLeft"), Some(MoveKey::Left));
        assert_eq!(MoveKey::from_key("ArrowRight"), Some(MoveKey::Right));
        assert_eq!(MoveKey::from_key(" "), None);
        assert_eq!(MoveKey::from_key("arrowup"), None);
    }

    #[test]
    fn test_press_release_idempotent() {
        let mut keys = HeldKeys::new();
        assert!(keys.press(MoveKey::Up));
        assert!(!keys.press(MoveKey::Up));
        assert!(keys.is_held(MoveKey::Up));

        assert!(keys.release(MoveKey::Up));
        assert!(!keys.release(MoveKey::Up));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_direction_is_unnormalized() {
        let keys: HeldKeys = [MoveKey::Up, MoveKey::Left].into_iter().collect();
        assert_eq!(keys.direction(), Vec2::new(-1.0, -1.0));

        let opposing: HeldKeys = [MoveKey::Left, MoveKey::Right].into_iter().collect();
        assert_eq!(opposing.direction(), Vec2::ZERO);
    }
}
