//! Keyboard state tracking
//!
//! Converts key-down/key-up events (string key identifiers from the browser)
//! into four directional flags read once per simulation frame. Opposite
//! directions are independent booleans, so holding both cancels movement on
//! that axis rather than preferring one.

use serde::{Deserialize, Serialize};

/// Movement directions the tracker recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// Map a browser key identifier to a direction.
    /// WASD (either case) or the arrow keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Forward),
            "s" | "S" | "ArrowDown" => Some(Direction::Backward),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Current directional input state, sampled by the simulation each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event and update the matching flag.
    /// Unrecognized keys are ignored.
    pub fn process_key(&mut self, key: &str, pressed: bool) {
        match Direction::from_key(key) {
            Some(Direction::Forward) => self.forward = pressed,
            Some(Direction::Backward) => self.backward = pressed,
            Some(Direction::Left) => self.left = pressed,
            Some(Direction::Right) => self.right = pressed,
            None => {}
        }
    }

    /// Reset all flags (e.g. on focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn any_active(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Keys whose browser default (page scrolling) must be suppressed while the
/// tracker is active: the arrow keys and space.
pub fn consumes_key(key: &str) -> bool {
    matches!(
        key,
        "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " "
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping() {
        let mut flags = InputFlags::new();

        flags.process_key("w", true);
        assert!(flags.forward);
        assert!(!flags.backward);

        // Uppercase and arrow aliases hit the same flag
        flags.process_key("W", false);
        assert!(!flags.forward);
        flags.process_key("ArrowUp", true);
        assert!(flags.forward);

        flags.process_key("ArrowLeft", true);
        assert!(flags.left);

        flags.process_key("w", false);
        flags.process_key("a", false);
        assert!(!flags.any_active());
    }

    #[test]
    fn unknown_keys_ignored() {
        let mut flags = InputFlags::new();
        flags.process_key("Escape", true);
        flags.process_key(" ", true);
        flags.process_key("q", true);
        assert_eq!(flags, InputFlags::default());
    }

    #[test]
    fn opposite_flags_are_independent() {
        let mut flags = InputFlags::new();
        flags.process_key("a", true);
        flags.process_key("d", true);
        assert!(flags.left && flags.right);

        // Releasing one leaves the other held
        flags.process_key("a", false);
        assert!(!flags.left && flags.right);
    }

    #[test]
    fn scroll_suppression_set() {
        for key in ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", " "] {
            assert!(consumes_key(key), "{key:?} should be consumed");
        }
        assert!(!consumes_key("w"));
        assert!(!consumes_key("Enter"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut flags = InputFlags::new();
        flags.process_key("w", true);
        flags.process_key("d", true);
        flags.reset();
        assert!(!flags.any_active());
    }
}
