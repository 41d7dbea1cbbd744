//! Keyboard adapter
//!
//! Arrow keys steer, Space fires. A Space press also counts as the
//! start/restart action; the phase machine ignores it where it does not apply.

use crate::sim::{Key, PressedKeys, TickInput, Visibility};

/// Map a host key code (`KeyboardEvent.code` naming) to a logical key
pub fn key_for_code(code: &str) -> Option<Key> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Key::Left),
        "ArrowRight" | "KeyD" => Some(Key::Right),
        "ArrowUp" | "KeyW" => Some(Key::Up),
        "ArrowDown" | "KeyS" => Some(Key::Down),
        "Space" => Some(Key::Fire),
        _ => None,
    }
}

/// Accumulates host key and visibility events between frames
#[derive(Debug, Clone, Default)]
pub struct KeyboardAdapter {
    keys: PressedKeys,
    action: bool,
    visibility: Option<Visibility>,
}

impl KeyboardAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for codes the game does not use
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = key_for_code(code) else {
            return false;
        };
        if key == Key::Fire && !self.keys.is_pressed(Key::Fire) {
            self.action = true;
        }
        self.keys.set(key, true);
        true
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(key) = key_for_code(code) else {
            return false;
        };
        self.keys.set(key, false);
        true
    }

    /// Latest visibility wins if the host reports several changes in one frame
    pub fn visibility_changed(&mut self, visibility: Visibility) {
        self.visibility = Some(visibility);
        if visibility == Visibility::Hidden {
            // Key-up events are lost while hidden
            self.keys.release_all();
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys.is_pressed(key)
    }

    /// Input for the next frame; one-shot events are consumed
    pub fn frame_input(&mut self) -> TickInput {
        let action = std::mem::take(&mut self.action);
        TickInput {
            keys: self.keys.clone(),
            start: action,
            restart: action,
            visibility: self.visibility.take(),
        }
    }
}
