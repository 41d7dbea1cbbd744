//! Per-frame simulation step
//!
//! Fixed order within a frame: phase actions, spawn, motion, collision,
//! difficulty, automatic phase transitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use super::{collision, difficulty, motion, phase, spawn};

/// Logical keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// Logical key -> pressed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressedKeys {
    pressed: HashMap<Key, bool>,
}

impl PressedKeys {
    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed.insert(key, pressed);
    }

    /// Absent keys read as released
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.get(&key).copied().unwrap_or(false)
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }
}

impl FromIterator<Key> for PressedKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            pressed: iter.into_iter().map(|key| (key, true)).collect(),
        }
    }
}

/// Display visibility reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub keys: PressedKeys,
    /// Start action (title screen)
    pub start: bool,
    /// Restart action (game-over screen)
    pub restart: bool,
    /// Visibility change since the last frame
    pub visibility: Option<Visibility>,
}

/// Advance the session by one display frame of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

    // Before the clock moves: the hidden frame's delta belongs to the pause,
    // the visible frame's delta to play
    match input.visibility {
        Some(Visibility::Hidden) => {
            phase::suspend(state);
        }
        Some(Visibility::Visible) => {
            phase::resume(state);
        }
        None => {}
    }
    state.clock.advance(dt_ms);

    if input.start {
        phase::start(state);
    }
    if input.restart {
        phase::restart(state);
    }

    match state.phase {
        // Render-only: nothing moves, no timers run
        GamePhase::Paused => return,
        GamePhase::Start | GamePhase::GameOver => update_ambient(state, dt_ms),
        GamePhase::Playing => {
            spawn::run(state);
            motion::update_player(state, &input.keys, dt_ms);
            update_world(state, dt_ms);
            collision::resolve(state, true);
        }
        GamePhase::Dying => {
            update_world(state, dt_ms);
            collision::resolve(state, false);
            phase::update_dying(state);
        }
    }

    state.screen_shake = motion::decay_shake(state.screen_shake, dt_ms);
    state.wave = difficulty::wave_for_score(state.score);
    state.enemy_spawn_interval_ms = difficulty::enemy_spawn_interval_ms(state.wave);
    phase::check_transitions(state);
}

/// Everything except the player's own controls
fn update_world(state: &mut GameState, dt_ms: f32) {
    motion::update_projectiles(state, dt_ms);
    motion::update_hostiles(state, dt_ms);
    motion::update_power_ups(state, dt_ms);
    update_ambient(state, dt_ms);
}

/// Particles, exhaust and background
fn update_ambient(state: &mut GameState, dt_ms: f32) {
    motion::update_particles(&mut state.particles, dt_ms);
    motion::update_particles(&mut state.player.thrusters, dt_ms);
    let (width, height) = (state.config.width, state.config.height);
    motion::update_backdrop(&mut state.backdrop, &mut state.rng, width, height, dt_ms);
}
