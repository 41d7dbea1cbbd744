//! Nova Strike - simulation core of a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, phases)
//! - `platform`: Host adapters (key codes, display-frame timing)
//! - `settings`: User configuration
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, SessionConfig, Settings};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Reference frame length (ms). Per-frame speeds are tuned at 60 Hz.
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Largest frame delta the host adapter will hand to the simulation
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    /// Distance of the player's spawn point above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 60.0;
    pub const PLAYER_SHOT_COOLDOWN_MS: f64 = 200.0;

    /// Projectiles
    pub const LASER_SPEED: f32 = 8.0;
    pub const LASER_SPREAD: f32 = 15.0;
    pub const WING_SPREAD: f32 = 35.0;
    /// Sideways drift of wing shots (px/frame)
    pub const WING_DRIFT: f32 = 1.2;
    pub const ENEMY_LASER_SPEED: f32 = -4.0;
    pub const SPECIAL_LASER_DAMAGE: u32 = 3;

    /// Power-up effects
    pub const HEALTH_PICKUP_AMOUNT: u32 = 50;
    pub const SIZE_BOOST_MULTIPLIER: f32 = 1.8;

    /// Contact damage dealt to the player
    pub const ENEMY_LASER_DAMAGE: u32 = 10;
    pub const GRUNT_CONTACT_DAMAGE: u32 = 20;
    pub const BOSS_CONTACT_DAMAGE: u32 = 30;
    pub const MINI_BOSS_CONTACT_DAMAGE: u32 = 20;
    /// Damage an invincible player deals to a boss per overlapping frame
    pub const RAM_DAMAGE: i32 = 5;

    /// Spawn intervals (ms)
    pub const BOSS_WAVE_INTERVAL_MS: f64 = 30_000.0;
    pub const POWER_UP_INTERVAL_MS: f64 = 15_000.0;
    /// Boss wave from which mini-bosses escort the boss
    pub const MINI_BOSS_FIRST_WAVE: u32 = 3;

    /// Death sequence
    pub const DEATH_DURATION_MS: f64 = 2500.0;
    /// Follow-up bursts stop this long before the sequence ends
    pub const DEATH_BURST_CUTOFF_MS: f64 = 500.0;
    pub const DEATH_BURST_CHANCE: f64 = 0.3;
    pub const DEATH_SHAKE: f32 = 25.0;

    /// Screen shake decay per reference frame
    pub const SHAKE_DECAY: f32 = 0.9;
    /// Particle velocity damping per reference frame
    pub const PARTICLE_DAMPING: f32 = 0.99;
}

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap on both axes; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Scale factor for a frame delta relative to the 60 Hz reference frame
#[inline]
pub fn frame_scale(dt_ms: f32) -> f32 {
    dt_ms / consts::FRAME_MS
}
