//! Data-driven game balance
//!
//! Hostile categories share one update path; everything that differs between
//! them lives in the lookup tables below.

use crate::sim::state::{HostileKind, PowerUpKind};

/// Per-kind tuning for hostiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostileTuning {
    /// Edge length of the square hitbox
    pub size: f32,
    /// Y at which the hostile stops descending and starts swaying
    pub hover_y: Option<f32>,
    /// Sway angular frequency (radians per ms of clock time)
    pub sway_freq: f32,
    /// Sway amplitude (px per reference frame)
    pub sway_amp: f32,
    /// Sway phase offset per position in the hostile list (radians)
    pub sway_phase_step: f32,
    /// Body color
    pub color: u32,
    /// Spark color when a player projectile connects
    pub hit_color: u32,
    /// Base score value
    pub points: u32,
    /// Score bonus per boss wave already triggered
    pub points_per_boss_wave: u32,
    /// Damage dealt to a vulnerable player on contact
    pub contact_damage: u32,
    /// Screen shake on contact with a vulnerable player
    pub contact_shake: f32,
    /// Explosion color around the player on contact
    pub contact_color: u32,
}

pub const GRUNT: HostileTuning = HostileTuning {
    size: 30.0,
    hover_y: None,
    sway_freq: 0.0,
    sway_amp: 0.0,
    sway_phase_step: 0.0,
    color: 0xff0000,
    hit_color: 0xffffff,
    points: 10,
    points_per_boss_wave: 0,
    contact_damage: crate::consts::GRUNT_CONTACT_DAMAGE,
    contact_shake: 10.0,
    contact_color: 0xff0000,
};

pub const BOSS: HostileTuning = HostileTuning {
    size: 120.0,
    hover_y: Some(50.0),
    sway_freq: 0.002,
    sway_amp: 2.0,
    sway_phase_step: 0.0,
    color: 0xaa0000,
    hit_color: 0xffff00,
    points: 750,
    points_per_boss_wave: 100,
    contact_damage: crate::consts::BOSS_CONTACT_DAMAGE,
    contact_shake: 15.0,
    contact_color: 0xff0000,
};

pub const MINI_BOSS: HostileTuning = HostileTuning {
    size: 60.0,
    hover_y: Some(40.0),
    sway_freq: 0.003,
    sway_amp: 1.5,
    sway_phase_step: 1.0,
    color: 0xcc4400,
    hit_color: 0xff8800,
    points: 250,
    points_per_boss_wave: 0,
    contact_damage: crate::consts::MINI_BOSS_CONTACT_DAMAGE,
    contact_shake: 12.0,
    contact_color: 0xff8800,
};

/// Tuning lookup keyed by hostile kind
pub fn hostile(kind: HostileKind) -> &'static HostileTuning {
    match kind {
        HostileKind::Grunt => &GRUNT,
        HostileKind::Boss => &BOSS,
        HostileKind::MiniBoss => &MINI_BOSS,
    }
}

/// Palette for basic enemies (picked uniformly at spawn)
pub const GRUNT_PALETTE: [u32; 6] = [0xff0000, 0xff8800, 0xffff00, 0x00ff00, 0x0088ff, 0x8800ff];

/// Boss-kill explosion colors
pub const BOSS_EXPLOSION_PALETTE: [u32; 3] = [0xff0000, 0xff8800, 0xffff00];

/// Player death explosion colors
pub const DEATH_PALETTE: [u32; 3] = [0x00ffff, 0x0088ff, 0xffffff];

/// Projectile colors
pub const LASER_COLOR: u32 = 0x00ffff;
pub const WING_LASER_COLOR: u32 = 0xffff00;
pub const SPECIAL_LASER_COLOR: u32 = 0xff00ff;
pub const ENEMY_LASER_COLOR: u32 = 0xff0000;

/// Contact sparks when an invincible player rams a boss
pub const RAM_SPARK_COLOR: u32 = 0xffaa00;

/// Power-up pickup size and fall speed
pub const POWER_UP_SIZE: f32 = 24.0;
pub const POWER_UP_SPEED: f32 = 2.0;

/// Color of a power-up by kind
pub fn power_up_color(kind: PowerUpKind) -> u32 {
    match kind {
        PowerUpKind::Health => 0x00ff00,
        PowerUpKind::Wings => 0xffff00,
        PowerUpKind::Size => 0xff8800,
    }
}

/// Effect duration of a timed power-up (ms); `None` for instant effects
pub fn power_up_duration_ms(kind: PowerUpKind) -> Option<f32> {
    match kind {
        PowerUpKind::Health => None,
        PowerUpKind::Wings => Some(15_000.0),
        PowerUpKind::Size => Some(10_000.0),
    }
}

/// Gas cloud tints (background)
pub const CLOUD_PALETTE: [u32; 4] = [0x3a1c71, 0x1c3f71, 0x5b1a4a, 0x123d3d];
