//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Logical clock only (advanced by frame deltas, never wall time)
//! - Seeded RNG only
//! - Stable iteration order (insertion order within each entity list)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod effects;
pub mod motion;
pub mod phase;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::SimClock;
pub use state::{
    Backdrop, GamePhase, GameState, Hostile, HostileKind, Hud, Particle, Player, PowerUp,
    PowerUpKind, Projectile, ProjectileKind, Snapshot, SpawnTimers,
};
pub use tick::{Key, PressedKeys, TickInput, Visibility, tick};
