//! Game state and core simulation types
//!
//! `GameState` is the whole session: every update function takes it by
//! `&mut` and nothing lives outside it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::SimClock;
use super::difficulty;
use crate::Rect;
use crate::consts::*;
use crate::settings::SessionConfig;
use crate::tuning::CLOUD_PALETTE;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start action
    Start,
    /// Active gameplay
    Playing,
    /// Display hidden; nothing updates
    Paused,
    /// Player destroyed, death sequence running
    Dying,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub base_size: Vec2,
    /// Current hitbox size (scaled while size boost is active)
    pub size: Vec2,
    /// Movement speed (px per reference frame)
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    pub shot_cooldown_ms: f64,
    /// Clock time of the last shot (`None` until the first shot)
    pub last_shot_ms: Option<f64>,
    pub has_wings: bool,
    /// Remaining wings time (ms)
    pub wings_ms: f32,
    pub size_boost: bool,
    /// Remaining size boost time (ms)
    pub size_boost_ms: f32,
    pub invincible: bool,
    /// Smoothed bank angle in [-1, 1] (negative = left)
    pub tilt: f32,
    /// Engine glow intensity in [0, 1]
    pub engine_glow: f32,
    /// Short-lived exhaust particles
    pub thrusters: Vec<Particle>,
}

impl Player {
    pub fn new(arena_width: f32, arena_height: f32) -> Self {
        let base_size = Vec2::splat(PLAYER_SIZE);
        Self {
            pos: Vec2::new(
                (arena_width - PLAYER_SIZE) / 2.0,
                arena_height - PLAYER_SPAWN_OFFSET,
            ),
            base_size,
            size: base_size,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            shot_cooldown_ms: PLAYER_SHOT_COOLDOWN_MS,
            last_shot_ms: None,
            has_wings: false,
            wings_ms: 0.0,
            size_boost: false,
            size_boost_ms: 0.0,
            invincible: false,
            tilt: 0.0,
            engine_glow: 0.0,
            thrusters: Vec::new(),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Current size relative to the base size
    pub fn size_multiplier(&self) -> f32 {
        self.size.x / self.base_size.x
    }

    /// Subtract health, clamped at zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    /// Restore health, clamped at max
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn health_percent(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32 * 100.0).clamp(0.0, 100.0)
    }

    pub fn activate_wings(&mut self, duration_ms: f32) {
        self.has_wings = true;
        self.wings_ms = duration_ms;
    }

    /// Grow and become invincible; keeps the ship centered on its old spot
    pub fn activate_size_boost(&mut self, duration_ms: f32) {
        let center = self.center();
        self.size_boost = true;
        self.size_boost_ms = duration_ms;
        self.size = self.base_size * SIZE_BOOST_MULTIPLIER;
        self.pos = center - self.size * 0.5;
        self.invincible = true;
    }

    pub fn clear_size_boost(&mut self) {
        let center = self.center();
        self.size_boost = false;
        self.size_boost_ms = 0.0;
        self.size = self.base_size;
        self.pos = center - self.size * 0.5;
        self.invincible = false;
    }

    /// Keep the hitbox inside the arena
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        self.pos.x = self.pos.x.clamp(0.0, (width - self.size.x).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (height - self.size.y).max(0.0));
    }
}

/// Projectile variants (drive damage and visuals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Standard player laser
    Laser,
    /// Angled shot added by the wings power-up
    Wing,
    /// Heavy laser fired while size boost is active
    Special,
    /// Fired by a boss or mini-boss
    Hostile,
}

/// A projectile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed: positive travels up (player), negative travels down
    pub speed: f32,
    /// Horizontal drift (px per reference frame)
    pub drift: f32,
    /// Fired by a hostile
    pub enemy: bool,
    pub damage: u32,
    pub color: u32,
}

impl Projectile {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Hostile categories sharing one record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    Grunt,
    Boss,
    MiniBoss,
}

/// A basic enemy, boss or mini-boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub id: u32,
    pub kind: HostileKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Descent speed (px per reference frame)
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub points: u32,
    pub color: u32,
    /// Clock time of the last shot; `None` until the first one
    pub last_shot_ms: Option<f64>,
    /// `None` for hostiles that never shoot
    pub shot_cooldown_ms: Option<f64>,
}

impl Hostile {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Wings,
    Size,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Health, PowerUpKind::Wings, PowerUpKind::Size];
}

/// A falling power-up pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: u32,
}

impl PowerUp {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Velocity (px per reference frame)
    pub vel: Vec2,
    /// Remaining life (ms)
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub color: u32,
    pub rotation: f32,
    /// Radians per reference frame
    pub rotation_speed: f32,
    /// Extra opacity multiplier on top of the life fade
    pub opacity: Option<f32>,
    /// Downward velocity added per reference frame
    pub gravity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, size: f32, color: u32) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
            size,
            color,
            rotation: 0.0,
            rotation_speed: 0.0,
            opacity: None,
            gravity: 0.0,
        }
    }

    /// Render alpha in [0, 1]
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        let fade = (self.life / self.max_life).clamp(0.0, 1.0);
        fade * self.opacity.unwrap_or(1.0).clamp(0.0, 1.0)
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// A background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Twinkle phase (radians)
    pub twinkle: f32,
}

/// A slow-drifting background gas cloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasCloud {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub color: u32,
    pub alpha: f32,
}

/// Decorative, non-interactive background
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backdrop {
    pub stars: Vec<Star>,
    pub clouds: Vec<GasCloud>,
}

impl Backdrop {
    pub fn generate<R: Rng>(rng: &mut R, config: &SessionConfig) -> Self {
        let stars = (0..config.star_count)
            .map(|i| Star {
                pos: Vec2::new(
                    rng.random::<f32>() * config.width,
                    rng.random::<f32>() * config.height,
                ),
                size: (i % 3) as f32 + 1.0,
                speed: 0.3 + (i % 3) as f32 * 0.4,
                twinkle: rng.random::<f32>() * std::f32::consts::TAU,
            })
            .collect();
        let clouds = (0..config.cloud_count)
            .map(|_| GasCloud {
                pos: Vec2::new(
                    rng.random::<f32>() * config.width,
                    rng.random::<f32>() * config.height,
                ),
                radius: 80.0 + rng.random::<f32>() * 120.0,
                speed: 0.1 + rng.random::<f32>() * 0.2,
                color: CLOUD_PALETTE[rng.random_range(0..CLOUD_PALETTE.len())],
                alpha: 0.05 + rng.random::<f32>() * 0.1,
            })
            .collect();
        Self { stars, clouds }
    }
}

/// Clock times of the last timer-gated spawns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub last_enemy_ms: f64,
    pub last_boss_wave_ms: f64,
    pub last_power_up_ms: f64,
}

impl SpawnTimers {
    pub fn starting_at(now: f64) -> Self {
        Self {
            last_enemy_ms: now,
            last_boss_wave_ms: now,
            last_power_up_ms: now,
        }
    }

    pub fn shift(&mut self, gap_ms: f64) {
        self.last_enemy_ms += gap_ms;
        self.last_boss_wave_ms += gap_ms;
        self.last_power_up_ms += gap_ms;
    }
}

/// Numbers for the score/health widgets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    /// In [0, 100]
    pub health_percent: f32,
    pub wave: u32,
    pub phase: GamePhase,
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub time_ms: f64,
    pub screen_shake: f32,
    pub player: &'a Player,
    pub projectiles: &'a [Projectile],
    pub enemies: &'a [Hostile],
    pub bosses: &'a [Hostile],
    pub mini_bosses: &'a [Hostile],
    pub power_ups: &'a [PowerUp],
    pub particles: &'a [Particle],
    pub backdrop: &'a Backdrop,
    pub hud: Hud,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SessionConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub clock: SimClock,
    pub phase: GamePhase,
    pub score: u64,
    /// Derived from score every frame
    pub wave: u32,
    /// Derived from wave every frame
    pub enemy_spawn_interval_ms: f64,
    pub boss_wave_count: u32,
    pub timers: SpawnTimers,
    /// Clock time the death sequence began
    pub death_started_ms: Option<f64>,
    /// Renderer camera shake intensity
    pub screen_shake: f32,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Hostile>,
    pub bosses: Vec<Hostile>,
    pub mini_bosses: Vec<Hostile>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub backdrop: Backdrop,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SessionConfig::default())
    }

    pub fn with_config(seed: u64, config: SessionConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let backdrop = Backdrop::generate(&mut rng, &config);
        let wave = difficulty::wave_for_score(0);
        Self {
            config,
            seed,
            rng,
            clock: SimClock::new(),
            phase: GamePhase::Start,
            score: 0,
            wave,
            enemy_spawn_interval_ms: difficulty::enemy_spawn_interval_ms(wave),
            boss_wave_count: 0,
            timers: SpawnTimers::default(),
            death_started_ms: None,
            screen_shake: 0.0,
            player: Player::new(config.width, config.height),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            bosses: Vec::new(),
            mini_bosses: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            backdrop,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put score, wave, player and every entity list back to a fresh run.
    /// Clock, RNG and backdrop carry over.
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.wave = difficulty::wave_for_score(0);
        self.enemy_spawn_interval_ms = difficulty::enemy_spawn_interval_ms(self.wave);
        self.boss_wave_count = 0;
        self.timers = SpawnTimers::starting_at(self.clock.now());
        self.death_started_ms = None;
        self.screen_shake = 0.0;
        self.player = Player::new(self.config.width, self.config.height);
        self.projectiles.clear();
        self.enemies.clear();
        self.bosses.clear();
        self.mini_bosses.clear();
        self.power_ups.clear();
        self.particles.clear();
    }

    /// The entity list holding hostiles of `kind`
    pub fn hostiles(&self, kind: HostileKind) -> &[Hostile] {
        match kind {
            HostileKind::Grunt => &self.enemies,
            HostileKind::Boss => &self.bosses,
            HostileKind::MiniBoss => &self.mini_bosses,
        }
    }

    pub fn hostiles_mut(&mut self, kind: HostileKind) -> &mut Vec<Hostile> {
        match kind {
            HostileKind::Grunt => &mut self.enemies,
            HostileKind::Boss => &mut self.bosses,
            HostileKind::MiniBoss => &mut self.mini_bosses,
        }
    }

    /// Shift every outstanding "last event" timestamp forward
    pub fn shift_timers(&mut self, gap_ms: f64) {
        self.timers.shift(gap_ms);
        if let Some(last) = self.player.last_shot_ms.as_mut() {
            *last += gap_ms;
        }
        for hostile in self.bosses.iter_mut().chain(self.mini_bosses.iter_mut()) {
            if let Some(last) = hostile.last_shot_ms.as_mut() {
                *last += gap_ms;
            }
        }
    }

    /// Set camera shake (no-op when disabled by config)
    pub fn trigger_shake(&mut self, intensity: f32) {
        if self.config.screen_shake {
            self.screen_shake = self.screen_shake.max(intensity);
        }
    }

    /// Append effect particles, dropping the oldest past the cap
    pub fn push_particles(&mut self, batch: impl IntoIterator<Item = Particle>) {
        self.particles.extend(batch);
        let cap = self.config.max_particles;
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            health_percent: self.player.health_percent(),
            wave: self.wave,
            phase: self.phase,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            time_ms: self.clock.now(),
            screen_shake: self.screen_shake,
            player: &self.player,
            projectiles: &self.projectiles,
            enemies: &self.enemies,
            bosses: &self.bosses,
            mini_bosses: &self.mini_bosses,
            power_ups: &self.power_ups,
            particles: &self.particles,
            backdrop: &self.backdrop,
            hud: self.hud(),
        }
    }
}
