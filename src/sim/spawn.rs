//! Timer-gated spawning
//!
//! Each category compares the clock against its own "last spawn" timestamp
//! and resets it when it fires. At most one spawn per category per frame.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Hostile, HostileKind, PowerUp, PowerUpKind};
use crate::consts::*;
use crate::tuning::{self, GRUNT_PALETTE, POWER_UP_SIZE, POWER_UP_SPEED};

/// Horizontal boss lanes as fractions of the arena width
pub const BOSS_LANES: [f32; 3] = [0.2, 0.5, 0.8];

/// Gap between the boss and its right-hand escort
const ESCORT_GAP: f32 = 20.0;
/// Offset of the left-hand escort from the boss lane
const ESCORT_LEFT_OFFSET: f32 = 80.0;

/// Boss stats for a given boss wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossWaveParams {
    pub difficulty_multiplier: f32,
    pub boss_speed: f32,
    pub boss_health: i32,
    pub shot_cooldown_ms: f64,
    pub mini_boss_health: i32,
}

impl BossWaveParams {
    pub fn new(boss_wave_count: u32, wave: u32) -> Self {
        let count = boss_wave_count as f32;
        let difficulty_multiplier = (count * 0.3).min(2.0);
        let boss_health = 25_i64 + i64::from(wave) * 5 + i64::from(boss_wave_count) * 3;
        let mini_boss_health = 8_i64 + i64::from(boss_wave_count) * 2;
        Self {
            difficulty_multiplier,
            boss_speed: 0.5 + difficulty_multiplier,
            boss_health: boss_health.min(i64::from(i32::MAX)) as i32,
            shot_cooldown_ms: (800.0 - f64::from(boss_wave_count) * 50.0).max(400.0),
            mini_boss_health: mini_boss_health.min(i64::from(i32::MAX)) as i32,
        }
    }

    pub fn mini_boss_speed(&self) -> f32 {
        self.boss_speed * 0.8
    }
}

/// Run every spawn timer once
pub fn run(state: &mut GameState) {
    spawn_enemy(state);
    spawn_boss_wave(state);
    spawn_power_up(state);
}

/// Spawn a basic enemy if its interval has elapsed
pub fn spawn_enemy(state: &mut GameState) -> bool {
    if state.clock.since(state.timers.last_enemy_ms) <= state.enemy_spawn_interval_ms {
        return false;
    }
    let id = state.next_entity_id();
    let grunt = make_grunt(&mut state.rng, id, state.config.width, state.wave);
    state.enemies.push(grunt);
    state.timers.last_enemy_ms = state.clock.now();
    true
}

/// Build a basic enemy above the top edge
pub fn make_grunt<R: Rng>(rng: &mut R, id: u32, arena_width: f32, wave: u32) -> Hostile {
    let t = tuning::hostile(HostileKind::Grunt);
    let x = rng.random::<f32>() * (arena_width - t.size).max(0.0);
    let speed = 1.0 + rng.random::<f32>() * 2.0 + wave as f32 * 0.2;
    let color = GRUNT_PALETTE[rng.random_range(0..GRUNT_PALETTE.len())];
    Hostile {
        id,
        kind: HostileKind::Grunt,
        pos: Vec2::new(x, -t.size),
        size: Vec2::splat(t.size),
        speed,
        health: 1,
        max_health: 1,
        points: t.points,
        color,
        last_shot_ms: None,
        shot_cooldown_ms: None,
    }
}

/// Trigger a boss wave if its interval has elapsed
pub fn spawn_boss_wave(state: &mut GameState) -> bool {
    if state.clock.since(state.timers.last_boss_wave_ms) <= BOSS_WAVE_INTERVAL_MS {
        return false;
    }
    state.boss_wave_count += 1;
    let now = state.clock.now();
    let width = state.config.width;
    let params = BossWaveParams::new(state.boss_wave_count, state.wave);
    let boss_t = tuning::hostile(HostileKind::Boss);
    let mini_t = tuning::hostile(HostileKind::MiniBoss);

    let lane = BOSS_LANES[state.rng.random_range(0..BOSS_LANES.len())];
    let lane_x = width * lane - boss_t.size / 2.0;

    let boss = Hostile {
        id: state.next_entity_id(),
        kind: HostileKind::Boss,
        pos: Vec2::new(lane_x.clamp(0.0, (width - boss_t.size).max(0.0)), -boss_t.size),
        size: Vec2::splat(boss_t.size),
        speed: params.boss_speed,
        health: params.boss_health,
        max_health: params.boss_health,
        points: boss_t.points + state.boss_wave_count * boss_t.points_per_boss_wave,
        color: boss_t.color,
        last_shot_ms: None,
        shot_cooldown_ms: Some(params.shot_cooldown_ms),
    };
    log::info!(
        "Boss wave {}: health={}, speed={:.2}, cooldown={}ms",
        state.boss_wave_count,
        boss.health,
        boss.speed,
        params.shot_cooldown_ms
    );
    state.bosses.push(boss);

    if state.boss_wave_count >= MINI_BOSS_FIRST_WAVE {
        let escorts = [
            ((lane_x - ESCORT_LEFT_OFFSET).max(0.0), 200.0),
            (
                (lane_x + boss_t.size + ESCORT_GAP).min((width - mini_t.size).max(0.0)),
                300.0,
            ),
        ];
        for (x, cooldown_offset) in escorts {
            let mini = Hostile {
                id: state.next_entity_id(),
                kind: HostileKind::MiniBoss,
                pos: Vec2::new(x, -mini_t.size),
                size: Vec2::splat(mini_t.size),
                speed: params.mini_boss_speed(),
                health: params.mini_boss_health,
                max_health: params.mini_boss_health,
                points: mini_t.points,
                color: mini_t.color,
                last_shot_ms: None,
                shot_cooldown_ms: Some(params.shot_cooldown_ms + cooldown_offset),
            };
            state.mini_bosses.push(mini);
        }
        log::debug!("Mini-boss escort spawned (health={})", params.mini_boss_health);
    }

    state.timers.last_boss_wave_ms = now;
    true
}

/// Drop a power-up if its interval has elapsed
pub fn spawn_power_up(state: &mut GameState) -> bool {
    if state.clock.since(state.timers.last_power_up_ms) <= POWER_UP_INTERVAL_MS {
        return false;
    }
    let id = state.next_entity_id();
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    let x = state.rng.random::<f32>() * (state.config.width - POWER_UP_SIZE).max(0.0);
    state.power_ups.push(PowerUp {
        id,
        kind,
        pos: Vec2::new(x, -POWER_UP_SIZE),
        size: Vec2::splat(POWER_UP_SIZE),
        speed: POWER_UP_SPEED,
        color: tuning::power_up_color(kind),
    });
    log::debug!("Power-up spawned: {:?}", kind);
    state.timers.last_power_up_ms = state.clock.now();
    true
}
