//! Per-frame movement, firing and culling
//!
//! Speeds are per 60 Hz reference frame and scaled by `frame_scale(dt)`;
//! lifetimes and countdowns are in ms.

use glam::Vec2;
use rand::Rng;

use super::effects;
use super::state::{Backdrop, GameState, Hostile, Particle, Projectile, ProjectileKind};
use super::tick::{Key, PressedKeys};
use crate::consts::*;
use crate::frame_scale;
use crate::tuning::{self, ENEMY_LASER_COLOR, LASER_COLOR, SPECIAL_LASER_COLOR, WING_LASER_COLOR};

/// Tilt/glow smoothing per reference frame
const SMOOTHING: f32 = 0.15;
/// Most exhaust particles alive at once
const MAX_THRUSTERS: usize = 40;

/// Projectile dimensions
const LASER_SIZE: Vec2 = Vec2::new(4.0, 15.0);
const WING_LASER_SIZE: Vec2 = Vec2::new(3.0, 12.0);
const SPECIAL_LASER_SIZE: Vec2 = Vec2::new(8.0, 24.0);

fn approach(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * (SMOOTHING * k).min(1.0)
}

/// Power-up countdowns, steering, exhaust and firing
pub fn update_player(state: &mut GameState, keys: &PressedKeys, dt_ms: f32) {
    let k = frame_scale(dt_ms);
    let player = &mut state.player;

    if player.has_wings {
        player.wings_ms -= dt_ms;
        if player.wings_ms <= 0.0 {
            player.has_wings = false;
            player.wings_ms = 0.0;
            log::debug!("Wings expired");
        }
    }
    if player.size_boost {
        player.size_boost_ms -= dt_ms;
        if player.size_boost_ms <= 0.0 {
            player.clear_size_boost();
            log::debug!("Size boost expired");
        }
    }

    let mut dir = Vec2::ZERO;
    if keys.is_pressed(Key::Left) {
        dir.x -= 1.0;
    }
    if keys.is_pressed(Key::Right) {
        dir.x += 1.0;
    }
    if keys.is_pressed(Key::Up) {
        dir.y -= 1.0;
    }
    if keys.is_pressed(Key::Down) {
        dir.y += 1.0;
    }
    player.pos += dir * player.speed * k;
    player.clamp_to(state.config.width, state.config.height);

    player.tilt = approach(player.tilt, dir.x, k).clamp(-1.0, 1.0);
    let glow_target = if dir.y < 0.0 {
        1.0
    } else if dir != Vec2::ZERO {
        0.75
    } else {
        0.5
    };
    let flicker = (state.rng.random::<f32>() - 0.5) * 0.1;
    player.engine_glow = (approach(player.engine_glow, glow_target, k) + flicker).clamp(0.0, 1.0);

    if state.config.max_particles > 0 && player.thrusters.len() < MAX_THRUSTERS {
        let nozzle = Vec2::new(player.center().x, player.pos.y + player.size.y);
        let boosted = player.size_boost;
        let exhaust = effects::thruster_particle(&mut state.rng, nozzle, boosted);
        state.player.thrusters.push(exhaust);
    }

    let ready = state
        .player
        .last_shot_ms
        .is_none_or(|last| state.clock.since(last) > state.player.shot_cooldown_ms);
    if keys.is_pressed(Key::Fire) && ready {
        shoot(state);
        state.player.last_shot_ms = Some(state.clock.now());
    }
}

/// Fire a player volley: three parallel lasers, plus two angled wing shots
/// while wings are active. Size boost upgrades every projectile.
pub fn shoot(state: &mut GameState) {
    let player = &state.player;
    let boosted = player.size_boost;
    let center_x = player.center().x;
    let y = player.pos.y;

    let mut volley: Vec<(f32, f32, ProjectileKind)> = vec![
        (0.0, 0.0, ProjectileKind::Laser),
        (-LASER_SPREAD, 0.0, ProjectileKind::Laser),
        (LASER_SPREAD, 0.0, ProjectileKind::Laser),
    ];
    if player.has_wings {
        volley.push((-WING_SPREAD, -WING_DRIFT, ProjectileKind::Wing));
        volley.push((WING_SPREAD, WING_DRIFT, ProjectileKind::Wing));
    }

    for (offset, drift, kind) in volley {
        let (kind, size, damage, color) = if boosted {
            (
                ProjectileKind::Special,
                SPECIAL_LASER_SIZE,
                SPECIAL_LASER_DAMAGE,
                SPECIAL_LASER_COLOR,
            )
        } else if kind == ProjectileKind::Wing {
            (kind, WING_LASER_SIZE, 1, WING_LASER_COLOR)
        } else {
            (kind, LASER_SIZE, 1, LASER_COLOR)
        };
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            kind,
            pos: Vec2::new(center_x + offset - size.x / 2.0, y),
            size,
            speed: LASER_SPEED,
            drift,
            enemy: false,
            damage,
            color,
        });
    }
}

/// Downward shot from the bottom-center of a hostile
fn hostile_laser(id: u32, shooter: &Hostile) -> Projectile {
    Projectile {
        id,
        kind: ProjectileKind::Hostile,
        pos: Vec2::new(
            shooter.pos.x + shooter.size.x / 2.0 - LASER_SIZE.x / 2.0,
            shooter.pos.y + shooter.size.y,
        ),
        size: LASER_SIZE,
        speed: ENEMY_LASER_SPEED,
        drift: 0.0,
        enemy: true,
        damage: ENEMY_LASER_DAMAGE,
        color: ENEMY_LASER_COLOR,
    }
}

/// Move projectiles and drop the ones that left the arena
pub fn update_projectiles(state: &mut GameState, dt_ms: f32) {
    let k = frame_scale(dt_ms);
    let (width, height) = (state.config.width, state.config.height);
    for p in &mut state.projectiles {
        p.pos.y -= p.speed * k;
        p.pos.x += p.drift * k;
    }
    state.projectiles.retain(|p| {
        let vertical = if p.enemy {
            p.pos.y <= height
        } else {
            p.pos.y >= -p.size.y
        };
        vertical && p.pos.x + p.size.x >= 0.0 && p.pos.x <= width
    });
}

/// Descend, hover-and-sway and fire for one hostile list.
/// The sway phase follows each hostile's current position in the list.
/// Returns the shots fired this frame.
fn advance_hostiles(list: &mut [Hostile], now: f64, k: f32, width: f32) -> Vec<Projectile> {
    let mut shots = Vec::new();
    for (index, h) in list.iter_mut().enumerate() {
        let t = tuning::hostile(h.kind);
        match t.hover_y {
            Some(hover) if h.pos.y >= hover => {
                let phase = f64::from(t.sway_phase_step) * index as f64;
                let sway = (now * f64::from(t.sway_freq) + phase).sin() as f32;
                let max_x = (width - h.size.x).max(0.0);
                h.pos.x = (h.pos.x + sway * t.sway_amp * k).clamp(0.0, max_x);
            }
            _ => h.pos.y += h.speed * k,
        }
        let Some(cooldown) = h.shot_cooldown_ms else {
            continue;
        };
        if h.last_shot_ms.is_none_or(|last| now - last > cooldown) {
            h.last_shot_ms = Some(now);
            shots.push(hostile_laser(0, h));
        }
    }
    shots
}

/// Move every hostile category, spawn their shots, cull past the bottom
pub fn update_hostiles(state: &mut GameState, dt_ms: f32) {
    let k = frame_scale(dt_ms);
    let now = state.clock.now();
    let (width, height) = (state.config.width, state.config.height);

    let mut shots = Vec::new();
    for list in [&mut state.enemies, &mut state.bosses, &mut state.mini_bosses] {
        shots.extend(advance_hostiles(list, now, k, width));
        list.retain(|h| h.pos.y <= height);
    }
    for mut shot in shots {
        shot.id = state.next_entity_id();
        state.projectiles.push(shot);
    }
}

/// Move power-ups and drop the ones past the bottom
pub fn update_power_ups(state: &mut GameState, dt_ms: f32) {
    let k = frame_scale(dt_ms);
    let height = state.config.height;
    for p in &mut state.power_ups {
        p.pos.y += p.speed * k;
    }
    state.power_ups.retain(|p| p.pos.y <= height);
}

/// Integrate, damp, age and cull a particle list
pub fn update_particles(particles: &mut Vec<Particle>, dt_ms: f32) {
    let k = frame_scale(dt_ms);
    let damping = PARTICLE_DAMPING.powf(k);
    for p in particles.iter_mut() {
        p.pos += p.vel * k;
        p.vel *= damping;
        p.vel.y += p.gravity * k;
        p.rotation += p.rotation_speed * k;
        p.life -= dt_ms;
    }
    particles.retain(Particle::is_alive);
}

/// Scroll stars and clouds, wrapping them back to the top
pub fn update_backdrop<R: Rng>(
    backdrop: &mut Backdrop,
    rng: &mut R,
    width: f32,
    height: f32,
    dt_ms: f32,
) {
    let k = frame_scale(dt_ms);
    for star in &mut backdrop.stars {
        star.pos.y += star.speed * k;
        star.twinkle = (star.twinkle + 0.05 * k) % std::f32::consts::TAU;
        if star.pos.y > height {
            star.pos.y -= height + star.size;
            star.pos.x = rng.random::<f32>() * width;
        }
    }
    for cloud in &mut backdrop.clouds {
        cloud.pos.y += cloud.speed * k;
        if cloud.pos.y - cloud.radius > height {
            cloud.pos.y = -cloud.radius;
            cloud.pos.x = rng.random::<f32>() * width;
        }
    }
}

/// Exponential screen shake decay, snapping to zero when negligible
pub fn decay_shake(shake: f32, dt_ms: f32) -> f32 {
    let next = shake * SHAKE_DECAY.powf(frame_scale(dt_ms));
    if next < 0.1 { 0.0 } else { next }
}
