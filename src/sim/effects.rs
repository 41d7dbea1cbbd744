//! Particle bursts for explosions and the death sequence
//!
//! The `*_burst` functions are pure (rng in, particles out); the wrappers
//! push the result into the session, honoring the particle cap.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle};
use crate::tuning::{BOSS_EXPLOSION_PALETTE, DEATH_PALETTE};

const FLASH_COLOR: u32 = 0xffffff;
const DEBRIS_PALETTE: [u32; 3] = [0x888888, 0xaaaaaa, 0x5f9ea0];
const THRUSTER_COLOR: u32 = 0x00aaff;
const BOOSTED_THRUSTER_COLOR: u32 = 0xff8800;

/// Random vector with both components in [-spread/2, spread/2)
fn scatter<R: Rng>(rng: &mut R, spread: f32) -> Vec2 {
    Vec2::new(
        (rng.random::<f32>() - 0.5) * spread,
        (rng.random::<f32>() - 0.5) * spread,
    )
}

fn spin<R: Rng>(rng: &mut R, max: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * max
}

/// Small kill explosion: a colored burst plus a few bright flashes
pub fn explosion_burst<R: Rng>(rng: &mut R, at: Vec2, color: u32) -> Vec<Particle> {
    let mut out = Vec::with_capacity(11);
    for _ in 0..8 {
        let vel = scatter(rng, 6.0);
        let size = rng.random::<f32>() * 4.0 + 2.0;
        let mut p = Particle::new(at, vel, 500.0, size, color);
        p.rotation_speed = spin(rng, 0.2);
        out.push(p);
    }
    for _ in 0..3 {
        let vel = scatter(rng, 2.0);
        let life = 150.0 + rng.random::<f32>() * 100.0;
        let size = rng.random::<f32>() * 4.0 + 6.0;
        let mut p = Particle::new(at, vel, life, size, FLASH_COLOR);
        p.opacity = Some(0.8);
        out.push(p);
    }
    out
}

/// Boss kill: large multi-color burst
pub fn boss_explosion_burst<R: Rng>(rng: &mut R, at: Vec2) -> Vec<Particle> {
    let mut out = Vec::with_capacity(36);
    for _ in 0..30 {
        let vel = scatter(rng, 10.0);
        let size = rng.random::<f32>() * 8.0 + 4.0;
        let color = BOSS_EXPLOSION_PALETTE[rng.random_range(0..BOSS_EXPLOSION_PALETTE.len())];
        let mut p = Particle::new(at, vel, 1000.0, size, color);
        p.rotation_speed = spin(rng, 0.15);
        out.push(p);
    }
    for _ in 0..6 {
        let vel = scatter(rng, 3.0);
        let size = rng.random::<f32>() * 8.0 + 10.0;
        let mut p = Particle::new(at, vel, 300.0, size, FLASH_COLOR);
        p.opacity = Some(0.9);
        out.push(p);
    }
    out
}

/// Player death: primary burst, slow long-lived debris, varied-opacity flash
pub fn death_burst<R: Rng>(rng: &mut R, at: Vec2) -> Vec<Particle> {
    let mut out = Vec::with_capacity(60);
    for _ in 0..30 {
        let vel = scatter(rng, 12.0);
        let size = rng.random::<f32>() * 6.0 + 3.0;
        let color = DEATH_PALETTE[rng.random_range(0..DEATH_PALETTE.len())];
        out.push(Particle::new(at, vel, 1500.0, size, color));
    }
    for _ in 0..20 {
        let vel = scatter(rng, 4.0);
        let life = 2000.0 + rng.random::<f32>() * 1000.0;
        let size = rng.random::<f32>() * 3.0 + 2.0;
        let color = DEBRIS_PALETTE[rng.random_range(0..DEBRIS_PALETTE.len())];
        let mut p = Particle::new(at, vel, life, size, color);
        p.rotation_speed = spin(rng, 0.3);
        out.push(p);
    }
    for _ in 0..10 {
        let vel = scatter(rng, 3.0);
        let life = 300.0 + rng.random::<f32>() * 300.0;
        let size = rng.random::<f32>() * 8.0 + 8.0;
        let mut p = Particle::new(at, vel, life, size, FLASH_COLOR);
        p.opacity = Some(0.3 + rng.random::<f32>() * 0.7);
        out.push(p);
    }
    out
}

/// One exhaust particle below the ship
pub fn thruster_particle<R: Rng>(rng: &mut R, nozzle: Vec2, boosted: bool) -> Particle {
    let pos = nozzle + Vec2::new((rng.random::<f32>() - 0.5) * 6.0, 0.0);
    let vel = Vec2::new(
        (rng.random::<f32>() - 0.5) * 0.6,
        2.0 + rng.random::<f32>() * 1.5,
    );
    let life = 200.0 + rng.random::<f32>() * 150.0;
    let size = 2.0 + rng.random::<f32>() * 2.0;
    let color = if boosted {
        BOOSTED_THRUSTER_COLOR
    } else {
        THRUSTER_COLOR
    };
    let mut p = Particle::new(pos, vel, life, size, color);
    p.gravity = 0.05;
    p
}

pub fn explosion(state: &mut GameState, at: Vec2, color: u32) {
    if state.config.max_particles == 0 {
        return;
    }
    let burst = explosion_burst(&mut state.rng, at, color);
    state.push_particles(burst);
}

pub fn boss_explosion(state: &mut GameState, at: Vec2) {
    if state.config.max_particles == 0 {
        return;
    }
    let burst = boss_explosion_burst(&mut state.rng, at);
    state.push_particles(burst);
}

/// Death burst centered on the player
pub fn death_explosion(state: &mut GameState) {
    if state.config.max_particles == 0 {
        return;
    }
    let at = state.player.center();
    let burst = death_burst(&mut state.rng, at);
    state.push_particles(burst);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_explosion_burst_shape() {
        let mut rng = Pcg32::seed_from_u64(3);
        let burst = explosion_burst(&mut rng, Vec2::new(10.0, 20.0), 0xff0000);
        assert_eq!(burst.len(), 11);
        assert_eq!(burst.iter().filter(|p| p.color == 0xff0000).count(), 8);
        for p in &burst {
            assert_eq!(p.pos, Vec2::new(10.0, 20.0));
            assert!(p.vel.x.abs() <= 3.0 && p.vel.y.abs() <= 3.0);
            assert!(p.is_alive());
        }
    }

    #[test]
    fn test_boss_burst_uses_palette() {
        let mut rng = Pcg32::seed_from_u64(3);
        let burst = boss_explosion_burst(&mut rng, Vec2::ZERO);
        assert!(
            burst
                .iter()
                .filter(|p| p.color != FLASH_COLOR)
                .all(|p| BOSS_EXPLOSION_PALETTE.contains(&p.color))
        );
    }

    #[test]
    fn test_death_burst_stages() {
        let mut rng = Pcg32::seed_from_u64(9);
        let burst = death_burst(&mut rng, Vec2::ZERO);
        assert_eq!(burst.len(), 60);
        // Debris outlives the primary burst
        let longest = burst.iter().map(|p| p.max_life).fold(0.0, f32::max);
        assert!(longest > 1500.0);
        // Flash particles carry their own opacity
        assert_eq!(burst.iter().filter(|p| p.opacity.is_some()).count(), 10);
    }

    #[test]
    fn test_same_seed_same_burst() {
        let a = explosion_burst(&mut Pcg32::seed_from_u64(5), Vec2::ZERO, 1);
        let b = explosion_burst(&mut Pcg32::seed_from_u64(5), Vec2::ZERO, 1);
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.size, pb.size);
        }
    }

    #[test]
    fn test_particles_disabled() {
        let mut state = GameState::new(1);
        state.config.max_particles = 0;
        explosion(&mut state, Vec2::ZERO, 0);
        death_explosion(&mut state);
        assert!(state.particles.is_empty());
    }
}
