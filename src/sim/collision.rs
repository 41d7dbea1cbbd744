//! Collision detection and response
//!
//! Axis-aligned overlap tests between categories, resolved in a fixed
//! precedence each frame. A player projectile stops at its first hit.

use super::effects;
use super::state::{GameState, HostileKind, PowerUpKind};
use crate::Rect;
use crate::consts::*;
use crate::tuning::{self, RAM_SPARK_COLOR};

const SHOT_HIT_SHAKE: f32 = 6.0;

/// Run every collision check for this frame.
/// With `include_player` false only player fire vs hostiles is resolved.
pub fn resolve(state: &mut GameState, include_player: bool) {
    resolve_player_fire(state);
    if !include_player {
        return;
    }
    resolve_hostile_fire(state);
    resolve_grunt_contact(state);
    resolve_boss_contact(state);
    resolve_mini_boss_contact(state);
    resolve_power_up_pickup(state);
}

/// Remove a hostile, play its death effect and award its points
fn destroy_hostile(state: &mut GameState, kind: HostileKind, index: usize) {
    let hostile = state.hostiles_mut(kind).remove(index);
    match kind {
        HostileKind::Boss => {
            effects::boss_explosion(state, hostile.center());
            log::info!("Boss destroyed (+{})", hostile.points);
        }
        HostileKind::Grunt | HostileKind::MiniBoss => {
            effects::explosion(state, hostile.center(), hostile.color);
        }
    }
    state.score += u64::from(hostile.points);
}

/// Apply damage to a hostile; destroys it when health drops to zero.
/// Returns true if it was destroyed.
fn damage_hostile(state: &mut GameState, kind: HostileKind, index: usize, amount: i32) -> bool {
    let hostile = &mut state.hostiles_mut(kind)[index];
    hostile.health = hostile.health.saturating_sub(amount);
    if hostile.is_destroyed() {
        destroy_hostile(state, kind, index);
        true
    } else {
        false
    }
}

fn first_overlap(state: &GameState, kind: HostileKind, rect: &Rect) -> Option<usize> {
    state
        .hostiles(kind)
        .iter()
        .position(|h| rect.overlaps(&h.rect()))
}

/// Checks 1-3: player projectiles vs grunts, bosses, mini-bosses
fn resolve_player_fire(state: &mut GameState) {
    let mut i = 0;
    while i < state.projectiles.len() {
        let shot = &state.projectiles[i];
        if shot.enemy {
            i += 1;
            continue;
        }
        let (rect, at) = (shot.rect(), shot.pos);
        let damage = i32::try_from(shot.damage).unwrap_or(i32::MAX);

        let armored = [HostileKind::Boss, HostileKind::MiniBoss]
            .into_iter()
            .find_map(|kind| first_overlap(state, kind, &rect).map(|j| (kind, j)));
        let hit = if let Some(j) = first_overlap(state, HostileKind::Grunt, &rect) {
            destroy_hostile(state, HostileKind::Grunt, j);
            true
        } else if let Some((kind, j)) = armored {
            effects::explosion(state, at, tuning::hostile(kind).hit_color);
            damage_hostile(state, kind, j, damage);
            true
        } else {
            false
        };

        if hit {
            state.projectiles.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Check 4: hostile projectiles vs player. An invincible player is passed
/// through; the projectile keeps flying.
fn resolve_hostile_fire(state: &mut GameState) {
    if state.player.invincible {
        return;
    }
    let player = state.player.rect();
    let mut i = 0;
    while i < state.projectiles.len() {
        let shot = &state.projectiles[i];
        if !shot.enemy || !player.overlaps(&shot.rect()) {
            i += 1;
            continue;
        }
        let at = shot.pos;
        state.projectiles.remove(i);
        state.player.take_damage(ENEMY_LASER_DAMAGE);
        state.trigger_shake(SHOT_HIT_SHAKE);
        effects::explosion(state, at, tuning::ENEMY_LASER_COLOR);
    }
}

/// Check 5: player vs basic enemies
fn resolve_grunt_contact(state: &mut GameState) {
    let t = tuning::hostile(HostileKind::Grunt);
    while let Some(j) = first_overlap(state, HostileKind::Grunt, &state.player.rect()) {
        if state.player.invincible {
            destroy_hostile(state, HostileKind::Grunt, j);
        } else {
            let enemy = state.enemies.remove(j);
            state.player.take_damage(t.contact_damage);
            state.trigger_shake(t.contact_shake);
            effects::explosion(state, enemy.center(), enemy.color);
        }
    }
}

/// Check 6: player vs bosses. Rammed bosses lose health each overlapping
/// frame; a vulnerable player takes damage and the boss survives.
fn resolve_boss_contact(state: &mut GameState) {
    let t = tuning::hostile(HostileKind::Boss);
    let player = state.player.rect();
    let mut j = 0;
    while j < state.bosses.len() {
        if !player.overlaps(&state.bosses[j].rect()) {
            j += 1;
            continue;
        }
        let center = state.player.center();
        if state.player.invincible {
            effects::explosion(state, center, RAM_SPARK_COLOR);
            if damage_hostile(state, HostileKind::Boss, j, RAM_DAMAGE) {
                continue;
            }
        } else {
            state.player.take_damage(t.contact_damage);
            state.trigger_shake(t.contact_shake);
            effects::explosion(state, center, t.contact_color);
        }
        j += 1;
    }
}

/// Check 7: player vs mini-bosses
fn resolve_mini_boss_contact(state: &mut GameState) {
    let t = tuning::hostile(HostileKind::MiniBoss);
    let player = state.player.rect();
    let mut j = 0;
    while j < state.mini_bosses.len() {
        if !player.overlaps(&state.mini_bosses[j].rect()) {
            j += 1;
            continue;
        }
        if state.player.invincible {
            destroy_hostile(state, HostileKind::MiniBoss, j);
            continue;
        }
        let center = state.player.center();
        state.player.take_damage(t.contact_damage);
        state.trigger_shake(t.contact_shake);
        effects::explosion(state, center, t.contact_color);
        j += 1;
    }
}

/// Check 8: player vs power-ups
fn resolve_power_up_pickup(state: &mut GameState) {
    let mut i = 0;
    while i < state.power_ups.len() {
        if !state.player.rect().overlaps(&state.power_ups[i].rect()) {
            i += 1;
            continue;
        }
        let pickup = state.power_ups.remove(i);
        apply_power_up(state, pickup.kind);
        effects::explosion(state, pickup.rect().center(), pickup.color);
    }
}

/// Apply a power-up's effect to the player
pub fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    let duration = tuning::power_up_duration_ms(kind).unwrap_or_default();
    let player = &mut state.player;
    match kind {
        PowerUpKind::Health => player.heal(HEALTH_PICKUP_AMOUNT),
        PowerUpKind::Wings => player.activate_wings(duration),
        PowerUpKind::Size => {
            player.activate_size_boost(duration);
            player.clamp_to(state.config.width, state.config.height);
        }
    }
    log::debug!("Power-up collected: {:?}", kind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn;
    use crate::sim::state::{Hostile, PowerUp, Projectile, ProjectileKind};
    use glam::Vec2;

    fn hostile(kind: HostileKind, pos: Vec2, health: i32) -> Hostile {
        let t = tuning::hostile(kind);
        Hostile {
            id: 1,
            kind,
            pos,
            size: Vec2::splat(t.size),
            speed: 0.0,
            health,
            max_health: health,
            points: t.points,
            color: t.color,
            last_shot_ms: None,
            shot_cooldown_ms: None,
        }
    }

    fn laser(pos: Vec2, damage: u32, enemy: bool) -> Projectile {
        Projectile {
            id: 1,
            kind: if enemy {
                ProjectileKind::Hostile
            } else {
                ProjectileKind::Laser
            },
            pos,
            size: Vec2::new(4.0, 15.0),
            speed: if enemy { -4.0 } else { 8.0 },
            drift: 0.0,
            enemy,
            damage,
            color: 0,
        }
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let right = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let below = Rect::new(Vec2::new(0.0, 10.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&Rect::new(Vec2::new(9.9, 9.9), Vec2::splat(10.0))));
    }

    #[test]
    fn test_laser_kills_grunt_and_scores() {
        let mut state = GameState::new(1);
        state.enemies.push(hostile(HostileKind::Grunt, Vec2::new(100.0, 100.0), 1));
        state.projectiles.push(laser(Vec2::new(110.0, 110.0), 1, false));
        resolve(&mut state, true);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 10);
        assert!(!state.particles.is_empty());
    }

    #[test]
    fn test_projectile_stops_at_first_hit() {
        let mut state = GameState::new(1);
        state.enemies.push(hostile(HostileKind::Grunt, Vec2::new(100.0, 100.0), 1));
        state.bosses.push(hostile(HostileKind::Boss, Vec2::new(90.0, 90.0), 10));
        state.projectiles.push(laser(Vec2::new(110.0, 110.0), 1, false));
        resolve(&mut state, true);
        assert!(state.enemies.is_empty());
        assert_eq!(state.bosses[0].health, 10);
    }

    #[test]
    fn test_boss_dies_after_exact_hit_count() {
        for (health, damage) in [(33, 1_u32), (33, 3), (10, 3), (9, 3)] {
            let mut state = GameState::new(1);
            state.bosses.push(hostile(HostileKind::Boss, Vec2::new(100.0, 100.0), health));
            let expected = (health as u32).div_ceil(damage);
            let mut hits = 0;
            while !state.bosses.is_empty() {
                state.projectiles.push(laser(Vec2::new(150.0, 150.0), damage, false));
                resolve(&mut state, false);
                hits += 1;
                assert!(hits <= expected);
            }
            assert_eq!(hits, expected);
            assert_eq!(state.score, 750);
        }
    }

    #[test]
    fn test_mini_boss_takes_projectile_damage() {
        let mut state = GameState::new(1);
        state.mini_bosses.push(hostile(HostileKind::MiniBoss, Vec2::new(100.0, 100.0), 4));
        state.projectiles.push(laser(Vec2::new(120.0, 120.0), 3, false));
        resolve(&mut state, false);
        assert_eq!(state.mini_bosses[0].health, 1);
        state.projectiles.push(laser(Vec2::new(120.0, 120.0), 3, false));
        resolve(&mut state, false);
        assert!(state.mini_bosses.is_empty());
        assert_eq!(state.score, 250);
    }

    #[test]
    fn test_enemy_fire_hurts_vulnerable_player() {
        let mut state = GameState::new(1);
        let at = state.player.pos + Vec2::new(5.0, 5.0);
        state.projectiles.push(laser(at, 10, true));
        resolve(&mut state, true);
        assert_eq!(state.player.health, 90);
        assert!(state.projectiles.is_empty());
        assert!(state.screen_shake > 0.0);
    }

    #[test]
    fn test_enemy_fire_passes_through_invincible_player() {
        let mut state = GameState::new(1);
        state.player.activate_size_boost(10_000.0);
        let at = state.player.pos + Vec2::new(5.0, 5.0);
        state.projectiles.push(laser(at, 10, true));
        resolve(&mut state, true);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_grunt_contact_damages_player() {
        let mut state = GameState::new(1);
        let at = state.player.pos + Vec2::new(5.0, 5.0);
        state.enemies.push(hostile(HostileKind::Grunt, at, 1));
        resolve(&mut state, true);
        assert_eq!(state.player.health, 80);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_invincible_player_rams_grunt() {
        let mut state = GameState::new(1);
        state.player.activate_size_boost(10_000.0);
        let at = state.player.pos + Vec2::new(5.0, 5.0);
        state.enemies.push(hostile(HostileKind::Grunt, at, 1));
        resolve(&mut state, true);
        assert_eq!(state.player.health, 100);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_boss_contact() {
        let mut state = GameState::new(1);
        let at = state.player.pos - Vec2::splat(10.0);
        state.bosses.push(hostile(HostileKind::Boss, at, 12));
        resolve(&mut state, true);
        assert_eq!(state.player.health, 70);
        assert_eq!(state.bosses.len(), 1);

        state.player.health = 100;
        state.player.activate_size_boost(10_000.0);
        state.bosses[0].pos = state.player.pos - Vec2::splat(10.0);
        resolve(&mut state, true);
        assert_eq!(state.bosses[0].health, 7);
        resolve(&mut state, true);
        resolve(&mut state, true);
        assert!(state.bosses.is_empty());
        assert_eq!(state.player.health, 100);
        assert_eq!(state.score, 750);
    }

    #[test]
    fn test_mini_boss_contact() {
        let mut state = GameState::new(1);
        let at = state.player.pos - Vec2::splat(5.0);
        state.mini_bosses.push(hostile(HostileKind::MiniBoss, at, 20));
        resolve(&mut state, true);
        assert_eq!(state.player.health, 80);
        assert_eq!(state.mini_bosses.len(), 1);

        state.player.activate_size_boost(10_000.0);
        state.mini_bosses[0].pos = state.player.pos;
        resolve(&mut state, true);
        assert!(state.mini_bosses.is_empty());
        assert_eq!(state.score, 250);
    }

    #[test]
    fn test_health_clamped_at_zero() {
        let mut state = GameState::new(1);
        state.player.health = 10;
        let at = state.player.pos - Vec2::splat(10.0);
        state.bosses.push(hostile(HostileKind::Boss, at, 12));
        resolve(&mut state, true);
        assert_eq!(state.player.health, 0);
    }

    #[test]
    fn test_power_up_pickups() {
        let mut state = GameState::new(1);
        state.player.health = 70;
        for kind in PowerUpKind::ALL {
            state.power_ups.push(PowerUp {
                id: 1,
                kind,
                pos: state.player.pos,
                size: Vec2::splat(24.0),
                speed: 2.0,
                color: tuning::power_up_color(kind),
            });
        }
        resolve(&mut state, true);
        assert!(state.power_ups.is_empty());
        assert_eq!(state.player.health, 100);
        assert!(state.player.has_wings);
        assert!(state.player.size_boost && state.player.invincible);
    }

    #[test]
    fn test_player_excluded_when_requested() {
        let mut state = GameState::new(1);
        let grunt = spawn::make_grunt(&mut state.rng, 5, 800.0, 1);
        state.enemies.push(Hostile {
            pos: state.player.pos,
            ..grunt
        });
        state.projectiles.push(laser(state.player.pos, 10, true));
        resolve(&mut state, false);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.projectiles.len(), 1);
    }
}
