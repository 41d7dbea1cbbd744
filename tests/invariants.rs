//! Property tests over the public simulation API

use glam::Vec2;
use nova_strike::Rect;
use nova_strike::consts::*;
use nova_strike::sim::difficulty::{enemy_spawn_interval_ms, wave_for_score};
use nova_strike::sim::{
    GamePhase, GameState, Key, PressedKeys, Player, TickInput, Visibility, tick,
};
use proptest::prelude::*;

fn keys_from_mask(mask: u8) -> PressedKeys {
    let mut keys = PressedKeys::default();
    for (bit, key) in [Key::Left, Key::Right, Key::Up, Key::Down, Key::Fire]
        .into_iter()
        .enumerate()
    {
        keys.set(key, mask & (1 << bit) != 0);
    }
    keys
}

/// (enemy, boss wave, power-up) time left until the next spawn
fn remaining(state: &GameState) -> [f64; 3] {
    let now = state.clock.now();
    [
        state.timers.last_enemy_ms + state.enemy_spawn_interval_ms - now,
        state.timers.last_boss_wave_ms + BOSS_WAVE_INTERVAL_MS - now,
        state.timers.last_power_up_ms + POWER_UP_INTERVAL_MS - now,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_player_health_stays_bounded(
        ops in prop::collection::vec((any::<bool>(), 0u32..250), 0..64),
    ) {
        let mut player = Player::new(ARENA_WIDTH, ARENA_HEIGHT);
        for (heal, amount) in ops {
            if heal {
                player.heal(amount);
            } else {
                player.take_damage(amount);
            }
            prop_assert!(player.health <= player.max_health);
            let pct = player.health_percent();
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn test_health_bounded_during_play(
        seed in any::<u64>(),
        masks in prop::collection::vec(any::<u8>(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        tick(&mut state, &TickInput { start: true, ..Default::default() }, FRAME_MS);
        for mask in masks {
            let input = TickInput { keys: keys_from_mask(mask), ..Default::default() };
            tick(&mut state, &input, FRAME_MS);
            prop_assert!(state.player.health <= state.player.max_health);
            prop_assert!(state.particles.len() <= state.config.max_particles);
            prop_assert!(state.enemies.iter().all(|e| e.pos.y <= ARENA_HEIGHT));
            prop_assert!(state.bosses.iter().all(|b| b.health > 0));
        }
    }

    #[test]
    fn test_difficulty_floor_and_monotonic(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(wave_for_score(lo) >= 1);
        prop_assert!(wave_for_score(lo) <= wave_for_score(hi));
        prop_assert!(enemy_spawn_interval_ms(wave_for_score(hi)) >= 300.0);
        let (slow, fast) = (
            enemy_spawn_interval_ms(wave_for_score(lo)),
            enemy_spawn_interval_ms(wave_for_score(hi)),
        );
        prop_assert!(slow >= fast);
    }

    #[test]
    fn test_pause_preserves_time_remaining(
        seed in any::<u64>(),
        frames in 0usize..300,
        pause_s in 0u32..600,
        hidden_ms in 0.0f32..100.0,
        visible_ms in 0.0f32..50.0,
    ) {
        let start = TickInput { start: true, ..Default::default() };
        let mut state = GameState::new(seed);
        tick(&mut state, &start, FRAME_MS);
        for _ in 0..frames {
            tick(&mut state, &TickInput::default(), FRAME_MS);
        }
        prop_assume!(state.phase == GamePhase::Playing);
        let before = remaining(&state);
        // The resume frame itself must not fire a spawn
        prop_assume!(before[0] > f64::from(visible_ms));
        let score = state.score;

        let hidden = TickInput { visibility: Some(Visibility::Hidden), ..Default::default() };
        tick(&mut state, &hidden, hidden_ms);
        prop_assert_eq!(state.phase, GamePhase::Paused);
        for _ in 0..pause_s {
            tick(&mut state, &TickInput::default(), 1_000.0);
        }
        let visible = TickInput { visibility: Some(Visibility::Visible), ..Default::default() };
        tick(&mut state, &visible, visible_ms);
        prop_assume!(state.phase == GamePhase::Playing && state.score == score);

        // Only the resume frame's delta counts as play time
        let after = remaining(&state);
        for (b, a) in before.iter().zip(after.iter()) {
            let expected = b - f64::from(visible_ms);
            prop_assert!((expected - a).abs() < 1e-6, "before {} after {}", b, a);
        }
    }

    #[test]
    fn test_overlap_is_symmetric(
        ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 0.0f32..200.0, ah in 0.0f32..200.0,
        bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 0.0f32..200.0, bh in 0.0f32..200.0,
    ) {
        let a = Rect::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
        let b = Rect::new(Vec2::new(bx, by), Vec2::new(bw, bh));
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));

        // Sharing only an edge never counts
        let right = Rect::new(Vec2::new(a.right(), ay), Vec2::new(bw, ah));
        prop_assert!(!a.overlaps(&right));
        let below = Rect::new(Vec2::new(ax, a.bottom()), Vec2::new(aw, bh));
        prop_assert!(!a.overlaps(&below));
    }
}
