//! Difficulty derived from score

/// Score needed per wave step
pub const SCORE_PER_WAVE: u64 = 500;
/// Spawn interval at wave 0 (ms)
pub const BASE_SPAWN_INTERVAL_MS: f64 = 1000.0;
/// Interval reduction per wave (ms)
pub const SPAWN_INTERVAL_STEP_MS: f64 = 50.0;
/// Fastest basic-enemy spawn interval (ms)
pub const MIN_SPAWN_INTERVAL_MS: f64 = 300.0;

/// Wave number for a score (1-based)
#[inline]
pub fn wave_for_score(score: u64) -> u32 {
    u32::try_from(score / SCORE_PER_WAVE)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

/// Basic-enemy spawn interval for a wave (ms)
#[inline]
pub fn enemy_spawn_interval_ms(wave: u32) -> f64 {
    (BASE_SPAWN_INTERVAL_MS - f64::from(wave) * SPAWN_INTERVAL_STEP_MS).max(MIN_SPAWN_INTERVAL_MS)
}
