//! Phase transitions
//!
//! start -> playing -> (paused <-> playing) -> dying -> game over -> playing.
//! Every helper returns false and changes nothing when called from a phase
//! where its transition is not allowed.

use rand::Rng;

use super::effects;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Start action from the title screen
pub fn start(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Start {
        return false;
    }
    state.reset_session();
    state.phase = GamePhase::Playing;
    log::info!("Run started (seed {})", state.seed);
    true
}

/// Restart action from the game-over screen
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        return false;
    }
    state.reset_session();
    state.phase = GamePhase::Playing;
    log::info!("Run restarted");
    true
}

/// Display hidden: freeze the session and remember when
pub fn suspend(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    state.clock.suspend();
    state.phase = GamePhase::Paused;
    log::info!("Paused at {:.0}ms", state.clock.now());
    true
}

/// Display visible again: shift every timer by the suspended time
pub fn resume(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Paused {
        return false;
    }
    if let Some(gap) = state.clock.resume() {
        state.shift_timers(gap);
        log::debug!("Resumed after {:.0}ms, timers shifted", gap);
    }
    state.phase = GamePhase::Playing;
    true
}

/// Player destroyed: start the death sequence
pub fn begin_dying(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing || state.player.health > 0 {
        return false;
    }
    state.death_started_ms = Some(state.clock.now());
    effects::death_explosion(state);
    state.trigger_shake(DEATH_SHAKE);
    state.phase = GamePhase::Dying;
    log::info!("Player destroyed at score {}", state.score);
    true
}

/// Time since the death sequence began
pub fn death_elapsed(state: &GameState) -> Option<f64> {
    state.death_started_ms.map(|at| state.clock.since(at))
}

/// Follow-up death bursts while the sequence runs
pub fn update_dying(state: &mut GameState) {
    let Some(elapsed) = death_elapsed(state) else {
        return;
    };
    let bursting = elapsed < DEATH_DURATION_MS - DEATH_BURST_CUTOFF_MS;
    if bursting && state.rng.random_bool(DEATH_BURST_CHANCE) {
        effects::death_explosion(state);
    }
}

/// Automatic transitions checked at the end of every frame
pub fn check_transitions(state: &mut GameState) {
    match state.phase {
        GamePhase::Playing if state.player.health == 0 => {
            begin_dying(state);
        }
        GamePhase::Dying => {
            if death_elapsed(state).is_some_and(|elapsed| elapsed >= DEATH_DURATION_MS) {
                state.death_started_ms = None;
                state.phase = GamePhase::GameOver;
                log::info!("Game over: final score {} (wave {})", state.score, state.wave);
            }
        }
        _ => {}
    }
}
