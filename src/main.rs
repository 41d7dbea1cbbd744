//! Nova Strike headless driver
//!
//! Runs the simulation without a renderer: an autopilot starts the run,
//! holds fire, weaves across the arena and restarts after each game over.
//!
//! Usage: `nova-strike [seed] [frames] [low|medium|high|settings.json]`
//!
//! A settings path that does not exist yet is created with the defaults.

use std::path::Path;

use nova_strike::{QualityPreset, Settings};
use nova_strike::consts::FRAME_MS;
use nova_strike::platform::{FrameTimer, KeyboardAdapter};
use nova_strike::sim::{GamePhase, GameState, Key, tick};

const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_FRAMES: u64 = 60 * 60;
/// Frames spent drifting in one direction before turning around
const WEAVE_FRAMES: u64 = 90;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = parse_arg(args.first(), DEFAULT_SEED);
    let frames = parse_arg(args.get(1), DEFAULT_FRAMES);
    let settings = match args.get(2) {
        Some(arg) => match QualityPreset::parse(arg) {
            Some(preset) => Settings::from_preset(preset),
            None => load_settings(Path::new(arg)),
        },
        None => Settings::default(),
    };
    log::info!(
        "Nova Strike (headless) seed={} frames={} quality={}",
        seed,
        frames,
        settings.quality.as_str()
    );

    let mut state = GameState::with_config(seed, settings.session_config());
    let mut keyboard = KeyboardAdapter::new();
    let mut timer = FrameTimer::new();
    let mut last_phase = state.phase;
    let mut runs = 0u32;
    let mut best_score = 0u64;

    for frame in 0..frames {
        autopilot(&mut keyboard, &state, frame);

        let dt = timer.frame(frame as f64 * FRAME_MS as f64);
        let input = keyboard.frame_input();
        tick(&mut state, &input, dt);

        if state.phase != last_phase {
            let now = state.clock.now();
            log::debug!("Phase {:?} -> {:?} at {:.0}ms", last_phase, state.phase, now);
            if state.phase == GamePhase::GameOver {
                runs += 1;
                best_score = best_score.max(state.score);
            }
            last_phase = state.phase;
        }
    }

    log::info!("Finished {} frames, {} completed runs, best score {}", frames, runs, best_score);
    match serde_json::to_string_pretty(&state.hud()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize HUD: {}", e),
    }
}

fn load_settings(path: &Path) -> Settings {
    if path.exists() {
        return Settings::load_or_default(path);
    }
    let settings = Settings::default();
    if let Err(e) = settings.save(path) {
        log::warn!("Could not write default settings to {}: {}", path.display(), e);
    }
    settings
}

fn parse_arg(arg: Option<&String>, default: u64) -> u64 {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid argument {:?}, using {}", raw, default);
            default
        }),
        None => default,
    }
}

/// Scripted key presses for one frame
fn autopilot(keyboard: &mut KeyboardAdapter, state: &GameState, frame: u64) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            // Tap fire: press this frame, release the next
            if keyboard.is_pressed(Key::Fire) {
                keyboard.key_up("Space");
            } else {
                keyboard.key_down("Space");
            }
        }
        GamePhase::Playing => {
            keyboard.key_down("Space");
            let leftward = (frame / WEAVE_FRAMES) % 2 == 0;
            if leftward {
                keyboard.key_up("ArrowRight");
                keyboard.key_down("ArrowLeft");
            } else {
                keyboard.key_up("ArrowLeft");
                keyboard.key_down("ArrowRight");
            }
        }
        GamePhase::Paused | GamePhase::Dying => {}
    }
}
