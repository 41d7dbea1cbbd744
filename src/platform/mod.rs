//! Host adapters
//!
//! Translates host events into simulation input:
//! - Key codes -> logical keys and the start/restart action
//! - Display-frame timestamps -> clamped frame deltas

pub mod input;
pub mod time;

pub use input::{KeyboardAdapter, key_for_code};
pub use time::FrameTimer;
