//! Display-frame timing

use crate::consts::MAX_FRAME_MS;

/// Turns host frame timestamps (ms) into simulation deltas
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame, clamped to `[0, MAX_FRAME_MS]`.
    /// The first frame yields 0.
    pub fn frame(&mut self, timestamp_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) if timestamp_ms.is_finite() => (timestamp_ms - last).max(0.0),
            _ => 0.0,
        };
        if timestamp_ms.is_finite() {
            self.last_ms = Some(timestamp_ms);
        }
        (delta as f32).min(MAX_FRAME_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.frame(1234.0), 0.0);
        assert!((timer.frame(1250.5) - 16.5).abs() < 1e-4);
    }

    #[test]
    fn test_large_gap_clamped() {
        let mut timer = FrameTimer::new();
        timer.frame(0.0);
        assert_eq!(timer.frame(5_000.0), MAX_FRAME_MS);
    }

    #[test]
    fn test_backwards_timestamp() {
        let mut timer = FrameTimer::new();
        timer.frame(500.0);
        assert_eq!(timer.frame(400.0), 0.0);
        assert!((timer.frame(450.0) - 50.0).abs() < 1e-4);
    }
}
