//! Logical simulation clock
//!
//! Time only moves when the host feeds frame deltas. Suspension (hidden
//! display) is bracketed by `suspend`/`resume`; the returned gap is what every
//! stored "last event" timestamp must be shifted by.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Monotonic clock time (ms)
    now_ms: f64,
    /// Clock time at which the session was suspended
    suspended_at: Option<f64>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now_ms
    }

    /// Advance by one frame. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt_ms: f32) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.now_ms += f64::from(dt_ms);
        }
    }

    /// Time elapsed since `timestamp`, never negative
    #[inline]
    pub fn since(&self, timestamp: f64) -> f64 {
        (self.now_ms - timestamp).max(0.0)
    }

    /// Mark the start of a suspension. Repeated calls keep the first mark.
    pub fn suspend(&mut self) {
        if self.suspended_at.is_none() {
            self.suspended_at = Some(self.now_ms);
        }
    }

    /// End a suspension, returning how long it lasted
    pub fn resume(&mut self) -> Option<f64> {
        self.suspended_at.take().map(|at| self.since(at))
    }
}
