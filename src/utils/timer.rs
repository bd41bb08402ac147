//! Monotonic wall-clock timer.
//!
//! The sweep reports elapsed seconds per strategy run as f64, so the timer
//! sticks to `Instant` and exposes seconds directly.

use std::time::Instant;

/// Wall-clock stopwatch, started on construction.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the timer was started or last reset.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}
