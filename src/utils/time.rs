#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use std::cell::Cell;
use std::rc::Rc;

/// A monotonic time source read by the playback drivers.
///
/// `now_ms` only needs to be consistent with itself; the absolute origin is
/// irrelevant since playback works on elapsed differences.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> f32;
}

/// Wall-clock [`Clock`] measuring from its own creation instant.
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f32 {
        self.origin.elapsed().as_secs_f32() * 1000.0
    }
}

/// Hand-driven [`Clock`] for tests and hosts with their own frame timing.
///
/// Clones share the same underlying cell, so a host can keep one handle and
/// hand another to a timeline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f32>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the absolute time in milliseconds.
    pub fn set(&self, now_ms: f32) {
        self.now.set(now_ms);
    }

    /// Moves time forward by `delta_ms`.
    pub fn advance(&self, delta_ms: f32) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f32 {
        self.now.get()
    }
}
