//! Monotonic time source injected into the engine.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub trait Clock {
    fn now(&self) -> Instant;
}

/// Reads the platform monotonic clock (`performance.now()` on wasm).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Synthetic clock advanced by hand. Clones share the same timeline, so a test
/// can keep one handle while the engine owns another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn advance_secs(&self, secs: f32) {
        self.advance(Duration::from_secs_f32(secs.max(0.0)));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}
