use std::cell::Cell;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Source of monotonic timestamps in milliseconds.
///
/// The animation clock never reads the wall clock itself; whoever owns the
/// animator decides where "now" comes from.
pub trait TimeSource {
    fn now_millis(&self) -> u64;
}

/// Real monotonic time, measured from the moment the source was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTimeSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> u64 {
        // Saturates after ~584 million years.
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Time that only moves when told to. Used by tests and fixed-step replays.
#[derive(Debug, Default, Clone)]
pub struct ManualTimeSource {
    now: Cell<u64>,
}

impl ManualTimeSource {
    #[must_use]
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: Cell::new(start_millis),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl TimeSource for ManualTimeSource {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}
