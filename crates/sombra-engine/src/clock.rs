//! Time sources for message timestamps.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic source of "time since session start".
pub trait Clock {
    /// Elapsed time since the clock was created.
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Cloning shares nothing; hand the session a clone of an `Rc<ManualClock>`
/// when the caller needs to keep advancing it.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Start at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(1500));
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_secs(2));
        clock.set(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::from_millis(10));
    }

    #[test]
    fn shared_manual_clock() {
        let clock = Rc::new(ManualClock::new());
        let handle: Box<dyn Clock> = Box::new(Rc::clone(&clock));
        clock.advance(Duration::from_secs(3));
        assert_eq!(handle.now(), Duration::from_secs(3));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
