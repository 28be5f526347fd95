//! Millisecond time sources for surfaces.

use core::cell::Cell;

pub trait Clock {
    /// Monotonic milliseconds since an arbitrary epoch.
    fn now_ms(&self) -> u64;
}

/// Clock backed by a closure, e.g. a HAL timer or `std::time::Instant`.
#[derive(Clone, Copy, Debug)]
pub struct FnClock<F>(pub F);

impl<F> Clock for FnClock<F>
where
    F: Fn() -> u64,
{
    fn now_ms(&self) -> u64 {
        (self.0)()
    }
}

/// Clock advanced by hand, for deterministic simulation and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_through_shared_reference() {
        let clock = ManualClock::new(100);
        let shared = &clock;
        shared.advance(50);
        assert_eq!(shared.now_ms(), 150);
        clock.set(7);
        assert_eq!(clock.now_ms(), 7);
    }

    #[test]
    fn closure_clock() {
        let clock = FnClock(|| 42);
        assert_eq!(clock.now_ms(), 42);
    }
}
