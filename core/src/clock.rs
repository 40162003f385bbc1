use web_time::Instant;

/// Source of the current instant. Swappable so timer behavior can be tested
/// without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Whole-second game timer. Running between [`start`](Self::start) and
/// [`stop`](Self::stop); once stopped the reading is frozen for good.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl Stopwatch {
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stops a running stopwatch. Does nothing if it never started or is
    /// already stopped.
    pub fn stop(&mut self, now: Instant) {
        if self.is_running() {
            self.stopped_at = Some(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn elapsed_secs(&self, now: Instant) -> u32 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let until = self.stopped_at.unwrap_or(now);
        let secs = until.saturating_duration_since(started_at).as_secs();
        secs.try_into().unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use core::time::Duration;

    /// Clock that only moves when told to.
    #[derive(Clone, Debug)]
    pub(crate) struct ManualClock {
        base: Instant,
        offset: Rc<Cell<Duration>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Rc::default(),
            }
        }

        pub(crate) fn advance(&self, secs: u64) {
            self.offset
                .set(self.offset.get() + Duration::from_secs(secs));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + self.offset.get()
        }
    }

    #[test]
    fn reads_zero_until_started() {
        let clock = ManualClock::new();
        let watch = Stopwatch::default();

        clock.advance(5);

        assert_eq!(watch.elapsed_secs(clock.now()), 0);
        assert!(!watch.is_running());
    }

    #[test]
    fn counts_whole_seconds_then_freezes() {
        let clock = ManualClock::new();
        let mut watch = Stopwatch::default();

        watch.start(clock.now());
        clock.advance(3);
        assert_eq!(watch.elapsed_secs(clock.now()), 3);

        watch.stop(clock.now());
        clock.advance(10);
        assert_eq!(watch.elapsed_secs(clock.now()), 3);
        assert!(!watch.is_running());
    }

    #[test]
    fn restart_is_ignored_once_started() {
        let clock = ManualClock::new();
        let mut watch = Stopwatch::default();

        watch.start(clock.now());
        clock.advance(2);
        watch.start(clock.now());
        clock.advance(2);

        assert_eq!(watch.elapsed_secs(clock.now()), 4);
    }
}
