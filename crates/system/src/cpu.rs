use std::time::{Duration, Instant};

/// Tracks when CPU counters were last refreshed.
///
/// sysinfo reports usage as the delta between two refreshes, and the delta is
/// meaningless when the refreshes are closer together than
/// [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`].
#[derive(Debug, Clone)]
pub struct CpuWindow {
    last_refresh: Instant,
    minimum:      Duration,
}

impl CpuWindow {
    /// Start a window at `now`.
    pub fn new(minimum: Duration) -> Self {
        Self {
            last_refresh: Instant::now(),
            minimum,
        }
    }

    /// Time left before the next refresh yields a valid reading.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.minimum
            .saturating_sub(now.saturating_duration_since(self.last_refresh))
    }

    /// Block until the window has elapsed.
    ///
    /// This is a thread sleep, not an async one: the caller's runtime is
    /// single-threaded and nothing else runs during a cycle, so a pending
    /// signal is seen at most `minimum` later, at the next sleep.
    pub fn wait(&self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_refresh = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_window_has_time_remaining() {
        let window = CpuWindow::new(Duration::from_millis(200));
        let remaining = window.remaining(Instant::now());
        assert!(remaining > Duration::ZERO);
        assert!(remaining <= Duration::from_millis(200));
    }

    #[test]
    fn elapsed_window_has_nothing_remaining() {
        let mut window = CpuWindow::new(Duration::from_millis(200));
        let start = Instant::now();
        window.mark(start);
        assert_eq!(
            window.remaining(start + Duration::from_millis(250)),
            Duration::ZERO
        );
    }
}
