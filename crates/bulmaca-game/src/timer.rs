use std::time::{Duration, Instant};

/// Solve-time stopwatch.
///
/// The caller supplies the current instant to every method, so the timer
/// never reads the clock itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl Timer {
    /// Creates a timer that has not started.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started: None,
            stopped: None,
        }
    }

    /// Starts (or restarts) the timer at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
        self.stopped = None;
    }

    /// Freezes the elapsed time at `now`. Has no effect unless running.
    pub fn stop(&mut self, now: Instant) {
        if self.is_running() {
            self.stopped = Some(now);
        }
    }

    /// Returns `true` between [`start`](Self::start) and [`stop`](Self::stop).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.stopped.is_none()
    }

    /// Returns the time elapsed since the start, frozen once stopped.
    ///
    /// Zero before the timer has started.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started {
            Some(started) => self.stopped.unwrap_or(now).saturating_duration_since(started),
            None => Duration::ZERO,
        }
    }
}

/// Formats a duration as `mm:ss`.
///
/// Partial seconds are truncated. Minutes are padded to two digits and
/// grow past 99 rather than rolling over into hours.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use bulmaca_game::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_millis(65_900)), "01:05");
/// assert_eq!(format_elapsed(Duration::from_secs(100 * 60)), "100:00");
/// ```
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_before_start_is_zero() {
        let timer = Timer::new();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0);
        assert!(timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(5)), Duration::from_secs(5));

        timer.stop(t0 + Duration::from_secs(42));
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(599)), Duration::from_secs(42));

        // A second stop does not move the frozen time.
        timer.stop(t0 + Duration::from_secs(50));
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(599)), Duration::from_secs(42));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "00:59");
        assert_eq!(format_elapsed(Duration::from_secs(754)), "12:34");
    }
}
