use chrono::{DateTime, Duration};
use kairos_core::Timestamp;
use kairos_ports::ClockSource;

/// Deterministic clock reporting a constant interval
///
/// `start()` always reads the epoch and `stop()` always reads the epoch
/// plus the configured length, so a session timed against this clock
/// reports the same duration on every run without waiting.
pub struct FixedDurationClock {
    length: Duration,
}

impl FixedDurationClock {
    /// Create a clock whose sessions always last `length`
    pub fn new(length: Duration) -> Self {
        Self { length }
    }

    /// Convenience constructor for a ten-minute interval
    pub fn ten_minutes() -> Self {
        Self::new(Duration::minutes(10))
    }

    /// Get the configured interval
    pub fn length(&self) -> Duration {
        self.length
    }
}

impl ClockSource for FixedDurationClock {
    fn start(&self) -> Timestamp {
        DateTime::UNIX_EPOCH
    }

    fn stop(&self) -> Timestamp {
        DateTime::UNIX_EPOCH + self.length
    }

    fn name(&self) -> &str {
        "FixedDurationClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_minute_readings() {
        let clock = FixedDurationClock::ten_minutes();

        assert_eq!(clock.start(), DateTime::UNIX_EPOCH);
        assert_eq!(clock.stop() - clock.start(), Duration::seconds(600));
    }

    #[test]
    fn test_configured_length() {
        let clock = FixedDurationClock::new(Duration::seconds(90));

        assert_eq!(clock.length(), Duration::seconds(90));
        assert_eq!(clock.stop() - clock.start(), Duration::seconds(90));
    }

    #[test]
    fn test_readings_are_stable_across_calls() {
        let clock = FixedDurationClock::ten_minutes();

        assert_eq!(clock.start(), clock.start());
        assert_eq!(clock.stop(), clock.stop());
    }
}
