use std::sync::Arc;

use kairos_clock::SystemClock;
use kairos_core::{Seconds, Timestamp, report};
use kairos_ports::ClockSource;
use log::debug;

/// A running timing session
///
/// The start reading is captured from the injected clock at
/// construction. Stopping consumes the session and yields a
/// [`StoppedSession`], so there is no way to query elapsed time while
/// the session is still running.
pub struct Session {
    clock: Arc<dyn ClockSource>,
    start_time: Timestamp,
}

impl Session {
    /// Start a session against the supplied clock
    ///
    /// The clock handle is shared; several sessions may run against the
    /// same instance without interfering with each other.
    pub fn new(clock: Arc<dyn ClockSource>) -> Self {
        let start_time = clock.start();
        debug!("[{}] session started at {}", clock.name(), start_time);

        Self { clock, start_time }
    }

    /// Start a session against the real system clock
    pub fn new_system() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }

    /// Get the reading taken when the session began
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Stop the session, fixing its end point
    ///
    /// Consumes the session: a stopped session cannot be restarted and
    /// a session cannot be stopped twice.
    pub fn stop(self) -> StoppedSession {
        let stop_time = self.clock.stop();
        debug!("[{}] session stopped at {}", self.clock.name(), stop_time);

        StoppedSession {
            start_time: self.start_time,
            stop_time,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new_system()
    }
}

/// A finished timing session
///
/// Holds the two readings that bound the session. Values of this type
/// only exist after [`Session::stop`], so an elapsed-time query can
/// never observe an unset stop reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoppedSession {
    start_time: Timestamp,
    stop_time: Timestamp,
}

impl StoppedSession {
    /// Get the reading taken when the session began
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Get the reading taken when the session ended
    pub fn stop_time(&self) -> Timestamp {
        self.stop_time
    }

    /// Elapsed time in whole seconds
    ///
    /// Signed: a clock whose stop reading precedes its start reading
    /// yields a negative count.
    pub fn seconds(&self) -> Seconds {
        (self.stop_time - self.start_time).num_seconds()
    }

    /// Elapsed time rendered as `HH:MM:SS`
    pub fn display_time(&self) -> String {
        report::display_time(self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use kairos_clock::{FixedDurationClock, MockClock};

    #[test]
    fn test_fixed_clock_session() {
        let clock = Arc::new(FixedDurationClock::ten_minutes());
        let stopped = Session::new(clock).stop();

        assert_eq!(stopped.seconds(), 600);
        assert_eq!(stopped.display_time(), "00:10:00");
    }

    #[test]
    fn test_mock_clock_session() {
        let stopped = Session::new(Arc::new(MockClock::<600>)).stop();

        assert_eq!(stopped.seconds(), 600);
        assert_eq!(stopped.display_time(), "00:10:00");
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let short = Session::new(Arc::new(MockClock::<2>));
        let long = Session::new(Arc::new(FixedDurationClock::new(Duration::seconds(3661))));

        // Stop in the opposite order from construction
        let long = long.stop();
        let short = short.stop();

        assert_eq!(short.seconds(), 2);
        assert_eq!(short.display_time(), "00:00:02");
        assert_eq!(long.seconds(), 3661);
        assert_eq!(long.display_time(), "01:01:01");
    }

    #[test]
    fn test_sessions_may_share_one_clock() {
        let clock: Arc<dyn ClockSource> = Arc::new(FixedDurationClock::ten_minutes());

        let first = Session::new(clock.clone()).stop();
        let second = Session::new(clock).stop();

        assert_eq!(first.seconds(), 600);
        assert_eq!(second.seconds(), 600);
    }

    #[test]
    fn test_negative_interval_reports_signed() {
        let clock = Arc::new(FixedDurationClock::new(Duration::seconds(-2)));
        let stopped = Session::new(clock).stop();

        assert_eq!(stopped.seconds(), -2);
        assert_eq!(stopped.display_time(), "-00:00:02");
    }

    #[test]
    fn test_start_time_visible_while_running() {
        let session = Session::new(Arc::new(MockClock::<600>));

        assert_eq!(session.start_time(), chrono::DateTime::UNIX_EPOCH);
    }
}
