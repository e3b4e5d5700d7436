use chrono::Utc;
use kairos_core::Timestamp;
use kairos_ports::ClockSource;

/// Real system clock for production use
///
/// Both readings delegate to the current wall-clock time, so the
/// interval between `start()` and `stop()` reflects real elapsed time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for SystemClock {
    fn start(&self) -> Timestamp {
        self.stop()
    }

    fn stop(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
