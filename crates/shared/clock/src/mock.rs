use chrono::{DateTime, Duration};
use kairos_core::Timestamp;
use kairos_ports::ClockSource;

/// Deterministic clock with its interval fixed at compile time
///
/// The const parameter is the interval in whole seconds. Where
/// [`FixedDurationClock`](crate::FixedDurationClock) is configured when
/// it is constructed, this variant bakes the interval into the type:
/// `MockClock::<600>` always reports a ten-minute session.
pub struct MockClock<const SECONDS: i64>;

impl<const SECONDS: i64> ClockSource for MockClock<SECONDS> {
    fn start(&self) -> Timestamp {
        DateTime::UNIX_EPOCH
    }

    fn stop(&self) -> Timestamp {
        DateTime::UNIX_EPOCH + Duration::seconds(SECONDS)
    }

    fn name(&self) -> &str {
        "MockClock"
    }
}
