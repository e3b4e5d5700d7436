//! Demo scenarios, one per clock variant

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use kairos_clock::{FixedDurationClock, MockClock};
use kairos_core::Seconds;
use kairos_session::Session;
use log::info;

use crate::error::{RunnerError, RunnerResult};

/// Time a real blocking delay against the system clock
///
/// A sleep of exactly `delay_secs` may read back as `delay_secs` or one
/// second more, depending on scheduling.
pub fn real_session(delay_secs: u64) -> RunnerResult<()> {
    let session = Session::default();
    thread::sleep(Duration::from_secs(delay_secs));
    let stopped = session.stop();

    let min = delay_secs as Seconds;
    let max = min + 1;
    let elapsed = stopped.seconds();
    if !(min..=max).contains(&elapsed) {
        return Err(RunnerError::ElapsedOutOfRange {
            scenario: "real_session",
            got: elapsed,
            min,
            max,
        });
    }

    info!(
        "real_session: {} after a {delay_secs}s sleep",
        stopped.display_time()
    );
    Ok(())
}

/// Time a session against the runtime-configured ten-minute clock
pub fn fixed_session() -> RunnerResult<()> {
    let clock = Arc::new(FixedDurationClock::ten_minutes());
    let stopped = Session::new(clock).stop();

    expect_report("fixed_session", &stopped.display_time(), "00:10:00")?;
    info!("fixed_session: {}", stopped.display_time());
    Ok(())
}

/// Time a session against the compile-time ten-minute clock
pub fn mock_session() -> RunnerResult<()> {
    let stopped = Session::new(Arc::new(MockClock::<600>)).stop();

    expect_report("mock_session", &stopped.display_time(), "00:10:00")?;
    info!("mock_session: {}", stopped.display_time());
    Ok(())
}

fn expect_report(scenario: &'static str, got: &str, want: &str) -> RunnerResult<()> {
    if got != want {
        return Err(RunnerError::ReportMismatch {
            scenario,
            got: got.to_string(),
            want: want.to_string(),
        });
    }
    Ok(())
}
