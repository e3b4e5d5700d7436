use kairos_runner::{RunnerError, scenarios};

fn main() -> Result<(), RunnerError> {
    env_logger::init();

    // 2-second session against the real clock
    scenarios::real_session(2)?;

    // 10-minute session, interval chosen at runtime
    scenarios::fixed_session()?;

    // 10-minute session, interval fixed at compile time
    scenarios::mock_session()?;

    Ok(())
}
