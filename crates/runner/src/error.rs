use kairos_core::Seconds;
use thiserror::Error;

/// Scenario expectation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    #[error("{scenario}: reported {got:?}, expected {want:?}")]
    ReportMismatch {
        scenario: &'static str,
        got: String,
        want: String,
    },

    #[error("{scenario}: elapsed {got}s outside {min}..={max}s")]
    ElapsedOutOfRange {
        scenario: &'static str,
        got: Seconds,
        min: Seconds,
        max: Seconds,
    },
}

pub type RunnerResult<T> = std::result::Result<T, RunnerError>;
