//! Kairos Runner - Demo Driver
//!
//! Times a session against each clock variant and checks the rendered
//! report:
//!
//! - **Real**: system clock around an actual blocking delay
//! - **Fixed**: constant interval configured at runtime
//! - **Mock**: constant interval fixed at compile time
//!
//! Each scenario returns a typed error on a violated expectation; the
//! binary runs all three and exits non-zero on the first failure,
//! printing nothing on success.

mod error;
pub mod scenarios;

pub use error::{RunnerError, RunnerResult};
