//! Kairos Clock Infrastructure
//!
//! Provides the time sources a session can be timed against:
//!
//! - [`SystemClock`] - real wall-clock time for production
//! - [`FixedDurationClock`] - constant interval, configured at construction
//! - [`MockClock`] - constant interval, fixed at compile time
//!
//! The last two exist to show both dependency-injection styles side by
//! side: runtime object composition and static parameterization.
//!
//! ## Usage
//!
//! ```ignore
//! use kairos_clock::{FixedDurationClock, MockClock, SystemClock};
//! use chrono::Duration;
//!
//! // Real time for production
//! let real = SystemClock::new();
//!
//! // Deterministic 90-second interval, chosen at runtime
//! let fixed = FixedDurationClock::new(Duration::seconds(90));
//!
//! // Deterministic ten-minute interval, baked into the type
//! let mock = MockClock::<600>;
//! ```

mod fixed;
mod mock;
mod system;

pub use fixed::FixedDurationClock;
pub use mock::MockClock;
pub use system::SystemClock;

// Re-export the ClockSource trait for convenience
pub use kairos_ports::ClockSource;
