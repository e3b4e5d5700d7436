//! Kairos Session
//!
//! A [`Session`] measures the interval between two readings of an
//! injected [`ClockSource`]. It is a two-state machine:
//!
//! ```text
//! Session::new(clock)          stop()
//!     │                          │
//!     ▼                          ▼
//! ┌─────────┐             ┌────────────────┐
//! │ Running │ ──────────▶ │ StoppedSession │ ──▶ seconds() / display_time()
//! └─────────┘             └────────────────┘
//! ```
//!
//! `stop()` consumes the running session, so elapsed time can only be
//! queried once the end point is fixed and a session is never restarted.

mod session;

pub use session::{Session, StoppedSession};

// Re-export the port for callers wiring up their own clocks
pub use kairos_ports::ClockSource;
