//! Kairos Ports
//!
//! Port definitions (traits) for the Kairos timing library.
//! These define the boundary between the session domain and the
//! time sources it is measured against.

mod clock;

pub use clock::ClockSource;
