//! Kairos Core Domain
//!
//! Pure domain types for the Kairos timing library.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod report;
pub mod values;

// Re-export commonly used types at crate root
pub use report::display_time;
pub use values::{Seconds, Timestamp};
