use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Elapsed time between two timestamps, in whole seconds (signed)
/// Future: could become a newtype with validation (non-negative, bounded)
pub type Seconds = i64;
