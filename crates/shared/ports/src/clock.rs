use kairos_core::Timestamp;

/// Port for time abstraction
///
/// This allows sessions to be timed against different time sources:
/// - Real system time for production
/// - A constant interval for deterministic tests
///
/// Readings cannot fail; implementations are stateless reads and safe
/// to share between sessions.
pub trait ClockSource: Send + Sync {
    /// Reading taken when a session begins
    fn start(&self) -> Timestamp;

    /// Reading taken when a session ends
    fn stop(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "ClockSource"
    }
}
