use crate::values::Seconds;

/// Render an elapsed-second count as a zero-padded `HH:MM:SS` string
///
/// The hour field widens past two digits instead of truncating
/// (`display_time(360_000)` is `"100:00:00"`). Negative counts render
/// the absolute value behind a leading `-`.
pub fn display_time(total_seconds: Seconds) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total = total_seconds.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}
