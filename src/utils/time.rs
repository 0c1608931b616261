//! Elapsed-time formatting.

/// Format seconds as `M:SS`.
///
/// Minutes are not wrapped into hours, so an hour reads `60:00`. The input
/// is unsigned: elapsed time is never negative.
pub fn format_time(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
