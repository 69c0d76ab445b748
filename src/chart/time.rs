//! Elapsed-time label formatting for the heart-rate time axis.

/// Format elapsed seconds as a tick label.
///
/// Under one hour the label is `"M:SS"` (minutes unpadded, seconds padded);
/// from one hour on it switches to `"Hh MMm"` with padded minutes and the
/// seconds dropped.
///
/// ```
/// use hrviz::chart::time::format_elapsed;
/// assert_eq!(format_elapsed(65.0), "1:05");
/// assert_eq!(format_elapsed(3661.0), "1h 01m");
/// ```
pub fn format_elapsed(seconds: f64) -> String {
    let total_minutes = (seconds / 60.0).floor() as u64;
    let hours = total_minutes / 60;
    let mins = total_minutes % 60;
    let secs = (seconds % 60.0).floor() as u64;

    if hours > 0 {
        format!("{hours}h {mins:02}m")
    } else {
        format!("{mins}:{secs:02}")
    }
}

/// Format a whole time axis.
pub fn time_labels(time_data: &[f64]) -> Vec<String> {
    time_data.iter().copied().map(format_elapsed).collect()
}
