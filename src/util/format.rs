//! Human-readable display formatting for file metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count for the upload queue, e.g. `4.2 KB` or `128 MB`.
///
/// Values below 10 of a unit keep one decimal, larger values round to whole
/// numbers. Non-finite input renders as `-`.
#[must_use]
pub fn format_size(bytes: f64) -> String {
    if !bytes.is_finite() {
        return "-".to_owned();
    }
    let mut size = bytes;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if size < 10.0 {
        format!("{size:.1} {}", UNITS[unit])
    } else {
        format!("{size:.0} {}", UNITS[unit])
    }
}
