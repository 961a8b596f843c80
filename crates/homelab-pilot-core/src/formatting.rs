//! Formatting utilities for consistent display
//!
//! Bytes, ages and truncation for the list and detail panes.

use std::time::Duration;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;
const TB: u64 = GB * 1024;

/// Format bytes into a human-readable string
///
/// # Examples
///
/// ```
/// use homelab_pilot_core::formatting::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a duration as a compact human string ("45s", "3m", "2h 5m")
pub fn format_duration_human(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86_400 {
        let mins = (secs % 3600) / 60;
        if mins == 0 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}h {}m", secs / 3600, mins)
        }
    } else {
        format!("{}d", secs / 86_400)
    }
}

/// Age of a snapshot for the detail pane title
///
/// # Examples
///
/// ```
/// use homelab_pilot_core::formatting::format_age;
/// use std::time::Duration;
///
/// assert_eq!(format_age(Duration::from_millis(300)), "just now");
/// assert_eq!(format_age(Duration::from_secs(75)), "1m ago");
/// ```
pub fn format_age(age: Duration) -> String {
    if age < Duration::from_secs(1) {
        "just now".to_string()
    } else {
        format!("{} ago", format_duration_human(age))
    }
}

/// Truncate a string to `max_len` characters, appending "..."
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Pluralize a word based on count
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
