//! Time formatting utilities for user-facing messages and reports.
//!
//! Every duration shown to a user follows the same
//! `"<H> hours <MM> minutes <SS> seconds"` breakdown, and every event
//! timestamp the same `"MM/DD HH:MM:SS"` layout, so that action
//! confirmations, clock-out summaries and exported reports all read
//! consistently.
//!
//! ## Format Specifications
//!
//! ### Duration format
//! - Hours are displayed without padding
//! - Minutes and seconds are zero-padded to 2 digits
//! - Negative durations are treated as zero
//!
//! ### Examples
//! - 2 hours 5 minutes → `"2 hours 05 minutes 00 seconds"`
//! - 10 minutes 30 seconds → `"0 hours 10 minutes 30 seconds"`
//! - Negative duration → `"0 hours 00 minutes 00 seconds"`
//!
//! ## Error Handling
//!
//! The formatting functions are total: invalid or negative inputs fall back
//! to zero time, and no panics are possible during formatting.

use chrono::{Duration, NaiveDateTime};

/// Formats a duration as `"<H> hours <MM> minutes <SS> seconds"`.
///
/// # Examples
///
/// ```rust
/// use punch::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(2)), "2 hours 00 minutes 00 seconds");
/// assert_eq!(format_duration(&Duration::seconds(3661)), "1 hours 01 minutes 01 seconds");
/// assert_eq!(format_duration(&Duration::minutes(-5)), "0 hours 00 minutes 00 seconds");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    // Clamp to zero so anomalous negative durations never leak into output
    let total_seconds = duration.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{} hours {:02} minutes {:02} seconds", hours, minutes, seconds)
}

/// Formats an event timestamp as `"MM/DD HH:MM:SS"` for action confirmations.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%m/%d %H:%M:%S").to_string()
}
