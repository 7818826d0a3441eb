//! Utility functions for lectern

use chrono::{DateTime, Utc};

/// Formats a recording length in seconds as `M:SS`.
///
/// Fractional seconds are truncated. Negative and non finite values are
/// treated as zero, since they only appear in damaged records.
///
/// # Arguments
///
/// * `seconds`: Recording length in seconds
///
/// # Returns
///
/// Duration string like "0:07" or "75:03"
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Formats a timestamp as a short calendar date, e.g. "Mar 4, 2024".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Converts a lecture id or subject name into a file name stem.
///
/// Keeps ASCII alphanumerics, lowercased, and collapses every other run of
/// characters into a single `-`. Names without any usable character map to
/// `untitled`.
///
/// # Arguments
///
/// * `name`: Free form name
///
/// # Returns
///
/// Slug safe to use as a single path component
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
