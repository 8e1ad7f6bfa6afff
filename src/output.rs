//! Rendering helpers shared by the commands.

use chrono::DateTime;

/// Shown in place of a star count until one is available.
pub const STAR_PLACEHOLDER: &str = "…";

/// "12.34 MB" from a byte count.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Digit-grouped star count, or the placeholder when the count is unknown.
pub fn format_star_count(stars: Option<u64>) -> String {
    match stars {
        Some(n) => group_digits(n),
        None => STAR_PLACEHOLDER.to_string(),
    }
}

/// Inserts thousands separators: 1234567 -> "1,234,567".
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Publish timestamps arrive as RFC 3339; rendered as "July 1, 2025".
/// Unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
