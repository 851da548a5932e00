//! Display formatting for dates, sizes and sender avatars.
//!
//! Everything here produces strings for display only; none of it is parsed
//! back.

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Formats a message date for the list view, relative to `now`.
///
/// - same day: `3:05 PM`
/// - the day before: `Yesterday`
/// - same year: `Mar 9`
/// - otherwise: `Mar 9, 2023`
///
/// Both dates should be in the timezone the user sees.
#[must_use]
pub fn format_email_date_at<Tz>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let day = date.date_naive();
    let today = now.date_naive();

    if day == today {
        date.format("%-I:%M %p").to_string()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_string()
    } else if day.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Formats a message date for the list view using the local clock.
#[must_use]
pub fn format_email_date(date: &DateTime<Utc>) -> String {
    format_email_date_at(&date.with_timezone(&Local), &Local::now())
}

/// Full date for the message header, e.g. `Sunday, March 10, 2024 10:00 AM`.
#[must_use]
pub fn format_detailed_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%A, %B %-d, %Y %-I:%M %p").to_string()
}

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable file size in 1024-based units with at most one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)] // display only
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Halves round up, not to even.
    let rounded = format!("{:.1}", (value * 10.0).round() / 10.0);
    let rounded = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Up to two uppercase initials from a display name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

const AVATAR_COLORS: [&str; 7] = ["red", "yellow", "green", "blue", "indigo", "purple", "pink"];

/// Stable avatar colour for an address.
///
/// Uses the classic `hash * 31 + c` string hash over UTF-16 code units with
/// 32-bit wrapping on the shift, so the same address always gets the same
/// colour.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // truncation to 32 bits is the hash
pub fn avatar_color(email: &str) -> &'static str {
    let hash = email.encode_utf16().fold(0_i64, |acc, unit| {
        let shifted = i64::from((acc as i32).wrapping_shl(5));
        i64::from(unit) + (shifted - acc)
    });
    let index = usize::try_from(hash.unsigned_abs() % AVATAR_COLORS.len() as u64).unwrap_or(0);
    AVATAR_COLORS[index]
}

/// Shortens text to `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Domain part of an address, empty when there is none.
#[must_use]
pub fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or_default()
}

/// Icon for a file, chosen by its extension.
#[must_use]
pub fn file_icon(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "pdf" => "📄",
        "doc" | "docx" | "txt" => "📝",
        "xls" | "xlsx" => "📊",
        "ppt" | "pptx" => "📽️",
        "jpg" | "jpeg" | "png" | "gif" => "🖼️",
        "zip" | "rar" => "📦",
        _ => "📎",
    }
}
