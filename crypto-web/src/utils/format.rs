//! # Display Formatting
//!
//! Pure functions turning raw API values into display strings. Grouping follows
//! the `en-US` convention (`,` thousands separator, `.` decimal point).
//!
//! ## Functions
//!
//! - [`format_locale_number`] - Grouped decimal with fraction-digit bounds
//! - [`format_price`] - Precision-tiered price
//! - [`format_human_readable`] - `K`/`M`/`B`/`T` abbreviation
//! - [`format_percent_change`] - Signed two-decimal percentage
//! - [`format_duration`] - Years as "N years M months"
//! - [`format_timestamp`] - Absolute instant in the viewer's local time

use chrono::{DateTime, Local, TimeZone, Utc};

const LESS_THAN_A_MONTH: &str = "Less than a month";

/// Magnitude suffixes, largest first.
const MAGNITUDES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Format a number with commas and between `min_fraction` and `max_fraction`
/// fraction digits (e.g. `1234.5, 2, 6 -> "1,234.50"`).
///
/// The value is rounded to `max_fraction` digits, then trailing zeros are
/// dropped down to `min_fraction`.
///
/// # Examples
///
/// ```rust
/// use crypto_web::utils::format::format_locale_number;
///
/// assert_eq!(format_locale_number(1234567.891, 0, 2), "1,234,567.89");
/// assert_eq!(format_locale_number(15.0, 4, 4), "15.0000");
/// assert_eq!(format_locale_number(0.5, 0, 2), "0.5");
/// ```
pub fn format_locale_number(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let max_fraction = max_fraction.max(min_fraction);

    let formatted = format!("{:.prec$}", value.abs(), prec = max_fraction);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (formatted.as_str(), ""),
    };

    let mut fraction = decimal_part.trim_end_matches('0');
    if fraction.len() < min_fraction {
        fraction = &decimal_part[..min_fraction];
    }

    let is_zero = integer_part.chars().chain(fraction.chars()).all(|ch| ch == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let integer_with_commas = group_thousands(integer_part);
    if fraction.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a USD price with precision tiered by magnitude.
///
/// - `|x| >= 1000`: grouped, no fraction digits
/// - `0.0001 <= |x| < 1000`: grouped, 2 to 6 fraction digits
/// - `0 < |x| < 0.0001`: leading zeros kept, first 4 significant digits
///   truncated (`0.00001234567 -> "0.00001234"`)
/// - `0`: `"0.00"`
///
/// Negative values keep their sign and use the tier of their magnitude.
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();

    if magnitude >= 1000.0 {
        format_locale_number(price, 0, 0)
    } else if magnitude >= 0.0001 {
        format_locale_number(price, 2, 6)
    } else if magnitude > 0.0 {
        let sign = if price < 0.0 { "-" } else { "" };
        format!("{}{}", sign, format_tiny(magnitude))
    } else {
        "0.00".to_string()
    }
}

fn format_tiny(magnitude: f64) -> String {
    // `f64` Display never switches to exponent notation, so the digit
    // pattern below matches for every positive magnitude under 1.
    leading_significant_digits(&magnitude.to_string())
        .unwrap_or_else(|| format!("{:.2e}", magnitude))
}

fn leading_significant_digits(text: &str) -> Option<String> {
    let fraction = text.strip_prefix("0.")?;
    let significant = fraction.trim_start_matches('0');
    let zeros = fraction.len() - significant.len();

    let digits: String = significant
        .chars()
        .take_while(char::is_ascii_digit)
        .take(4)
        .collect();
    if digits.is_empty() {
        return None;
    }

    Some(format!("0.{}{}", "0".repeat(zeros), digits))
}

/// Abbreviate by magnitude with a two-decimal mantissa
/// (`1_250_000_000 -> "1.25B"`, `999 -> "999.00"`). Sign is preserved.
pub fn format_human_readable(value: f64) -> String {
    let magnitude = value.abs();
    for (scale, suffix) in MAGNITUDES {
        if magnitude >= scale {
            return format!("{:.2}{}", value / scale, suffix);
        }
    }
    format!("{:.2}", value)
}

/// Format a 24h change as a two-decimal percentage (`-1.234 -> "-1.23%"`).
pub fn format_percent_change(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// CSS class for a signed change.
pub fn change_class(pct: f64) -> &'static str {
    if pct < 0.0 {
        "text-danger"
    } else {
        "text-success"
    }
}

/// Render a duration given in years as whole years plus rounded months.
///
/// A month remainder that rounds up to 12 is carried into the year count, so
/// `1.96` renders as `"2 years"`. Zero components are omitted; units are
/// pluralized above 1.
///
/// # Examples
///
/// ```rust
/// use crypto_web::utils::format::format_duration;
///
/// assert_eq!(format_duration(2.5), "2 years 6 months");
/// assert_eq!(format_duration(1.0), "1 year");
/// assert_eq!(format_duration(0.04), "Less than a month");
/// ```
pub fn format_duration(years: f64) -> String {
    if !years.is_finite() || years <= 0.0 {
        return LESS_THAN_A_MONTH.to_string();
    }

    let floor = years.floor();
    let mut whole_years = floor as u64;
    let mut months = ((years - floor) * 12.0).round() as u64;
    if months >= 12 {
        whole_years += 1;
        months -= 12;
    }

    let mut parts = Vec::new();
    if whole_years > 0 {
        parts.push(pluralize(whole_years, "year"));
    }
    if months > 0 {
        parts.push(pluralize(months, "month"));
    }

    if parts.is_empty() {
        LESS_THAN_A_MONTH.to_string()
    } else {
        parts.join(" ")
    }
}

fn pluralize(count: u64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, unit)
    } else {
        format!("{} {}", count, unit)
    }
}

/// Render an absolute instant in the viewer's local timezone.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Render an absolute instant in the given timezone
/// (`"5/1/2024, 2:30:00 PM"`).
pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(zone)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
