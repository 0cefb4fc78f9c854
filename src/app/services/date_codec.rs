//! Date key codec for the "DD-Mon-YY" itinerary date format
//!
//! The export stores calendar days as compact keys like `05-Jan-25`. This
//! module converts between that textual form and [`chrono::NaiveDate`] under
//! the fixed 2000 + YY century rule. Decoding is tolerant: it never fails
//! with an error, it yields `None`, and the caller treats the date as absent.

use chrono::{Duration, NaiveDate};

use crate::constants::{CENTURY_BASE, MONTH_ABBREVIATIONS};

/// Decode a "DD-Mon-YY" date key into a calendar day.
///
/// Returns `None` when the input is empty, does not split into exactly three
/// hyphen-separated components, uses an unrecognized month token, or carries
/// a non-numeric day or year. Month tokens are matched against the fixed
/// table case-insensitively, so `05-JAN-25` and `05-jan-25` decode to the
/// same day as the canonical `05-Jan-25`.
///
/// The day component is not validated against the month's actual length:
/// the decoded value is the month start advanced by day - 1, so `31-Feb-24`
/// normalizes to 2024-03-02 by calendar arithmetic. The export has been
/// observed to carry such values and downstream code treats the normalized
/// day as authoritative.
pub fn decode(text: &str) -> Option<NaiveDate> {
    let value = text.trim();
    if value.is_empty() {
        return None;
    }

    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let month_index = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbrev| abbrev.eq_ignore_ascii_case(parts[1].trim()))?;

    let day: u32 = parts[0].trim().parse().ok()?;
    let year: u32 = parts[2].trim().parse().ok()?;
    if year > 99 {
        // Two-digit convention only covers 2000-2099
        return None;
    }

    let month_start = NaiveDate::from_ymd_opt(
        CENTURY_BASE + year as i32,
        month_index as u32 + 1,
        1,
    )?;
    month_start.checked_add_signed(Duration::days(day as i64 - 1))
}

/// Encode a calendar day into its canonical "DD-Mon-YY" key.
///
/// Zero-padded two-digit day, table-cased month abbreviation, and the last
/// two digits of the year. This is the canonical form used for selection
/// keys; decoding an encoded key always round-trips for years 2000-2099.
pub fn encode(day: NaiveDate) -> String {
    use chrono::Datelike;

    format!(
        "{:02}-{}-{:02}",
        day.day(),
        MONTH_ABBREVIATIONS[day.month0() as usize],
        day.year().rem_euclid(100)
    )
}
