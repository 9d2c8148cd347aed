//! Fixed event calendar for the championship edition.
//!
//! Dates travel through the wizard as raw `YYYY-MM-DD` strings and are
//! parsed only at the point of use, so malformed input can degrade to a
//! zero contribution instead of failing a computation.

use chrono::NaiveDate;

/// First day delegations may arrive.
pub const STAY_WINDOW_OPENS: &str = "2026-10-13";

/// Last day delegations may depart.
pub const STAY_WINDOW_CLOSES: &str = "2026-10-21";

/// The two calendar dates on which training slots are charged.
pub const PAID_TRAINING_DATES: [&str; 2] = ["2026-10-14", "2026-10-15"];

/// Date format used across the wizard.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a wizard date string, returning `None` for anything malformed.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Whole days from `from` to `to`, floored at zero.
///
/// `None` means one of the inputs did not parse; callers treat that as a
/// zero contribution, never an error.
pub fn days_between(from: &str, to: &str) -> Option<u32> {
    let from = parse_day(from)?;
    let to = parse_day(to)?;
    Some((to - from).num_days().max(0) as u32)
}

/// True if a session date falls on a paid training day.
///
/// Containment match: the wizard may decorate the date with a time or
/// venue suffix, the calendar day is what counts.
pub fn is_paid_training_date(raw: &str) -> bool {
    PAID_TRAINING_DATES.iter().any(|date| raw.contains(date))
}

/// Clamps a parseable date into the authorized stay window.
///
/// Malformed input is returned untouched; ISO dates order lexicographically
/// so the comparison stays on the raw strings.
pub fn clamp_to_window(raw: &str) -> String {
    if parse_day(raw).is_none() {
        return raw.to_string();
    }
    let day = raw.trim();
    if day < STAY_WINDOW_OPENS {
        STAY_WINDOW_OPENS.to_string()
    } else if day > STAY_WINDOW_CLOSES {
        STAY_WINDOW_CLOSES.to_string()
    } else {
        day.to_string()
    }
}
