//! Raw date/time token normalization.
//!
//! Timecard exports print dates as `M/D/YY` or `M/D/YYYY` and clock times as
//! compact tokens like `Mon 7:00a`, sometimes with a stray uppercase letter
//! bleeding in from the adjacent column. This module converts both into
//! canonical forms.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TimecardError, TimecardResult};

/// A single stray uppercase letter at the end of a time token, an artifact of
/// column-adjacent text bleeding into the extraction.
static TRAILING_CAPITAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[A-Z]\s*$").unwrap());

/// Compact clock time: `7:00a`, `3:15p`, also tolerating the already-canonical
/// `07:00 AM` so canonicalization is idempotent.
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*([ap])").unwrap());

/// Leading 3-letter weekday abbreviation directly preceding the digits.
static LEADING_WEEKDAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]{3})\s*\d").unwrap());

/// Converts a raw `M/D/YY` or `M/D/YYYY` token into a calendar date.
///
/// Two-digit years are interpreted as `20YY`; there is no windowing logic,
/// every two-digit year maps into 2000–2099.
///
/// # Errors
///
/// Returns [`TimecardError::InvalidDateFormat`] when the input does not split
/// into exactly three `/`-delimited numeric parts, or when the parts do not
/// form a real calendar date.
///
/// # Example
///
/// ```
/// use timecard_engine::parser::normalize_date;
/// use chrono::NaiveDate;
///
/// let date = normalize_date("1/5/24").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
/// ```
pub fn normalize_date(raw: &str) -> TimecardResult<NaiveDate> {
    let invalid = || TimecardError::InvalidDateFormat {
        raw: raw.to_string(),
    };

    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let month: u32 = parts[0].parse().map_err(|_| invalid())?;
    let day: u32 = parts[1].parse().map_err(|_| invalid())?;
    let mut year: i32 = parts[2].parse().map_err(|_| invalid())?;
    if year < 100 {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Extracts the clock time from a compound day+time token and renders it in
/// canonical 12-hour `HH:MM AM|PM` form.
///
/// The optional weekday prefix and any trailing stray uppercase letter are
/// ignored; the single-letter meridiem is expanded (`a` → AM, `p` → PM) via a
/// 24-hour intermediate so that 12 AM maps to hour 0 and 12 PM stays hour 12.
/// Re-normalizing an already-canonical string yields the same string.
///
/// # Errors
///
/// Returns [`TimecardError::InvalidTimeFormat`] when no clock-time pattern is
/// present in the token.
///
/// # Example
///
/// ```
/// use timecard_engine::parser::extract_clock_time;
///
/// assert_eq!(extract_clock_time("Mon 7:00a").unwrap(), "07:00 AM");
/// assert_eq!(extract_clock_time("Tue 3:30p E").unwrap(), "03:30 PM");
/// ```
pub fn extract_clock_time(raw: &str) -> TimecardResult<String> {
    let cleaned = TRAILING_CAPITAL.replace(raw, "");
    let cleaned = cleaned.trim();

    let caps = CLOCK_TIME
        .captures(cleaned)
        .ok_or_else(|| TimecardError::InvalidTimeFormat {
            raw: raw.trim().to_string(),
        })?;

    let mut hour: u32 = caps[1]
        .parse()
        .map_err(|_| TimecardError::InvalidTimeFormat {
            raw: raw.trim().to_string(),
        })?;
    let minutes = &caps[2];
    let meridiem = if caps[3].eq_ignore_ascii_case("p") {
        "PM"
    } else {
        "AM"
    };

    // Through 24-hour form and back so 12 AM / 12 PM land correctly.
    if meridiem == "PM" && hour != 12 {
        hour += 12;
    } else if meridiem == "AM" && hour == 12 {
        hour = 0;
    }
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };

    Ok(format!("{display_hour:02}:{minutes} {meridiem}"))
}

/// Returns the leading 3-letter weekday abbreviation of a day+time token,
/// if present.
///
/// The abbreviation is used only as a same-day/cross-day signal during
/// assembly; it is never stored on the final record.
pub fn extract_weekday_abbreviation(raw: &str) -> Option<&str> {
    LEADING_WEEKDAY
        .captures(raw.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// ND-001: M/D/YY maps into the 2000s
    #[test]
    fn test_two_digit_year_maps_to_2000s() {
        assert_eq!(normalize_date("1/5/24").unwrap(), ymd(2024, 1, 5));
        assert_eq!(normalize_date("12/31/99").unwrap(), ymd(2099, 12, 31));
        assert_eq!(normalize_date("6/1/00").unwrap(), ymd(2000, 6, 1));
    }

    /// ND-002: four-digit years pass through unchanged
    #[test]
    fn test_four_digit_year_passes_through() {
        assert_eq!(normalize_date("11/7/2023").unwrap(), ymd(2023, 11, 7));
    }

    /// ND-003: wrong separator count is rejected
    #[test]
    fn test_wrong_part_count_is_rejected() {
        assert!(matches!(
            normalize_date("1/15"),
            Err(TimecardError::InvalidDateFormat { .. })
        ));
        assert!(matches!(
            normalize_date("1/15/24/7"),
            Err(TimecardError::InvalidDateFormat { .. })
        ));
    }

    /// ND-004: non-numeric parts are rejected
    #[test]
    fn test_non_numeric_parts_are_rejected() {
        assert!(normalize_date("Jan/15/24").is_err());
        assert!(normalize_date("1-15-24").is_err());
    }

    /// ND-005: impossible calendar dates are rejected, not rolled over
    #[test]
    fn test_impossible_dates_are_rejected() {
        assert!(normalize_date("13/45/22").is_err());
        assert!(normalize_date("2/30/24").is_err());
    }

    /// CT-001: compact morning time
    #[test]
    fn test_compact_morning_time() {
        assert_eq!(extract_clock_time("7:00a").unwrap(), "07:00 AM");
    }

    /// CT-002: compact afternoon time
    #[test]
    fn test_compact_afternoon_time() {
        assert_eq!(extract_clock_time("3:00p").unwrap(), "03:00 PM");
    }

    /// CT-003: noon and midnight stay on the 12 display hour
    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(extract_clock_time("12:00p").unwrap(), "12:00 PM");
        assert_eq!(extract_clock_time("12:00a").unwrap(), "12:00 AM");
    }

    /// CT-004: weekday prefix is ignored
    #[test]
    fn test_weekday_prefix_is_ignored() {
        assert_eq!(extract_clock_time("Mon 7:00a").unwrap(), "07:00 AM");
        assert_eq!(extract_clock_time("Fri3:15p").unwrap(), "03:15 PM");
    }

    /// CT-005: stray trailing capital is stripped
    #[test]
    fn test_stray_trailing_capital_is_stripped() {
        assert_eq!(extract_clock_time("Mon 7:00a E").unwrap(), "07:00 AM");
        assert_eq!(extract_clock_time("3:00p B ").unwrap(), "03:00 PM");
    }

    /// CT-006: canonicalization is idempotent
    #[test]
    fn test_canonicalization_is_idempotent() {
        for canonical in ["07:00 AM", "12:00 PM", "12:00 AM", "03:30 PM", "11:59 PM"] {
            assert_eq!(extract_clock_time(canonical).unwrap(), canonical);
        }
    }

    /// CT-007: token without a clock time is rejected
    #[test]
    fn test_token_without_time_is_rejected() {
        assert!(matches!(
            extract_clock_time("Monday"),
            Err(TimecardError::InvalidTimeFormat { .. })
        ));
        assert!(extract_clock_time("7-00a").is_err());
    }

    #[test]
    fn test_weekday_abbreviation_extraction() {
        assert_eq!(extract_weekday_abbreviation("Mon 7:00a"), Some("Mon"));
        assert_eq!(extract_weekday_abbreviation("Tue3:00p"), Some("Tue"));
        assert_eq!(extract_weekday_abbreviation("7:00a"), None);
        assert_eq!(extract_weekday_abbreviation("Monday 7:00a"), None);
    }
}
