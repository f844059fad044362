//! Shift-line matching strategies.
//!
//! Timecard exports differ in how many hours columns a shift line carries and
//! whether a pre-columned total precedes the clock times. Each strategy is a
//! pure function scanning the whole document text with one pattern; the
//! assembler runs them in order and stops at the first strategy that yields
//! at least one valid shift.
//!
//! All patterns share the same skeleton: a date, a compact day+time-in token,
//! a department word, a compact day+time-out token, and some arrangement of
//! numeric hours columns. They are matched globally across the text blob, so
//! a single pattern recognizes every shift line in the document.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on shifts accepted from the flexible pattern, as a safety
/// bound against a runaway match on degenerate input.
pub const MAX_FLEXIBLE_SHIFTS: usize = 20;

/// Strict layout: the hours value is one numeric run glued directly to the
/// time-out token, possibly two values concatenated without a separator.
static STRICT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d{1,2}/\d{1,2}/\d{2,4})\s+([A-Za-z]{3}\s*\d{1,2}:\d{2}[ap]\s*[A-Z]?\s*)\s+([A-Za-z]+)\s+([A-Za-z]{3}\s*\d{1,2}:\d{2}[ap])([\d.]+)",
    )
    .unwrap()
});

/// Fallback layout: up to three space-separated hours columns
/// (total, regular, OT1), each independently optional. Trailing columns are
/// matched with horizontal whitespace only, so a following line's date can
/// never be captured as an hours column.
static FALLBACK_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d{1,2}/\d{1,2}/\d{2,4})\s+([A-Za-z]{3}\s*\d{1,2}:\d{2}[ap])\s+([A-Za-z]+)\s+([A-Za-z]{3}\s*\d{1,2}:\d{2}[ap])(?:[ \t]+([\d.]+))?(?:[ \t]+([\d.]+))?(?:[ \t]+([\d.]+))?",
    )
    .unwrap()
});

/// Flexible layout: an optional total-hours column before the time-in group
/// and up to two trailing columns (regular, OT1), same-line only.
static FLEXIBLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d{1,2}/\d{1,2}/\d{2,4})\s+([\d.]+\s+)?([A-Za-z]{3}\s*\d{1,2}:\d{2}[ap]\s*[A-Z]?\s*)\s+([A-Za-z]+)\s+([A-Za-z]{3}\s*\d{1,2}:\d{2}[ap])(?:[ \t]+([\d.]+))?(?:[ \t]+([\d.]+))?",
    )
    .unwrap()
});

/// The hours columns captured from one matched line, before disambiguation.
#[derive(Debug, Clone, PartialEq)]
pub enum HourFields {
    /// Trailing numeric tokens in capture order; resolved by the priority
    /// rule table in [`resolve_hours`](super::resolve_hours).
    Columns(Vec<String>),
    /// Prefixed layout from the flexible pattern; resolved with back-fill by
    /// [`resolve_prefixed`](super::resolve_prefixed).
    Prefixed {
        /// The optional leading total-hours column.
        total: Option<String>,
        /// The optional first trailing column (regular hours).
        reg: Option<String>,
        /// The optional second trailing column (OT1 hours).
        ot1: Option<String>,
    },
}

/// One shift line as matched by a strategy, fields still in raw text form.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftCandidate {
    /// Raw `M/D/YY` or `M/D/YYYY` date token.
    pub date: String,
    /// Raw day+time-in token (weekday prefix and stray capitals included).
    pub time_in: String,
    /// Department word between the two time tokens.
    pub department: String,
    /// Raw day+time-out token.
    pub time_out: String,
    /// The captured hours columns.
    pub hours: HourFields,
}

/// A line-matching strategy: a name for diagnostics, the matcher itself, and
/// an optional cap on accepted shifts.
pub struct Strategy {
    /// Strategy name used in log output.
    pub name: &'static str,
    /// Scans the whole document and returns every candidate line.
    pub matcher: fn(&str) -> Vec<ShiftCandidate>,
    /// Cap on accepted shifts, if this pattern needs a runaway bound.
    pub max_shifts: Option<usize>,
}

/// The cascade, in order from strictest to loosest. No strategy is retried
/// once it has run to completion.
pub const STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "strict",
        matcher: match_strict,
        max_shifts: None,
    },
    Strategy {
        name: "fallback",
        matcher: match_fallback,
        max_shifts: None,
    },
    Strategy {
        name: "flexible",
        matcher: match_flexible,
        max_shifts: Some(MAX_FLEXIBLE_SHIFTS),
    },
];

fn match_strict(text: &str) -> Vec<ShiftCandidate> {
    STRICT_LINE
        .captures_iter(text)
        .map(|caps| ShiftCandidate {
            date: caps[1].trim().to_string(),
            time_in: caps[2].trim().to_string(),
            department: caps[3].trim().to_string(),
            time_out: caps[4].trim().to_string(),
            hours: HourFields::Columns(vec![caps[5].trim().to_string()]),
        })
        .collect()
}

fn match_fallback(text: &str) -> Vec<ShiftCandidate> {
    FALLBACK_LINE
        .captures_iter(text)
        .map(|caps| {
            let tokens: Vec<String> = [5, 6, 7]
                .iter()
                .filter_map(|&i| caps.get(i))
                .map(|m| m.as_str().trim().to_string())
                .collect();
            ShiftCandidate {
                date: caps[1].trim().to_string(),
                time_in: caps[2].trim().to_string(),
                department: caps[3].trim().to_string(),
                time_out: caps[4].trim().to_string(),
                hours: HourFields::Columns(tokens),
            }
        })
        .collect()
}

fn match_flexible(text: &str) -> Vec<ShiftCandidate> {
    FLEXIBLE_LINE
        .captures_iter(text)
        .map(|caps| {
            let optional = |i: usize| caps.get(i).map(|m| m.as_str().trim().to_string());
            ShiftCandidate {
                date: caps[1].trim().to_string(),
                time_in: caps[3].trim().to_string(),
                department: caps[4].trim().to_string(),
                time_out: caps[5].trim().to_string(),
                hours: HourFields::Prefixed {
                    total: optional(2),
                    reg: optional(6),
                    ot1: optional(7),
                },
            }
        })
        .collect()
}
