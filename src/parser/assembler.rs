//! Shift assembly and the parser entry point.
//!
//! The assembler runs the strategy cascade over the document text, converts
//! each candidate line into a validated [`Shift`], silently drops lines that
//! fail to normalize, and derives the pay period date span from whatever
//! survived.

use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{TimecardError, TimecardResult};
use crate::models::{ParsedPayPeriod, Shift};

use super::datetime::{extract_clock_time, extract_weekday_abbreviation, normalize_date};
use super::hours::{HoursBreakdown, resolve_hours, resolve_prefixed};
use super::strategies::{HourFields, STRATEGIES, ShiftCandidate};

/// Why one matched line was dropped. Absorbed inside the parser and logged at
/// debug level; never surfaced to callers.
#[derive(Debug)]
enum ParseIssue {
    Date { raw: String },
    Time { raw: String },
    Hours { raw: String },
    NonPositiveTotal { total: Decimal },
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIssue::Date { raw } => write!(f, "unparseable date token '{raw}'"),
            ParseIssue::Time { raw } => write!(f, "unparseable time token '{raw}'"),
            ParseIssue::Hours { raw } => write!(f, "unresolvable hours column '{raw}'"),
            ParseIssue::NonPositiveTotal { total } => {
                write!(f, "non-positive total hours {total}")
            }
        }
    }
}

/// Parses the extracted text of a timecard document into a pay period.
///
/// The three line-matching strategies run in order, strictest first, each
/// over the entire text; the first strategy that yields at least one valid
/// shift wins and the rest never run. Individual lines that fail to
/// normalize are skipped, so a single bad line never aborts the document.
///
/// Shifts are returned in discovery order; the period's date span is the
/// min/max of the shift dates.
///
/// # Errors
///
/// Returns [`TimecardError::NoShiftsFound`] when no strategy recognizes any
/// shift line. No partial result accompanies the error.
///
/// # Example
///
/// ```
/// use timecard_engine::parser::parse_timecard;
///
/// let text = "1/1/24   Mon 7:00a   Deli   Mon 3:00p8.00\n";
/// let period = parse_timecard(text).unwrap();
/// assert_eq!(period.shifts.len(), 1);
/// assert_eq!(period.shifts[0].time_in, "07:00 AM");
/// ```
pub fn parse_timecard(text: &str) -> TimecardResult<ParsedPayPeriod> {
    for strategy in STRATEGIES {
        let candidates = (strategy.matcher)(text);
        let mut shifts: Vec<Shift> = Vec::new();

        for candidate in candidates {
            if let Some(cap) = strategy.max_shifts {
                if shifts.len() >= cap {
                    warn!(
                        strategy = strategy.name,
                        cap, "Shift cap reached; ignoring further matches"
                    );
                    break;
                }
            }
            match build_shift(candidate) {
                Ok(shift) => shifts.push(shift),
                Err(issue) => {
                    debug!(strategy = strategy.name, %issue, "Skipping shift line");
                }
            }
        }

        if shifts.is_empty() {
            continue;
        }

        info!(
            strategy = strategy.name,
            shifts = shifts.len(),
            "Recognized timecard layout"
        );

        let first_date = shifts[0].date;
        let start_date = shifts.iter().map(|s| s.date).fold(first_date, |a, b| a.min(b));
        let end_date = shifts.iter().map(|s| s.date).fold(first_date, |a, b| a.max(b));

        return Ok(ParsedPayPeriod {
            start_date,
            end_date,
            shifts,
        });
    }

    warn!("No strategy matched any shift line");
    Err(TimecardError::NoShiftsFound)
}

/// Converts one matched line into a validated shift.
fn build_shift(candidate: ShiftCandidate) -> Result<Shift, ParseIssue> {
    let date = normalize_date(&candidate.date).map_err(|_| ParseIssue::Date {
        raw: candidate.date.clone(),
    })?;
    let time_in = extract_clock_time(&candidate.time_in).map_err(|_| ParseIssue::Time {
        raw: candidate.time_in.clone(),
    })?;
    let time_out = extract_clock_time(&candidate.time_out).map_err(|_| ParseIssue::Time {
        raw: candidate.time_out.clone(),
    })?;

    // Cross-day signal only; the record keeps the printed date either way.
    if let (Some(day_in), Some(day_out)) = (
        extract_weekday_abbreviation(&candidate.time_in),
        extract_weekday_abbreviation(&candidate.time_out),
    ) {
        if !day_in.eq_ignore_ascii_case(day_out) {
            debug!(
                clock_in_day = day_in,
                clock_out_day = day_out,
                "Clock-out weekday differs from clock-in"
            );
        }
    }

    let breakdown = resolve_candidate_hours(&candidate.hours).ok_or_else(|| ParseIssue::Hours {
        raw: describe_hours(&candidate.hours),
    })?;

    if breakdown.total <= Decimal::ZERO {
        return Err(ParseIssue::NonPositiveTotal {
            total: breakdown.total,
        });
    }

    Ok(Shift {
        date,
        time_in,
        time_out,
        hours: breakdown.total,
        reg_hours: breakdown.regular,
        ot1_hours: breakdown.overtime,
        department: candidate.department,
    })
}

fn resolve_candidate_hours(fields: &HourFields) -> Option<HoursBreakdown> {
    match fields {
        HourFields::Columns(tokens) => {
            let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
            resolve_hours(&refs)
        }
        HourFields::Prefixed { total, reg, ot1 } => {
            resolve_prefixed(total.as_deref(), reg.as_deref(), ot1.as_deref())
        }
    }
}

fn describe_hours(fields: &HourFields) -> String {
    match fields {
        HourFields::Columns(tokens) => tokens.join(" "),
        HourFields::Prefixed { total, reg, ot1 } => [total, reg, ot1]
            .iter()
            .filter_map(|t| t.as_deref())
            .collect::<Vec<_>>()
            .join(" "),
    }
}
