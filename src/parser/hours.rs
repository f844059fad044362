//! Hour token disambiguation.
//!
//! Timecard exports print the hours columns inconsistently: one value, two
//! values, three values, or two values visually concatenated with no
//! separator (`8.005.50` meaning 8.00 regular + 5.50 overtime). This module
//! resolves whatever tokens a line-matching strategy captured into a single
//! `(total, regular, overtime)` breakdown.
//!
//! Resolution is a prioritized rule table: structural information (how many
//! separate tokens were captured) is preferred over string-splitting
//! heuristics, which run only as a last resort before giving up on the line.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Longest shift a two-token capture can plausibly describe, in hours.
///
/// When two adjacent numeric tokens sum beyond this, they are read as
/// total + regular rather than regular + overtime. Carried over from the
/// source system unchanged.
pub const MAX_PLAUSIBLE_DAY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Two two-decimal numbers printed back to back with no separator.
static CONCAT_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.\d{2})(\d+\.\d{2})$").unwrap());

/// A single well-formed two-decimal number.
static TWO_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d{2}$").unwrap());

/// The resolved hours for one shift line.
#[derive(Debug, Clone, PartialEq)]
pub struct HoursBreakdown {
    /// Total worked hours.
    pub total: Decimal,
    /// Regular (non-overtime) hours.
    pub regular: Decimal,
    /// First-tier overtime hours.
    pub overtime: Decimal,
}

/// A resolution rule: checks its own precondition against the captured
/// tokens and returns a breakdown when it applies.
type Resolver = fn(&[&str]) -> Option<HoursBreakdown>;

/// The rules in priority order. The first rule that applies wins; later
/// rules never see tokens an earlier rule claimed.
const RESOLUTION_RULES: &[Resolver] = &[
    resolve_explicit_triple,
    resolve_adjacent_pair,
    resolve_concatenated,
    resolve_single_value,
];

/// Resolves the numeric tokens captured from a shift line's hours columns.
///
/// Returns `None` when no rule applies or a token fails to parse; the caller
/// treats that as an unusable line, not a fatal error.
///
/// # Example
///
/// ```
/// use timecard_engine::parser::resolve_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = resolve_hours(&["8.005.50"]).unwrap();
/// assert_eq!(breakdown.total, Decimal::from_str("13.50").unwrap());
/// assert_eq!(breakdown.regular, Decimal::from_str("8.00").unwrap());
/// assert_eq!(breakdown.overtime, Decimal::from_str("5.50").unwrap());
/// ```
pub fn resolve_hours(tokens: &[&str]) -> Option<HoursBreakdown> {
    RESOLUTION_RULES.iter().find_map(|rule| rule(tokens))
}

/// Resolves the prefixed layout matched by the flexible strategy: an optional
/// leading total column plus up to two trailing tokens (regular, overtime).
///
/// Missing total is back-filled from `regular + overtime`; missing regular is
/// back-filled from the total. With nothing usable captured the breakdown
/// resolves to zero hours, which the assembler then rejects.
pub fn resolve_prefixed(
    leading_total: Option<&str>,
    reg: Option<&str>,
    ot1: Option<&str>,
) -> Option<HoursBreakdown> {
    let reg_token = reg.and_then(parse_token);
    let overtime = ot1.and_then(parse_token).unwrap_or(Decimal::ZERO);

    // The leading column wins as the total; without it the first trailing
    // token doubles as both total and regular.
    let total_token = leading_total.and_then(parse_token).or(reg_token);

    let total = match total_token {
        Some(t) if t > Decimal::ZERO => t,
        _ => reg_token.unwrap_or(Decimal::ZERO) + overtime,
    };
    let regular = match reg_token {
        Some(r) if r > Decimal::ZERO => r,
        _ => total,
    };

    Some(HoursBreakdown {
        total,
        regular,
        overtime,
    })
}

/// Rule 1: three separate tokens are taken directly as (total, reg, OT1).
fn resolve_explicit_triple(tokens: &[&str]) -> Option<HoursBreakdown> {
    let [total, reg, ot1] = tokens else {
        return None;
    };
    Some(HoursBreakdown {
        total: parse_token(total)?,
        regular: parse_token(reg)?,
        overtime: parse_token(ot1)?,
    })
}

/// Rule 2: two tokens are reg + OT1 when their sum is a plausible day,
/// otherwise total + reg with no overtime.
fn resolve_adjacent_pair(tokens: &[&str]) -> Option<HoursBreakdown> {
    let [first, second] = tokens else {
        return None;
    };
    let first = parse_token(first)?;
    let second = parse_token(second)?;

    if first + second <= MAX_PLAUSIBLE_DAY_HOURS && first > Decimal::ZERO && second > Decimal::ZERO
    {
        Some(HoursBreakdown {
            total: first + second,
            regular: first,
            overtime: second,
        })
    } else {
        Some(HoursBreakdown {
            total: first,
            regular: second,
            overtime: Decimal::ZERO,
        })
    }
}

/// Rule 3: a single token holding two concatenated two-decimal numbers is
/// split into reg + OT1.
fn resolve_concatenated(tokens: &[&str]) -> Option<HoursBreakdown> {
    let [token] = tokens else {
        return None;
    };
    if decimal_point_count(token) < 2 {
        return None;
    }

    let (regular, overtime) = split_concatenated(token)?;
    Some(HoursBreakdown {
        total: regular + overtime,
        regular,
        overtime,
    })
}

/// Rule 4: a single plain number is the total, all regular.
fn resolve_single_value(tokens: &[&str]) -> Option<HoursBreakdown> {
    let [token] = tokens else {
        return None;
    };
    if decimal_point_count(token) > 1 {
        return None;
    }
    let value = parse_token(token)?;
    Some(HoursBreakdown {
        total: value,
        regular: value,
        overtime: Decimal::ZERO,
    })
}

/// Splits a run like `8.005.50` into two two-decimal numbers.
///
/// The exact two-group pattern is tried first; failing that, the token is
/// split on `.` and recombined (`parts[0].parts[1]` against the rest), with
/// the split accepted only if both candidates are independently well-formed.
fn split_concatenated(token: &str) -> Option<(Decimal, Decimal)> {
    if let Some(caps) = CONCAT_EXACT.captures(token) {
        return Some((parse_token(&caps[1])?, parse_token(&caps[2])?));
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() < 3 {
        return None;
    }
    let first = format!("{}.{}", parts[0], parts[1]);
    let second = parts[2..].join(".");
    if TWO_DECIMAL.is_match(&first) && TWO_DECIMAL.is_match(&second) {
        return Some((parse_token(&first)?, parse_token(&second)?));
    }
    None
}

fn decimal_point_count(token: &str) -> usize {
    token.matches('.').count()
}

fn parse_token(token: &str) -> Option<Decimal> {
    Decimal::from_str(token.trim()).ok()
}
