//! Display formatting for event fields.
//!
//! Every function here is total: malformed or missing input produces a
//! fallback string (or `None`) rather than an error, so a single bad record
//! can never break page rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::CoreError;

/// Shown when neither booth-fee bound is known.
pub const FEE_TBD: &str = "Fee TBD";

/// Shown when a booth fee is explicitly zero.
pub const FEE_FREE: &str = "Free";

/// Deadlines at most this many days away are flagged as urgent.
pub const URGENT_WINDOW_DAYS: i64 = 7;

const MILLIS_PER_DAY: i64 = 86_400_000;

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Format a fee in cents as whole dollars (`"$75"`).
///
/// Returns `None` for a missing or zero fee.
pub fn format_fee(cents: Option<i64>) -> Option<String> {
    match cents {
        Some(c) if c != 0 => Some(format!("${}", (c as f64 / 100.0).round() as i64)),
        _ => None,
    }
}

/// Like [`format_fee`], but a missing or zero fee reads `"Free"`.
pub fn format_fee_or_free(cents: Option<i64>) -> String {
    format_fee(cents).unwrap_or_else(|| FEE_FREE.to_string())
}

/// Format a booth-fee range.
///
/// # Examples
///
/// ```
/// use vendorwize_core::formatting::format_fee_range;
///
/// assert_eq!(format_fee_range(None, None), "Fee TBD");
/// assert_eq!(format_fee_range(Some(500), Some(500)), "$5");
/// assert_eq!(format_fee_range(Some(500), Some(1500)), "$5 - $15");
/// ```
pub fn format_fee_range(min: Option<i64>, max: Option<i64>) -> String {
    match (format_fee(min), format_fee(max)) {
        (None, None) if min == Some(0) || max == Some(0) => FEE_FREE.to_string(),
        (None, None) => FEE_TBD.to_string(),
        (Some(only), None) | (None, Some(only)) => only,
        (Some(lo), Some(hi)) if lo == hi => lo,
        (Some(lo), Some(hi)) => format!("{lo} - {hi}"),
    }
}

/// Format a count with en-US thousands separators (`12500` -> `"12,500"`).
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Parse an upstream timestamp.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Resolve an IANA time zone name such as `America/New_York`.
pub fn parse_timezone(name: &str) -> Result<Tz, CoreError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| CoreError::Validation(format!("unknown time zone '{name}': {e}")))
}

/// Format a timestamp as `"Sat, Nov 7, 9:00 AM"` in the given zone.
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str, tz: Tz) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(&tz).format("%a, %b %-d, %-I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Deadlines
// ---------------------------------------------------------------------------

/// How pressing an application deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineSeverity {
    /// The deadline has passed.
    Closed,
    /// Due today or within [`URGENT_WINDOW_DAYS`].
    Urgent,
    /// More than a week away.
    Open,
}

impl DeadlineSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Urgent => "urgent",
            Self::Open => "open",
        }
    }
}

/// A formatted application deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub label: String,
    pub severity: DeadlineSeverity,
    /// Whole days remaining, rounded up. Negative once closed.
    pub days_remaining: i64,
}

/// Format an application deadline relative to `now`.
///
/// Returns `None` when there is no deadline or it cannot be parsed.
///
/// | days remaining | label            | severity |
/// |----------------|------------------|----------|
/// | < 0            | `Closed`         | closed   |
/// | 0              | `Today!`         | urgent   |
/// | 1..=7          | `<n> days left`  | urgent   |
/// | > 7            | `Nov 14`         | open     |
pub fn format_deadline(raw: Option<&str>, now: DateTime<Utc>, tz: Tz) -> Option<Deadline> {
    let deadline = parse_timestamp(raw?)?;
    let days_remaining = days_until(deadline, now);

    let (label, severity) = match days_remaining {
        d if d < 0 => ("Closed".to_string(), DeadlineSeverity::Closed),
        0 => ("Today!".to_string(), DeadlineSeverity::Urgent),
        d if d <= URGENT_WINDOW_DAYS => (format!("{d} days left"), DeadlineSeverity::Urgent),
        _ => (
            deadline.with_timezone(&tz).format("%b %-d").to_string(),
            DeadlineSeverity::Open,
        ),
    };

    Some(Deadline {
        label,
        severity,
        days_remaining,
    })
}

/// Ceiling of the difference in days between `deadline` and `now`.
fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        whole
    } else {
        whole + 1
    }
}
