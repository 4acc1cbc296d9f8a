use chrono::{DateTime, NaiveDate};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::utilization::DateWindow;

/// Parse a calendar date, accepting `YYYY-MM-DD` or a full RFC 3339
/// timestamp (date part taken).
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|err| {
            AppError::validation_with_details(
                "无效的日期格式",
                json!({"value": value, "error": err.to_string()}),
            )
        })
}

/// Outcome of reading a task's date pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedRange {
    Range(NaiveDate, NaiveDate),
    /// One or both dates absent; the task simply has no schedule yet.
    Missing,
    /// Dates present but unparseable, or start > end. The caller should
    /// have rejected these; the engine skips the task and advises.
    Invalid,
}

pub fn parse_range(start: Option<&str>, end: Option<&str>) -> ParsedRange {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return ParsedRange::Missing,
    };

    match (parse_date(start), parse_date(end)) {
        (Ok(start), Ok(end)) if start <= end => ParsedRange::Range(start, end),
        _ => ParsedRange::Invalid,
    }
}

/// Closed-interval intersection test for whole-day ranges. Ranges that
/// share exactly one boundary day overlap.
pub fn overlaps(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start <= b_end && b_start <= a_end
}

pub fn window_intersects(start: NaiveDate, end: NaiveDate, window: &DateWindow) -> bool {
    overlaps(start, end, window.start, window.end)
}
