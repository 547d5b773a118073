use std::fmt;

use chrono::NaiveDate;

use crate::constraints::ListConstraints;
use crate::normalize::NormalizedParams;

/// A normalized query rejected by a business rule.
///
/// Carries the stable machine-readable code that the error layer surfaces to
/// clients, so callers can correct their input without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRejection {
    DateInvalid {
        field: &'static str,
        value: String,
    },
    DateRangeInvalid {
        from: NaiveDate,
        to: NaiveDate,
    },
    QueryTooLong {
        length: usize,
        max: usize,
    },
}

impl ListRejection {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DateInvalid { .. } => "DATE_INVALID",
            Self::DateRangeInvalid { .. } => "DATE_RANGE_INVALID",
            Self::QueryTooLong { .. } => "QUERY_TOO_LONG",
        }
    }
}

impl fmt::Display for ListRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateInvalid { field, value } => {
                write!(f, "{field} must be a valid YYYY-MM-DD date, got '{value}'")
            }
            Self::DateRangeInvalid { from, to } => {
                write!(f, "date_from '{from}' must not be after date_to '{to}'")
            }
            Self::QueryTooLong { length, max } => {
                write!(f, "query is {length} characters, the maximum is {max}")
            }
        }
    }
}

impl std::error::Error for ListRejection {}

/// Date filters parsed during validation, ready for the criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidDates {
    pub date: Option<NaiveDate>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Rejects normalized input that clamping could not fix.
///
/// Checks run in a fixed order and stop at the first failure: each date field,
/// then range ordering, then query length. Page, per-page, and sort values are
/// deliberately not re-checked; normalization already guarantees them.
///
/// # Errors
///
/// Returns a [`ListRejection`] naming the first violated rule.
pub fn validate(
    params: &NormalizedParams,
    constraints: &ListConstraints,
) -> Result<ValidDates, ListRejection> {
    let date = parse_date_field("date", params.date.as_deref())?;
    let date_from = parse_date_field("date_from", params.date_from.as_deref())?;
    let date_to = parse_date_field("date_to", params.date_to.as_deref())?;

    if let (Some(from), Some(to)) = (date_from, date_to)
        && from > to
    {
        return Err(ListRejection::DateRangeInvalid { from, to });
    }

    if let Some(query) = &params.query {
        let length = query.chars().count();
        if length > constraints.query_max {
            return Err(ListRejection::QueryTooLong {
                length,
                max: constraints.query_max,
            });
        }
    }

    Ok(ValidDates {
        date,
        date_from,
        date_to,
    })
}

fn parse_date_field(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, ListRejection> {
    match raw {
        None => Ok(None),
        Some(value) => parse_strict_date(value)
            .map(Some)
            .ok_or_else(|| ListRejection::DateInvalid {
                field,
                value: value.to_owned(),
            }),
    }
}

/// Strict `YYYY-MM-DD`: fixed width, zero padded, and a real calendar date.
///
/// chrono alone accepts unpadded components like `2025-8-2`, so the shape is
/// checked byte-wise before the calendar check.
fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
