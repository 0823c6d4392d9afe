//! Date-of-birth parsing and validation.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DATE_FORMAT, DATE_PATTERN};
use crate::error::{DomainError, DomainResult};

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DATE_PATTERN).expect("DATE_PATTERN is a valid regex"));

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// The input must be zero-padded ASCII digits with `-` separators, must name a
/// real day, and must format back to exactly the same text. Anything else is
/// [`DomainError::InvalidFormat`].
pub fn parse_calendar_date(input: &str) -> DomainResult<NaiveDate> {
    if !DATE_RE.is_match(input) {
        return Err(DomainError::invalid_format(input));
    }

    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DomainError::invalid_format(input))?;

    if date.format(DATE_FORMAT).to_string() != input {
        return Err(DomainError::invalid_format(input));
    }

    Ok(date)
}

/// Validate a date of birth against the current calendar day.
///
/// Returns the parsed date when it is strictly before `today`, otherwise
/// [`DomainError::DateNotInPast`]. Format errors take precedence.
pub fn validate_date_of_birth(input: &str, today: NaiveDate) -> DomainResult<NaiveDate> {
    let date = parse_calendar_date(input)?;

    if date >= today {
        return Err(DomainError::DateNotInPast(date));
    }

    Ok(date)
}
