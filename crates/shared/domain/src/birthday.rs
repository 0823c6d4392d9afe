//! Next-birthday calculation.
//!
//! All arithmetic is done on [`NaiveDate`] values, so there is no
//! time-of-day component and day counts are always whole days.
//!
//! A February 29 birthday is observed on February 28 in common years.

use chrono::{Datelike, NaiveDate};

use crate::constants::{LEAP_DAY_DAY, LEAP_DAY_MONTH, LEAP_DAY_OBSERVED_DAY};

/// Outcome of comparing a birth date with the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayGreeting {
    /// The birthday falls on today
    Today,
    /// The next birthday is this many days away (always at least 1)
    InDays(i64),
}

impl BirthdayGreeting {
    /// Compute the greeting for `birth_date` as seen on `today`.
    pub fn for_dates(birth_date: NaiveDate, today: NaiveDate) -> Self {
        match days_until_birthday(birth_date, today) {
            0 => BirthdayGreeting::Today,
            days => BirthdayGreeting::InDays(days),
        }
    }

    /// Render the greeting addressed to `username`.
    pub fn message(&self, username: &str) -> String {
        match self {
            BirthdayGreeting::Today => format!("Hello, {}! Happy birthday!", username),
            BirthdayGreeting::InDays(days) => {
                format!("Hello, {}! Your birthday is in {} day(s)", username, days)
            }
        }
    }
}

/// The day on which the birthday is observed in `year`.
///
/// Returns `None` only when `year` is outside chrono's supported range.
fn observed_in(year: i32, birth_date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day()).or_else(|| {
        let is_leap_day =
            birth_date.month() == LEAP_DAY_MONTH && birth_date.day() == LEAP_DAY_DAY;
        if is_leap_day {
            NaiveDate::from_ymd_opt(year, LEAP_DAY_MONTH, LEAP_DAY_OBSERVED_DAY)
        } else {
            None
        }
    })
}

/// The next day, on or after `today`, on which the birthday is observed.
pub fn next_birthday(birth_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    match observed_in(today.year(), birth_date) {
        Some(this_year) if this_year >= today => this_year,
        // Past the end of chrono's calendar there is no later day to report, so
        // a birthday already gone in the final year collapses to the last date
        // and reads as 0 days. Not a real greeting.
        _ => observed_in(today.year() + 1, birth_date).unwrap_or(NaiveDate::MAX),
    }
}

/// Whole days from `today` until the next birthday; 0 on the day itself.
pub fn days_until_birthday(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    (next_birthday(birth_date, today) - today).num_days()
}

/// Build the greeting message for `username`.
pub fn next_birthday_message(username: &str, birth_date: NaiveDate, today: NaiveDate) -> String {
    BirthdayGreeting::for_dates(birth_date, today).message(username)
}
