//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Usernames
// =============================================================================

/// Usernames are non-empty runs of ASCII letters
pub const USERNAME_PATTERN: &str = r"^[A-Za-z]+$";

// =============================================================================
// Dates
// =============================================================================

/// Canonical textual form of a calendar date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shape check applied before calendar parsing (ASCII digits only)
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

/// Month of the leap day
pub const LEAP_DAY_MONTH: u32 = 2;

/// Day of the leap day
pub const LEAP_DAY_DAY: u32 = 29;

/// Day of February on which a leap-day birthday is observed in common years
pub const LEAP_DAY_OBSERVED_DAY: u32 = 28;

// =============================================================================
// Messages
// =============================================================================

/// Rejection message for usernames that are not plain letters
pub const MSG_INVALID_USERNAME: &str = "Invalid username format";

/// Rejection message for malformed or non-existent dates
pub const MSG_INVALID_DATE_FORMAT: &str = "Invalid date format";

/// Rejection message for dates that are today or later
pub const MSG_DATE_NOT_IN_PAST: &str = "Date must be before today";
