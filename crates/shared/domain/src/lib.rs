//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! username and date-of-birth validation, and the next-birthday calculation.

pub mod birthday;
pub mod constants;
pub mod date_of_birth;
pub mod error;
pub mod record;
pub mod username;

pub use birthday::{days_until_birthday, next_birthday, next_birthday_message, BirthdayGreeting};
pub use constants::*;
pub use date_of_birth::{parse_calendar_date, validate_date_of_birth};
pub use error::{DomainError, DomainResult};
pub use record::BirthRecord;
pub use username::Username;
