//! Application services layer - birthday use cases.

mod birthday_service;

pub use birthday_service::{BirthdayManager, BirthdayService};
