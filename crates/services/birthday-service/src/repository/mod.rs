//! Repository layer for data access.

pub mod entities;
mod birthday_repository;
mod memory;

pub use birthday_repository::{BirthdayRepository, BirthdayStore};
pub use memory::InMemoryBirthdayStore;

#[cfg(any(test, feature = "test-utils"))]
pub use birthday_repository::MockBirthdayRepository;
