//! Birthday service - Handles birthday-related business logic.
//!
//! Callers hand in an already parsed [`Username`]. Dates are validated here,
//! before any write reaches the repository, so the store only ever holds dates
//! that were in the past when they were written.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{next_birthday_message, validate_date_of_birth, BirthRecord, Username};

use crate::clock::Clock;
use crate::repository::BirthdayRepository;

/// Birthday service trait for dependency injection.
#[async_trait]
pub trait BirthdayService: Send + Sync {
    /// Validate and store (or replace) a user's date of birth
    async fn save_date_of_birth(
        &self,
        username: &Username,
        date_of_birth: &str,
    ) -> AppResult<BirthRecord>;

    /// Greeting with the number of days until the user's next birthday
    async fn birthday_message(&self, username: &Username) -> AppResult<String>;

    /// All stored birthdays
    async fn list_birthdays(&self) -> AppResult<Vec<BirthRecord>>;
}

/// Concrete implementation of BirthdayService using a repository and a clock.
pub struct BirthdayManager {
    repo: Arc<dyn BirthdayRepository>,
    clock: Arc<dyn Clock>,
}

impl BirthdayManager {
    /// Create new birthday service instance
    pub fn new(repo: Arc<dyn BirthdayRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl BirthdayService for BirthdayManager {
    async fn save_date_of_birth(
        &self,
        username: &Username,
        date_of_birth: &str,
    ) -> AppResult<BirthRecord> {
        let date = validate_date_of_birth(date_of_birth, self.clock.today())?;

        let record = self.repo.upsert(username.as_str(), date).await?;
        tracing::info!(username = %username, "Date of birth saved");
        Ok(record)
    }

    async fn birthday_message(&self, username: &Username) -> AppResult<String> {
        let record = self
            .repo
            .find_by_username(username.as_str())
            .await?
            .ok_or_not_found("User")?;

        Ok(next_birthday_message(
            username.as_str(),
            record.date_of_birth,
            self.clock.today(),
        ))
    }

    async fn list_birthdays(&self) -> AppResult<Vec<BirthRecord>> {
        self.repo.list().await
    }
}
