//! In-memory birthday repository.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use common::{AppError, AppResult};
use domain::BirthRecord;

use super::BirthdayRepository;

/// Process-local store used by tests and `serve --in-memory`.
///
/// Each operation holds the lock only for a single map access, so a write is
/// visible to every read that starts after it returns.
#[derive(Default)]
pub struct InMemoryBirthdayStore {
    records: RwLock<BTreeMap<String, NaiveDate>>,
}

impl InMemoryBirthdayStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::internal("birthday store lock poisoned")
}

#[async_trait]
impl BirthdayRepository for InMemoryBirthdayStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<BirthRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .get(username)
            .map(|date| BirthRecord::new(username, *date)))
    }

    async fn upsert(&self, username: &str, date_of_birth: NaiveDate) -> AppResult<BirthRecord> {
        self.records
            .write()
            .map_err(poisoned)?
            .insert(username.to_string(), date_of_birth);
        Ok(BirthRecord::new(username, date_of_birth))
    }

    async fn list(&self) -> AppResult<Vec<BirthRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .iter()
            .map(|(username, date)| BirthRecord::new(username.as_str(), *date))
            .collect())
    }
}
