//! Birthday repository implementation backed by SeaORM.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::BirthRecord;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Birthday repository trait for dependency injection.
///
/// Holds at most one date of birth per username. Callers pass usernames and
/// dates that have already been validated.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BirthdayRepository: Send + Sync {
    /// Find the record stored for a username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<BirthRecord>>;

    /// Insert or replace the date of birth for a username
    async fn upsert(&self, username: &str, date_of_birth: NaiveDate) -> AppResult<BirthRecord>;

    /// List all records ordered by username
    async fn list(&self) -> AppResult<Vec<BirthRecord>>;
}

/// Concrete implementation of BirthdayRepository
pub struct BirthdayStore {
    db: DatabaseConnection,
}

impl BirthdayStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BirthdayRepository for BirthdayStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<BirthRecord>> {
        let result = UserEntity::find_by_id(username.to_string())
            .one(&self.db)
            .await?;

        Ok(result.map(BirthRecord::from))
    }

    async fn upsert(&self, username: &str, date_of_birth: NaiveDate) -> AppResult<BirthRecord> {
        let active_model = ActiveModel {
            username: Set(username.to_string()),
            date_of_birth: Set(date_of_birth),
        };

        // Single statement, so concurrent writers to one username never interleave
        UserEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(user::Column::Username)
                    .update_column(user::Column::DateOfBirth)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        tracing::debug!(username = %username, %date_of_birth, "Birthday upserted");
        Ok(BirthRecord::new(username, date_of_birth))
    }

    async fn list(&self) -> AppResult<Vec<BirthRecord>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Username)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(BirthRecord::from).collect())
    }
}
