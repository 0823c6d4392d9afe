//! Application state for dependency injection.

use std::sync::Arc;

use async_trait::async_trait;

use crate::infra::Database;
use crate::service::BirthdayService;

/// Storage probe used by the health endpoint.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Name reported in the health response
    fn name(&self) -> &'static str;

    async fn check(&self) -> Result<(), String>;
}

#[async_trait]
impl HealthCheck for Database {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn check(&self) -> Result<(), String> {
        self.ping().await.map_err(|e| e.to_string())
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub birthday_service: Arc<dyn BirthdayService>,
    /// Absent when running on the in-memory store
    pub storage_health: Option<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Create new app state.
    pub fn new(birthday_service: Arc<dyn BirthdayService>) -> Self {
        Self {
            birthday_service,
            storage_health: None,
        }
    }

    /// Attach a storage probe for `/health`.
    pub fn with_storage_health(mut self, probe: Arc<dyn HealthCheck>) -> Self {
        self.storage_health = Some(probe);
        self
    }
}
