//! Birthday Service Library
//!
//! Stores one date of birth per username and greets users with the number of
//! days until their next birthday.
//!
//! # Architecture Layers
//!
//! - **api**: HTTP handlers, extractors, and routes
//! - **service**: birthday use cases
//! - **repository**: storage behind the `BirthdayRepository` trait
//! - **infra**: database connection and migrations
//! - **clock**: source of the current calendar day

pub mod api;
pub mod clock;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::clock::{Clock, SystemClock};
use crate::config::BirthdayServiceConfig;
use crate::infra::Database;
use crate::repository::{BirthdayRepository, BirthdayStore, InMemoryBirthdayStore};
use crate::service::BirthdayManager;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Build handler state from a repository and a clock.
pub fn build_state(repo: Arc<dyn BirthdayRepository>, clock: Arc<dyn Clock>) -> AppState {
    AppState::new(Arc::new(BirthdayManager::new(repo, clock)))
}

/// Run the HTTP server.
///
/// With `in_memory` set, records live only as long as the process and no
/// database is opened.
pub async fn run_server(
    config: BirthdayServiceConfig,
    in_memory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = if in_memory {
        info!("Using in-memory birthday store");
        build_state(Arc::new(InMemoryBirthdayStore::new()), clock)
    } else {
        let db = Arc::new(Database::connect(&config.database).await?);
        let repo = Arc::new(BirthdayStore::new(db.get_connection()));
        build_state(repo, clock).with_storage_health(db)
    };

    let app = create_router(state);

    let addr: SocketAddr = config.service.addr().parse()?;
    info!(service = %config.service.service_name, "Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: BirthdayServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
