//! Birthday listing handler.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::BirthRecord;

use crate::api::AppState;

/// Create listing routes
pub fn users_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

/// List all stored birthdays
#[utoipa::path(
    get,
    path = "/users",
    tag = "Birthdays",
    responses(
        (status = 200, description = "All stored birthdays", body = Vec<BirthRecord>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<BirthRecord>>> {
    let records = state.birthday_service.list_birthdays().await?;
    Ok(Json(records))
}
