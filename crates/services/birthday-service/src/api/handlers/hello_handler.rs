//! Birthday greeting handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::Username;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// Date of birth update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveBirthdayRequest {
    /// Date of birth in `YYYY-MM-DD` form, strictly before today
    #[validate(required(message = "Missing dateOfBirth"))]
    #[schema(value_type = String, required = true, example = "1990-12-25")]
    pub date_of_birth: Option<String>,
}

/// Greeting response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Hello, alice! Your birthday is in 290 day(s)")]
    pub message: String,
}

/// Create greeting routes
pub fn hello_routes() -> Router<AppState> {
    Router::new().route("/:username", get(get_birthday).put(save_birthday))
}

/// Save or replace a user's date of birth
#[utoipa::path(
    put,
    path = "/hello/{username}",
    tag = "Birthdays",
    params(
        ("username" = String, Path, description = "Username (letters only)")
    ),
    request_body = SaveBirthdayRequest,
    responses(
        (status = 204, description = "Date of birth saved"),
        (status = 400, description = "Invalid username, missing field, invalid date format, or date not before today")
    )
)]
pub async fn save_birthday(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<ValidatedJson<SaveBirthdayRequest>, AppError>,
) -> AppResult<StatusCode> {
    // Username errors take precedence over body errors
    let username = Username::parse(&username)?;
    let ValidatedJson(payload) = payload?;
    let date_of_birth = payload.date_of_birth.unwrap_or_default();

    state
        .birthday_service
        .save_date_of_birth(&username, &date_of_birth)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the birthday greeting for a user
#[utoipa::path(
    get,
    path = "/hello/{username}",
    tag = "Birthdays",
    params(
        ("username" = String, Path, description = "Username (letters only)")
    ),
    responses(
        (status = 200, description = "Birthday greeting", body = MessageResponse),
        (status = 400, description = "Invalid username"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_birthday(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let username = Username::parse(&username)?;
    let message = state.birthday_service.birthday_message(&username).await?;
    Ok(Json(MessageResponse { message }))
}
