//! Birth record entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored date of birth, keyed by username.
///
/// Serialized as `{"username": "...", "date_of_birth": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BirthRecord {
    /// Username (ASCII letters only)
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
    /// Date of birth
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Date, example = "1990-12-25"))]
    pub date_of_birth: NaiveDate,
}

impl BirthRecord {
    pub fn new(username: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            username: username.into(),
            date_of_birth,
        }
    }
}
