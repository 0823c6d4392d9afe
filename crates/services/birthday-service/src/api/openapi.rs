//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::{hello_handler, users_handler};
use domain::BirthRecord;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Birthday Service",
        version = "0.1.0",
        description = "Stores dates of birth and counts the days to the next birthday",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        hello_handler::save_birthday,
        hello_handler::get_birthday,
        users_handler::list_users,
    ),
    components(
        schemas(
            hello_handler::SaveBirthdayRequest,
            hello_handler::MessageResponse,
            BirthRecord,
        )
    ),
    tags(
        (name = "Birthdays", description = "Date of birth storage and greetings")
    )
)]
pub struct ApiDoc;
