//! HTTP request handlers.

pub mod health_handler;
pub mod hello_handler;
pub mod index_handler;
pub mod users_handler;

pub use health_handler::health_routes;
pub use hello_handler::hello_routes;
pub use index_handler::index_routes;
pub use users_handler::users_routes;
