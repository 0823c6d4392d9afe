//! Static front page with the birthday form.

use axum::{response::Html, routing::get, Router};

use crate::api::AppState;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Create front page routes
pub fn index_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
