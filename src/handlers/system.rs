use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::helpers::plain_html;

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, plain_html("Page not found")).into_response()
}
