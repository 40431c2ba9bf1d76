use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::models::AppState;

pub fn source_host(state: &AppState) -> String {
    crate::utils::hostname_from_url(&state.users_endpoint)
}

pub fn plain_html<S: AsRef<str>>(s: S) -> Response {
    Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref())).into_response()
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Post/redirect/get back to the only screen.
pub fn back_home() -> Response {
    Redirect::to("/").into_response()
}
