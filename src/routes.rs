use axum::{
    routing::{get, post},
    Router,
};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state.custom_css.clone().unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::profiles::index_get))
        .route("/users/:id/edit", post(handlers::profiles::edit_post))
        .route("/users/:id/delete", post(handlers::profiles::delete_post))
        .route("/users/:id/like", post(handlers::profiles::like_post))
        .route("/editor/save", post(handlers::profiles::save_post))
        .route("/editor/cancel", post(handlers::profiles::cancel_post))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            })
            .layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            )),
        )
        .fallback(handlers::system::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
