//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered pages, the preference form
//! endpoint, the admin screen, and a JSON proxy to the worker under `/api`.
//! Static assets live under `/assets`; anything unmatched renders the 404
//! page.

pub mod admin;
pub mod pages;
pub mod preferences;
pub mod reactions;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::worker::{ProxyError, Upstream};
use crate::state::AppState;

/// JSON proxy routes for external admin tools and reaction widgets.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/admin/entries", get(admin::list_entries).post(admin::create_entry))
        .route(
            "/api/admin/entries/{id}",
            get(admin::get_entry)
                .put(admin::update_entry)
                .delete(admin::delete_entry),
        )
        .route("/api/reactions", post(reactions::post_reaction))
        .route("/api/reactions/{id}", get(reactions::get_reactions))
        .layer(cors)
}

pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::root))
        .route("/healthz", get(healthz))
        .route("/preferences/theme", post(preferences::set_theme))
        .route("/admin", get(admin::admin_page))
        .route("/admin/editor", get(admin::editor_page).post(admin::save_from_editor))
        .route("/admin/entries/{id}/delete", post(admin::delete_from_page))
        .route("/{locale}", get(pages::home))
        .route("/{locale}/apps", get(pages::apps_list))
        .route("/{locale}/apps/{id}", get(pages::app_detail))
        .route("/{locale}/notes", get(pages::notes_list))
        .route("/{locale}/notes/{slug}", get(pages::note_detail))
        .merge(api_routes())
        .nest_service("/assets", assets)
        .fallback(pages::fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// PROXY RESPONSES
// =============================================================================

/// Relay a worker response with its status and JSON body.
pub(crate) fn upstream_response(upstream: Upstream) -> Response {
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(upstream.body)).into_response()
}

/// Transport and decoding failures are logged and hidden behind a generic 500.
pub(crate) fn proxy_failure(err: &ProxyError) -> Response {
    tracing::error!(error = %err, "worker proxy failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal Server Error" }))).into_response()
}

pub(crate) fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
