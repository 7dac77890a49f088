//! Admin routes: the entry list and editor pages, and the JSON proxy to the
//! worker.
//!
//! The proxy validates ids and enumerated body fields, then relays the
//! worker's status and body. Only transport failures and non-JSON replies
//! are turned into a generic 500.

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::Value;

use crate::i18n::Locale;
use crate::pages::PageContext;
use crate::pages::admin::{ADMIN_PATH, EDITOR_PATH, editor_href, render_admin, render_editor};
use crate::routes::preferences::theme_from_jar;
use crate::routes::{bad_request, proxy_failure, upstream_response};
use crate::services::entries::{
    ContentEntry, EditorForm, EntryFilter, entries_from_json, is_valid_id, validate_entry_body,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub locale: Option<String>,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl AdminQuery {
    fn filter(&self) -> EntryFilter {
        EntryFilter::from_raw(self.locale.as_deref(), self.status.as_deref())
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// `GET /admin` — list entries; a failed fetch renders an empty list.
pub async fn admin_page(State(state): State<AppState>, jar: CookieJar, Query(query): Query<AdminQuery>) -> Html<String> {
    let filter = query.filter();
    let entries = match state.worker.list_entries(&filter).await {
        Ok(upstream) if upstream.is_success() => entries_from_json(&upstream.body),
        Ok(upstream) => {
            tracing::warn!(status = upstream.status, "admin entry list rejected by worker");
            Vec::new()
        }
        Err(e) => {
            tracing::error!(error = %e, "admin entry list failed");
            Vec::new()
        }
    };

    let ctx = PageContext::new(Locale::default(), theme_from_jar(&jar), ADMIN_PATH);
    Html(render_admin(&ctx, &entries, filter, query.error.as_deref()))
}

/// `POST /admin/entries/{id}/delete` — delete, then return to the list.
pub async fn delete_from_page(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if !is_valid_id(&id) {
        return Redirect::to("/admin?error=delete");
    }

    match state.worker.delete_entry(&id).await {
        Ok(upstream) if upstream.is_success() => {
            tracing::info!(%id, "entry deleted");
            Redirect::to(ADMIN_PATH)
        }
        Ok(upstream) => {
            tracing::warn!(%id, status = upstream.status, "entry delete rejected by worker");
            Redirect::to("/admin?error=delete")
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "entry delete failed");
            Redirect::to("/admin?error=delete")
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EditorQuery {
    pub id: Option<String>,
    pub error: Option<String>,
}

/// `GET /admin/editor` — blank form, or `?id=N` prefilled from the worker.
pub async fn editor_page(State(state): State<AppState>, jar: CookieJar, Query(query): Query<EditorQuery>) -> Response {
    let form = match query.id.as_deref().filter(|id| !id.is_empty()) {
        None => EditorForm::default(),
        Some(id) => match load_entry(&state, id).await {
            Some(entry) => EditorForm::from(&entry),
            None => return Redirect::to("/admin?error=load").into_response(),
        },
    };

    let query_string = form.target_id().map(|id| format!("?id={id}")).unwrap_or_default();
    let ctx = PageContext::new(Locale::default(), theme_from_jar(&jar), EDITOR_PATH).with_query(query_string);
    Html(render_editor(&ctx, &form, query.error.as_deref())).into_response()
}

/// `POST /admin/editor` — create or update, then return to the list.
pub async fn save_from_editor(State(state): State<AppState>, Form(form): Form<EditorForm>) -> Redirect {
    let id = form.target_id();
    if id.is_some_and(|id| !is_valid_id(id)) {
        return editor_failed(None);
    }

    let body = match form.to_body() {
        Ok(body) => body,
        Err(message) => {
            tracing::warn!(reason = message, "editor form rejected");
            return editor_failed(id);
        }
    };

    let result = match id {
        Some(id) => state.worker.update_entry(id, &body).await,
        None => state.worker.create_entry(&body).await,
    };
    match result {
        Ok(upstream) if upstream.is_success() => {
            tracing::info!(entry_id = %form.entry_id, "entry saved");
            Redirect::to(ADMIN_PATH)
        }
        Ok(upstream) => {
            tracing::warn!(entry_id = %form.entry_id, status = upstream.status, "entry save rejected by worker");
            editor_failed(id)
        }
        Err(e) => {
            tracing::error!(entry_id = %form.entry_id, error = %e, "entry save failed");
            editor_failed(id)
        }
    }
}

fn editor_failed(id: Option<&str>) -> Redirect {
    let href = editor_href(id);
    let sep = if id.is_some() { '&' } else { '?' };
    Redirect::to(&format!("{href}{sep}error=save"))
}

async fn load_entry(state: &AppState, id: &str) -> Option<ContentEntry> {
    if !is_valid_id(id) {
        return None;
    }

    match state.worker.get_entry(id).await {
        Ok(upstream) if upstream.is_success() => match serde_json::from_value(upstream.body) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(%id, error = %e, "malformed entry from worker");
                None
            }
        },
        Ok(upstream) => {
            tracing::warn!(%id, status = upstream.status, "entry fetch rejected by worker");
            None
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "entry fetch failed");
            None
        }
    }
}

// =============================================================================
// JSON PROXY
// =============================================================================

/// `GET /api/admin/entries` — forwards `locale` and `status` filters.
pub async fn list_entries(State(state): State<AppState>, Query(query): Query<AdminQuery>) -> Response {
    match state.worker.list_entries(&query.filter()).await {
        Ok(upstream) => upstream_response(upstream),
        Err(e) => proxy_failure(&e),
    }
}

/// `POST /api/admin/entries` — 201 on success.
pub async fn create_entry(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    if let Err(message) = validate_entry_body(&body) {
        return bad_request(message);
    }

    match state.worker.create_entry(&body).await {
        Ok(upstream) if upstream.is_success() => (StatusCode::CREATED, Json(upstream.body)).into_response(),
        Ok(upstream) => upstream_response(upstream),
        Err(e) => proxy_failure(&e),
    }
}

/// `GET /api/admin/entries/{id}`
pub async fn get_entry(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if !is_valid_id(&id) {
        return bad_request("invalid entry id");
    }

    match state.worker.get_entry(&id).await {
        Ok(upstream) => upstream_response(upstream),
        Err(e) => proxy_failure(&e),
    }
}

/// `PUT /api/admin/entries/{id}`
pub async fn update_entry(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    if !is_valid_id(&id) {
        return bad_request("invalid entry id");
    }
    if let Err(message) = validate_entry_body(&body) {
        return bad_request(message);
    }

    match state.worker.update_entry(&id, &body).await {
        Ok(upstream) => upstream_response(upstream),
        Err(e) => proxy_failure(&e),
    }
}

/// `DELETE /api/admin/entries/{id}`
pub async fn delete_entry(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if !is_valid_id(&id) {
        return bad_request("invalid entry id");
    }

    match state.worker.delete_entry(&id).await {
        Ok(upstream) => upstream_response(upstream),
        Err(e) => proxy_failure(&e),
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
