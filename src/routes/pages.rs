//! Server-rendered page routes.
//!
//! Every page resolves its locale from the first path segment; unsupported
//! locales render in the default locale. An unknown id or slug answers with
//! the 404 page rather than an error body.

use axum::extract::{Path, Query, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::i18n::{Locale, preferred_locale};
use crate::pages::PageContext;
use crate::pages::apps::{render_app_detail, render_apps_list};
use crate::pages::home::{home_entries, render_home};
use crate::pages::not_found::render_not_found;
use crate::pages::notes::{render_note_detail, render_notes_list};
use crate::routes::preferences::theme_from_jar;
use crate::services::content::DEFAULT_LATEST_LIMIT;
use crate::state::AppState;
use crate::ui::{DetailSelection, FloatingNav, Theme};

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    open: Option<String>,
    nav: Option<String>,
}

/// `GET /` — send visitors to their preferred language.
pub async fn root(headers: HeaderMap) -> Redirect {
    let accept = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    let locale = preferred_locale(accept);
    Redirect::temporary(&format!("/{locale}"))
}

/// `GET /{locale}` — hero, featured apps, latest notes, optional detail modal and menu.
pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(locale): Path<String>,
    Query(query): Query<HomeQuery>,
) -> Response {
    let theme = theme_from_jar(&jar);
    let locale = page_locale(&locale);

    let apps = state.content.get_featured_apps(locale.as_str()).await;
    let notes = state.content.get_latest_notes(locale.as_str(), DEFAULT_LATEST_LIMIT).await;
    let entries = home_entries(apps, notes);

    let open = query.open.as_deref().and_then(|raw| raw.parse::<usize>().ok());
    let selection = DetailSelection::from_query(open, entries.len());
    let nav = FloatingNav::from_query(query.nav.as_deref());

    let ctx = PageContext::new(locale, theme, format!("/{locale}"));
    Html(render_home(&ctx, &entries, selection, nav)).into_response()
}

/// `GET /{locale}/apps`
pub async fn apps_list(State(state): State<AppState>, jar: CookieJar, Path(locale): Path<String>) -> Response {
    let theme = theme_from_jar(&jar);
    let locale = page_locale(&locale);
    let path = format!("/{locale}/apps");

    let apps = state.content.get_apps(locale.as_str()).await;
    let ctx = PageContext::new(locale, theme, path);
    Html(render_apps_list(&ctx, &apps)).into_response()
}

/// `GET /{locale}/apps/{id}`
pub async fn app_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((locale, id)): Path<(String, String)>,
) -> Response {
    let theme = theme_from_jar(&jar);
    let locale = page_locale(&locale);
    let path = format!("/{locale}/apps/{id}");

    match state.content.get_app_by_id(locale.as_str(), &id).await {
        Some(app) => {
            let ctx = PageContext::new(locale, theme, path);
            Html(render_app_detail(&ctx, &app)).into_response()
        }
        None => not_found(locale, theme, &path),
    }
}

/// `GET /{locale}/notes`
pub async fn notes_list(State(state): State<AppState>, jar: CookieJar, Path(locale): Path<String>) -> Response {
    let theme = theme_from_jar(&jar);
    let locale = page_locale(&locale);
    let path = format!("/{locale}/notes");

    let notes = state.content.get_notes(locale.as_str()).await;
    let ctx = PageContext::new(locale, theme, path);
    Html(render_notes_list(&ctx, &notes)).into_response()
}

/// `GET /{locale}/notes/{slug}`
pub async fn note_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((locale, slug)): Path<(String, String)>,
) -> Response {
    let theme = theme_from_jar(&jar);
    let locale = page_locale(&locale);
    let path = format!("/{locale}/notes/{slug}");

    match state.content.get_note_by_slug(locale.as_str(), &slug).await {
        Some(note) => {
            let ctx = PageContext::new(locale, theme, path);
            Html(render_note_detail(&ctx, &note)).into_response()
        }
        None => not_found(locale, theme, &path),
    }
}

/// Supported locale from the path, or the default one.
fn page_locale(raw: &str) -> Locale {
    let locale = Locale::resolve(raw);
    if locale.as_str() != raw {
        tracing::debug!(requested = raw, %locale, "unsupported locale, using default");
    }
    locale
}

/// Router fallback: the 404 page in the default locale.
pub async fn fallback(jar: CookieJar, uri: Uri) -> Response {
    not_found(Locale::default(), theme_from_jar(&jar), uri.path())
}

fn not_found(locale: Locale, theme: Theme, path: &str) -> Response {
    tracing::debug!(%locale, path, "page not found");
    let ctx = PageContext::new(locale, theme, path);
    (StatusCode::NOT_FOUND, Html(render_not_found(&ctx))).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
