//! Theme preference cookie.
//!
//! The theme toggle is a plain form post: the handler stores the next theme
//! in a cookie and redirects back to the page that submitted it.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::state::AppState;
use crate::ui::Theme;

pub const THEME_COOKIE: &str = "theme";
const THEME_MAX_AGE_DAYS: i64 = 365;

#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    /// Explicit theme; empty or absent cycles the current one.
    pub theme: Option<String>,
    pub redirect: Option<String>,
}

/// Current theme from the request cookies. Missing or unknown is `system`.
#[must_use]
pub fn theme_from_jar(jar: &CookieJar) -> Theme {
    jar.get(THEME_COOKIE).map(|c| Theme::parse(c.value())).unwrap_or_default()
}

/// Theme after applying a form submission to `current`.
#[must_use]
pub fn next_theme(current: Theme, requested: Option<&str>) -> Theme {
    match requested.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => Theme::parse(raw),
        None => current.next(),
    }
}

/// Same-site path to return to. Anything that could leave the site is `/`.
#[must_use]
pub fn safe_redirect(raw: Option<&str>) -> &str {
    match raw {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

/// `POST /preferences/theme` — store the theme cookie, redirect back (303).
pub async fn set_theme(State(state): State<AppState>, jar: CookieJar, Form(form): Form<ThemeForm>) -> (CookieJar, Redirect) {
    let theme = next_theme(theme_from_jar(&jar), form.theme.as_deref());
    tracing::debug!(theme = theme.as_str(), "theme preference updated");

    let cookie = Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::days(THEME_MAX_AGE_DAYS));

    let target = safe_redirect(form.redirect.as_deref()).to_owned();
    (jar.add(cookie), Redirect::to(&target))
}

#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;
