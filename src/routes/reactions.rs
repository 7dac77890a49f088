//! Reaction counter proxy.
//!
//! Counts live in the worker. The visitor's own pick is kept in the
//! `reactions` cookie and merged into count responses as `"selected"`.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{Value, json};
use time::Duration;

use crate::routes::{bad_request, proxy_failure, upstream_response};
use crate::services::reactions::{REACTIONS_COOKIE, ReactionLedger, is_token};
use crate::state::AppState;

const REACTIONS_MAX_AGE_DAYS: i64 = 365;

fn ledger_from_jar(jar: &CookieJar) -> ReactionLedger {
    let Some(cookie) = jar.get(REACTIONS_COOKIE) else {
        return ReactionLedger::default();
    };

    let ledger = ReactionLedger::parse(cookie.value());
    if ledger.is_empty() && !cookie.value().is_empty() {
        tracing::debug!("ignoring unreadable reactions cookie");
    }
    ledger
}

/// `GET /api/reactions/{id}` — counts plus this visitor's selection.
pub async fn get_reactions(State(state): State<AppState>, jar: CookieJar, Path(entry_id): Path<String>) -> Response {
    if !is_token(&entry_id) {
        return bad_request("invalid entry id");
    }

    match state.worker.get_reactions(&entry_id).await {
        Ok(mut upstream) if upstream.is_success() => {
            let selected = ledger_from_jar(&jar).get(&entry_id).map(|r| Value::String(r.to_owned()));
            if let Some(obj) = upstream.body.as_object_mut() {
                obj.insert("selected".to_owned(), selected.unwrap_or(Value::Null));
            }
            upstream_response(upstream)
        }
        Ok(upstream) => upstream_response(upstream),
        Err(e) => proxy_failure(&e),
    }
}

/// `POST /api/reactions` — `{"entry_id", "reaction"}`; remembers the pick on success.
pub async fn post_reaction(State(state): State<AppState>, jar: CookieJar, Json(body): Json<Value>) -> Response {
    let entry_id = body.get("entry_id").and_then(Value::as_str).unwrap_or_default();
    let reaction = body.get("reaction").and_then(Value::as_str).unwrap_or_default();
    if !is_token(entry_id) || !is_token(reaction) {
        return bad_request("entry_id and reaction must be short tokens");
    }

    let forwarded = json!({ "entry_id": entry_id, "reaction": reaction });
    let upstream = match state.worker.post_reaction(&forwarded).await {
        Ok(upstream) => upstream,
        Err(e) => return proxy_failure(&e),
    };
    if !upstream.is_success() {
        return upstream_response(upstream);
    }

    let mut ledger = ledger_from_jar(&jar);
    ledger.record(entry_id, reaction);
    tracing::debug!(entry_id, reaction, remembered = ledger.len(), "reaction recorded");

    let cookie = Cookie::build((REACTIONS_COOKIE, ledger.encode()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::days(REACTIONS_MAX_AGE_DAYS));

    (jar.add(cookie), upstream_response(upstream)).into_response()
}

#[cfg(test)]
#[path = "reactions_test.rs"]
mod tests;
