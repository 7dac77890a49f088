use super::*;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;

/// Fake worker echoing what it received so tests can assert on forwarding.
async fn spawn_fake_worker() -> String {
    async fn echo_list(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        Json(json!({
            "query": q,
            "bypass": headers.get(DEV_BYPASS_HEADER).and_then(|v| v.to_str().ok()),
        }))
    }
    async fn create(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        (StatusCode::CREATED, Json(json!({"id": 7, "received": body})))
    }
    async fn get_one(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
        if id == "404" {
            (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
        } else {
            (StatusCode::OK, Json(json!({"id": id})))
        }
    }
    async fn update(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
        Json(json!({"id": id, "updated": body}))
    }
    async fn delete(Path(id): Path<String>) -> Json<Value> {
        Json(json!({"deleted": id}))
    }
    async fn reactions(Path(id): Path<String>) -> Json<Value> {
        Json(json!({"entry_id": id, "counts": {"like": 3}}))
    }
    async fn react(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({"ok": true, "received": body}))
    }
    async fn not_json() -> &'static str {
        "<html>oops</html>"
    }

    let app = Router::new()
        .route("/admin/entries", get(echo_list).post(create))
        .route("/admin/entries/{id}", get(get_one).put(update).delete(delete))
        .route("/reactions/{id}", get(reactions))
        .route("/reactions", post(react))
        .route("/broken/admin/entries", get(not_json));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://localhost:{}", addr.port())
}

fn client_for(base_url: &str) -> WorkerClient {
    WorkerClient::new(&WorkerConfig::new(base_url)).unwrap()
}

#[test]
fn upstream_success_range() {
    assert!(Upstream::new(200, Value::Null).is_success());
    assert!(Upstream::new(201, Value::Null).is_success());
    assert!(!Upstream::new(404, Value::Null).is_success());
    assert!(!Upstream::new(500, Value::Null).is_success());
}

#[tokio::test]
async fn list_entries_forwards_filter_and_bypass_header() {
    let base = spawn_fake_worker().await;
    let client = client_for(&base);

    let filter = EntryFilter::from_raw(Some("ja"), Some("published"));
    let up = client.list_entries(&filter).await.unwrap();
    assert_eq!(up.status, 200);
    assert_eq!(up.body["query"]["locale"], "ja");
    assert_eq!(up.body["query"]["status"], "published");
    assert_eq!(up.body["bypass"], DEV_BYPASS_VALUE);
}

#[tokio::test]
async fn list_entries_without_filter_sends_no_query() {
    let base = spawn_fake_worker().await;
    let up = client_for(&base).list_entries(&EntryFilter::default()).await.unwrap();
    assert_eq!(up.body["query"], json!({}));
}

#[tokio::test]
async fn bypass_header_omitted_for_remote_workers() {
    let base = spawn_fake_worker().await;
    let remote = base.replace("localhost", "127.0.0.1");
    let client = client_for(&remote);
    assert!(!client.dev_bypass);

    let up = client.list_entries(&EntryFilter::default()).await.unwrap();
    assert_eq!(up.body["bypass"], Value::Null);
}

#[tokio::test]
async fn create_returns_upstream_status_and_body() {
    let base = spawn_fake_worker().await;
    let up = client_for(&base).create_entry(&json!({"title": "x"})).await.unwrap();
    assert_eq!(up.status, 201);
    assert_eq!(up.body["received"]["title"], "x");
}

#[tokio::test]
async fn get_entry_passes_through_error_status() {
    let base = spawn_fake_worker().await;
    let up = client_for(&base).get_entry("404").await.unwrap();
    assert_eq!(up.status, 404);
    assert!(!up.is_success());
    assert_eq!(up.body["error"], "Not found");
}

#[tokio::test]
async fn update_and_delete_hit_entry_path() {
    let base = spawn_fake_worker().await;
    let client = client_for(&base);

    let up = client.update_entry("12", &json!({"status": "draft"})).await.unwrap();
    assert_eq!(up.body["id"], "12");
    assert_eq!(up.body["updated"]["status"], "draft");

    let up = client.delete_entry("12").await.unwrap();
    assert_eq!(up.body["deleted"], "12");
}

#[tokio::test]
async fn reactions_round_trip() {
    let base = spawn_fake_worker().await;
    let client = client_for(&base);

    let up = client.get_reactions("note-1").await.unwrap();
    assert_eq!(up.body["counts"]["like"], 3);

    let up = client.post_reaction(&json!({"entry_id": "note-1", "reaction": "like"})).await.unwrap();
    assert_eq!(up.body["ok"], true);
}

#[tokio::test]
async fn non_json_response_is_an_error() {
    let base = spawn_fake_worker().await;
    let client = client_for(&format!("{base}/broken"));
    let err = client.list_entries(&EntryFilter::default()).await.unwrap_err();
    assert!(matches!(err, ProxyError::InvalidJson { status: 200, .. }));
}

#[tokio::test]
async fn connection_failure_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = client_for(&format!("http://127.0.0.1:{port}")).get_entry("1").await.unwrap_err();
    assert!(matches!(err, ProxyError::Request(_)));
}
