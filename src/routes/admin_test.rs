use super::*;
use crate::state::test_helpers::{MockWorker, WorkerCall, test_app_state};
use axum::body::to_bytes;
use serde_json::json;
use std::sync::Arc;

fn state_with(worker: &Arc<MockWorker>) -> (tempfile::TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let state = test_app_state(dir.path(), worker.clone());
    (dir, state)
}

async fn json_body(res: Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn row() -> Value {
    json!({
        "id": 3,
        "entry_id": "lantern",
        "type": "app",
        "locale": "en",
        "title": "Lantern",
        "description": "Night reader",
        "date": "2024-12-04",
        "status": "published"
    })
}

#[tokio::test]
async fn admin_page_renders_rows_and_forwards_filter() {
    let worker = Arc::new(MockWorker::responding(200, json!([row()])));
    let (_dir, state) = state_with(&worker);
    let query = AdminQuery { locale: Some("en".into()), status: Some("bogus".into()), error: None };

    let Html(html) = admin_page(State(state), CookieJar::new(), Query(query)).await;
    assert!(html.contains("Night reader"));
    assert!(html.contains(r#"action="/admin/entries/3/delete""#));

    let expected = EntryFilter::from_raw(Some("en"), None);
    assert_eq!(worker.calls(), vec![WorkerCall::List(expected)]);
}

#[tokio::test]
async fn admin_page_survives_worker_failure() {
    let worker = Arc::new(MockWorker::unreachable());
    let (_dir, state) = state_with(&worker);
    let query = AdminQuery { error: Some("delete".into()), ..AdminQuery::default() };

    let Html(html) = admin_page(State(state), CookieJar::new(), Query(query)).await;
    assert!(html.contains(r#"class="empty""#));
    assert!(html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn delete_from_page_redirects_by_outcome() {
    let ok = Arc::new(MockWorker::responding(200, json!({ "success": true })));
    let (_dir, state) = state_with(&ok);
    let res = delete_from_page(State(state), Path("3".into())).await.into_response();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/admin");
    assert_eq!(ok.calls(), vec![WorkerCall::Delete("3".into())]);

    let rejected = Arc::new(MockWorker::responding(404, json!({ "error": "Not found" })));
    let (_dir, state) = state_with(&rejected);
    let res = delete_from_page(State(state), Path("3".into())).await.into_response();
    assert_eq!(res.headers()["location"], "/admin?error=delete");

    let down = Arc::new(MockWorker::unreachable());
    let (_dir, state) = state_with(&down);
    let res = delete_from_page(State(state), Path("3".into())).await.into_response();
    assert_eq!(res.headers()["location"], "/admin?error=delete");
}

#[tokio::test]
async fn delete_from_page_rejects_bad_id_without_calling_worker() {
    let worker = Arc::new(MockWorker::responding(200, json!({})));
    let (_dir, state) = state_with(&worker);
    let res = delete_from_page(State(state), Path("../x".into())).await.into_response();
    assert_eq!(res.headers()["location"], "/admin?error=delete");
    assert!(worker.calls().is_empty());
}

#[tokio::test]
async fn list_entries_relays_body() {
    let worker = Arc::new(MockWorker::responding(200, json!([row()])));
    let (_dir, state) = state_with(&worker);

    let res = list_entries(State(state), Query(AdminQuery::default())).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await[0]["entry_id"], "lantern");
}

#[tokio::test]
async fn create_entry_returns_201_on_success() {
    let worker = Arc::new(MockWorker::responding(200, json!({ "id": 10 })));
    let (_dir, state) = state_with(&worker);
    let body = json!({ "title": "New", "status": "draft", "locale": "ja", "type": "note" });

    let res = create_entry(State(state), Json(body.clone())).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(json_body(res).await["id"], 10);
    assert_eq!(worker.calls(), vec![WorkerCall::Create(body)]);
}

#[tokio::test]
async fn create_entry_validates_before_forwarding() {
    let worker = Arc::new(MockWorker::responding(200, json!({})));
    let (_dir, state) = state_with(&worker);

    let res = create_entry(State(state), Json(json!({ "status": "archived" }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(res).await["error"].as_str().unwrap().contains("status"));
    assert!(worker.calls().is_empty());
}

#[tokio::test]
async fn create_entry_passes_upstream_error() {
    let worker = Arc::new(MockWorker::responding(422, json!({ "error": "title required" })));
    let (_dir, state) = state_with(&worker);

    let res = create_entry(State(state), Json(json!({}))).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(res).await["error"], "title required");
}

#[tokio::test]
async fn single_entry_routes_forward_id() {
    let worker = Arc::new(MockWorker::responding(200, json!({ "ok": true })));
    let (_dir, state) = state_with(&worker);
    let patch = json!({ "status": "published" });

    assert_eq!(get_entry(State(state.clone()), Path("7".into())).await.status(), StatusCode::OK);
    assert_eq!(
        update_entry(State(state.clone()), Path("7".into()), Json(patch.clone())).await.status(),
        StatusCode::OK
    );
    assert_eq!(delete_entry(State(state), Path("7".into())).await.status(), StatusCode::OK);

    assert_eq!(
        worker.calls(),
        vec![
            WorkerCall::Get("7".into()),
            WorkerCall::Update("7".into(), patch),
            WorkerCall::Delete("7".into()),
        ]
    );
}

#[tokio::test]
async fn invalid_ids_are_400() {
    let worker = Arc::new(MockWorker::responding(200, json!({})));
    let (_dir, state) = state_with(&worker);

    assert_eq!(get_entry(State(state.clone()), Path("a b".into())).await.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        update_entry(State(state.clone()), Path("".into()), Json(json!({}))).await.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(delete_entry(State(state), Path("x/y".into())).await.status(), StatusCode::BAD_REQUEST);
    assert!(worker.calls().is_empty());
}

#[tokio::test]
async fn transport_failure_is_generic_500() {
    let worker = Arc::new(MockWorker::unreachable());
    let (_dir, state) = state_with(&worker);

    let res = get_entry(State(state), Path("1".into())).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(res).await, json!({ "error": "Internal Server Error" }));
}

fn form(id: &str) -> EditorForm {
    EditorForm {
        id: id.into(),
        entry_id: "lantern".into(),
        kind: "app".into(),
        locale: "en".into(),
        title: "Lantern".into(),
        description: "Night reader".into(),
        date: "2024-12-04".into(),
        status: "draft".into(),
    }
}

async fn html_body(res: Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn editor_page_blank_for_new_entry() {
    let worker = Arc::new(MockWorker::responding(200, json!({})));
    let (_dir, state) = state_with(&worker);

    let res = editor_page(State(state), CookieJar::new(), Query(EditorQuery::default())).await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = html_body(res).await;
    assert!(html.contains(r#"action="/admin/editor""#));
    assert!(!html.contains(r#"name="id""#));
    assert!(worker.calls().is_empty());
}

#[tokio::test]
async fn editor_page_prefills_from_worker() {
    let worker = Arc::new(MockWorker::responding(200, row()));
    let (_dir, state) = state_with(&worker);
    let query = EditorQuery { id: Some("3".into()), error: Some("save".into()) };

    let res = editor_page(State(state), CookieJar::new(), Query(query)).await;
    let html = html_body(res).await;
    assert!(html.contains(r#"name="id" value="3""#));
    assert!(html.contains(r#"value="Lantern""#));
    assert!(html.contains(r#"role="alert""#));
    assert_eq!(worker.calls(), vec![WorkerCall::Get("3".into())]);
}

#[tokio::test]
async fn editor_page_unloadable_row_returns_to_list() {
    for worker in [
        MockWorker::responding(404, json!({ "error": "Not found" })),
        MockWorker::responding(200, json!({ "unexpected": true })),
        MockWorker::unreachable(),
    ] {
        let worker = Arc::new(worker);
        let (_dir, state) = state_with(&worker);
        let query = EditorQuery { id: Some("3".into()), error: None };
        let res = editor_page(State(state), CookieJar::new(), Query(query)).await;
        assert_eq!(res.headers()["location"], "/admin?error=load");
    }

    let worker = Arc::new(MockWorker::responding(200, row()));
    let (_dir, state) = state_with(&worker);
    let query = EditorQuery { id: Some("../3".into()), error: None };
    let res = editor_page(State(state), CookieJar::new(), Query(query)).await;
    assert_eq!(res.headers()["location"], "/admin?error=load");
    assert!(worker.calls().is_empty());
}

#[tokio::test]
async fn save_creates_new_entry() {
    let worker = Arc::new(MockWorker::responding(201, json!({ "id": 10 })));
    let (_dir, state) = state_with(&worker);

    let res = save_from_editor(State(state), Form(form(""))).await.into_response();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/admin");
    assert_eq!(worker.calls(), vec![WorkerCall::Create(form("").to_body().unwrap())]);
}

#[tokio::test]
async fn save_updates_existing_entry() {
    let worker = Arc::new(MockWorker::responding(200, row()));
    let (_dir, state) = state_with(&worker);

    let res = save_from_editor(State(state), Form(form("3"))).await.into_response();
    assert_eq!(res.headers()["location"], "/admin");
    assert_eq!(worker.calls(), vec![WorkerCall::Update("3".into(), form("3").to_body().unwrap())]);
}

#[tokio::test]
async fn save_failures_return_to_editor() {
    let rejected = Arc::new(MockWorker::responding(422, json!({ "error": "duplicate" })));
    let (_dir, state) = state_with(&rejected);
    let res = save_from_editor(State(state), Form(form("3"))).await.into_response();
    assert_eq!(res.headers()["location"], "/admin/editor?id=3&error=save");

    let down = Arc::new(MockWorker::unreachable());
    let (_dir, state) = state_with(&down);
    let res = save_from_editor(State(state), Form(form(""))).await.into_response();
    assert_eq!(res.headers()["location"], "/admin/editor?error=save");
}

#[tokio::test]
async fn save_validates_before_calling_worker() {
    let worker = Arc::new(MockWorker::responding(200, json!({})));
    let (_dir, state) = state_with(&worker);

    let invalid = EditorForm { status: "archived".into(), ..form("") };
    let res = save_from_editor(State(state.clone()), Form(invalid)).await.into_response();
    assert_eq!(res.headers()["location"], "/admin/editor?error=save");

    let untitled = EditorForm { title: String::new(), ..form("3") };
    let res = save_from_editor(State(state.clone()), Form(untitled)).await.into_response();
    assert_eq!(res.headers()["location"], "/admin/editor?id=3&error=save");

    let res = save_from_editor(State(state), Form(form("a/b"))).await.into_response();
    assert_eq!(res.headers()["location"], "/admin/editor?error=save");

    assert!(worker.calls().is_empty());
}
