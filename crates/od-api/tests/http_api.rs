//! End-to-end tests for the HTTP surface, run against real backend
//! instances: an in-memory SQLite store and a JSON store in a temp dir.

use actix_web::{test, web, App};
use od_api::configure_routes;
use od_api::handlers::AppState;
use od_store_json::JsonStore;
use od_store_sqlite::SqliteStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

async fn test_state() -> (TempDir, web::Data<AppState>) {
    let dir = TempDir::new().unwrap();
    let sqlite = SqliteStore::connect("sqlite::memory:").await.unwrap();
    let json = JsonStore::new(dir.path().to_path_buf());
    let state = web::Data::new(AppState {
        sqlite: Arc::new(sqlite),
        json: Arc::new(json),
    });
    (dir, state)
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! get_json {
    ($app:expr, $path:expr) => {{
        let req = test::TestRequest::get().uri($path).to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

macro_rules! post_json {
    ($app:expr, $path:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri($path)
            .set_json($body)
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

#[actix_web::test]
async fn category_and_link_lifecycle_with_cascade() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    let category = post_json!(app, "/categories", json!({"name": "Dev", "type": "link"}));
    assert_eq!(category["name"], "Dev");
    assert_eq!(category["type"], "link");
    let category_id = category["id"].as_str().unwrap().to_string();
    assert!(!category_id.is_empty());

    let link = post_json!(
        app,
        "/links",
        json!({
            "name": "Repo",
            "url": "https://x.test",
            "description": "d",
            "category": category_id
        })
    );
    assert_eq!(link["category"], category_id.as_str());

    let links = get_json!(app, "/links");
    assert_eq!(links.as_array().unwrap().len(), 1);
    assert_eq!(links[0]["category"]["id"], category_id.as_str());
    assert_eq!(links[0]["category"]["name"], "Dev");

    let req = test::TestRequest::delete()
        .uri(&format!("/categories?id={category_id}"))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted, json!({"success": true}));

    assert!(get_json!(app, "/links").as_array().unwrap().is_empty());
    assert!(get_json!(app, "/categories").as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn put_todos_updates_only_given_fields() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    let todo = post_json!(
        app,
        "/todos",
        json!({
            "title": "Review Project Proposal",
            "description": "Review and provide feedback",
            "status": "pending",
            "priority": "high",
            "dueDate": "2024-03-30T00:00:00Z"
        })
    );
    let todo_id = todo["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri("/todos")
        .set_json(json!({"_id": todo_id, "status": "completed"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["status"], "completed");

    let todos = get_json!(app, "/todos");
    assert_eq!(todos[0]["status"], "completed");
    assert_eq!(todos[0]["title"], "Review Project Proposal");
    assert_eq!(todos[0]["priority"], "high");
    assert_eq!(todos[0]["dueDate"], "2024-03-30T00:00:00Z");
}

#[actix_web::test]
async fn department_rename_and_cascade_over_http() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    let department = post_json!(app, "/departments", json!({"name": "HR"}));
    let department_id = department["id"].as_str().unwrap().to_string();

    let pc = post_json!(
        app,
        "/pcs",
        json!({"name": "HR-001", "department": department_id})
    );
    assert_eq!(pc["name"], "HR-001");

    let pcs = get_json!(app, "/pcs");
    assert_eq!(pcs[0]["department"]["name"], "HR");

    let req = test::TestRequest::put()
        .uri("/departments")
        .set_json(json!({"_id": department_id, "name": "People Ops"}))
        .to_request();
    let renamed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(renamed["name"], "People Ops");
    let pcs = get_json!(app, "/pcs");
    assert_eq!(pcs[0]["department"]["name"], "People Ops");

    let req = test::TestRequest::delete()
        .uri(&format!("/departments?id={department_id}"))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted, json!({"success": true}));

    assert!(get_json!(app, "/pcs").as_array().unwrap().is_empty());
    assert!(get_json!(app, "/departments").as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn category_type_filter_is_applied() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    post_json!(app, "/categories", json!({"name": "Dev", "type": "link"}));
    post_json!(app, "/categories", json!({"name": "Office", "type": "pc"}));

    let links_only = get_json!(app, "/categories?type=link");
    assert_eq!(links_only.as_array().unwrap().len(), 1);
    assert_eq!(links_only[0]["name"], "Dev");

    let all = get_json!(app, "/categories");
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn unknown_path_answers_invalid_endpoint() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Invalid endpoint"}));
}

#[actix_web::test]
async fn delete_without_id_is_rejected() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::delete().uri("/categories").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("id query parameter is required"));
}

#[actix_web::test]
async fn malformed_query_and_body_answer_json_error() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    // A query string that fails extraction (bad UUID) must produce the
    // same JSON error shape as handler-level validation failures
    let req = test::TestRequest::delete()
        .uri("/categories?id=not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["error"].as_str().unwrap().is_empty());

    // Same contract for an unparseable JSON body
    let req = test::TestRequest::post()
        .uri("/todos")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn update_of_absent_todo_is_404() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::put()
        .uri("/todos")
        .set_json(json!({
            "_id": uuid::Uuid::now_v7(),
            "status": "completed"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn storage_selector_routes_to_json_backend() {
    let (_dir, state) = test_state().await;
    let app = test_app!(state);

    post_json!(
        app,
        "/todos?storage=json",
        json!({
            "title": "json only",
            "dueDate": "2024-03-30T00:00:00Z"
        })
    );

    let json_todos = get_json!(app, "/todos?storage=json");
    assert_eq!(json_todos.as_array().unwrap().len(), 1);
    assert_eq!(json_todos[0]["title"], "json only");

    // The default backend was untouched
    let sqlite_todos = get_json!(app, "/todos");
    assert!(sqlite_todos.as_array().unwrap().is_empty());
}
