//! Integration tests for the task HTTP API.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use task_manager_lib::domain::Task;
use task_manager_lib::repository::{init_db, Repository, TaskRepository};
use task_manager_lib::{build_router, AppState};

fn test_router_with(strict_titles: bool) -> Router {
    let conn = init_db(Path::new(":memory:")).expect("init in-memory db");
    let repo: Arc<dyn Repository<Task>> = Arc::new(TaskRepository::new(conn));
    let state = AppState::new(repo).with_strict_titles(strict_titles);
    build_router(state, &["*".to_string()])
}

fn test_router() -> Router {
    test_router_with(false)
}

async fn request(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value), String> {
    let builder = Request::builder().method(method).uri(uri);

    let req = if let Some(payload) = body {
        let bytes =
            serde_json::to_vec(&payload).map_err(|err| format!("serialize request body: {err}"))?;
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .map_err(|err| format!("build request: {err}"))?
    } else {
        builder
            .body(Body::empty())
            .map_err(|err| format!("build request: {err}"))?
    };

    let response = router
        .clone()
        .oneshot(req)
        .await
        .map_err(|err| format!("route request: {err}"))?;
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .map_err(|err| format!("read response body: {err}"))?;

    let parsed = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|err| format!("parse response body: {err}"))?
    };
    Ok((status, parsed))
}

#[tokio::test]
async fn create_returns_task_with_defaults() -> Result<(), String> {
    let router = test_router();

    let (status, body) =
        request(&router, Method::POST, "/tasks", Some(json!({"title": "Buy milk"}))).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"task": {"id": 1, "title": "Buy milk", "description": "", "completed": false}})
    );
    Ok(())
}

#[tokio::test]
async fn create_echoes_submitted_fields_and_ignores_completed() -> Result<(), String> {
    let router = test_router();

    let (status, body) = request(
        &router,
        Method::POST,
        "/tasks",
        Some(json!({"title": "Call mom", "description": "Sunday", "completed": true})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["title"], "Call mom");
    assert_eq!(body["task"]["description"], "Sunday");
    assert_eq!(body["task"]["completed"], false);
    Ok(())
}

#[tokio::test]
async fn create_with_null_description_defaults_to_empty() -> Result<(), String> {
    let router = test_router();

    let (_, body) = request(
        &router,
        Method::POST,
        "/tasks",
        Some(json!({"title": "Water plants", "description": null})),
    )
    .await?;

    assert_eq!(body["task"]["description"], "");
    Ok(())
}

#[tokio::test]
async fn empty_title_is_stored_by_default() -> Result<(), String> {
    let router = test_router();

    let (status, body) = request(&router, Method::POST, "/tasks", Some(json!({}))).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["title"], "");
    Ok(())
}

#[tokio::test]
async fn strict_titles_rejects_empty_title() -> Result<(), String> {
    let router = test_router_with(true);

    let (status, body) =
        request(&router, Method::POST, "/tasks", Some(json!({"title": "   "}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Task title cannot be empty"}));

    let (status, _) = request(
        &router,
        Method::PUT,
        "/tasks/1",
        Some(json!({"title": "", "description": "", "completed": false})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, tasks) = request(&router, Method::GET, "/tasks", None).await?;
    assert_eq!(tasks, json!([]));
    Ok(())
}

#[tokio::test]
async fn update_then_list_reflects_new_values() -> Result<(), String> {
    let router = test_router();
    request(&router, Method::POST, "/tasks", Some(json!({"title": "Buy milk"}))).await?;

    let (status, body) = request(
        &router,
        Method::PUT,
        "/tasks/1",
        Some(json!({"title": "Buy milk", "description": "2%", "completed": true})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task updated"}));

    let (status, tasks) = request(&router, Method::GET, "/tasks", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        tasks,
        json!([{"id": 1, "title": "Buy milk", "description": "2%", "completed": true}])
    );
    Ok(())
}

#[tokio::test]
async fn update_is_full_replace() -> Result<(), String> {
    let router = test_router();
    request(
        &router,
        Method::POST,
        "/tasks",
        Some(json!({"title": "Pay rent", "description": "before the 5th"})),
    )
    .await?;

    request(&router, Method::PUT, "/tasks/1", Some(json!({"title": "Pay rent"}))).await?;

    let (_, tasks) = request(&router, Method::GET, "/tasks", None).await?;
    assert_eq!(
        tasks,
        json!([{"id": 1, "title": "Pay rent", "description": "", "completed": false}])
    );
    Ok(())
}

#[tokio::test]
async fn update_unknown_id_still_succeeds() -> Result<(), String> {
    let router = test_router();

    let (status, body) = request(
        &router,
        Method::PUT,
        "/tasks/99",
        Some(json!({"title": "Ghost", "description": "", "completed": true})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task updated"}));
    let (_, tasks) = request(&router, Method::GET, "/tasks", None).await?;
    assert_eq!(tasks, json!([]));
    Ok(())
}

#[tokio::test]
async fn delete_removes_task_from_listing() -> Result<(), String> {
    let router = test_router();
    request(&router, Method::POST, "/tasks", Some(json!({"title": "Keep"}))).await?;
    request(&router, Method::POST, "/tasks", Some(json!({"title": "Drop"}))).await?;

    let (status, body) = request(&router, Method::DELETE, "/tasks/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted"}));

    let (_, tasks) = request(&router, Method::GET, "/tasks", None).await?;
    let ids: Vec<i64> = tasks
        .as_array()
        .ok_or("tasks should be an array")?
        .iter()
        .filter_map(|t| t["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1]);
    Ok(())
}

#[tokio::test]
async fn delete_unknown_id_reports_success() -> Result<(), String> {
    let router = test_router();

    let (status, body) = request(&router, Method::DELETE, "/tasks/1", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted"}));
    Ok(())
}

#[tokio::test]
async fn listing_is_idempotent() -> Result<(), String> {
    let router = test_router();
    for title in ["b", "a", "c"] {
        request(&router, Method::POST, "/tasks", Some(json!({"title": title}))).await?;
    }

    let (_, first) = request(&router, Method::GET, "/tasks", None).await?;
    let (_, second) = request(&router, Method::GET, "/tasks", None).await?;

    assert_eq!(first, second);
    assert_eq!(first.as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_rejected() -> Result<(), String> {
    let router = test_router();

    let (status, _) = request(&router, Method::DELETE, "/tasks/abc", None).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_route_returns_json_404() -> Result<(), String> {
    let router = test_router();

    let (status, body) = request(&router, Method::GET, "/projects", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found: /projects"}));
    Ok(())
}

#[tokio::test]
async fn cors_preflight_is_allowed() -> Result<(), String> {
    let router = test_router();

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/tasks/1")
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .map_err(|err| format!("build request: {err}"))?;
    let response = router
        .oneshot(req)
        .await
        .map_err(|err| format!("route request: {err}"))?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    Ok(())
}
