// tests/task_api.rs
// JSON task API and health check

mod test_helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use test_helpers::{body_json, body_text, create_task, create_test_app, get, send, send_json};

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["status"], "healthy");
    assert_eq!(data["database"], "connected");
}

#[tokio::test]
async fn test_health_check_reports_closed_database() {
    let state = test_helpers::create_test_state().await;
    state.pool.close().await;
    let app = task_manager::api::create_router(state);

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let data = body_json(response).await;
    assert_eq!(data["status"], "unhealthy");
    assert_eq!(data["database"], "disconnected");
}

#[tokio::test]
async fn test_get_tasks_empty() {
    let app = create_test_app().await;

    let response = get(&app, "/api/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_task() {
    let app = create_test_app().await;

    let response = send_json(
        &app,
        "POST",
        "/api/tasks",
        json!({ "title": "Test Task", "description": "Test Description" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = body_json(response).await;
    assert_eq!(data["title"], "Test Task");
    assert_eq!(data["description"], "Test Description");
    assert_eq!(data["completed"], false);
    assert!(data["id"].is_i64());
}

#[tokio::test]
async fn test_create_task_no_title() {
    let app = create_test_app().await;

    let response = send_json(&app, "POST", "/api/tasks", json!({ "description": "No title" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Title is required");
}

#[tokio::test]
async fn test_create_task_blank_title() {
    let app = create_test_app().await;

    let response = send_json(&app, "POST", "/api/tasks", json!({ "title": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Title is required");
}

#[tokio::test]
async fn test_create_task_malformed_json() {
    let app = create_test_app().await;

    let request = Request::post("/api/tasks")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let data = body_json(response).await;
    assert_eq!(data["error_code"], "BAD_REQUEST");
    assert!(data["error"].is_string());
}

#[tokio::test]
async fn test_get_task() {
    let app = create_test_app().await;
    let task_id = create_task(&app, "Fetch me").await;

    let response = get(&app, &format!("/api/tasks/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Fetch me");

    let response = get(&app, "/api/tasks/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Task not found");
}

#[tokio::test]
async fn test_invalid_task_id() {
    let app = create_test_app().await;

    let response = get(&app, "/api/tasks/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_task() {
    let app = create_test_app().await;
    let task_id = create_task(&app, "Original Title").await;

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/tasks/{task_id}"),
        json!({ "title": "Updated Title", "completed": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["title"], "Updated Title");
    assert_eq!(data["completed"], true);
}

#[tokio::test]
async fn test_update_keeps_absent_fields() {
    let app = create_test_app().await;
    let response = send_json(
        &app,
        "POST",
        "/api/tasks",
        json!({ "title": "Laundry", "description": "Whites only" }),
    )
    .await;
    let task_id = body_json(response).await["id"].as_i64().unwrap();

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/tasks/{task_id}"),
        json!({ "completed": true }),
    )
    .await;
    let data = body_json(response).await;
    assert_eq!(data["title"], "Laundry");
    assert_eq!(data["description"], "Whites only");
    assert_eq!(data["completed"], true);
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let app = create_test_app().await;
    let task_id = create_task(&app, "Keep").await;

    let response = send_json(&app, "PUT", &format!("/api/tasks/{task_id}"), json!({ "title": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_task() {
    let app = create_test_app().await;

    let response = send_json(&app, "PUT", "/api/tasks/42", json!({ "completed": true })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task() {
    let app = create_test_app().await;
    let task_id = create_task(&app, "To be deleted").await;

    let request = Request::delete(format!("/api/tasks/{task_id}"))
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());

    let response = get(&app, "/api/tasks").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);

    let request = Request::delete(format!("/api/tasks/{task_id}"))
        .body(Body::empty())
        .unwrap();
    assert_eq!(send(&app, request).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_preserves_creation_order() {
    let app = create_test_app().await;
    for title in ["one", "two", "three"] {
        create_task(&app, title).await;
    }

    let data = body_json(get(&app, "/api/tasks").await).await;
    let titles: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_apps_do_not_share_databases() {
    let first = create_test_app().await;
    let second = create_test_app().await;
    create_task(&first, "Only here").await;

    let data = body_json(get(&second, "/api/tasks").await).await;
    assert_eq!(data, json!([]));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app().await;

    let response = get(&app, "/api/nothing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error_code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_on_closed_database_is_internal_error() {
    let state = test_helpers::create_test_state().await;
    state.pool.close().await;
    let app = task_manager::api::create_router(state);

    let response = get(&app, "/api/tasks").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let data = body_json(response).await;
    assert_eq!(data["error"], "Failed to load tasks");
    assert_eq!(data["error_code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_update_with_blank_description_clears_it() {
    let app = create_test_app().await;
    let response = send_json(
        &app,
        "POST",
        "/api/tasks",
        json!({ "title": "Dentist", "description": "Tuesday" }),
    )
    .await;
    let task_id = body_json(response).await["id"].as_i64().unwrap();

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/tasks/{task_id}"),
        json!({ "description": "  " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    assert_eq!(data["title"], "Dentist");
    assert!(data["description"].is_null());
}
