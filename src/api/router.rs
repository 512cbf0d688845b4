// src/api/router.rs
// HTTP router composition

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::{health, pages, tasks};
use crate::state::AppState;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // JSON API, nested under /api
    let api_router = Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        );

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health::health))
        // Plain HTML form targets
        .route("/tasks", post(pages::create_task_form))
        .route("/tasks/{id}/toggle", post(pages::toggle_task_form))
        .route("/tasks/{id}/delete", post(pages::delete_task_form))
        .nest("/api", api_router)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
