pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhance::handlers as enhance;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/api/v1/jobs",
            post(jobs::handle_post_job).get(jobs::handle_list_jobs),
        )
        // AI assistance
        .route(
            "/api/v1/ai/enhance-job-description",
            post(enhance::handle_enhance),
        )
        .with_state(state)
}
