//! Axum route handlers for the Jobs API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::pipeline::{post_job, PostJobOutcome};
use crate::models::job::JobRecord;
use crate::models::ApiResponse;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct PostJobRequest {
    pub company_id: Uuid,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub company_id: Uuid,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/jobs
///
/// Extracts structured fields from a free-text description and stores the job.
/// Content the model rejects comes back as `success: false` with its message.
pub async fn handle_post_job(
    State(state): State<AppState>,
    request: Result<Json<PostJobRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<JobRecord>>, AppError> {
    let Json(request) = request?;
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let outcome = post_job(
        state.llm.as_ref(),
        state.jobs.as_ref(),
        request.company_id,
        &request.description,
    )
    .await?;

    Ok(Json(match outcome {
        PostJobOutcome::Posted(record) => {
            ApiResponse::ok(Some("job posted successfully".to_string()), record)
        }
        PostJobOutcome::Rejected { reason } => ApiResponse::rejected(reason),
    }))
}

/// GET /api/v1/jobs?company_id=...&limit=...&offset=...
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    params: Result<Query<ListJobsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<JobRecord>>>, AppError> {
    let Query(params) = params?;
    let limit = params
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0).max(0);

    let jobs = state
        .jobs
        .list_by_company(params.company_id, limit, offset)
        .await?;

    Ok(Json(ApiResponse::ok(None, jobs)))
}
