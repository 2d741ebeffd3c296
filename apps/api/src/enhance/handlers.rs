//! Axum route handlers for the Enhancement API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::enhance::classifier::{EnhancementOutcome, RequiredField};
use crate::enhance::enhancer::enhance_description;
use crate::errors::AppError;
use crate::models::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EnhanceData {
    Enhanced { message: String },
    MissingFields { missing_fields: Vec<RequiredField> },
}

/// POST /api/v1/ai/enhance-job-description
///
/// Returns the corrected description, or `success: false` with either the
/// missing-fields prompt (plus the fields it names) or the rejection message.
pub async fn handle_enhance(
    State(state): State<AppState>,
    request: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<EnhanceData>>, AppError> {
    let Json(request) = request?;
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let outcome = enhance_description(state.llm.as_ref(), &request.description).await?;

    Ok(Json(match outcome {
        EnhancementOutcome::Enhanced(message) => {
            ApiResponse::ok(None, EnhanceData::Enhanced { message })
        }
        EnhancementOutcome::MissingFields { prompt, fields } => ApiResponse {
            success: false,
            message: Some(prompt),
            data: Some(EnhanceData::MissingFields {
                missing_fields: fields,
            }),
        },
        EnhancementOutcome::Rejected { reason } => ApiResponse::rejected(reason),
    }))
}
