//! Job posting pipeline: one completion call, classification, and at most one insert.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{
    classify_extraction, draft_record, ExtractionOutcome, NOT_A_JOB_DESCRIPTION,
};
use crate::jobs::prompts::JOB_EXTRACTION_SYSTEM;
use crate::jobs::repository::JobRepository;
use crate::llm_client::CompletionProvider;
use crate::models::job::JobRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum PostJobOutcome {
    Posted(JobRecord),
    Rejected { reason: String },
}

/// Extracts structured fields from `description` and stores the job.
///
/// Provider and storage failures are returned as errors. Content rejections,
/// including replies that cannot be parsed, come back as `Rejected` and
/// nothing is written.
pub async fn post_job(
    llm: &dyn CompletionProvider,
    repo: &dyn JobRepository,
    company_id: Uuid,
    description: &str,
) -> Result<PostJobOutcome, AppError> {
    let reply = llm.complete(JOB_EXTRACTION_SYSTEM, description).await?;

    let outcome = classify_extraction(&reply);
    let extracted = match outcome {
        ExtractionOutcome::Extracted(extracted) => extracted,
        ExtractionOutcome::Unparseable => {
            warn!(
                provider = llm.name(),
                "Could not read extraction reply, treating as rejection. Raw response: {reply}"
            );
            return Ok(PostJobOutcome::Rejected {
                reason: NOT_A_JOB_DESCRIPTION.to_string(),
            });
        }
        ExtractionOutcome::Rejected { reason } => {
            info!("Job description rejected for company {company_id}: {reason}");
            return Ok(PostJobOutcome::Rejected { reason });
        }
    };

    let record = repo
        .insert(draft_record(company_id, description, extracted))
        .await?;

    info!("Posted job {} for company {company_id}", record.id);
    Ok(PostJobOutcome::Posted(record))
}
