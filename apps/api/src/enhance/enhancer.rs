use tracing::info;

use crate::enhance::classifier::{classify_enhancement, EnhancementOutcome};
use crate::enhance::prompts::ENHANCE_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::CompletionProvider;

/// Asks the model to polish `description` and classifies its reply.
/// Provider failures are returned as errors and never retried.
pub async fn enhance_description(
    llm: &dyn CompletionProvider,
    description: &str,
) -> Result<EnhancementOutcome, AppError> {
    let reply = llm.complete(ENHANCE_SYSTEM, description).await?;
    let outcome = classify_enhancement(&reply);

    match &outcome {
        EnhancementOutcome::Enhanced(text) => {
            info!(provider = llm.name(), "Enhanced description ({} chars)", text.len())
        }
        EnhancementOutcome::MissingFields { fields, .. } => {
            info!("Enhancement needs more fields: {fields:?}")
        }
        EnhancementOutcome::Rejected { reason } => info!("Enhancement rejected: {reason}"),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::classifier::RequiredField;
    use crate::llm_client::testing::ScriptedProvider;
    use crate::llm_client::LlmError;

    #[tokio::test]
    async fn test_enhanced_text_passes_through() {
        let llm = ScriptedProvider::replying(
            "Hi, we need a React Developer with 5 years of experience. Remote.",
        );

        let outcome = enhance_description(
            &llm,
            "Hy, we need a react Developer witht a 5 years of experince. remote",
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            EnhancementOutcome::Enhanced(
                "Hi, we need a React Developer with 5 years of experience. Remote.".into()
            )
        );
        assert_eq!(llm.calls.lock().unwrap()[0].0, ENHANCE_SYSTEM);
    }

    #[tokio::test]
    async fn test_missing_fields_are_reported() {
        let llm = ScriptedProvider::replying("Please provide: experience, job type");

        let outcome = enhance_description(&llm, "Need a designer").await.unwrap();

        let EnhancementOutcome::MissingFields { fields, .. } = outcome else {
            panic!("expected missing fields");
        };
        assert_eq!(fields, vec![RequiredField::Experience, RequiredField::JobType]);
    }

    #[tokio::test]
    async fn test_provider_failure_is_fatal() {
        let llm = ScriptedProvider::failing(LlmError::EmptyContent);

        let err = enhance_description(&llm, "Need a designer").await.unwrap_err();

        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
        assert_eq!(llm.call_count(), 1);
    }
}
