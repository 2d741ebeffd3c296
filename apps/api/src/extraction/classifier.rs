//! Turns a raw extraction reply into an `ExtractionOutcome`.
//!
//! The model decides completeness through its `error` flag; this module only
//! adapts structure and never second-guesses the extracted fields.

use super::mapper::map_fields;
use super::verdict::{parse_model_json, read_verdict, Verdict};
use crate::models::job::ExtractedJob;

/// Shown to callers for invalid content and for replies that could not be read.
pub const NOT_A_JOB_DESCRIPTION: &str = "This doesn't seem to be a job description.";

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Extracted(ExtractedJob),
    Rejected { reason: String },
    Unparseable,
}

pub fn classify_extraction(raw: &str) -> ExtractionOutcome {
    let Some(value) = parse_model_json(raw) else {
        return ExtractionOutcome::Unparseable;
    };

    match read_verdict(value) {
        Verdict::Accepted { data: Some(data) } => ExtractionOutcome::Extracted(map_fields(&data)),
        Verdict::Rejected { message } => ExtractionOutcome::Rejected {
            reason: message.unwrap_or_else(|| NOT_A_JOB_DESCRIPTION.to_string()),
        },
        Verdict::Accepted { data: None } | Verdict::Ambiguous => ExtractionOutcome::Unparseable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_reply_is_extracted() {
        let raw = r#"{"error":false,"data":{"jobTitle":"Senior React Developer","experience":"5 years","position":"Senior","skills":["React","Node"],"location":"Remote","jobType":"Remote"}}"#;
        let ExtractionOutcome::Extracted(job) = classify_extraction(raw) else {
            panic!("expected extracted outcome");
        };
        assert_eq!(job.job_title.as_deref(), Some("Senior React Developer"));
        assert_eq!(job.skills, vec!["React", "Node"]);
    }

    #[test]
    fn test_incomplete_reply_is_rejected_with_message() {
        let raw = r#"{"error": true, "message": "Please provide: experience"}"#;
        assert_eq!(
            classify_extraction(raw),
            ExtractionOutcome::Rejected {
                reason: "Please provide: experience".into()
            }
        );
    }

    #[test]
    fn test_unescaped_newline_in_message_is_repaired() {
        let raw = "{\"error\": true, \"message\": \"Please provide:\n- experience\"}";
        assert_eq!(
            classify_extraction(raw),
            ExtractionOutcome::Rejected {
                reason: "Please provide:\n- experience".into()
            }
        );
    }

    #[test]
    fn test_fenced_reply_with_prose_is_extracted() {
        let raw = "Sure!\n```json\n{\n  \"error\": false,\n  \"data\": {\n    \"jobTitle\": \"Backend Engineer\",\n    \"experience\": \"3+ years\",\n    \"position\": null,\n    \"skills\": null,\n    \"location\": null,\n    \"jobType\": \"Hybrid\"\n  }\n}\n```";
        let ExtractionOutcome::Extracted(job) = classify_extraction(raw) else {
            panic!("expected extracted outcome");
        };
        assert_eq!(job.experience.as_deref(), Some("3+ years"));
        assert_eq!(job.position, None);
        assert!(job.skills.is_empty());
    }

    #[test]
    fn test_reply_without_braces_is_unparseable() {
        let outcome = classify_extraction("This doesn't seem to be a job description.");
        assert_eq!(outcome, ExtractionOutcome::Unparseable);
    }

    #[test]
    fn test_success_without_data_is_unparseable() {
        assert_eq!(
            classify_extraction(r#"{"error": false}"#),
            ExtractionOutcome::Unparseable
        );
        assert_eq!(
            classify_extraction(r#"{"error": false, "data": ["React"]}"#),
            ExtractionOutcome::Unparseable
        );
    }

    #[test]
    fn test_missing_discriminant_is_unparseable() {
        assert_eq!(
            classify_extraction(r#"{"message": "hello"}"#),
            ExtractionOutcome::Unparseable
        );
    }

    #[test]
    fn test_rejection_without_message_uses_standard_text() {
        assert_eq!(
            classify_extraction(r#"{"error": true}"#),
            ExtractionOutcome::Rejected {
                reason: NOT_A_JOB_DESCRIPTION.into()
            }
        );
    }

    #[test]
    fn test_malformed_json_is_unparseable() {
        assert_eq!(
            classify_extraction(r#"{error: true, message: "x"}"#),
            ExtractionOutcome::Unparseable
        );
    }
}
