//! Classifies replies of the wording-enhancement feature.
//!
//! A reply is either the corrected description as plain prose, a short
//! "Please provide: ..." prompt, or a rejection (the fixed sentence or a JSON
//! envelope). A reply counts as an envelope only when it parses to an object
//! with a boolean `success`/`error` field, so prose that happens to contain
//! braces stays prose.

use serde::Serialize;

use crate::extraction::verdict::{parse_model_json, read_verdict, Verdict};
use crate::extraction::NOT_A_JOB_DESCRIPTION;

const MISSING_FIELDS_PREFIX: &str = "please provide:";

/// The three fields a description needs before it can be enhanced, in the
/// order they are asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Position,
    Experience,
    JobType,
}

impl RequiredField {
    fn from_label(label: &str) -> Option<Self> {
        let normalized = label
            .trim()
            .trim_start_matches(['-', '•', '*'])
            .trim()
            .trim_end_matches(['.', '?', '!'])
            .to_ascii_lowercase();
        match normalized.as_str() {
            "position" | "role" | "position/role" | "job title" => Some(RequiredField::Position),
            "experience" => Some(RequiredField::Experience),
            "job type" | "jobtype" | "job_type" => Some(RequiredField::JobType),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnhancementOutcome {
    Enhanced(String),
    MissingFields {
        prompt: String,
        fields: Vec<RequiredField>,
    },
    Rejected {
        reason: String,
    },
}

pub fn classify_enhancement(raw: &str) -> EnhancementOutcome {
    if let Some(outcome) = classify_envelope(raw) {
        return outcome;
    }

    let text = raw.trim();
    if text.is_empty() {
        return rejected(None);
    }
    if let Some(outcome) = classify_message(text) {
        return outcome;
    }
    EnhancementOutcome::Enhanced(text.to_string())
}

fn classify_envelope(raw: &str) -> Option<EnhancementOutcome> {
    match read_verdict(parse_model_json(raw)?) {
        Verdict::Rejected { message } => Some(
            message
                .as_deref()
                .and_then(classify_message)
                .unwrap_or_else(|| rejected(message)),
        ),
        Verdict::Accepted { data } => {
            let message = data?.get("message")?.as_str()?.trim().to_string();
            (!message.is_empty()).then_some(EnhancementOutcome::Enhanced(message))
        }
        Verdict::Ambiguous => None,
    }
}

/// Recognises the missing-fields prompt and the fixed rejection sentence.
fn classify_message(text: &str) -> Option<EnhancementOutcome> {
    let text = text.trim().trim_matches('"').trim();

    if text.eq_ignore_ascii_case(NOT_A_JOB_DESCRIPTION) {
        return Some(rejected(None));
    }

    let head = text.get(..MISSING_FIELDS_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(MISSING_FIELDS_PREFIX) {
        return None;
    }

    let mut fields: Vec<RequiredField> = text[MISSING_FIELDS_PREFIX.len()..]
        .split([',', '\n', '&'])
        .flat_map(|part| part.split(" and "))
        .filter_map(RequiredField::from_label)
        .collect();
    fields.sort();
    fields.dedup();

    Some(EnhancementOutcome::MissingFields {
        prompt: text.to_string(),
        fields,
    })
}

fn rejected(reason: Option<String>) -> EnhancementOutcome {
    EnhancementOutcome::Rejected {
        reason: reason.unwrap_or_else(|| NOT_A_JOB_DESCRIPTION.to_string()),
    }
}
