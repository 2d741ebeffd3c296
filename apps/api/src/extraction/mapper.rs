//! Maps the model's `data` object onto the fixed job schema.

use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::models::job::{ExtractedJob, JobStatus, NewJobRecord};

/// Copies the six known fields. Values that are missing, `null`, empty or not
/// strings become `None`; `skills` keeps only non-empty string entries and is
/// empty when absent. Nothing is trimmed, coerced or inferred.
pub fn map_fields(data: &Map<String, Value>) -> ExtractedJob {
    ExtractedJob {
        job_title: scalar(data, "jobTitle"),
        experience: scalar(data, "experience"),
        position: scalar(data, "position"),
        skills: string_list(data, "skills"),
        location: scalar(data, "location"),
        job_type: scalar(data, "jobType"),
    }
}

/// Builds the insert payload for an accepted extraction. The raw description
/// is kept verbatim for audit.
pub fn draft_record(
    company_id: Uuid,
    raw_description: &str,
    extracted: ExtractedJob,
) -> NewJobRecord {
    NewJobRecord {
        company_id,
        raw_description: raw_description.to_string(),
        extracted_data: extracted,
        status: JobStatus::default(),
        metadata: json!({}),
    }
}

fn scalar(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !is_blank_or_null(s))
        .map(String::from)
}

fn string_list(data: &Map<String, Value>, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !is_blank_or_null(s))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

// Models sometimes spell out a JSON null as a string.
fn is_blank_or_null(s: &str) -> bool {
    s.trim().is_empty() || s.trim().eq_ignore_ascii_case("null")
}
