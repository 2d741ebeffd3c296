//! Normalises the two rejection envelope families the prompts produce.
//!
//! Extraction replies use `{"error": bool, "message": ..., "data": {...}}`;
//! enhancement replies use `{"success": bool, "data": {"message": ...}}`.
//! Both collapse into one `Verdict` so feature code never branches on wire shape.

use serde_json::{Map, Value};

use super::repair::escape_control_chars;
use super::sanitize::sanitize;

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The discriminant says success. `data` is the payload object, if any.
    Accepted { data: Option<Map<String, Value>> },
    /// The discriminant says rejection. `message` is `None` when the model
    /// gave no usable text.
    Rejected { message: Option<String> },
    /// No recognisable discriminant.
    Ambiguous,
}

/// Sanitize, repair, then strictly parse. `None` on any failure.
pub fn parse_model_json(raw: &str) -> Option<Value> {
    let candidate = sanitize(raw)?;
    let repaired = escape_control_chars(&candidate);
    match serde_json::from_str(&repaired) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Model JSON failed to parse after repair: {e}");
            None
        }
    }
}

pub fn read_verdict(value: Value) -> Verdict {
    let Value::Object(mut envelope) = value else {
        return Verdict::Ambiguous;
    };

    let rejected = match (envelope.get("error"), envelope.get("success")) {
        (Some(Value::Bool(error)), _) => *error,
        (_, Some(Value::Bool(success))) => !*success,
        _ => return Verdict::Ambiguous,
    };

    let data = match envelope.remove("data") {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };

    if !rejected {
        return Verdict::Accepted { data };
    }

    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| data.as_ref()?.get("message")?.as_str())
        .filter(|m| !m.trim().is_empty())
        .map(String::from);

    Verdict::Rejected { message }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_error_envelope_rejection() {
        let verdict = read_verdict(json!({"error": true, "message": "Please provide: experience"}));
        assert_eq!(
            verdict,
            Verdict::Rejected {
                message: Some("Please provide: experience".into())
            }
        );
    }

    #[test]
    fn test_success_envelope_rejection_reads_nested_message() {
        let verdict = read_verdict(json!({
            "success": false,
            "data": {"message": "This doesn't seem to be a job description."}
        }));
        assert_eq!(
            verdict,
            Verdict::Rejected {
                message: Some("This doesn't seem to be a job description.".into())
            }
        );
    }

    #[test]
    fn test_blank_message_is_none() {
        let verdict = read_verdict(json!({"error": true, "message": "   "}));
        assert_eq!(verdict, Verdict::Rejected { message: None });
    }

    #[test]
    fn test_accepted_carries_data_object() {
        let verdict = read_verdict(json!({"error": false, "data": {"jobTitle": "Dev"}}));
        let Verdict::Accepted { data: Some(data) } = verdict else {
            panic!("expected accepted verdict with data");
        };
        assert_eq!(data["jobTitle"], "Dev");
    }

    #[test]
    fn test_non_boolean_discriminant_is_ambiguous() {
        assert_eq!(read_verdict(json!({"error": "false"})), Verdict::Ambiguous);
        assert_eq!(read_verdict(json!({"data": {}})), Verdict::Ambiguous);
        assert_eq!(read_verdict(json!(["error", true])), Verdict::Ambiguous);
    }

    #[test]
    fn test_parse_model_json_repairs_and_parses() {
        let raw = "```json\n{\"error\": true, \"message\": \"Please provide:\n- experience\"}\n```";
        let value = parse_model_json(raw).unwrap();
        assert_eq!(value["message"], "Please provide:\n- experience");
    }

    #[test]
    fn test_parse_model_json_rejects_trailing_comma() {
        assert!(parse_model_json(r#"{"error": true, "message": "x",}"#).is_none());
    }
}
