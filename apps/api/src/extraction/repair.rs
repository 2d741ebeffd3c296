//! Control-character repair for model-produced JSON.
//!
//! Models routinely put literal newlines and tabs inside string values. Strict
//! JSON forbids that, so one forward pass rewrites them as escape sequences.
//! Anything outside a string literal, and anything already escaped, is copied
//! through untouched.

pub fn escape_control_chars(json: &str) -> String {
    let mut out = String::with_capacity(json.len() + 16);
    let mut in_string = false;
    let mut escape_next = false;

    for c in json.chars() {
        if escape_next {
            out.push(c);
            escape_next = false;
            continue;
        }

        match c {
            '\\' => {
                out.push(c);
                escape_next = true;
            }
            '"' => {
                in_string = !in_string;
                out.push(c);
            }
            '\n' if in_string => out.push_str("\\n"),
            '\r' if in_string => out.push_str("\\r"),
            '\t' if in_string => out.push_str("\\t"),
            '\u{0C}' if in_string => out.push_str("\\f"),
            '\u{08}' if in_string => out.push_str("\\b"),
            _ => out.push(c),
        }
    }

    out
}
