//! Strips markdown noise from model output and isolates the JSON object in it.

const FENCE: &str = "```";

/// Removes every code-fence delimiter and the whitespace that follows it.
/// A language tag (```` ```json ````) is removed only after a fence that
/// opens a line; elsewhere the text after the fence is kept.
pub fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        if at_line_start(&out) {
            rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || "_+-".contains(c));
        }
        rest = rest.trim_start();
    }
    out.push_str(rest);
    out
}

fn at_line_start(before: &str) -> bool {
    let line = before.trim_end_matches([' ', '\t']);
    line.is_empty() || line.ends_with('\n')
}

/// Returns the span from the first `{` to the brace that closes it.
///
/// Braces inside string literals do not count towards depth. When the braces
/// never balance (truncated or corrupted output) this falls back to the widest
/// span, first `{` to last `}`, and lets the JSON parser decide.
pub fn isolate_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Fence stripping followed by object isolation. `None` means the output holds
/// no `{...}` span at all.
pub fn sanitize(raw: &str) -> Option<String> {
    let cleaned = strip_code_fences(raw);
    isolate_json_object(cleaned.trim()).map(str::to_string)
}
