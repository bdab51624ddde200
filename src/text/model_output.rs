//! Splitting of raw generative-model output.
//!
//! The report service asks the model for a JSON block of key facts followed
//! by the prose report. The two arrive concatenated in one string; this
//! module separates them without ever failing on malformed JSON.

use serde_json::Value;

/// Split model output into an optional JSON value and the remaining prose.
///
/// The JSON block is taken as the span from the first `{` to the last `}`.
/// If that span does not parse, the JSON half is `None` but the prose after
/// the closing brace is still returned. Input without braces is returned
/// whole (trimmed) as prose.
pub fn split_model_output(full: &str) -> (Option<Value>, String) {
    let (start, end) = match (full.find('{'), full.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return (None, full.trim().to_string()),
    };

    let parsed: Option<Value> = serde_json::from_str(&full[start..=end]).ok();
    if parsed.is_none() {
        log::debug!("model output contained an unparseable brace block, keeping prose only");
    }

    (parsed, full[end + 1..].trim().to_string())
}
