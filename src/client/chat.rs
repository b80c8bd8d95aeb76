//! Chat component helpers.
//!
//! Kick reasons arrive as a raw payload that is usually (but not always) a
//! JSON chat component: `{"text": "..."}`, possibly with the text pushed
//! down into `{"extra": [{"text": "..."}]}`. Servers also embed legacy
//! `§x` formatting codes inside the text itself.

use serde_json::Value;

/// Fallback used when no human-readable text can be recovered at all.
const UNKNOWN_REASON: &str = "unknown reason";

/// Remove legacy `§x` formatting codes from a chat string.
pub fn strip_format_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '§' {
            // The code is the section sign plus the one character after it.
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// Extract a plain-text kick reason from a raw payload.
///
/// Tries the component's `text` field first, then the first element of
/// `extra`. A payload that is not JSON is treated as already-plain text.
/// When nothing yields a non-empty string the result is "unknown reason".
pub fn kick_reason_text(raw: &str) -> String {
    let text = match serde_json::from_str::<Value>(raw) {
        Ok(component) => component_text(&component),
        Err(_) => Some(raw.to_string()),
    };

    match text {
        Some(t) if !t.trim().is_empty() => strip_format_codes(&t),
        _ => UNKNOWN_REASON.to_string(),
    }
}

fn component_text(component: &Value) -> Option<String> {
    if let Some(text) = component.get("text").and_then(Value::as_str) {
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    component
        .get("extra")
        .and_then(Value::as_array)
        .and_then(|extra| extra.first())
        .and_then(|first| first.get("text"))
        .and_then(Value::as_str)
        .map(|t| t.to_string())
}
