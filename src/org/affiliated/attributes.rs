//! Colon attributes: `:width 0.8 :placement [H] :float t`.
//!
//! Every `:identifier` that starts the text or follows whitespace anchors a key. The value is
//! whatever lies between the anchor and the next one, trimmed, so values may contain spaces
//! and brackets.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s):([A-Za-z0-9_-]+)").expect("attribute key regex is valid"));

/// Parse the value of an `#+ATTR_BACKEND:` line. Keys without a value are dropped; for a
/// repeated key the first valued occurrence wins.
pub fn parse_colon_attributes(text: &str) -> IndexMap<String, String> {
    let mut attributes = IndexMap::new();
    let anchors: Vec<_> = KEY_RE.captures_iter(text).collect();
    for (idx, caps) in anchors.iter().enumerate() {
        let (Some(anchor), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value_end = anchors
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        let value = text[anchor.end()..value_end].trim();
        if value.is_empty() {
            continue;
        }
        attributes
            .entry(key.as_str().to_string())
            .or_insert_with(|| value.to_string());
    }
    attributes
}

/// Inverse of [`parse_colon_attributes`].
pub(super) fn serialize_colon_attributes(attributes: &IndexMap<String, String>) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(":{key} {value}"))
        .collect::<Vec<_>>()
        .join(" ")
}
