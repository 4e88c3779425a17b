//! Rendering an [`AffiliatedKeywords`] record back into keyword lines.

use super::attributes::serialize_colon_attributes;
use super::{AffiliatedKeywords, Caption};

/// Keyword lines for `keywords`, joined with `\n` and without a trailing newline.
///
/// The output is not byte-identical to hand-written blocks, but resolving it again yields an
/// equal record.
pub fn serialize_affiliated_keywords(keywords: &AffiliatedKeywords) -> String {
    let mut lines = Vec::new();
    if let Some(name) = &keywords.name {
        lines.push(format!("#+NAME: {name}"));
    }
    match &keywords.caption {
        Some(Caption::Plain(text)) => lines.push(format!("#+CAPTION: {text}")),
        Some(Caption::WithShort(short, long)) => {
            lines.push(format!("#+CAPTION[{short}]: {long}"))
        }
        None => {}
    }
    for header in &keywords.header {
        lines.push(format!("#+HEADER: {header}"));
    }
    if let Some(plot) = &keywords.plot {
        lines.push(format!("#+PLOT: {plot}"));
    }
    if let Some(results) = &keywords.results {
        lines.push(format!("#+RESULTS: {results}"));
    }
    for (backend, attributes) in &keywords.attr {
        if attributes.is_empty() {
            continue;
        }
        lines.push(format!(
            "#+ATTR_{}: {}",
            backend.to_ascii_uppercase(),
            serialize_colon_attributes(attributes)
        ));
    }
    lines.join("\n")
}
