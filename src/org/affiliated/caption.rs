//! Caption values: `[Short]Long caption text label:fig-example`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)label:([A-Za-z0-9_:-]+)\s*$").expect("caption label regex is valid")
});

static SHORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\[([^\]]*)\](.*)$").expect("short caption regex is valid"));

/// A caption, optionally with the short form used in lists of figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Caption {
    Plain(String),
    /// `(short, long)`
    WithShort(String, String),
}

impl Caption {
    pub fn long(&self) -> &str {
        match self {
            Caption::Plain(text) => text,
            Caption::WithShort(_, long) => long,
        }
    }

    pub fn short(&self) -> Option<&str> {
        match self {
            Caption::Plain(_) => None,
            Caption::WithShort(short, _) => Some(short),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCaption {
    pub caption: Caption,
    /// Name given by a trailing `label:name`.
    pub inline_label: Option<String>,
}

pub fn parse_caption(text: &str) -> ParsedCaption {
    let mut rest = text.trim();
    let mut inline_label = None;
    if let Some(caps) = LABEL_RE.captures(rest) {
        if let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) {
            inline_label = Some(label.as_str().to_string());
            rest = rest[..whole.start()].trim_end();
        }
    }

    let caption = match SHORT_RE.captures(rest) {
        Some(caps) => {
            let short = caps.get(1).map_or("", |m| m.as_str()).trim();
            let long = caps.get(2).map_or("", |m| m.as_str()).trim();
            Caption::WithShort(short.to_string(), long.to_string())
        }
        None => Caption::Plain(rest.to_string()),
    };
    ParsedCaption {
        caption,
        inline_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_and_inline_label() {
        let parsed = parse_caption("[Short]Long caption text label:fig-example");
        assert_eq!(
            parsed.caption,
            Caption::WithShort("Short".into(), "Long caption text".into())
        );
        assert_eq!(parsed.inline_label.as_deref(), Some("fig-example"));
    }

    #[test]
    fn plain_caption() {
        let parsed = parse_caption("  A table of results ");
        assert_eq!(parsed.caption, Caption::Plain("A table of results".into()));
        assert_eq!(parsed.caption.short(), None);
        assert!(parsed.inline_label.is_none());
    }

    #[test]
    fn label_must_be_trailing() {
        let parsed = parse_caption("see label:x for details");
        assert!(parsed.inline_label.is_none());
        assert_eq!(parsed.caption.long(), "see label:x for details");
    }

    #[test]
    fn label_only() {
        let parsed = parse_caption("label:tbl:one");
        assert_eq!(parsed.inline_label.as_deref(), Some("tbl:one"));
        assert_eq!(parsed.caption, Caption::Plain(String::new()));
    }

    #[test]
    fn serializes_pair_as_array() {
        let json = serde_json::to_value(Caption::WithShort("S".into(), "L".into())).unwrap();
        assert_eq!(json, serde_json::json!(["S", "L"]));
    }
}
