//! Affiliated keywords
//!
//!     `#+NAME:`, `#+CAPTION:`, `#+ATTR_<BACKEND>:` and friends are written directly above the
//!     table, block or figure they describe:
//!
//!         #+NAME: fig-results
//!         #+CAPTION[Results]: Measured results per run
//!         #+ATTR_LATEX: :width 0.8\textwidth :float t
//!         [[file:results.png]]
//!
//!     [`parse_affiliated_keywords`] starts at the line above an element and walks upward,
//!     folding each keyword line into one [`AffiliatedKeywords`] record. The walk stops at a
//!     blank line, at a line that is not a keyword, or at a keyword that is not affiliated
//!     (`#+TITLE:` belongs to the document, not to the next element).
//!
//!     Because the walk runs bottom-up, lines closer to the element are seen first:
//!
//!     - attribute keys already present win over keys further up
//!     - names and captions are overwritten, so the line farthest from the element wins
//!     - headers are prepended, which restores document order
//!
//!     [`serialize_affiliated_keywords`] renders a record back into keyword lines, and
//!     [`attach_affiliated`] runs the resolver for every element of a document.

mod attach;
mod attributes;
mod caption;
mod serialize;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use attach::{attach_affiliated, AttachedKeywords};
pub use attributes::parse_colon_attributes;
pub use caption::{parse_caption, Caption, ParsedCaption};
pub use serialize::serialize_affiliated_keywords;

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#\+([A-Za-z0-9_-]+)(?:\[([^\]]*)\])?:[ \t]*(.*)$").expect("keyword regex is valid")
});

/// Metadata attached to one element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AffiliatedKeywords {
    pub name: Option<String>,
    pub caption: Option<Caption>,
    /// Backend (lowercase) to attribute map.
    pub attr: IndexMap<String, IndexMap<String, String>>,
    pub header: Vec<String>,
    pub plot: Option<String>,
    pub results: Option<String>,
}

impl AffiliatedKeywords {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.caption.is_none()
            && self.attr.is_empty()
            && self.header.is_empty()
            && self.plot.is_none()
            && self.results.is_none()
    }
}

/// Result of resolving the keyword block above an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffiliatedResolution {
    /// `None` when no keyword line was consumed.
    pub affiliated: Option<AffiliatedKeywords>,
    pub consumed_lines: usize,
    /// Start line of the element once its keyword block is included.
    pub adjusted_start_line: usize,
}

/// A `#+KEY[optional]: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeywordLine<'a> {
    pub key: &'a str,
    pub optional: Option<&'a str>,
    pub value: &'a str,
}

impl<'a> KeywordLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = KEYWORD_RE.captures(line.trim())?;
        Some(Self {
            key: caps.get(1)?.as_str(),
            optional: caps.get(2).map(|m| m.as_str()),
            value: caps.get(3).map_or("", |m| m.as_str().trim()),
        })
    }
}

/// Affiliated keyword kinds, after alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Affiliated {
    Name,
    Caption,
    Attr(String),
    Header,
    Plot,
    Results,
}

impl Affiliated {
    fn from_key(key: &str, optional: Option<&str>) -> Option<Self> {
        let key = key.to_ascii_uppercase();
        let kind = match key.as_str() {
            "NAME" | "LABEL" | "SRCNAME" | "TBLNAME" | "RESNAME" | "DATA" | "SOURCE" => {
                Affiliated::Name
            }
            "CAPTION" => Affiliated::Caption,
            "HEADER" | "HEADERS" => Affiliated::Header,
            "PLOT" => Affiliated::Plot,
            "RESULTS" | "RESULT" => Affiliated::Results,
            _ => match key.strip_prefix("ATTR_") {
                Some(backend) if !backend.is_empty() => {
                    Affiliated::Attr(backend.to_ascii_lowercase())
                }
                _ => return None,
            },
        };
        // Only captions and results take a bracketed optional value.
        if optional.is_some() && !matches!(kind, Affiliated::Caption | Affiliated::Results) {
            return None;
        }
        Some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    StartOfInput,
    BlankLine,
    NotKeyword,
    ForeignKeyword,
}

/// Resolve the keyword block directly above `element_start_line` (0-indexed).
pub fn parse_affiliated_keywords<S: AsRef<str>>(
    lines: &[S],
    element_start_line: usize,
) -> AffiliatedResolution {
    let start = element_start_line.min(lines.len());
    let mut record = AffiliatedKeywords::default();
    let mut consumed = 0;
    let mut stop = StopReason::StartOfInput;

    while consumed < start {
        let line = lines[start - consumed - 1].as_ref();
        if line.trim().is_empty() {
            stop = StopReason::BlankLine;
            break;
        }
        let Some(keyword) = KeywordLine::parse(line) else {
            stop = StopReason::NotKeyword;
            break;
        };
        let Some(kind) = Affiliated::from_key(keyword.key, keyword.optional) else {
            stop = StopReason::ForeignKeyword;
            break;
        };
        apply(&mut record, kind, &keyword);
        consumed += 1;
    }

    tracing::trace!(
        element_start_line,
        consumed,
        stop = ?stop,
        "resolved affiliated keywords"
    );
    AffiliatedResolution {
        affiliated: (consumed > 0).then_some(record),
        consumed_lines: consumed,
        adjusted_start_line: start - consumed,
    }
}

fn apply(record: &mut AffiliatedKeywords, kind: Affiliated, keyword: &KeywordLine<'_>) {
    let value = keyword.value;
    let short_caption = matches!(kind, Affiliated::Caption) && keyword.optional.is_some();
    if value.is_empty() && !short_caption {
        return;
    }
    match kind {
        Affiliated::Name => record.name = Some(value.to_string()),
        Affiliated::Caption => {
            let parsed = parse_caption(value);
            let caption = match keyword.optional {
                Some(short) => Caption::WithShort(
                    short.trim().to_string(),
                    parsed.caption.long().to_string(),
                ),
                None => parsed.caption,
            };
            if !caption.long().is_empty() || caption.short().is_some() {
                record.caption = Some(caption);
            }
            if record.name.is_none() {
                record.name = parsed.inline_label;
            }
        }
        Affiliated::Attr(backend) => {
            let attributes = parse_colon_attributes(value);
            if attributes.is_empty() {
                return;
            }
            let merged = record.attr.entry(backend).or_default();
            for (key, value) in attributes {
                merged.entry(key).or_insert(value);
            }
        }
        Affiliated::Header => record.header.insert(0, value.to_string()),
        Affiliated::Plot => record.plot = Some(value.to_string()),
        Affiliated::Results => record.results = Some(value.to_string()),
    }
}
