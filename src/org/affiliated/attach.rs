//! Document-wide keyword attachment.
//!
//! Every non-blank line that is not itself a `#+KEY:` line may start an element. For each such
//! line preceded by an affiliated block, the block is resolved and reported.

use serde::Serialize;

use super::{parse_affiliated_keywords, AffiliatedResolution, KeywordLine};

/// The resolved keyword block of the element starting at `element_line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachedKeywords {
    pub element_line: usize,
    pub resolution: AffiliatedResolution,
}

pub fn attach_affiliated<S: AsRef<str>>(lines: &[S]) -> Vec<AttachedKeywords> {
    let mut attached = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() || KeywordLine::parse(line).is_some() {
            continue;
        }
        let resolution = parse_affiliated_keywords(lines, idx);
        if resolution.affiliated.is_some() {
            attached.push(AttachedKeywords {
                element_line: idx,
                resolution,
            });
        }
    }
    attached
}
