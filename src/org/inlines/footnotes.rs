//! Footnote references.
//!
//!     [fn:label]            standard reference, no children
//!     [fn::content]         anonymous inline footnote
//!     [fn:label:content]    named inline footnote
//!
//! Inline content runs to the bracket matching the opening `[`, so nested brackets (links,
//! cookies) inside a footnote are fine. The content is parsed recursively.

use super::scanner::{Matched, Scanner};
use crate::org::ast::{FootnoteReferenceType, ObjectKind};

fn is_label_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

pub(super) fn parse_footnote(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "[fn:") {
        return None;
    }
    let close = scanner.matching_bracket(pos)?;
    let label_start = pos + 4;
    let mut label_end = label_start;
    while label_end < close && is_label_char(scanner.chars[label_end]) {
        label_end += 1;
    }
    let label = (label_end > label_start).then(|| scanner.slice(label_start, label_end));

    if label_end == close {
        // [fn:label]
        let label = label?;
        return Some(scanner.leaf(
            ObjectKind::FootnoteReference {
                label: Some(label),
                reference_type: FootnoteReferenceType::Standard,
            },
            pos,
            close + 1,
        ));
    }

    if scanner.at(label_end) != Some(':') {
        return None;
    }
    let content_start = label_end + 1;
    if content_start >= close {
        return None;
    }
    Some(scanner.container(
        ObjectKind::FootnoteReference {
            label,
            reference_type: FootnoteReferenceType::Inline,
        },
        pos,
        close + 1,
        content_start,
        close,
    ))
}
