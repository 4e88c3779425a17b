//! Symmetric emphasis markers: `*bold*`, `/italic/`, `_underline_`, `+strike-through+`,
//! `=verbatim=` and `~code~`.
//!
//! Verbatim and code keep their payload as a literal string; the other four are containers
//! whose payload is parsed again, so `*bold /italic/*` nests.

use super::boundary;
use super::scanner::{Matched, Scanner};
use crate::org::ast::ObjectKind;

pub(super) fn parse_emphasis(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    let marker = scanner.at(pos)?;
    if !boundary::is_valid_opener(scanner.chars, pos) {
        return None;
    }
    // Payload is at least one character long.
    let close = scanner.next_closer(marker, pos + 2)?;
    let end = close + 1;
    let matched = match marker {
        '=' => scanner.leaf(
            ObjectKind::Verbatim {
                value: scanner.slice(pos + 1, close),
            },
            pos,
            end,
        ),
        '~' => scanner.leaf(
            ObjectKind::Code {
                value: scanner.slice(pos + 1, close),
            },
            pos,
            end,
        ),
        '*' => scanner.container(ObjectKind::Bold, pos, end, pos + 1, close),
        '/' => scanner.container(ObjectKind::Italic, pos, end, pos + 1, close),
        '_' => scanner.container(ObjectKind::Underline, pos, end, pos + 1, close),
        '+' => scanner.container(ObjectKind::StrikeThrough, pos, end, pos + 1, close),
        _ => return None,
    };
    Some(matched)
}
