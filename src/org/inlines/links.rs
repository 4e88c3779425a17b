//! Links in their three forms.
//!
//!     [[target]] / [[target][description]]    bracket links, description parsed recursively
//!     <https://orgmode.org>                   angle links
//!     https://orgmode.org                     plain links, at a word boundary
//!
//! The target is classified by its `scheme:` prefix. A target without a scheme is an internal
//! link (heading, target or custom id), except for paths that look like files (`./notes.org`),
//! which are file links. File links split an optional `::search` suffix off the path.

use once_cell::sync::Lazy;
use regex::Regex;

use super::boundary::is_word;
use super::scanner::{Matched, Scanner, Seq};
use crate::org::ast::{Link, LinkFormat, LinkType, ObjectKind};

static SCHEME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^([A-Za-z][A-Za-z0-9+.-]*):(.*)$").expect("scheme regex is valid")
});

/// Schemes accepted inside `<...>`.
const ANGLE_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "mailto", "file", "doi", "news", "id", "cite", "shell", "elisp",
    "info", "help",
];

/// Schemes recognized in running text.
const PLAIN_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto", "file", "doi", "news"];

/// Characters ending a plain link.
fn ends_plain_link(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | ')' | '<' | '>' | '[' | ']')
}

pub(super) fn parse_bracket_link(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "[[") {
        return None;
    }
    let target_start = pos + 2;
    let mut target_end = target_start;
    loop {
        match scanner.at(target_end)? {
            ']' => break,
            '[' => return None,
            _ => target_end += 1,
        }
    }
    if target_end == target_start {
        return None;
    }
    let raw = scanner.slice(target_start, target_end);
    let link = classify(&raw, LinkFormat::Bracket);

    match scanner.at(target_end + 1)? {
        ']' => Some(scanner.leaf(ObjectKind::Link(link), pos, target_end + 2)),
        '[' => {
            let description_start = target_end + 2;
            let close = scanner.next_seq(Seq::LinkEnd, description_start)?;
            Some(scanner.container(
                ObjectKind::Link(link),
                pos,
                close + 2,
                description_start,
                close,
            ))
        }
        _ => None,
    }
}

pub(super) fn parse_angle_link(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    let start = pos + 1;
    let mut close = start;
    loop {
        match scanner.at(close)? {
            '>' => break,
            '<' | '\n' => return None,
            _ => close += 1,
        }
    }
    let raw = scanner.slice(start, close);
    let (scheme, path) = raw.split_once(':')?;
    if path.is_empty() || !ANGLE_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
        return None;
    }
    let link = classify(&raw, LinkFormat::Angle);
    Some(scanner.leaf(ObjectKind::Link(link), pos, close + 1))
}

pub(super) fn parse_plain_link(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if scanner.prev(pos).is_some_and(is_word) {
        return None;
    }
    let mut colon = pos;
    while scanner.at(colon).is_some_and(|ch| ch.is_ascii_alphabetic()) {
        colon += 1;
    }
    if scanner.at(colon) != Some(':') {
        return None;
    }
    let scheme = scanner.slice(pos, colon).to_ascii_lowercase();
    if !PLAIN_SCHEMES.contains(&scheme.as_str()) {
        return None;
    }

    let mut end = colon + 1;
    while scanner.at(end).is_some_and(|ch| !ends_plain_link(ch)) {
        end += 1;
    }
    while end > colon + 1
        && scanner
            .prev(end)
            .is_some_and(|ch| matches!(ch, '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"'))
    {
        end -= 1;
    }
    if end == colon + 1 {
        return None;
    }
    let link = classify(&scanner.slice(pos, end), LinkFormat::Plain);
    Some(scanner.leaf(ObjectKind::Link(link), pos, end))
}

/// Build the link properties for a raw target.
fn classify(raw: &str, format: LinkFormat) -> Link {
    let (link_type, path) = match SCHEME_RE.captures(raw) {
        Some(caps) => {
            let scheme = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(2).map_or("", |m| m.as_str());
            (LinkType::from_scheme(scheme), rest.to_string())
        }
        None if looks_like_file(raw) => (LinkType::File, raw.to_string()),
        None => (LinkType::Internal, raw.to_string()),
    };

    let (path, search_option) = match link_type {
        LinkType::File => match path.split_once("::") {
            Some((file, search)) => (file.to_string(), Some(search.to_string())),
            None => (path, None),
        },
        _ => (path, None),
    };

    Link {
        link_type,
        path,
        raw_link: raw.to_string(),
        search_option,
        format,
    }
}

fn looks_like_file(raw: &str) -> bool {
    ["/", "./", "../", "~/"]
        .iter()
        .any(|prefix| raw.starts_with(prefix))
}
