//! Small self-delimited constructs: statistics cookies, macros, inline source blocks, export
//! snippets and (radio) targets.
//!
//! Everything here is a leaf except the radio target, whose text is parsed again.

use super::boundary::is_word;
use super::scanner::{Matched, Scanner, Seq};
use crate::org::ast::ObjectKind;

/// `[n/m]`, `[n%]`, including the empty forms `[/]` and `[%]`.
pub(super) fn parse_statistics_cookie(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    let digits = |mut idx: usize| {
        while scanner.at(idx).is_some_and(|ch| ch.is_ascii_digit()) {
            idx += 1;
        }
        idx
    };
    let mut idx = digits(pos + 1);
    match scanner.at(idx)? {
        '%' => idx += 1,
        '/' => idx = digits(idx + 1),
        _ => return None,
    }
    if scanner.at(idx)? != ']' {
        return None;
    }
    let end = idx + 1;
    Some(scanner.leaf(
        ObjectKind::StatisticsCookie {
            value: scanner.slice(pos, end),
        },
        pos,
        end,
    ))
}

/// `{{{key}}}` or `{{{key(arg1, arg2)}}}`.
pub(super) fn parse_macro(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "{{{") {
        return None;
    }
    let key_start = pos + 3;
    if !scanner.at(key_start)?.is_ascii_alphabetic() {
        return None;
    }
    let mut key_end = key_start + 1;
    while scanner
        .at(key_end)
        .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
    {
        key_end += 1;
    }
    let close = scanner.next_seq(Seq::MacroEnd, key_end)?;

    let args = if close == key_end {
        Vec::new()
    } else {
        let wrapped = scanner.at(key_end) == Some('(') && scanner.prev(close) == Some(')');
        if !wrapped || close < key_end + 2 {
            return None;
        }
        split_macro_args(&scanner.chars[key_end + 1..close - 1])
    };

    let end = close + 3;
    Some(scanner.leaf(
        ObjectKind::Macro {
            key: scanner.slice(key_start, key_end),
            args,
        },
        pos,
        end,
    ))
}

/// Splits on unescaped commas; `\,` is a literal comma.
fn split_macro_args(chars: &[char]) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut idx = 0;
    while idx < chars.len() {
        match (chars[idx], chars.get(idx + 1)) {
            ('\\', Some(',')) => {
                current.push(',');
                idx += 2;
                continue;
            }
            (',', _) => args.push(std::mem::take(&mut current).trim().to_string()),
            (ch, _) => current.push(ch),
        }
        idx += 1;
    }
    args.push(current.trim().to_string());
    if args.len() == 1 && args[0].is_empty() {
        args.clear();
    }
    args
}

/// `src_lang{body}` or `src_lang[params]{body}`, on a single line.
pub(super) fn parse_inline_src(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "src_") || scanner.prev(pos).is_some_and(is_word) {
        return None;
    }
    let lang_start = pos + 4;
    let lang_end = scanner.next_word_stop(lang_start);
    if lang_end == lang_start {
        return None;
    }

    let mut idx = lang_end;
    let parameters = if scanner.at(idx) == Some('[') {
        let close = scanner.matching_bracket(idx)?;
        let params = scanner.slice(idx + 1, close);
        idx = close + 1;
        Some(params)
    } else {
        None
    };
    if scanner.at(idx) != Some('{') {
        return None;
    }
    let body_close = scanner.matching_brace(idx)?;
    if scanner
        .next_seq(Seq::Newline, lang_end)
        .is_some_and(|newline| newline < body_close)
    {
        return None;
    }

    let end = body_close + 1;
    Some(scanner.leaf(
        ObjectKind::InlineSrcBlock {
            language: scanner.slice(lang_start, lang_end),
            parameters: parameters.filter(|p| !p.trim().is_empty()),
            value: scanner.slice(idx + 1, body_close),
        },
        pos,
        end,
    ))
}

/// `@@backend:value@@`
pub(super) fn parse_export_snippet(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "@@") {
        return None;
    }
    let backend_start = pos + 2;
    let mut colon = backend_start;
    while scanner
        .at(colon)
        .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '-')
    {
        colon += 1;
    }
    if colon == backend_start || scanner.at(colon) != Some(':') {
        return None;
    }
    let close = scanner.next_seq(Seq::SnippetEnd, colon + 1)?;
    if scanner
        .next_seq(Seq::Newline, colon + 1)
        .is_some_and(|newline| newline < close)
    {
        return None;
    }
    Some(scanner.leaf(
        ObjectKind::ExportSnippet {
            backend: scanner.slice(backend_start, colon),
            value: scanner.slice(colon + 1, close),
        },
        pos,
        close + 2,
    ))
}

/// `<<target>>`
pub(super) fn parse_target(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "<<") {
        return None;
    }
    let close = scanner.next_seq(Seq::TargetEnd, pos + 2)?;
    if !valid_target_text(&scanner.chars[pos + 2..close]) {
        return None;
    }
    Some(scanner.leaf(
        ObjectKind::Target {
            value: scanner.slice(pos + 2, close),
        },
        pos,
        close + 2,
    ))
}

/// `<<<radio target>>>`
pub(super) fn parse_radio_target(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "<<<") {
        return None;
    }
    let close = scanner.next_seq(Seq::RadioEnd, pos + 3)?;
    if !valid_target_text(&scanner.chars[pos + 3..close]) {
        return None;
    }
    Some(scanner.container(ObjectKind::RadioTarget, pos, close + 3, pos + 3, close))
}

fn valid_target_text(text: &[char]) -> bool {
    match (text.first(), text.last()) {
        (Some(first), Some(last)) => {
            !first.is_whitespace()
                && !last.is_whitespace()
                && !text.iter().any(|&ch| matches!(ch, '<' | '>' | '\n'))
        }
        _ => false,
    }
}
