//! Backslash and dollar constructs: line breaks, LaTeX fragments and entities.
//!
//! LaTeX fragment values keep their delimiters verbatim. Entities resolve against the static
//! [entity table](crate::org::entities); an unknown name is not an entity and stays text.

use super::scanner::{Matched, Scanner, Seq};
use crate::org::ast::{EntityObject, LatexFragmentType, ObjectKind};
use crate::org::entities::get_entity;

/// `\\` with only blanks up to the end of the line.
pub(super) fn parse_line_break(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if !scanner.starts_with(pos, "\\\\") {
        return None;
    }
    let mut idx = pos + 2;
    while let Some(ch) = scanner.at(idx) {
        match ch {
            ' ' | '\t' => idx += 1,
            '\n' | '\r' => break,
            _ => return None,
        }
    }
    Some(scanner.leaf(ObjectKind::LineBreak, pos, pos + 2))
}

/// `\(...\)` and `\[...\]`.
pub(super) fn parse_delimited_latex(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    let (seq, fragment_type) = match scanner.at(pos + 1)? {
        '(' => (Seq::ParenMathEnd, LatexFragmentType::InlineMath),
        '[' => (Seq::BracketMathEnd, LatexFragmentType::DisplayMath),
        _ => return None,
    };
    let close = scanner.next_seq(seq, pos + 2)?;
    Some(fragment(scanner, fragment_type, pos, close + 2))
}

/// `$$...$$` and `$...$`.
pub(super) fn parse_dollar_latex(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    if scanner.starts_with(pos, "$$") {
        let close = scanner.next_seq(Seq::DisplayDollar, pos + 2)?;
        if close == pos + 2 {
            return None;
        }
        return Some(fragment(
            scanner,
            LatexFragmentType::DisplayMath,
            pos,
            close + 2,
        ));
    }

    if scanner.prev(pos) == Some('$') {
        return None;
    }
    let first = scanner.at(pos + 1)?;
    if matches!(first, ' ' | '\t' | '\r' | '\n' | ',' | ';' | '.' | '$') {
        return None;
    }
    let close = scanner.next_seq(Seq::Dollar, pos + 1)?;
    let before = scanner.prev(close)?;
    if matches!(before, ' ' | '\t' | '\n' | ',' | '.' | '$') {
        return None;
    }
    let after_ok = scanner.at(close + 1).map_or(true, |ch| {
        ch.is_whitespace() || matches!(ch, '-' | '.' | ',' | '?' | ';' | ':' | '\'' | '"' | ')')
    });
    if !after_ok {
        return None;
    }
    Some(fragment(
        scanner,
        LatexFragmentType::InlineMath,
        pos,
        close + 1,
    ))
}

fn fragment(
    scanner: &Scanner<'_>,
    fragment_type: LatexFragmentType,
    start: usize,
    end: usize,
) -> Matched {
    scanner.leaf(
        ObjectKind::LatexFragment {
            fragment_type,
            value: scanner.slice(start, end),
        },
        start,
        end,
    )
}

/// `\name` or `\name{}`.
///
/// The name is a run of ASCII letters, optionally followed by digits when the combined name
/// is in the table (`\frac12`, `\sup2`).
pub(super) fn parse_entity(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    let name_start = pos + 1;
    let mut alpha_end = name_start;
    while scanner.at(alpha_end).is_some_and(|ch| ch.is_ascii_alphabetic()) {
        alpha_end += 1;
    }
    if alpha_end == name_start {
        return None;
    }
    let mut digit_end = alpha_end;
    while scanner.at(digit_end).is_some_and(|ch| ch.is_ascii_digit()) {
        digit_end += 1;
    }

    let (entity, name_end) = (digit_end > alpha_end)
        .then(|| get_entity(&scanner.slice(name_start, digit_end)).map(|e| (e, digit_end)))
        .flatten()
        .or_else(|| get_entity(&scanner.slice(name_start, alpha_end)).map(|e| (e, alpha_end)))?;

    let uses_brackets = scanner.starts_with(name_end, "{}");
    let end = if uses_brackets { name_end + 2 } else { name_end };
    let object = EntityObject {
        name: entity.name.to_string(),
        latex: entity.latex.to_string(),
        latex_math: entity.latex_math,
        html: entity.html.to_string(),
        utf8: entity.utf8.to_string(),
        uses_brackets,
    };
    Some(scanner.leaf(ObjectKind::Entity(object), pos, end))
}

#[cfg(test)]
mod tests {
    use crate::org::ast::{LatexFragmentType, ObjectKind, ObjectType, Range};
    use crate::org::inlines::parse_objects;
    use rstest::rstest;

    fn latex(text: &str) -> Option<(LatexFragmentType, String)> {
        parse_objects(text).into_iter().find_map(|o| match o.kind {
            ObjectKind::LatexFragment {
                fragment_type,
                value,
            } => Some((fragment_type, value)),
            _ => None,
        })
    }

    #[rstest]
    #[case("mass $m$ here", LatexFragmentType::InlineMath, "$m$")]
    #[case("so $a + b$.", LatexFragmentType::InlineMath, "$a + b$")]
    #[case("$$\\sum_i x_i$$", LatexFragmentType::DisplayMath, "$$\\sum_i x_i$$")]
    #[case("\\(e^{i\\pi}\\)", LatexFragmentType::InlineMath, "\\(e^{i\\pi}\\)")]
    #[case("\\[x = 1\\]", LatexFragmentType::DisplayMath, "\\[x = 1\\]")]
    fn fragments_keep_delimiters(
        #[case] text: &str,
        #[case] fragment_type: LatexFragmentType,
        #[case] value: &str,
    ) {
        assert_eq!(latex(text), Some((fragment_type, value.to_string())));
    }

    #[rstest]
    #[case("costs $5 and $10")]
    #[case("$ x$")]
    #[case("$x $")]
    #[case("$x$y")]
    #[case("$$$$")]
    fn dollar_rules_reject(#[case] text: &str) {
        assert_eq!(latex(text), None, "{text}");
    }

    #[test]
    fn entity_with_brackets() {
        let objects = parse_objects("\\alpha{}beta");
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[0].range, Range::new(0, 8));
        match &objects[0].kind {
            ObjectKind::Entity(entity) => {
                assert_eq!(entity.name, "alpha");
                assert_eq!(entity.utf8, "α");
                assert!(entity.uses_brackets);
            }
            other => panic!("expected entity, got {other:?}"),
        }
    }

    #[test]
    fn entity_names_with_digits() {
        let objects = parse_objects("\\frac12 and \\alpha2");
        match &objects[0].kind {
            ObjectKind::Entity(entity) => assert_eq!(entity.utf8, "½"),
            other => panic!("expected entity, got {other:?}"),
        }
        let alpha = &objects[2];
        assert_eq!(alpha.object_type(), ObjectType::Entity);
        assert_eq!(alpha.range, Range::new(12, 18));
        assert_eq!(objects[3].as_plain(), Some("2"));
    }

    #[test]
    fn unknown_entity_is_plain() {
        let objects = parse_objects("\\notanentity here");
        assert_eq!(objects.len(), 1);
        assert!(objects[0].is_plain());
    }

    #[test]
    fn line_break_at_end_of_line() {
        let objects = parse_objects("first\\\\  \nsecond");
        let types: Vec<_> = objects.iter().map(|o| o.object_type()).collect();
        assert_eq!(
            types,
            vec![
                ObjectType::PlainText,
                ObjectType::LineBreak,
                ObjectType::PlainText
            ]
        );
        assert_eq!(objects[1].range, Range::new(5, 7));
        assert_eq!(objects[2].as_plain(), Some("  \nsecond"));
    }

    #[test]
    fn double_backslash_mid_line_is_not_a_break() {
        let objects = parse_objects("a\\\\b");
        assert!(objects.iter().all(|o| o.object_type() != ObjectType::LineBreak));
    }
}
