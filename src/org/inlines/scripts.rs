//! Subscripts (`x_2`, `x_{i+1}`) and superscripts (`e^x`, `e^{-i}`).
//!
//! A script only starts right after a word character. Braced content runs to the matching
//! `}`; otherwise the content is the run of word characters and `-` that follows.

use super::boundary::is_word;
use super::scanner::{Matched, Scanner};
use crate::org::ast::ObjectKind;

pub(super) fn parse_script(scanner: &Scanner<'_>, pos: usize) -> Option<Matched> {
    let marker = scanner.at(pos)?;
    if !scanner.prev(pos).is_some_and(is_word) {
        return None;
    }
    let kind = |uses_braces| match marker {
        '_' => Some(ObjectKind::Subscript { uses_braces }),
        '^' => Some(ObjectKind::Superscript { uses_braces }),
        _ => None,
    };

    if scanner.at(pos + 1) == Some('{') {
        let close = scanner.matching_brace(pos + 1)?;
        if close == pos + 2 {
            return None;
        }
        return Some(scanner.container(kind(true)?, pos, close + 1, pos + 2, close));
    }

    let mut end = pos + 1;
    while scanner
        .at(end)
        .is_some_and(|ch| is_word(ch) || ch == '-')
    {
        end += 1;
    }
    let content = &scanner.chars[pos + 1..end];
    if !content.iter().any(|&ch| is_word(ch)) {
        return None;
    }
    Some(scanner.container(kind(false)?, pos, end, pos + 1, end))
}

#[cfg(test)]
mod tests {
    use crate::org::ast::{ObjectKind, ObjectType, Range};
    use crate::org::inlines::parse_objects;

    #[test]
    fn subscript_after_word() {
        let objects = parse_objects("H_2 O");
        assert_eq!(objects.len(), 3);
        assert_eq!(
            objects[1].kind,
            ObjectKind::Subscript { uses_braces: false }
        );
        assert_eq!(objects[1].range, Range::new(1, 3));
        assert_eq!(objects[1].children[0].as_plain(), Some("2"));
    }

    #[test]
    fn braced_superscript_is_parsed_recursively() {
        let objects = parse_objects("e^{i *pi*}");
        assert_eq!(objects.len(), 2);
        let sup = &objects[1];
        assert_eq!(sup.kind, ObjectKind::Superscript { uses_braces: true });
        assert_eq!(sup.range, Range::new(1, 10));
        assert_eq!(sup.children[1].object_type(), ObjectType::Bold);
    }

    #[test]
    fn leading_underscore_is_not_a_script() {
        let objects = parse_objects("_ alone");
        assert_eq!(objects.len(), 1);
        assert!(objects[0].is_plain());
    }

    #[test]
    fn script_after_space_is_plain() {
        let objects = parse_objects("x ^2");
        assert_eq!(objects.len(), 1);
        assert!(objects[0].is_plain());
    }

    #[test]
    fn empty_braces_are_plain() {
        let objects = parse_objects("a_{}");
        assert_eq!(objects.len(), 1);
        assert!(objects[0].is_plain());
    }

    #[test]
    fn dashes_belong_to_the_run() {
        let objects = parse_objects("x^-1");
        assert_eq!(objects[1].children[0].as_plain(), Some("-1"));
    }
}
