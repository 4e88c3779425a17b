//! PRE/BORDER/POST classification for emphasis markers.
//!
//! A marker opens an emphasis span when the character before it is in the PRE class (or the
//! marker starts the span) and the character after it is not whitespace. It closes one when
//! the character before it is not whitespace and the character after it is in the POST class
//! (or the marker ends the span). These predicates only look at the text, so the nearest
//! valid closer from a given position never changes while a span is scanned.

/// Emphasis markers in the order the scanner indexes them.
pub const MARKERS: [char; 6] = ['*', '/', '_', '+', '=', '~'];

pub fn is_marker(ch: char) -> bool {
    MARKERS.contains(&ch)
}

pub fn marker_index(ch: char) -> Option<usize> {
    MARKERS.iter().position(|marker| *marker == ch)
}

pub fn is_pre(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '-' | '(' | '{' | '\'' | '"')
}

pub fn is_post(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '-'
            | '.'
            | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '\''
            | '"'
            | ')'
            | '}'
            | '|'
    )
}

/// Characters that make sub/superscripts and plain links word-bound.
pub fn is_word(ch: char) -> bool {
    ch.is_alphanumeric()
}

pub fn is_valid_opener(chars: &[char], pos: usize) -> bool {
    let pre_ok = pos == 0 || chars.get(pos - 1).is_some_and(|&ch| is_pre(ch));
    let border_ok = chars.get(pos + 1).is_some_and(|ch| !ch.is_whitespace());
    pre_ok && border_ok
}

pub fn is_valid_closer(chars: &[char], pos: usize) -> bool {
    if pos == 0 || pos >= chars.len() {
        return false;
    }
    let border_ok = !chars[pos - 1].is_whitespace();
    let post_ok = chars.get(pos + 1).map_or(true, |&ch| is_post(ch));
    border_ok && post_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[rstest]
    #[case("*bold*", 0, true)]
    #[case("a *b*", 2, true)]
    #[case("(*b*)", 1, true)]
    #[case("\"*b*\"", 1, true)]
    #[case("word*b*", 4, false)]
    #[case("* b*", 0, false)]
    #[case("x *", 2, false)]
    fn opener_rules(#[case] text: &str, #[case] pos: usize, #[case] expected: bool) {
        assert_eq!(is_valid_opener(&chars(text), pos), expected);
    }

    #[rstest]
    #[case("*bold*", 5, true)]
    #[case("*b*.", 2, true)]
    #[case("*b*)", 2, true)]
    #[case("*b*|", 2, true)]
    #[case("*b*word", 2, false)]
    #[case("*b *", 3, false)]
    #[case("*", 0, false)]
    fn closer_rules(#[case] text: &str, #[case] pos: usize, #[case] expected: bool) {
        assert_eq!(is_valid_closer(&chars(text), pos), expected);
    }

    #[test]
    fn marker_lookup() {
        assert_eq!(marker_index('='), Some(4));
        assert!(is_marker('~'));
        assert!(!is_marker('#'));
    }
}
