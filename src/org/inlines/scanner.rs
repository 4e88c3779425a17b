//! The object scanner.
//!
//! A [`Scanner`] walks one span of characters left to right. At every position it offers the
//! current character to the construct parsers registered for it (see the priority table in
//! the [inlines](super) module docs) and commits to the first match; characters nothing claims
//! accumulate into plain-text runs. Container payloads are scanned by a child scanner over the
//! payload slice, one level deeper.
//!
//! Ranges are produced relative to the root text handed to the parser. The public entry point
//! shifts them by the caller's base offset afterwards.
//!
//! Forward searches ("next valid `*` closer", "next `]]`") go through [`NextCache`], and balanced
//! bracket pairs come from tables built once per span, so a span full of unterminated openers
//! is still scanned in close to linear time.

use once_cell::unsync::OnceCell;
use std::cell::Cell;

use super::boundary;
use super::{emphasis, footnotes, latex, leaves, links, scripts, timestamps};
use crate::org::ast::{ObjectKind, OrgObject, Range};

/// A construct recognized at some position: the object and the position just past it.
pub(super) struct Matched {
    pub object: OrgObject,
    pub end: usize,
}

impl Matched {
    pub fn new(object: OrgObject, end: usize) -> Self {
        Self { object, end }
    }
}

/// Literal sequences the scanner searches forward for.
#[derive(Debug, Clone, Copy)]
pub(super) enum Seq {
    LinkEnd,
    MacroEnd,
    Dollar,
    DisplayDollar,
    ParenMathEnd,
    BracketMathEnd,
    SnippetEnd,
    TargetEnd,
    RadioEnd,
    Newline,
}

impl Seq {
    const COUNT: usize = 10;

    fn pattern(self) -> &'static [char] {
        match self {
            Seq::LinkEnd => &[']', ']'],
            Seq::MacroEnd => &['}', '}', '}'],
            Seq::Dollar => &['$'],
            Seq::DisplayDollar => &['$', '$'],
            Seq::ParenMathEnd => &['\\', ')'],
            Seq::BracketMathEnd => &['\\', ']'],
            Seq::SnippetEnd => &['@', '@'],
            Seq::TargetEnd => &['>', '>'],
            Seq::RadioEnd => &['>', '>', '>'],
            Seq::Newline => &['\n'],
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Memoizes the last "nearest match at or after `from`" answer for a fixed predicate.
///
/// The predicate only depends on the text, so an answer `r` for `from = a` also answers any
/// `from = b` with `a <= b <= r`, and a miss answers every `b >= a`.
#[derive(Default)]
pub(super) struct NextCache {
    last: Cell<Option<(usize, Option<usize>)>>,
}

impl NextCache {
    pub fn find(&self, from: usize, len: usize, matches: impl Fn(usize) -> bool) -> Option<usize> {
        if let Some((queried, answer)) = self.last.get() {
            if from >= queried {
                match answer {
                    None => return None,
                    Some(hit) if hit >= from => return Some(hit),
                    Some(_) => {}
                }
            }
        }
        let answer = (from..len).find(|&pos| matches(pos));
        self.last.set(Some((from, answer)));
        answer
    }
}

pub(super) struct Scanner<'a> {
    pub chars: &'a [char],
    /// Offset of `chars[0]` in the root text.
    origin: usize,
    depth: usize,
    max_depth: usize,
    closers: [NextCache; 6],
    sequences: [NextCache; Seq::COUNT],
    word_stops: NextCache,
    brackets: OnceCell<Vec<Option<usize>>>,
    braces: OnceCell<Vec<Option<usize>>>,
}

impl<'a> Scanner<'a> {
    pub fn new(chars: &'a [char], origin: usize, depth: usize, max_depth: usize) -> Self {
        Self {
            chars,
            origin,
            depth,
            max_depth,
            closers: Default::default(),
            sequences: Default::default(),
            word_stops: NextCache::default(),
            brackets: OnceCell::new(),
            braces: OnceCell::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    pub fn prev(&self, pos: usize) -> Option<char> {
        pos.checked_sub(1).and_then(|p| self.at(p))
    }

    /// True when `pattern` occurs at `pos`.
    pub fn starts_with(&self, pos: usize, pattern: &str) -> bool {
        let mut idx = pos;
        for expected in pattern.chars() {
            if self.at(idx) != Some(expected) {
                return false;
            }
            idx += 1;
        }
        true
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Root-relative range for local positions.
    pub fn range(&self, start: usize, end: usize) -> Range {
        Range::new(self.origin + start, self.origin + end)
    }

    pub fn leaf(&self, kind: ObjectKind, start: usize, end: usize) -> Matched {
        Matched::new(OrgObject::new(kind, self.range(start, end)), end)
    }

    /// Container object whose children are the objects of `content_start..content_end`.
    pub fn container(
        &self,
        kind: ObjectKind,
        start: usize,
        end: usize,
        content_start: usize,
        content_end: usize,
    ) -> Matched {
        let children = self.parse_nested(content_start, content_end);
        Matched::new(
            OrgObject::with_children(kind, self.range(start, end), children),
            end,
        )
    }

    /// Parse a payload one nesting level down.
    pub fn parse_nested(&self, start: usize, end: usize) -> Vec<OrgObject> {
        if start >= end {
            return Vec::new();
        }
        let depth = self.depth + 1;
        if depth > self.max_depth {
            tracing::debug!(
                depth,
                max_depth = self.max_depth,
                start = self.origin + start,
                "nesting limit reached, keeping payload as plain text"
            );
            return vec![OrgObject::plain(
                self.slice(start, end),
                self.range(start, end),
            )];
        }
        Scanner::new(
            &self.chars[start..end],
            self.origin + start,
            depth,
            self.max_depth,
        )
        .parse()
    }

    /// Nearest valid closer for `marker` at or after `from`.
    pub fn next_closer(&self, marker: char, from: usize) -> Option<usize> {
        let idx = boundary::marker_index(marker)?;
        let chars = self.chars;
        self.closers[idx].find(from, chars.len(), |pos| {
            chars[pos] == marker && boundary::is_valid_closer(chars, pos)
        })
    }

    /// Nearest occurrence of `seq` starting at or after `from`.
    pub fn next_seq(&self, seq: Seq, from: usize) -> Option<usize> {
        let pattern = seq.pattern();
        let chars = self.chars;
        self.sequences[seq.index()].find(from, chars.len(), |pos| {
            chars[pos..].starts_with(pattern)
        })
    }

    /// Nearest whitespace, `[` or `{` at or after `from`, or the end of the span.
    pub fn next_word_stop(&self, from: usize) -> usize {
        let chars = self.chars;
        self.word_stops
            .find(from, chars.len(), |pos| {
                chars[pos].is_whitespace() || matches!(chars[pos], '[' | '{')
            })
            .unwrap_or(chars.len())
    }

    /// Matching `]` for the `[` at `pos`.
    pub fn matching_bracket(&self, pos: usize) -> Option<usize> {
        self.brackets
            .get_or_init(|| pair_table(self.chars, '[', ']'))
            .get(pos)
            .copied()
            .flatten()
    }

    /// Matching `}` for the `{` at `pos`.
    pub fn matching_brace(&self, pos: usize) -> Option<usize> {
        self.braces
            .get_or_init(|| pair_table(self.chars, '{', '}'))
            .get(pos)
            .copied()
            .flatten()
    }

    pub fn parse(&self) -> Vec<OrgObject> {
        let mut objects = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;
        while pos < self.len() {
            match self.object_at(pos) {
                Some(matched) if matched.end > pos => {
                    if plain_start < pos {
                        objects.push(OrgObject::plain(
                            self.slice(plain_start, pos),
                            self.range(plain_start, pos),
                        ));
                    }
                    objects.push(matched.object);
                    pos = matched.end;
                    plain_start = pos;
                }
                _ => pos += 1,
            }
        }
        if plain_start < self.len() {
            objects.push(OrgObject::plain(
                self.slice(plain_start, self.len()),
                self.range(plain_start, self.len()),
            ));
        }
        objects
    }

    fn object_at(&self, pos: usize) -> Option<Matched> {
        let ch = self.chars[pos];
        match ch {
            '[' => footnotes::parse_footnote(self, pos)
                .or_else(|| timestamps::parse_timestamp(self, pos))
                .or_else(|| leaves::parse_statistics_cookie(self, pos))
                .or_else(|| links::parse_bracket_link(self, pos)),
            '<' => leaves::parse_radio_target(self, pos)
                .or_else(|| leaves::parse_target(self, pos))
                .or_else(|| timestamps::parse_timestamp(self, pos))
                .or_else(|| links::parse_angle_link(self, pos)),
            '\\' => latex::parse_line_break(self, pos)
                .or_else(|| latex::parse_delimited_latex(self, pos))
                .or_else(|| latex::parse_entity(self, pos)),
            '$' => latex::parse_dollar_latex(self, pos),
            '{' => leaves::parse_macro(self, pos),
            '@' => leaves::parse_export_snippet(self, pos),
            '^' => scripts::parse_script(self, pos),
            '_' => scripts::parse_script(self, pos).or_else(|| emphasis::parse_emphasis(self, pos)),
            _ if boundary::is_marker(ch) => emphasis::parse_emphasis(self, pos),
            's' => leaves::parse_inline_src(self, pos).or_else(|| links::parse_plain_link(self, pos)),
            _ if ch.is_ascii_alphabetic() => links::parse_plain_link(self, pos),
            _ => None,
        }
    }
}

/// Stack-matched pairs: `table[open] = Some(close)`.
fn pair_table(chars: &[char], open: char, close: char) -> Vec<Option<usize>> {
    let mut table = vec![None; chars.len()];
    let mut stack = Vec::new();
    for (pos, &ch) in chars.iter().enumerate() {
        if ch == open {
            stack.push(pos);
        } else if ch == close {
            if let Some(start) = stack.pop() {
                table[start] = Some(pos);
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn next_cache_reuses_answers() {
        let cache = NextCache::default();
        let text = chars("a..b..b");
        assert_eq!(cache.find(0, text.len(), |p| text[p] == 'b'), Some(3));
        assert_eq!(cache.find(2, text.len(), |p| text[p] == 'b'), Some(3));
        assert_eq!(cache.find(4, text.len(), |p| text[p] == 'b'), Some(6));
        assert_eq!(cache.find(1, text.len(), |p| text[p] == 'b'), Some(3));
    }

    #[test]
    fn next_cache_remembers_misses() {
        let cache = NextCache::default();
        let text = chars("aaaa");
        assert_eq!(cache.find(0, text.len(), |p| text[p] == 'b'), None);
        assert_eq!(cache.find(2, text.len(), |_| true), None);
    }

    #[test]
    fn word_stop_falls_back_to_span_end() {
        let text = chars("src_a.src_b{x} tail");
        let scanner = Scanner::new(&text, 0, 0, 8);
        assert_eq!(scanner.next_word_stop(4), 11);
        assert_eq!(scanner.next_word_stop(8), 11);
        assert_eq!(scanner.next_word_stop(15), text.len());
    }

    #[test]
    fn pair_table_matches_nested_brackets() {
        let text = chars("[a [b] c] ]");
        let table = pair_table(&text, '[', ']');
        assert_eq!(table[0], Some(8));
        assert_eq!(table[3], Some(5));
        assert_eq!(table[10], None);
    }

    #[test]
    fn unmatched_open_has_no_pair() {
        let text = chars("[[a]");
        let table = pair_table(&text, '[', ']');
        assert_eq!(table[0], None);
        assert_eq!(table[1], Some(3));
    }

    #[test]
    fn child_ranges_are_root_relative() {
        let text = chars("xx*a*");
        let scanner = Scanner::new(&text, 10, 0, 8);
        let nested = scanner.parse_nested(3, 4);
        assert_eq!(nested[0].range, Range::new(13, 14));
    }

    #[test]
    fn depth_limit_keeps_plain_payload() {
        let text = chars("*a*");
        let scanner = Scanner::new(&text, 0, 1, 1);
        let nested = scanner.parse_nested(0, 3);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].as_plain(), Some("*a*"));
    }
}
