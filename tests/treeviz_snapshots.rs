//! Snapshot tests over the treeviz rendering of parse results.

use org_syntax::org::ast::treeviz;
use org_syntax::parse_objects;

fn render(text: &str) -> String {
    treeviz(&parse_objects(text))
}

#[test]
fn nested_emphasis_tree() {
    insta::assert_snapshot!(render("This is *bold and /italic/* text"), @r###"
    plain-text [0..8] "This is "
    bold [8..27]
      plain-text [9..18] "bold and "
      italic [18..26]
        plain-text [19..25] "italic"
    plain-text [27..32] " text"
    "###);
}

#[test]
fn link_with_description_tree() {
    insta::assert_snapshot!(render("[[https://example.com][Visit *this* site]]"), @r###"
    link [0..42] "https://example.com" {type=https path=//example.com}
      plain-text [23..29] "Visit "
      bold [29..35]
        plain-text [30..34] "this"
      plain-text [35..40] " site"
    "###);
}

#[test]
fn timestamp_entity_and_script_tree() {
    insta::assert_snapshot!(render("Due <2024-01-15 Mon +1w> \\alpha{} and x^{2}"), @r###"
    plain-text [0..4] "Due "
    timestamp [4..24] "<2024-01-15 Mon +1w>" {repeater=+1w}
    plain-text [24..25] " "
    entity [25..33] "alpha" {utf8=α}
    plain-text [33..39] " and x"
    superscript [39..43] {braces=true}
      plain-text [41..42] "2"
    "###);
}

#[test]
fn footnote_macro_and_source_tree() {
    insta::assert_snapshot!(render("Text[fn:1] {{{kbd(C-c)}}} src_sh{ls}"), @r###"
    plain-text [0..4] "Text"
    footnote-reference [4..10] "1"
    plain-text [10..11] " "
    macro [11..25] "kbd" {args=C-c}
    plain-text [25..26] " "
    inline-src-block [26..36] "ls" {lang=sh}
    "###);
}
