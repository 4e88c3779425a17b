//! Affiliated keyword resolution, serialization and the parse/serialize round trip.

use indexmap::IndexMap;
use org_syntax::{
    attach_affiliated, parse_affiliated_keywords, parse_caption, parse_colon_attributes,
    serialize_affiliated_keywords, AffiliatedKeywords, Caption,
};
use proptest::prelude::*;

fn resolve_block(block: &str) -> Option<AffiliatedKeywords> {
    let mut lines: Vec<&str> = block.lines().collect();
    lines.push("| element |");
    let start = lines.len() - 1;
    parse_affiliated_keywords(&lines, start).affiliated
}

#[test]
fn colon_attributes_example() {
    let attributes = parse_colon_attributes(":width 0.8 :float t");
    let expected: IndexMap<String, String> = [("width", "0.8"), ("float", "t")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(attributes, expected);
}

#[test]
fn caption_example() {
    let parsed = parse_caption("[Short]Long caption text label:fig-example");
    assert_eq!(
        parsed.caption,
        Caption::WithShort("Short".into(), "Long caption text".into())
    );
    assert_eq!(parsed.inline_label.as_deref(), Some("fig-example"));
}

#[test]
fn resolution_reports_consumed_lines() {
    let lines = [
        "Paragraph.",
        "#+NAME: tbl",
        "#+ATTR_HTML: :border 2 :rules all",
        "| a |",
    ];
    let resolution = parse_affiliated_keywords(&lines, 3);
    assert_eq!(resolution.consumed_lines, 2);
    assert_eq!(resolution.adjusted_start_line, 1);
    let record = resolution.affiliated.expect("keywords");
    assert_eq!(record.attr["html"]["rules"], "all");
}

#[test]
fn owned_lines_are_accepted() {
    let lines: Vec<String> = vec!["#+PLOT: ind:1".into(), "| a |".into()];
    let record = parse_affiliated_keywords(&lines, 1)
        .affiliated
        .expect("keywords");
    assert_eq!(record.plot.as_deref(), Some("ind:1"));
}

#[test]
fn short_only_caption_round_trips() {
    let record = resolve_block("#+CAPTION: [Short]").expect("keywords");
    assert_eq!(
        record.caption,
        Some(Caption::WithShort("Short".into(), String::new()))
    );
    let text = serialize_affiliated_keywords(&record);
    assert_eq!(resolve_block(&text), Some(record));
}

#[test]
fn document_attachment() {
    let text = "#+NAME: one\n| a |\n\n#+CAPTION: Two\n#+ATTR_ORG: :width 10\n[[file:two.png]]\n";
    let lines: Vec<&str> = text.lines().collect();
    let attached = attach_affiliated(&lines);
    let elements: Vec<usize> = attached.iter().map(|a| a.element_line).collect();
    assert_eq!(elements, vec![1, 5]);
}

#[test]
fn serialized_block_snapshot() {
    let record = resolve_block(
        "#+CAPTION: Quarterly numbers label:tbl-q\n\
         #+ATTR_LATEX: :environment longtable :align l|r\n\
         #+HEADER: :exports both",
    )
    .expect("keywords");
    insta::assert_snapshot!(serialize_affiliated_keywords(&record), @r###"
    #+NAME: tbl-q
    #+CAPTION: Quarterly numbers
    #+HEADER: :exports both
    #+ATTR_LATEX: :environment longtable :align l|r
    "###);
}

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

fn caption() -> impl Strategy<Value = Caption> {
    prop_oneof![
        phrase().prop_map(Caption::Plain),
        (phrase(), phrase()).prop_map(|(short, long)| Caption::WithShort(short, long)),
        phrase().prop_map(|short| Caption::WithShort(short, String::new())),
    ]
}

fn attributes() -> impl Strategy<Value = IndexMap<String, IndexMap<String, String>>> {
    let backend = prop::collection::vec((word(), "[a-z0-9.%]{1,5}"), 1..4);
    prop::collection::vec((word(), backend), 0..3).prop_map(|backends| {
        let mut attr: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        for (backend, pairs) in backends {
            let merged = attr.entry(backend).or_default();
            for (key, value) in pairs {
                merged.entry(key).or_insert(value);
            }
        }
        attr
    })
}

fn keywords() -> impl Strategy<Value = AffiliatedKeywords> {
    (
        prop::option::of(word()),
        prop::option::of(caption()),
        attributes(),
        prop::collection::vec(phrase().prop_map(|p| format!(":{p}")), 0..3),
        prop::option::of(phrase()),
        prop::option::of(phrase()),
    )
        .prop_map(|(name, caption, attr, header, plot, results)| AffiliatedKeywords {
            name,
            caption,
            attr,
            header,
            plot,
            results,
        })
}

proptest! {
    #[test]
    fn serialize_then_resolve_is_identity(record in keywords()) {
        let text = serialize_affiliated_keywords(&record);
        let resolved = resolve_block(&text);
        if record.is_empty() {
            prop_assert!(resolved.is_none());
        } else {
            prop_assert_eq!(resolved, Some(record));
        }
    }

    #[test]
    fn serialization_is_idempotent(record in keywords()) {
        let once = serialize_affiliated_keywords(&record);
        if let Some(resolved) = resolve_block(&once) {
            let twice = serialize_affiliated_keywords(&resolved);
            prop_assert_eq!(resolve_block(&twice), Some(resolved));
        }
    }
}
