//! Behavior of the inline object parser through the public API.

use org_syntax::org::ast::{LinkType, ObjectKind, RepeaterType, TimeUnit};
use org_syntax::{parse_objects, parse_objects_with, ObjectType, OrgObject, ParseOptions, Range};
use rstest::rstest;

fn types(objects: &[OrgObject]) -> Vec<ObjectType> {
    objects.iter().map(OrgObject::object_type).collect()
}

fn find(objects: &[OrgObject], object_type: ObjectType) -> Option<&OrgObject> {
    objects.iter().find_map(|object| {
        if object.object_type() == object_type {
            Some(object)
        } else {
            find(&object.children, object_type)
        }
    })
}

#[rstest]
#[case("word*not bold*word")]
#[case("This is *not closed")]
#[case("See [[broken link")]
#[case("2 * 3 * 4")]
#[case("[fn:]")]
#[case("\\unknownentity")]
#[case("<2024-02-30x>")]
fn degrades_to_plain_text(#[case] text: &str) {
    let objects = parse_objects(text);
    assert!(
        objects.iter().all(OrgObject::is_plain),
        "{text}: {:?}",
        types(&objects)
    );
    let joined: String = objects.iter().map(OrgObject::text_content).collect();
    assert_eq!(joined, text);
}

#[test]
fn emphasis_at_the_edges() {
    for text in ["*bold at start*", "*bold at end*"] {
        let objects = parse_objects(text);
        assert_eq!(types(&objects), vec![ObjectType::Bold], "{text}");
        assert_eq!(objects[0].range, Range::new(0, text.chars().count()));
    }
}

#[test]
fn nested_bold_and_italic() {
    let objects = parse_objects("This is *bold and /italic/* text");
    let bold = find(&objects, ObjectType::Bold).expect("bold");
    assert!(bold
        .children
        .iter()
        .any(|child| child.object_type() == ObjectType::Italic));
}

#[test]
fn link_description_with_markup() {
    let objects = parse_objects("[[https://example.com][Visit *this* site]]");
    let link = find(&objects, ObjectType::Link).expect("link");
    assert!(link
        .children
        .iter()
        .any(|child| child.object_type() == ObjectType::Bold));
    match &link.kind {
        ObjectKind::Link(props) => assert_eq!(props.link_type, LinkType::Https),
        other => panic!("expected link, got {other:?}"),
    }
}

#[test]
fn timestamp_repeater() {
    let objects = parse_objects("<2024-01-15 Mon +1w>");
    match &objects[0].kind {
        ObjectKind::Timestamp(ts) => {
            let repeater = ts.repeater.expect("repeater");
            assert_eq!(repeater.repeater_type, RepeaterType::Cumulate);
            assert_eq!(repeater.repeater_type.as_str(), "+");
            assert_eq!(repeater.value, 1);
            assert_eq!(repeater.unit, TimeUnit::Week);
        }
        other => panic!("expected timestamp, got {other:?}"),
    }
}

#[test]
fn mixed_paragraph() {
    let text = "Call {{{name}}} at <2024-03-01 Fri 09:00>, see [fn:call] and [[Meetings]] [1/3]";
    let objects = parse_objects(text);
    assert_eq!(
        types(&objects),
        vec![
            ObjectType::PlainText,
            ObjectType::Macro,
            ObjectType::PlainText,
            ObjectType::Timestamp,
            ObjectType::PlainText,
            ObjectType::FootnoteReference,
            ObjectType::PlainText,
            ObjectType::Link,
            ObjectType::PlainText,
            ObjectType::StatisticsCookie,
        ]
    );
}

#[test]
fn code_keeps_literal_payload() {
    let objects = parse_objects("use ~[[not a link]]~ here");
    let code = find(&objects, ObjectType::Code).expect("code");
    assert_eq!(
        code.kind,
        ObjectKind::Code {
            value: "[[not a link]]".into()
        }
    );
}

#[test]
fn base_offset_reaches_nested_children() {
    let options = ParseOptions::default().with_base_offset(1000);
    let objects = parse_objects_with("go [[x][*deep /er/*]]", &options);
    let italic = find(&objects, ObjectType::Italic).expect("italic");
    assert_eq!(italic.range, Range::new(1014, 1018));
    assert_eq!(objects[0].range, Range::new(1000, 1003));
}

#[test]
fn positions_on_multiline_input() {
    let options = ParseOptions::default().with_positions();
    let objects = parse_objects_with("first line\n*second* line", &options);
    let bold = find(&objects, ObjectType::Bold).expect("bold");
    let location = bold.location.expect("location");
    assert_eq!(location.start.line, 1);
    assert_eq!(location.start.display_line(), 2);
    assert_eq!(location.start.column, 0);
    let child = &bold.children[0];
    assert_eq!(child.location.map(|l| l.start.column), Some(1));
}

#[test]
fn depth_limit_is_configurable() {
    let text = "*a /b _c_ d/ e*";
    let objects = parse_objects(text);
    assert!(find(&objects, ObjectType::Underline).is_some());

    let options = ParseOptions::default().with_max_depth(1);
    let objects = parse_objects_with(text, &options);
    let italic = find(&objects, ObjectType::Italic).expect("italic");
    assert_eq!(italic.children.len(), 1);
    assert_eq!(italic.children[0].as_plain(), Some("b _c_ d"));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 500;
    let text = format!("{}x{}", "[fn::".repeat(depth), "]".repeat(depth));
    let objects = parse_objects(&text);
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].range, Range::new(0, text.chars().count()));
}
