//! Object Snapshot - a normalized intermediate representation of an object tree
//!
//! Consumers that only care about shape (debug dumps, JSON for the indexer, snapshot tests)
//! read a snapshot instead of matching on every [`ObjectKind`]. The snapshot keeps the type
//! name, a short label, the interesting properties as string attributes and the children.

use indexmap::IndexMap;
use serde::Serialize;

use super::objects::{ObjectKind, OrgObject};
use super::range::Range;

/// A snapshot of an object in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSnapshot {
    /// The type of node (e.g., "bold", "link")
    pub node_type: String,

    /// The primary label or text of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: IndexMap<String, String>,

    pub range: Range,

    /// Child nodes in the tree
    pub children: Vec<ObjectSnapshot>,
}

impl ObjectSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>, range: Range) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: IndexMap::new(),
            range,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Render as an indented outline, one node per line:
    /// `type [start..end] label {key=value ...}`.
    pub fn to_treeviz(&self) -> String {
        let mut out = String::new();
        self.write_treeviz(0, &mut out);
        out
    }

    fn write_treeviz(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.node_type);
        out.push_str(&format!(" [{}]", self.range));
        if !self.label.is_empty() {
            out.push_str(&format!(" {:?}", self.label));
        }
        if !self.attributes.is_empty() {
            let attrs: Vec<String> = self
                .attributes
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            out.push_str(&format!(" {{{}}}", attrs.join(" ")));
        }
        out.push('\n');
        for child in &self.children {
            child.write_treeviz(depth + 1, out);
        }
    }
}

/// Build snapshots for a sequence of objects.
pub fn snapshot_objects(objects: &[OrgObject]) -> Vec<ObjectSnapshot> {
    objects.iter().map(snapshot_object).collect()
}

/// Treeviz rendering of a whole parse result.
pub fn treeviz(objects: &[OrgObject]) -> String {
    snapshot_objects(objects)
        .iter()
        .map(ObjectSnapshot::to_treeviz)
        .collect()
}

/// JSON form of a parse result, as handed to exporters and the indexer.
pub fn to_json(objects: &[OrgObject]) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(objects)
}

pub fn snapshot_object(object: &OrgObject) -> ObjectSnapshot {
    let node_type = object.object_type().as_str();
    let mut snapshot = match &object.kind {
        ObjectKind::PlainText { value }
        | ObjectKind::Code { value }
        | ObjectKind::Verbatim { value }
        | ObjectKind::StatisticsCookie { value }
        | ObjectKind::Target { value } => ObjectSnapshot::new(node_type, value, object.range),
        ObjectKind::Bold
        | ObjectKind::Italic
        | ObjectKind::Underline
        | ObjectKind::StrikeThrough
        | ObjectKind::LineBreak
        | ObjectKind::RadioTarget => ObjectSnapshot::new(node_type, "", object.range),
        ObjectKind::Link(link) => ObjectSnapshot::new(node_type, &link.raw_link, object.range)
            .with_attribute("type", link.link_type.as_str())
            .with_attribute("path", &link.path),
        ObjectKind::Timestamp(timestamp) => {
            let mut snapshot = ObjectSnapshot::new(node_type, &timestamp.raw, object.range);
            if let Some(repeater) = &timestamp.repeater {
                snapshot = snapshot.with_attribute(
                    "repeater",
                    format!(
                        "{}{}{}",
                        repeater.repeater_type.as_str(),
                        repeater.value,
                        repeater.unit.as_char()
                    ),
                );
            }
            snapshot
        }
        ObjectKind::Entity(entity) => ObjectSnapshot::new(node_type, &entity.name, object.range)
            .with_attribute("utf8", &entity.utf8),
        ObjectKind::LatexFragment { value, .. } => {
            ObjectSnapshot::new(node_type, value, object.range)
        }
        ObjectKind::Subscript { uses_braces } | ObjectKind::Superscript { uses_braces } => {
            let snapshot = ObjectSnapshot::new(node_type, "", object.range);
            if *uses_braces {
                snapshot.with_attribute("braces", "true")
            } else {
                snapshot
            }
        }
        ObjectKind::FootnoteReference { label, .. } => ObjectSnapshot::new(
            node_type,
            label.clone().unwrap_or_default(),
            object.range,
        ),
        ObjectKind::InlineSrcBlock {
            language, value, ..
        } => ObjectSnapshot::new(node_type, value, object.range).with_attribute("lang", language),
        ObjectKind::Macro { key, args } => {
            let snapshot = ObjectSnapshot::new(node_type, key, object.range);
            if args.is_empty() {
                snapshot
            } else {
                snapshot.with_attribute("args", args.join(","))
            }
        }
        ObjectKind::ExportSnippet { backend, value } => {
            ObjectSnapshot::new(node_type, value, object.range).with_attribute("backend", backend)
        }
    };
    snapshot.children = snapshot_objects(&object.children);
    snapshot
}
