//! Object nodes produced by the inline parser.
//!
//! An [`OrgObject`] is a tagged node: the [`ObjectKind`] carries the type specific properties,
//! `children` holds the recursively parsed content of container objects (bold, links with a
//! description, inline footnotes ...) and `range` records where the object sits in the parsed
//! text. Children always lie inside their parent's range, and the top level objects of a parse
//! cover the input without gaps or overlaps.

use serde::{Serialize, Serializer};
use std::fmt;

use super::range::{Location, Range};

/// Sequence of objects produced from a text span.
pub type ObjectContent = Vec<OrgObject>;

/// One parsed object with its properties, children and source range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgObject {
    #[serde(flatten)]
    pub kind: ObjectKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: ObjectContent,
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl OrgObject {
    pub fn new(kind: ObjectKind, range: Range) -> Self {
        Self {
            kind,
            children: Vec::new(),
            range,
            location: None,
        }
    }

    pub fn with_children(kind: ObjectKind, range: Range, children: ObjectContent) -> Self {
        Self {
            kind,
            children,
            range,
            location: None,
        }
    }

    pub fn plain(value: impl Into<String>, range: Range) -> Self {
        Self::new(
            ObjectKind::PlainText {
                value: value.into(),
            },
            range,
        )
    }

    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    /// Returns the text of a plain-text object.
    pub fn as_plain(&self) -> Option<&str> {
        match &self.kind {
            ObjectKind::PlainText { value } => Some(value),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, ObjectKind::PlainText { .. })
    }

    /// Concatenated readable text of this object and its descendants.
    ///
    /// Literal leaves (code, verbatim, inline source, LaTeX) contribute their value; markup
    /// delimiters are dropped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            ObjectKind::PlainText { value }
            | ObjectKind::Code { value }
            | ObjectKind::Verbatim { value }
            | ObjectKind::LatexFragment { value, .. }
            | ObjectKind::StatisticsCookie { value }
            | ObjectKind::InlineSrcBlock { value, .. }
            | ObjectKind::Target { value }
            | ObjectKind::ExportSnippet { value, .. } => out.push_str(value),
            ObjectKind::Entity(entity) => out.push_str(&entity.utf8),
            ObjectKind::Timestamp(timestamp) => out.push_str(&timestamp.raw),
            ObjectKind::Link(link) if self.children.is_empty() => out.push_str(&link.raw_link),
            _ => {}
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// All descendants in depth-first, document order (self excluded).
    pub fn walk(&self) -> Vec<&OrgObject> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.walk());
        }
        out
    }
}

/// Discriminant of an object, with the kebab-case names exporters switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    PlainText,
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    Code,
    Verbatim,
    Link,
    Timestamp,
    Entity,
    LatexFragment,
    Subscript,
    Superscript,
    StatisticsCookie,
    FootnoteReference,
    InlineSrcBlock,
    Macro,
    LineBreak,
    Target,
    RadioTarget,
    ExportSnippet,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::PlainText => "plain-text",
            ObjectType::Bold => "bold",
            ObjectType::Italic => "italic",
            ObjectType::Underline => "underline",
            ObjectType::StrikeThrough => "strike-through",
            ObjectType::Code => "code",
            ObjectType::Verbatim => "verbatim",
            ObjectType::Link => "link",
            ObjectType::Timestamp => "timestamp",
            ObjectType::Entity => "entity",
            ObjectType::LatexFragment => "latex-fragment",
            ObjectType::Subscript => "subscript",
            ObjectType::Superscript => "superscript",
            ObjectType::StatisticsCookie => "statistics-cookie",
            ObjectType::FootnoteReference => "footnote-reference",
            ObjectType::InlineSrcBlock => "inline-src-block",
            ObjectType::Macro => "macro",
            ObjectType::LineBreak => "line-break",
            ObjectType::Target => "target",
            ObjectType::RadioTarget => "radio-target",
            ObjectType::ExportSnippet => "export-snippet",
        }
    }

    /// Container types own recursively parsed children.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ObjectType::Bold
                | ObjectType::Italic
                | ObjectType::Underline
                | ObjectType::StrikeThrough
                | ObjectType::Link
                | ObjectType::Subscript
                | ObjectType::Superscript
                | ObjectType::FootnoteReference
                | ObjectType::RadioTarget
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type specific properties of an object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "properties", rename_all = "kebab-case")]
pub enum ObjectKind {
    /// Text with no markup.
    PlainText { value: String },
    /// `*bold*`
    Bold,
    /// `/italic/`
    Italic,
    /// `_underline_`
    Underline,
    /// `+strike-through+`
    StrikeThrough,
    /// `~code~`, literal payload.
    Code { value: String },
    /// `=verbatim=`, literal payload.
    Verbatim { value: String },
    Link(Link),
    Timestamp(Timestamp),
    Entity(EntityObject),
    /// `$..$`, `$$..$$`, `\(..\)` or `\[..\]`, value keeps the delimiters.
    LatexFragment {
        fragment_type: LatexFragmentType,
        value: String,
    },
    Subscript { uses_braces: bool },
    Superscript { uses_braces: bool },
    /// `[n/m]` or `[n%]`, raw text with brackets.
    StatisticsCookie { value: String },
    FootnoteReference {
        label: Option<String>,
        reference_type: FootnoteReferenceType,
    },
    InlineSrcBlock {
        language: String,
        parameters: Option<String>,
        value: String,
    },
    Macro { key: String, args: Vec<String> },
    /// `\\` at the end of a line.
    LineBreak,
    /// `<<target>>`
    Target { value: String },
    /// `<<<radio target>>>`
    RadioTarget,
    /// `@@backend:value@@`
    ExportSnippet { backend: String, value: String },
}

impl ObjectKind {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectKind::PlainText { .. } => ObjectType::PlainText,
            ObjectKind::Bold => ObjectType::Bold,
            ObjectKind::Italic => ObjectType::Italic,
            ObjectKind::Underline => ObjectType::Underline,
            ObjectKind::StrikeThrough => ObjectType::StrikeThrough,
            ObjectKind::Code { .. } => ObjectType::Code,
            ObjectKind::Verbatim { .. } => ObjectType::Verbatim,
            ObjectKind::Link(_) => ObjectType::Link,
            ObjectKind::Timestamp(_) => ObjectType::Timestamp,
            ObjectKind::Entity(_) => ObjectType::Entity,
            ObjectKind::LatexFragment { .. } => ObjectType::LatexFragment,
            ObjectKind::Subscript { .. } => ObjectType::Subscript,
            ObjectKind::Superscript { .. } => ObjectType::Superscript,
            ObjectKind::StatisticsCookie { .. } => ObjectType::StatisticsCookie,
            ObjectKind::FootnoteReference { .. } => ObjectType::FootnoteReference,
            ObjectKind::InlineSrcBlock { .. } => ObjectType::InlineSrcBlock,
            ObjectKind::Macro { .. } => ObjectType::Macro,
            ObjectKind::LineBreak => ObjectType::LineBreak,
            ObjectKind::Target { .. } => ObjectType::Target,
            ObjectKind::RadioTarget => ObjectType::RadioTarget,
            ObjectKind::ExportSnippet { .. } => ObjectType::ExportSnippet,
        }
    }
}

/// Link properties. The description, when present, is the owning object's children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub link_type: LinkType,
    /// Target without its scheme and search option.
    pub path: String,
    /// Target exactly as written.
    pub raw_link: String,
    pub search_option: Option<String>,
    pub format: LinkFormat,
}

/// Link classification derived from the target's scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkType {
    Http,
    Https,
    File,
    Mailto,
    Doi,
    Cite,
    Id,
    /// Any other `scheme:` prefix.
    Custom(String),
    /// No scheme: a heading, target or custom id inside the document.
    Internal,
}

impl LinkType {
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme.to_ascii_lowercase().as_str() {
            "http" => LinkType::Http,
            "https" => LinkType::Https,
            "file" => LinkType::File,
            "mailto" => LinkType::Mailto,
            "doi" => LinkType::Doi,
            "cite" => LinkType::Cite,
            "id" => LinkType::Id,
            _ => LinkType::Custom(scheme.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LinkType::Http => "http",
            LinkType::Https => "https",
            LinkType::File => "file",
            LinkType::Mailto => "mailto",
            LinkType::Doi => "doi",
            LinkType::Cite => "cite",
            LinkType::Id => "id",
            LinkType::Custom(scheme) => scheme,
            LinkType::Internal => "internal",
        }
    }
}

impl Serialize for LinkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkFormat {
    /// `[[target][description]]`
    Bracket,
    /// `<scheme:path>`
    Angle,
    /// bare `scheme:path`
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timestamp {
    pub timestamp_type: TimestampType,
    /// The timestamp exactly as written, delimiters included.
    pub raw: String,
    pub start: TimestampPoint,
    /// Present for ranges, either across two timestamps or within one day.
    pub end: Option<TimestampPoint>,
    pub repeater: Option<Repeater>,
    pub warning: Option<Warning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampType {
    Active,
    Inactive,
    ActiveRange,
    InactiveRange,
}

impl TimestampType {
    pub fn is_active(&self) -> bool {
        matches!(self, TimestampType::Active | TimestampType::ActiveRange)
    }

    pub fn is_range(&self) -> bool {
        matches!(
            self,
            TimestampType::ActiveRange | TimestampType::InactiveRange
        )
    }
}

/// Date and optional time of one end of a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampPoint {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub day_name: Option<String>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Repeater {
    pub repeater_type: RepeaterType,
    pub value: u32,
    pub unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RepeaterType {
    /// `+`
    #[serde(rename = "+")]
    Cumulate,
    /// `++`
    #[serde(rename = "++")]
    CatchUp,
    /// `.+`
    #[serde(rename = ".+")]
    Restart,
}

impl RepeaterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeaterType::Cumulate => "+",
            RepeaterType::CatchUp => "++",
            RepeaterType::Restart => ".+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub warning_type: WarningType,
    pub value: u32,
    pub unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningType {
    /// `-`
    All,
    /// `--`
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeUnit {
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "w")]
    Week,
    #[serde(rename = "m")]
    Month,
    #[serde(rename = "y")]
    Year,
}

impl TimeUnit {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'h' => Some(TimeUnit::Hour),
            'd' => Some(TimeUnit::Day),
            'w' => Some(TimeUnit::Week),
            'm' => Some(TimeUnit::Month),
            'y' => Some(TimeUnit::Year),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            TimeUnit::Hour => 'h',
            TimeUnit::Day => 'd',
            TimeUnit::Week => 'w',
            TimeUnit::Month => 'm',
            TimeUnit::Year => 'y',
        }
    }
}

/// A resolved `\name` entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityObject {
    pub name: String,
    pub latex: String,
    pub latex_math: bool,
    pub html: String,
    pub utf8: String,
    /// The entity was written as `\name{}`.
    pub uses_brackets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LatexFragmentType {
    InlineMath,
    DisplayMath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FootnoteReferenceType {
    /// `[fn:label]`
    Standard,
    /// `[fn::content]` or `[fn:label:content]`
    Inline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_names_are_kebab_case() {
        assert_eq!(ObjectType::PlainText.as_str(), "plain-text");
        assert_eq!(ObjectType::StrikeThrough.as_str(), "strike-through");
        assert_eq!(ObjectType::InlineSrcBlock.to_string(), "inline-src-block");
    }

    #[test]
    fn text_content_skips_markup() {
        let bold = OrgObject::with_children(
            ObjectKind::Bold,
            Range::new(0, 6),
            vec![OrgObject::plain("bold", Range::new(1, 5))],
        );
        assert_eq!(bold.text_content(), "bold");
        assert_eq!(bold.walk().len(), 1);
    }

    #[test]
    fn serializes_with_type_tag() {
        let object = OrgObject::new(
            ObjectKind::Code {
                value: "x".into(),
            },
            Range::new(0, 3),
        );
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["type"], "code");
        assert_eq!(json["properties"]["value"], "x");
        assert_eq!(json["range"]["end"], 3);
    }

    #[test]
    fn link_type_serializes_as_scheme() {
        let json = serde_json::to_value(LinkType::Custom("elisp".into())).unwrap();
        assert_eq!(json, "elisp");
        assert_eq!(LinkType::from_scheme("HTTPS"), LinkType::Https);
    }
}
