//! Object tree for parsed Org text.
//!
//!     The inline parser produces a flat, gap-free sequence of [`OrgObject`]s for a span,
//!     where container objects own their recursively parsed children. Every object records a
//!     character [`Range`]; line/column [`Location`]s are attached on request.
//!
//!     The [snapshot](snapshot) module flattens a tree into a format-agnostic form for dumps
//!     and serializers.

pub mod objects;
pub mod range;
pub mod snapshot;

pub use objects::{
    EntityObject, FootnoteReferenceType, LatexFragmentType, Link, LinkFormat, LinkType,
    ObjectContent, ObjectKind, ObjectType, OrgObject, Repeater, RepeaterType, TimeUnit,
    Timestamp, TimestampPoint, TimestampType, Warning, WarningType,
};
pub use range::{Location, Position, Range, SourceLocation};
pub use snapshot::{snapshot_object, snapshot_objects, to_json, treeviz, ObjectSnapshot};
