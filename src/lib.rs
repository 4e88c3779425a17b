//! # org-syntax
//!
//! A structural parser for Org markup.
//!
//! The crate turns raw text into typed object trees (emphasis, links, timestamps, entities,
//! footnotes, macros and friends) and resolves the affiliated keywords (`#+NAME`, `#+CAPTION`,
//! `#+ATTR_<BACKEND>` ...) that attach metadata to the block element that follows them.
//!
//! File Layout
//!
//! src/org
//!   ├── ast          Object model, ranges and snapshots
//!   ├── inlines      The object scanner, one submodule per construct family
//!   ├── affiliated   Backward keyword resolution and serialization
//!   ├── entities     The static entity table
//!   └── config       Parse options and layered configuration loading
//!
//! Parsing never fails: anything that does not form a complete construct stays plain text.

#![allow(rustdoc::invalid_html_tags)]

pub mod org;

pub use org::affiliated::{
    attach_affiliated, parse_affiliated_keywords, parse_caption, parse_colon_attributes,
    serialize_affiliated_keywords, AffiliatedKeywords, AffiliatedResolution, AttachedKeywords,
    Caption, ParsedCaption,
};
pub use org::ast::{ObjectKind, ObjectType, OrgObject, Range};
pub use org::config::{ConfigError, Loader, ParseOptions, ParserConfig};
pub use org::entities::{get_entity, is_valid_entity, Entity};
pub use org::inlines::{parse_objects, parse_objects_with};
