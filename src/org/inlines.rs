//! Inline object parsing
//!
//!     Turns a span of Org text into a flat, gap-free sequence of [`OrgObject`]s. Container
//!     objects (emphasis, link descriptions, scripts, inline footnotes, radio targets) own their
//!     recursively parsed payload.
//!
//!     Scanning is left to right. At every unconsumed position the first character selects
//!     the construct parsers to try, in this order, and the first one that validates wins:
//!
//!         [     footnote, timestamp, statistics cookie, link
//!         <     radio target, target, timestamp, angle link
//!         \     line break, \( \) and \[ \] fragments, entity
//!         $     LaTeX fragment
//!         {     macro
//!         @     export snippet
//!         _ ^   subscript / superscript (after a word character), then emphasis
//!         * / + = ~   emphasis
//!         s     inline source block, then plain link
//!         a-z   plain link
//!
//!     Anything not claimed is accumulated into plain text, so malformed or unterminated
//!     markup never fails: it just stays text.
//!
//!     Offsets count characters, not bytes. See [scanner](scanner) for the scanning machinery
//!     and [boundary](boundary) for the emphasis PRE/POST rules.

pub mod boundary;
mod emphasis;
mod footnotes;
mod latex;
mod leaves;
mod links;
mod scanner;
mod scripts;
mod timestamps;

use crate::org::ast::{OrgObject, SourceLocation};
use crate::org::config::ParseOptions;
use scanner::Scanner;

pub use boundary::{is_valid_closer, is_valid_opener};

/// Parse `text` with the default options.
pub fn parse_objects(text: &str) -> Vec<OrgObject> {
    parse_objects_with(text, &ParseOptions::default())
}

/// Parse `text`, shifting ranges by `options.base_offset` and attaching locations when
/// `options.add_positions` is set.
pub fn parse_objects_with(text: &str, options: &ParseOptions) -> Vec<OrgObject> {
    let chars: Vec<char> = text.chars().collect();
    tracing::trace!(
        len = chars.len(),
        base_offset = options.base_offset,
        "parsing inline objects"
    );
    let mut objects = Scanner::new(&chars, 0, 0, options.max_depth.max(1)).parse();

    let locations = options
        .add_positions
        .then(|| SourceLocation::with_base_line(&chars, options.base_line));
    if options.base_offset > 0 || locations.is_some() {
        finalize(&mut objects, options.base_offset, locations.as_ref());
    }
    objects
}

fn finalize(objects: &mut [OrgObject], base_offset: usize, locations: Option<&SourceLocation>) {
    for object in objects {
        if let Some(locations) = locations {
            object.location = Some(locations.range_to_location(&object.range));
        }
        object.range = object.range.shifted(base_offset);
        finalize(&mut object.children, base_offset, locations);
    }
}
