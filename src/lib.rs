//! laxml - Permissive, non-validating XML tree parsing
//!
//! Converts a character string into an ordered tree of typed nodes without
//! consulting any DTD or schema:
//! - Elements, text, comments, CDATA sections, DOCTYPE declarations, and
//!   processing instructions, in document order
//! - Lenient by default: mismatched closing tags and unclosed elements are
//!   tolerated; strict mode makes both fatal
//! - An optional inclusion predicate prunes nodes from the finished tree
//!
//! Out of scope by design: entity expansion, DTD validation, namespace URI
//! resolution (prefixes are opaque name characters), encoding detection,
//! and serialization back to text.
//!
//! ```
//! let doc = laxml::parse("<?xml version=\"1.0\"?><greeting lang=\"en\">hi</greeting>").unwrap();
//! assert_eq!(doc.root().name(), Some("greeting"));
//! assert_eq!(doc.declaration().and_then(|d| d.attribute("version")), Some("1.0"));
//! ```

mod core;
mod dom;
mod error;

pub use dom::{Document, Node, ParseOptions};
pub use error::{ParseCause, ParseError, Result};

/// Parse a document in lenient mode. Equivalent to [`Document::parse`].
pub fn parse(input: &str) -> Result<Document> {
    Document::parse(input)
}
