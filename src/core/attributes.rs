//! Attribute list parsing
//!
//! Parses the attribute region of a start tag or processing instruction:
//! the text between the name and the closing `>`, `/>` or `?>`.
//!
//! Accepted value forms: double-quoted, single-quoted, or a bare token
//! terminated by whitespace, `/` or `>`. Whitespace (including newlines) is
//! tolerated around names, `=` and values. A name with no `=` is rejected:
//! shorthand attributes are not valid XML. Values are stored verbatim, no
//! entity decoding.

use super::scanner::{is_name_byte, is_whitespace};
use crate::error::ParseCause;

/// A parsed attribute. Borrows from the tag's attribute region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Parse every attribute in `input`, failing on anything that is not a
/// well-formed `name = value` pair.
pub fn parse_attributes(input: &str) -> Result<Vec<Attribute<'_>>, ParseCause> {
    let bytes = input.as_bytes();
    let mut attrs = Vec::new();
    let mut pos = 0;

    loop {
        // Skip whitespace before the attribute name
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        // Attribute name
        let name_start = pos;
        while pos < bytes.len() && is_name_byte(bytes[pos]) {
            pos += 1;
        }
        if pos == name_start {
            return Err(ParseCause::NotWellFormed);
        }
        let name = &input[name_start..pos];

        // Skip whitespace around '='
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() || bytes[pos] != b'=' {
            // Bare attribute with no value
            return Err(ParseCause::NotWellFormed);
        }
        pos += 1;
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }
        if pos >= bytes.len() {
            return Err(ParseCause::NotWellFormed);
        }

        // Attribute value
        let quote = bytes[pos];
        let value = if quote == b'"' || quote == b'\'' {
            pos += 1;
            let value_start = pos;
            while pos < bytes.len() && bytes[pos] != quote {
                pos += 1;
            }
            if pos >= bytes.len() {
                // Unterminated quote
                return Err(ParseCause::NotWellFormed);
            }
            let value = &input[value_start..pos];
            pos += 1;
            value
        } else {
            // Bare unquoted token
            let value_start = pos;
            while pos < bytes.len()
                && !is_whitespace(bytes[pos])
                && bytes[pos] != b'/'
                && bytes[pos] != b'>'
            {
                pos += 1;
            }
            if pos == value_start {
                return Err(ParseCause::NotWellFormed);
            }
            &input[value_start..pos]
        };

        attrs.push(Attribute { name, value });
    }

    Ok(attrs)
}
