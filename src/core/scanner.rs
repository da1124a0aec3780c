//! Byte-level cursor over the input using memchr
//!
//! All structural XML delimiters are ASCII and every byte >= 0x80 is treated
//! as a name byte, so byte positions produced here always fall on UTF-8
//! character boundaries and can be used to slice the input `&str` directly.

use memchr::memchr;

/// Forward-only cursor over the raw document text.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get a slice from start to end positions
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Peek at the current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advance by n bytes
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Skip whitespace characters (space, tab, newline, carriage return)
    #[inline]
    pub fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && is_whitespace(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// Find the next occurrence of a specific byte using SIMD
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr(byte, &self.input.as_bytes()[self.pos..]).map(|i| self.pos + i)
    }

    /// Check if input starts with a byte sequence at the current position
    #[inline]
    pub fn starts_with(&self, needle: &str) -> bool {
        self.input.as_bytes()[self.pos..].starts_with(needle.as_bytes())
    }

    /// Find the position of `>` that is not inside a quoted attribute value
    pub fn find_tag_end_quoted(&self) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let mut pos = self.pos;
        let mut in_single_quote = false;
        let mut in_double_quote = false;

        while pos < bytes.len() {
            match bytes[pos] {
                b'"' if !in_single_quote => in_double_quote = !in_double_quote,
                b'\'' if !in_double_quote => in_single_quote = !in_single_quote,
                b'>' if !in_single_quote && !in_double_quote => return Some(pos),
                _ => {}
            }
            pos += 1;
        }
        None
    }

    /// Find the position of `?>` that is not inside a quoted attribute value
    pub fn find_pi_end_quoted(&self) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let mut pos = self.pos;
        let mut in_single_quote = false;
        let mut in_double_quote = false;

        while pos < bytes.len() {
            match bytes[pos] {
                b'"' if !in_single_quote => in_double_quote = !in_double_quote,
                b'\'' if !in_double_quote => in_single_quote = !in_single_quote,
                b'?' if !in_single_quote && !in_double_quote => {
                    if bytes.get(pos + 1) == Some(&b'>') {
                        return Some(pos);
                    }
                }
                _ => {}
            }
            pos += 1;
        }
        None
    }

    /// Read a name token: letters, digits, `- _ : .`, and any non-ASCII byte
    pub fn read_name(&mut self) -> Option<&'a str> {
        let bytes = self.input.as_bytes();
        let start = self.pos;

        while self.pos < bytes.len() && is_name_byte(bytes[self.pos]) {
            self.pos += 1;
        }

        if self.pos == start {
            return None;
        }
        Some(&self.input[start..self.pos])
    }
}

/// Check if a byte can appear in a tag/attribute/PI name.
/// Namespace prefixes are not split out; `:` is an ordinary name byte.
#[inline]
pub fn is_name_byte(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b':') || b >= 0x80
}

/// Check if a byte is XML whitespace
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
