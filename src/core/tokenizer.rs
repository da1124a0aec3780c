//! Lexical scanner for XML-like markup
//!
//! Pull-style tokenizer: each call to [`Tokenizer::next_token`] recognizes
//! exactly one construct at the cursor:
//! - Start / empty-element / end tags
//! - Text runs (up to the next `<`)
//! - Comments, CDATA sections, DOCTYPE declarations (stored verbatim,
//!   delimiters included)
//! - Processing instructions
//!
//! Anything else once a `<` has been consumed is a fatal
//! [`ParseCause::NotWellFormed`] error; the tokenizer never recovers or
//! backtracks.

use super::attributes::{parse_attributes, Attribute};
use super::scanner::Scanner;
use crate::error::ParseCause;

/// A single lexical token. Borrows from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Start tag: `<name attrs...>`
    StartTag {
        name: &'a str,
        attributes: Vec<Attribute<'a>>,
    },
    /// Self-closing tag: `<name attrs.../>`
    EmptyTag {
        name: &'a str,
        attributes: Vec<Attribute<'a>>,
    },
    /// End tag: `</name >`
    EndTag { name: &'a str },
    /// Text run between markup, verbatim
    Text(&'a str),
    /// Comment, verbatim from `<!--` to `-->` inclusive
    Comment(&'a str),
    /// CDATA section, verbatim from `<![CDATA[` to `]]>` inclusive
    CData(&'a str),
    /// DOCTYPE declaration, verbatim from `<!DOCTYPE` to its top-level `>`
    DocumentType(&'a str),
    /// Processing instruction: `<?target attrs...?>`
    ProcessingInstruction {
        target: &'a str,
        attributes: Vec<Attribute<'a>>,
    },
    /// End of input
    Eof,
}

/// Tokenizer over a document string.
pub struct Tokenizer<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for the given input
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            scanner: Scanner::new(input),
        }
    }

    /// Get the next token. [`Token::Eof`] signals end of input; after that
    /// every call keeps returning it.
    pub fn next_token(&mut self) -> Result<Token<'a>, ParseCause> {
        if self.scanner.is_eof() {
            return Ok(Token::Eof);
        }
        match self.scanner.peek() {
            Some(b'<') => self.parse_markup(),
            _ => self.parse_text(),
        }
    }

    /// Parse a text run up to the next `<` or end of input
    fn parse_text(&mut self) -> Result<Token<'a>, ParseCause> {
        let start = self.scanner.position();
        let end = self.scanner.find_byte(b'<').unwrap_or(self.input.len());
        self.scanner.set_position(end);
        Ok(Token::Text(self.scanner.slice(start, end)))
    }

    /// Parse markup starting with `<`
    fn parse_markup(&mut self) -> Result<Token<'a>, ParseCause> {
        let start = self.scanner.position();
        self.scanner.advance(1); // Skip '<'

        match self.scanner.peek() {
            Some(b'/') => self.parse_end_tag(),
            Some(b'!') => self.parse_bang_markup(start),
            Some(b'?') => self.parse_pi(),
            _ => self.parse_start_tag(),
        }
    }

    /// Parse a start tag or empty-element tag
    fn parse_start_tag(&mut self) -> Result<Token<'a>, ParseCause> {
        let name = self.scanner.read_name().ok_or(ParseCause::NotWellFormed)?;
        let name_end = self.scanner.position();

        // Terminating '>' outside any quoted attribute value
        let gt = self
            .scanner
            .find_tag_end_quoted()
            .ok_or(ParseCause::NotWellFormed)?;

        // Byte comparison: the byte before '>' may be the tail of a
        // multi-byte character (bare unicode attribute value), which a str
        // slice would reject as a char boundary violation
        let is_empty = gt > name_end && self.input.as_bytes()[gt - 1] == b'/';
        let attr_end = if is_empty { gt - 1 } else { gt };
        let attributes = parse_attributes(self.scanner.slice(name_end, attr_end))?;

        self.scanner.set_position(gt + 1);
        if is_empty {
            Ok(Token::EmptyTag { name, attributes })
        } else {
            Ok(Token::StartTag { name, attributes })
        }
    }

    /// Parse an end tag: `</` name, optional whitespace, `>`
    fn parse_end_tag(&mut self) -> Result<Token<'a>, ParseCause> {
        self.scanner.advance(1); // Skip '/'
        let name = self.scanner.read_name().ok_or(ParseCause::NotWellFormed)?;
        self.scanner.skip_whitespace();
        if self.scanner.peek() != Some(b'>') {
            return Err(ParseCause::NotWellFormed);
        }
        self.scanner.advance(1);
        Ok(Token::EndTag { name })
    }

    /// Parse markup starting with `<!` (comment, CDATA, DOCTYPE)
    fn parse_bang_markup(&mut self, start: usize) -> Result<Token<'a>, ParseCause> {
        self.scanner.advance(1); // Skip '!'

        if self.scanner.starts_with("--") {
            self.parse_comment(start)
        } else if self.scanner.starts_with("[CDATA[") {
            self.parse_cdata(start)
        } else if self.scanner.starts_with("DOCTYPE") {
            self.parse_doctype(start)
        } else {
            Err(ParseCause::NotWellFormed)
        }
    }

    /// Parse a comment `<!--...-->`, keeping the delimiters
    fn parse_comment(&mut self, start: usize) -> Result<Token<'a>, ParseCause> {
        self.scanner.advance(2); // Skip '--'

        loop {
            let pos = self.scanner.find_byte(b'-').ok_or(ParseCause::NotWellFormed)?;
            self.scanner.set_position(pos);
            if self.scanner.starts_with("-->") {
                self.scanner.advance(3);
                return Ok(Token::Comment(
                    self.scanner.slice(start, self.scanner.position()),
                ));
            }
            self.scanner.advance(1);
        }
    }

    /// Parse a CDATA section `<![CDATA[...]]>`, keeping the delimiters
    fn parse_cdata(&mut self, start: usize) -> Result<Token<'a>, ParseCause> {
        self.scanner.advance(7); // Skip '[CDATA['

        loop {
            let pos = self.scanner.find_byte(b']').ok_or(ParseCause::NotWellFormed)?;
            self.scanner.set_position(pos);
            if self.scanner.starts_with("]]>") {
                self.scanner.advance(3);
                return Ok(Token::CData(
                    self.scanner.slice(start, self.scanner.position()),
                ));
            }
            self.scanner.advance(1);
        }
    }

    /// Parse a DOCTYPE declaration, keeping everything through the first `>`
    /// outside the `[...]` internal subset and outside quoted literals
    fn parse_doctype(&mut self, start: usize) -> Result<Token<'a>, ParseCause> {
        self.scanner.advance(7); // Skip 'DOCTYPE'

        // Bracket depth, not a flag: the internal subset may itself contain
        // balanced brackets
        let mut subset_depth = 0usize;
        let mut in_string = false;
        let mut string_char = 0u8;

        while let Some(b) = self.scanner.peek() {
            if in_string {
                if b == string_char {
                    in_string = false;
                }
                self.scanner.advance(1);
                continue;
            }
            match b {
                b'"' | b'\'' => {
                    in_string = true;
                    string_char = b;
                    self.scanner.advance(1);
                }
                b'[' => {
                    subset_depth += 1;
                    self.scanner.advance(1);
                }
                b']' => {
                    subset_depth = subset_depth.saturating_sub(1);
                    self.scanner.advance(1);
                }
                b'>' if subset_depth == 0 => {
                    self.scanner.advance(1);
                    return Ok(Token::DocumentType(
                        self.scanner.slice(start, self.scanner.position()),
                    ));
                }
                _ => self.scanner.advance(1),
            }
        }
        Err(ParseCause::NotWellFormed)
    }

    /// Parse a processing instruction `<?target attrs...?>`
    fn parse_pi(&mut self) -> Result<Token<'a>, ParseCause> {
        self.scanner.advance(1); // Skip '?'
        let target = self.scanner.read_name().ok_or(ParseCause::NotWellFormed)?;

        let end = self
            .scanner
            .find_pi_end_quoted()
            .ok_or(ParseCause::NotWellFormed)?;
        let attributes = parse_attributes(self.scanner.slice(self.scanner.position(), end))?;

        self.scanner.set_position(end + 2); // Skip '?>'
        Ok(Token::ProcessingInstruction { target, attributes })
    }
}
