//! Stack-based tree construction
//!
//! Consumes tokens and maintains a stack of open element frames rooted in a
//! synthetic top-level frame (the `top_level` vec). An explicit stack is used
//! instead of recursive descent so nesting depth is bounded by the heap, not
//! the call stack.

use std::collections::HashMap;

use super::node::Node;
use crate::core::{Attribute, Token};
use crate::error::ParseCause;

/// An open element awaiting its closing tag.
struct Frame {
    name: String,
    attributes: HashMap<String, String>,
    children: Vec<Node>,
}

/// Builds the top-level node sequence from a token stream.
pub struct TreeBuilder {
    strict: bool,
    stack: Vec<Frame>,
    top_level: Vec<Node>,
}

impl TreeBuilder {
    pub fn new(strict: bool) -> Self {
        TreeBuilder {
            strict,
            stack: Vec::new(),
            top_level: Vec::new(),
        }
    }

    /// Feed one token into the builder.
    pub fn handle_token(&mut self, token: Token<'_>) -> Result<(), ParseCause> {
        match token {
            Token::StartTag { name, attributes } => {
                self.stack.push(Frame {
                    name: name.to_string(),
                    attributes: to_map(attributes),
                    children: Vec::new(),
                });
            }

            Token::EmptyTag { name, attributes } => {
                // Self-closing: completed element with the no-children marker
                self.attach(Node::Element {
                    name: name.to_string(),
                    attributes: to_map(attributes),
                    children: None,
                });
            }

            Token::EndTag { name } => {
                // A closing tag with nothing open is unmatched in any mode
                let frame = self
                    .stack
                    .pop()
                    .ok_or_else(|| ParseCause::ClosingTagMismatch(name.to_string()))?;
                if self.strict && frame.name != name {
                    return Err(ParseCause::ClosingTagMismatch(frame.name));
                }
                // Lenient mode closes the frame under the open tag's name
                // even when the closing tag disagrees
                self.attach(Node::Element {
                    name: frame.name,
                    attributes: frame.attributes,
                    children: Some(frame.children),
                });
            }

            Token::Text(text) => {
                // Whitespace between top-level constructs is not content
                if self.stack.is_empty() && text.trim().is_empty() {
                    return Ok(());
                }
                self.attach(Node::Text(text.to_string()));
            }

            Token::Comment(content) => self.attach(Node::Comment(content.to_string())),
            Token::CData(content) => self.attach(Node::CData(content.to_string())),
            Token::DocumentType(content) => {
                self.attach(Node::DocumentType(content.to_string()));
            }

            Token::ProcessingInstruction { target, attributes } => {
                self.attach(Node::ProcessingInstruction {
                    name: target.to_string(),
                    attributes: to_map(attributes),
                });
            }

            Token::Eof => {}
        }
        Ok(())
    }

    /// Validate end-of-input state and return the top-level node sequence.
    ///
    /// Strict mode requires every open frame to have been closed; lenient
    /// mode closes remaining frames as if their end tags were present.
    pub fn finish(mut self) -> Result<Vec<Node>, ParseCause> {
        if self.strict {
            if let Some(frame) = self.stack.last() {
                return Err(ParseCause::ClosingTagMismatch(frame.name.clone()));
            }
        }
        while let Some(frame) = self.stack.pop() {
            self.attach(Node::Element {
                name: frame.name,
                attributes: frame.attributes,
                children: Some(frame.children),
            });
        }
        Ok(self.top_level)
    }

    /// Append a completed node to the current frame, or to the top level
    /// when no element is open
    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.top_level.push(node),
        }
    }
}

fn to_map(attributes: Vec<Attribute<'_>>) -> HashMap<String, String> {
    attributes
        .into_iter()
        .map(|a| (a.name.to_string(), a.value.to_string()))
        .collect()
}
