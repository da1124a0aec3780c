//! Tree node types
//!
//! One closed sum type for the six node kinds, so traversal and filter code
//! gets exhaustive matching from the compiler. Nodes are immutable once the
//! parse finishes and are owned by their parent (or by the [`Document`] for
//! top-level nodes).
//!
//! [`Document`]: super::document::Document

use std::collections::HashMap;

/// A node in the parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element. `children: None` means the tag was self-closing;
    /// `Some(vec![])` means it was opened and closed with nothing inside.
    Element {
        name: String,
        attributes: HashMap<String, String>,
        children: Option<Vec<Node>>,
    },
    /// A text run, verbatim including whitespace. Never empty.
    Text(String),
    /// A comment, verbatim from `<!--` to `-->` inclusive.
    Comment(String),
    /// A CDATA section, verbatim from `<![CDATA[` to `]]>` inclusive.
    CData(String),
    /// A DOCTYPE declaration, verbatim from `<!DOCTYPE` to its `>` inclusive.
    DocumentType(String),
    /// A processing instruction: `<?name attrs?>`.
    ProcessingInstruction {
        name: String,
        attributes: HashMap<String, String>,
    },
}

impl Node {
    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is a processing instruction
    pub fn is_processing_instruction(&self) -> bool {
        matches!(self, Node::ProcessingInstruction { .. })
    }

    /// Get the name of an element or processing instruction
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } | Node::ProcessingInstruction { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Get the attribute map of an element or processing instruction
    pub fn attributes(&self) -> Option<&HashMap<String, String>> {
        match self {
            Node::Element { attributes, .. }
            | Node::ProcessingInstruction { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()?.get(name).map(String::as_str)
    }

    /// Get element children. `None` for non-elements and for self-closed
    /// elements (the no-children marker), `Some(&[])` for an element closed
    /// with nothing inside.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Element { children: Some(children), .. } => Some(children),
            _ => None,
        }
    }

    /// Get the stored content string of a text, comment, CDATA, or DOCTYPE
    /// node. Comment/CDATA/DOCTYPE content includes the delimiters.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::Text(content)
            | Node::Comment(content)
            | Node::CData(content)
            | Node::DocumentType(content) => Some(content),
            _ => None,
        }
    }
}
