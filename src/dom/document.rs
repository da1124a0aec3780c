//! Parsed document and parse entry points
//!
//! A [`Document`] owns the ordered top-level node sequence. The declaration
//! and the root element are stored as indices into that sequence, so
//! [`Document::declaration`] and [`Document::root`] hand out the identical
//! nodes that sit in [`Document::children`] (two access paths, one node).

use super::builder::TreeBuilder;
use super::node::Node;
use crate::core::{Token, Tokenizer};
use crate::error::{ParseCause, Result};

/// Per-call parse configuration. Immutable once handed to the parser; there
/// is no process-wide state.
#[derive(Default)]
pub struct ParseOptions {
    strict: bool,
    filter: Option<Box<dyn Fn(&Node) -> bool>>,
}

impl ParseOptions {
    pub fn new() -> Self {
        ParseOptions::default()
    }

    /// Require every closing tag to exactly match its opening tag, and every
    /// open element to be closed by end of input. Off by default.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Inclusion predicate applied top-down over the finished tree, before
    /// root/declaration extraction. A node for which it returns `false` is
    /// dropped together with its entire subtree; the subtree is never
    /// visited. Default: include everything.
    pub fn filter(mut self, filter: impl Fn(&Node) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }
}

/// A fully parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    children: Vec<Node>,
    declaration: Option<usize>,
    root: usize,
}

impl Document {
    /// Parse a document in lenient mode.
    pub fn parse(input: &str) -> Result<Document> {
        Document::parse_with_options(input, ParseOptions::new())
    }

    /// Parse a document in strict mode.
    pub fn parse_strict(input: &str) -> Result<Document> {
        Document::parse_with_options(input, ParseOptions::new().strict(true))
    }

    /// Parse a document with explicit options.
    ///
    /// Input is trimmed of leading and trailing whitespace first. The entire
    /// input is consumed in one forward pass; any failure is terminal and
    /// yields no partial tree.
    pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Document> {
        let input = input.trim();

        let mut tokenizer = Tokenizer::new(input);
        let mut builder = TreeBuilder::new(options.strict);
        loop {
            match tokenizer.next_token()? {
                Token::Eof => break,
                token => builder.handle_token(token)?,
            }
        }
        let mut children = builder.finish()?;

        if let Some(filter) = &options.filter {
            apply_filter(&mut children, filter.as_ref());
        }

        // Classification runs on the filtered sequence: a leading processing
        // instruction is the declaration, the first element is the root.
        let declaration = match children.first() {
            Some(Node::ProcessingInstruction { .. }) => Some(0),
            _ => None,
        };
        let root = children
            .iter()
            .position(Node::is_element)
            .ok_or(ParseCause::RootNotFound)?;

        Ok(Document {
            children,
            declaration,
            root,
        })
    }

    /// All top-level nodes in document order, including the declaration and
    /// the root element at their original positions.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The root element. Always a [`Node::Element`].
    pub fn root(&self) -> &Node {
        &self.children[self.root]
    }

    /// The declaration: the first top-level node, when it is a processing
    /// instruction. This is the same node that [`Document::children`] holds,
    /// not a copy.
    pub fn declaration(&self) -> Option<&Node> {
        self.declaration.map(|index| &self.children[index])
    }
}

/// Top-down inclusion filter. Excluded nodes are removed before their
/// children are ever examined.
fn apply_filter(nodes: &mut Vec<Node>, filter: &dyn Fn(&Node) -> bool) {
    nodes.retain(|node| filter(node));
    for node in nodes.iter_mut() {
        if let Node::Element {
            children: Some(children),
            ..
        } = node
        {
            apply_filter(children, filter);
        }
    }
}
