//! Document tree: node types, stack-based builder, parse entry points

mod builder;
pub mod document;
pub mod node;

pub use document::{Document, ParseOptions};
pub use node::Node;
