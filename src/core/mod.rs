//! Core parsing machinery: cursor, lexical tokenizer, attribute parsing

pub mod attributes;
pub mod scanner;
pub mod tokenizer;

pub use attributes::Attribute;
pub use tokenizer::{Token, Tokenizer};
