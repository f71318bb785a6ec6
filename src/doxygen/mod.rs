//! Doxygen XML input — document tree, parser, and description text.

pub mod parse;
pub mod text;
pub mod tree;

pub use parse::parse;
pub use tree::{Element, Node};
