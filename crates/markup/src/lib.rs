//! Tolerant markup parsing: a byte source in, an element tree out.
//!
//! This is not a spec-compliant HTML5 parser. The tokenization is a small,
//! practical state machine intended for well-meaning but imperfect markup.
//!
//! Known leniencies (intentional):
//! - A closing tag that does not match the innermost open element closes it
//!   anyway and keeps closing ancestors until it matches (or is swallowed at
//!   the top level). Never an error.
//! - End of input closes every open element implicitly.
//! - Entity references are left undecoded in text runs.
//! - Comments (`<!…>`) are consumed and dropped.
//! - An unknown declared charset falls back to lossy UTF-8 with a logged
//!   warning.
//!
//! Hard failures are limited to I/O errors from the byte source, blank
//! element names, and input containing no element at all. Nothing panics
//! across this boundary.
//!
//! Tracing goes through the `log` facade under the `markup.builder` and
//! `markup.encoding` targets; with no logger installed it is a no-op.

pub mod encoding;

mod attributes;
mod builder;
mod cursor;
mod error;
mod lexer;
mod token;

use std::io::Read;

use dom::{Node, NodeId, Tree, filter, serialize};

use crate::cursor::Cursor;

pub use crate::error::ParseError;

/// A parsed document: the node arena plus its single root element.
///
/// The tree is exclusively owned by the caller after parsing; mutating it
/// requires no synchronization and the parser keeps no reference to it.
#[derive(Clone, Debug)]
pub struct Document {
    tree: Tree,
    root: NodeId,
}

impl Document {
    /// The root element. Always an element node, never text.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Compact serialization of the whole document (no inter-element
    /// whitespace).
    pub fn to_compact_string(&self) -> String {
        serialize::to_compact(&self.tree, self.root)
    }

    /// Indented serialization, one line per node, `width` spaces per level.
    pub fn to_indented_string(&self, width: usize) -> String {
        serialize::to_indented(&self.tree, self.root, width)
    }

    /// All nodes in the document (pre-order, root included) matching the
    /// predicate. See [`dom::filter`] for ready-made predicates.
    pub fn find<P>(&self, predicate: P) -> Vec<NodeId>
    where
        P: Fn(&Tree, NodeId) -> bool,
    {
        filter::find(&self.tree, self.root, predicate)
    }

    /// First match in pre-order, if any.
    pub fn find_first<P>(&self, predicate: P) -> Option<NodeId>
    where
        P: Fn(&Tree, NodeId) -> bool,
    {
        filter::find_first(&self.tree, self.root, predicate)
    }
}

/// Parses a byte source into a document.
///
/// The source is buffered in full, charset-sniffed and decoded (see
/// [`encoding`]), then tokenized and built into a tree. Exactly one root
/// element is returned; when the top level holds several sibling elements
/// only the first becomes the root and the rest are dropped (current,
/// documented behavior).
///
/// # Errors
///
/// [`ParseError::Io`] when reading fails, [`ParseError::EmptyTag`] on a
/// blank element name, [`ParseError::NoContent`] when the input is empty,
/// all whitespace, or contains no element.
pub fn parse(input: impl Read) -> Result<Document, ParseError> {
    let text = encoding::decode_source(input)?;
    parse_str(&text)
}

/// Parses already-decoded text, skipping the encoding pre-pass.
pub fn parse_str(text: &str) -> Result<Document, ParseError> {
    let mut cursor = Cursor::new(text);
    let mut tree = Tree::new();

    let (top_level, dangling) = builder::build_children(&mut cursor, &mut tree)?;
    if let Some(name) = dangling {
        // no open element to apply it to: swallowed, like end of input
        log::trace!(target: "markup.builder", "ignoring dangling </{name}> at top level");
    }

    let root = top_level
        .iter()
        .copied()
        .find(|&id| matches!(tree.get(id), Some(Node::Element { .. })));
    match root {
        Some(root) => Ok(Document { tree, root }),
        None => Err(ParseError::NoContent),
    }
}
