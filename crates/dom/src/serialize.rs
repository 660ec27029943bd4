//! Rendering a tree back to markup text.
//!
//! Two forms: compact (no inter-element whitespace, suitable for round-trip
//! parsing) and indented (one line per node, configurable indent width).
//! Boolean attributes render as the bare key, childless elements as
//! `<name />`.

use crate::attrs::AttrList;
use crate::node::{Node, NodeId, Tree};

fn write_open(out: &mut String, name: &str, attributes: &AttrList) {
    out.push('<');
    out.push_str(name);
    for (key, value) in attributes.iter() {
        out.push(' ');
        out.push_str(key);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

fn write_compact(tree: &Tree, id: NodeId, out: &mut String) {
    match tree.get(id) {
        Some(Node::Text { text, .. }) => out.push_str(text),
        Some(Node::Element {
            name,
            attributes,
            children,
            ..
        }) => {
            write_open(out, name, attributes);
            if children.is_empty() {
                out.push_str(" />");
            } else {
                out.push('>');
                for &child in children {
                    write_compact(tree, child, out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
        None => {}
    }
}

fn write_indented(tree: &Tree, id: NodeId, width: usize, level: usize, out: &mut String) {
    let pad = width * level;
    match tree.get(id) {
        Some(Node::Text { text, .. }) => {
            push_spaces(out, pad);
            out.push_str(text);
            out.push('\n');
        }
        Some(Node::Element {
            name,
            attributes,
            children,
            ..
        }) => {
            push_spaces(out, pad);
            write_open(out, name, attributes);
            if children.is_empty() {
                out.push_str(" />\n");
            } else {
                out.push_str(">\n");
                for &child in children {
                    write_indented(tree, child, width, level + 1, out);
                }
                push_spaces(out, pad);
                out.push_str("</");
                out.push_str(name);
                out.push_str(">\n");
            }
        }
        None => {}
    }
}

fn push_spaces(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(' ');
    }
}

/// Renders the subtree at `id` with no inter-element whitespace.
pub fn to_compact(tree: &Tree, id: NodeId) -> String {
    let mut out = String::new();
    write_compact(tree, id, &mut out);
    out
}

/// Renders the subtree at `id` with one line per node, indenting each
/// nesting level by `width` spaces.
pub fn to_indented(tree: &Tree, id: NodeId, width: usize) -> String {
    let mut out = String::new();
    write_indented(tree, id, width, 0, &mut out);
    out
}
