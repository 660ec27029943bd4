//! Recursive tree construction with mismatched-close recovery.
//!
//! `build_children` runs once per open element (and once at the top level);
//! the call stack doubles as the stack of open elements, so recursion depth
//! equals the nesting depth of the input.
//!
//! Recovery policy: a closing tag that does not match the innermost open
//! element still closes it — the children built so far stay attached — and
//! the same closing name is re-delivered to the next level up, so a single
//! stray end tag can close any number of open ancestors. End of input closes
//! every open element implicitly. Neither case is an error.

use dom::{NodeId, Tree};

use crate::attributes::parse_attributes;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::lexer::{read_tag, read_text};
use crate::token::{TagToken, classify};

/// Builds the child sequence of one element (or of the top level).
///
/// Returns the nodes built at this level plus the closing-tag name that
/// terminated it, or `None` when the input ran out first.
pub(crate) fn build_children(
    cursor: &mut Cursor,
    tree: &mut Tree,
) -> Result<(Vec<NodeId>, Option<String>), ParseError> {
    let mut nodes = Vec::new();
    loop {
        let text = read_text(cursor);
        if !text.is_empty() {
            nodes.push(tree.new_text(text));
        }

        let Some(raw) = read_tag(cursor) else {
            // implicit close at end of stream
            return Ok((nodes, None));
        };

        match classify(&raw)? {
            TagToken::Comment => {
                log::trace!(target: "markup.builder", "dropping comment");
            }
            TagToken::SelfClosing { name, raw_attrs } => {
                log::trace!(target: "markup.builder", "self-closing <{name} />");
                nodes.push(tree.new_element(name, parse_attributes(&raw_attrs)));
            }
            TagToken::Closing { name } => {
                // terminates the caller's element; the caller decides
                // whether it matches
                return Ok((nodes, Some(name)));
            }
            TagToken::Opening { name, raw_attrs } => {
                log::trace!(target: "markup.builder", "opening <{name}>");
                let element = tree.new_element(name, parse_attributes(&raw_attrs));
                let (children, close) = build_children(cursor, tree)?;
                for child in children {
                    // fresh subtrees cannot introduce a cycle
                    tree.append_child(element, child)
                        .expect("new element accepts its parsed children");
                }
                nodes.push(element);

                if let Some(closed) = close {
                    if tree.name(element) == Some(closed.as_str()) {
                        log::trace!(target: "markup.builder", "closing </{closed}>");
                    } else {
                        // mismatch: this close also terminates our caller
                        log::trace!(
                            target: "markup.builder",
                            "</{closed}> implicitly closes <{name}>",
                            name = tree.name(element).unwrap_or_default()
                        );
                        return Ok((nodes, Some(closed)));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::build_children;
    use crate::cursor::Cursor;
    use crate::error::ParseError;
    use dom::Tree;

    fn build(input: &str) -> (Tree, Vec<dom::NodeId>, Option<String>) {
        let mut cursor = Cursor::new(input);
        let mut tree = Tree::new();
        let (nodes, close) = build_children(&mut cursor, &mut tree).unwrap();
        (tree, nodes, close)
    }

    #[test]
    fn text_and_elements_interleave_in_order() {
        let (tree, nodes, close) = build("one<b />two");

        assert_eq!(close, None);
        assert_eq!(nodes.len(), 3);
        assert_eq!(tree.text(nodes[0]), Some("one"));
        assert_eq!(tree.name(nodes[1]), Some("b"));
        assert_eq!(tree.text(nodes[2]), Some("two"));
    }

    #[test]
    fn comments_are_dropped_but_consume_their_span() {
        let (tree, nodes, _) = build("a<!-- hidden -->b");

        assert_eq!(nodes.len(), 2);
        assert_eq!(tree.text(nodes[0]), Some("a"));
        assert_eq!(tree.text(nodes[1]), Some("b"));
    }

    #[test]
    fn matching_close_is_consumed_by_the_opener() {
        let (tree, nodes, close) = build("<div>x</div>after");

        // the </div> must not leak out of the nested level
        assert_eq!(close, None);
        assert_eq!(nodes.len(), 2);
        assert_eq!(tree.children(nodes[0]).len(), 1);
        assert_eq!(tree.text(nodes[1]), Some("after"));
    }

    #[test]
    fn close_tag_matching_is_case_sensitive() {
        // </DIV> does not match <div>, so it propagates to the top level
        // where it is swallowed; the div still keeps its children.
        let (tree, nodes, close) = build("<div>x</DIV>");

        assert_eq!(close, Some("DIV".to_string()));
        assert_eq!(nodes.len(), 1);
        assert_eq!(tree.children(nodes[0]).len(), 1);
    }

    #[test]
    fn unexpected_end_of_input_closes_open_elements() {
        let (tree, nodes, close) = build("<ul><li>one");

        assert_eq!(close, None);
        assert_eq!(nodes.len(), 1);
        let ul = nodes[0];
        let li = tree.children(ul)[0];
        assert_eq!(tree.name(li), Some("li"));
        assert_eq!(tree.text(tree.children(li)[0]), Some("one"));
    }

    #[test]
    fn stray_close_terminates_multiple_ancestors() {
        let (tree, nodes, close) = build("<a><b><c></a>tail");

        // </a> closes c and b implicitly, then a exactly; "tail" is a
        // sibling of a at this level.
        assert_eq!(close, None);
        assert_eq!(nodes.len(), 2);
        let a = nodes[0];
        assert_eq!(tree.name(a), Some("a"));
        let b = tree.children(a)[0];
        assert_eq!(tree.name(b), Some("b"));
        let c = tree.children(b)[0];
        assert_eq!(tree.name(c), Some("c"));
        assert!(tree.children(c).is_empty());
        assert_eq!(tree.text(nodes[1]), Some("tail"));
    }

    #[test]
    fn empty_tag_name_aborts_the_build() {
        let mut cursor = Cursor::new("<div><></div>");
        let mut tree = Tree::new();
        let result = build_children(&mut cursor, &mut tree);
        assert!(matches!(result, Err(ParseError::EmptyTag)));
    }

    #[test]
    fn deep_nesting_builds_without_issue() {
        let depth = 2_000;
        let mut input = String::new();
        for _ in 0..depth {
            input.push_str("<div>");
        }
        for _ in 0..depth {
            input.push_str("</div>");
        }

        let (tree, nodes, close) = build(&input);
        assert_eq!(close, None);
        assert_eq!(nodes.len(), 1);

        let mut current = nodes[0];
        let mut seen = 1;
        while let Some(&child) = tree.children(current).first() {
            seen += 1;
            current = child;
        }
        assert_eq!(seen, depth);
    }
}
