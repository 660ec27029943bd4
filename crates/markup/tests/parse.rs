//! End-to-end acceptance tests for the public parse surface.

use dom::filter::{attribute_equals, of_type, with_attribute};
use markup::{Document, ParseError, parse, parse_str};

fn doc(input: &str) -> Document {
    parse_str(input).unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
}

#[test]
fn self_closing_element_fidelity() {
    let doc = doc(r#"<img src="a.png" />"#);
    let root = doc.root();

    assert_eq!(doc.tree().name(root), Some("img"));
    assert_eq!(doc.tree().attr(root, "src"), Some("a.png"));
    assert_eq!(doc.tree().attributes(root).unwrap().len(), 1);
    assert!(doc.tree().children(root).is_empty());
}

#[test]
fn boolean_attribute_round_trips_without_a_value() {
    let doc = doc("<input disabled>");
    let root = doc.root();

    let attrs = doc.tree().attributes(root).unwrap();
    assert!(attrs.contains("disabled"));
    assert_eq!(attrs.value("disabled"), None);

    // serializing back must not add a spurious ="" suffix
    assert_eq!(doc.to_compact_string(), "<input disabled />");
}

#[test]
fn quote_aware_tokenization_keeps_embedded_gt() {
    let doc = doc(r#"<a title="a > b">x</a>"#);
    let root = doc.root();

    assert_eq!(doc.tree().name(root), Some("a"));
    assert_eq!(doc.tree().attr(root, "title"), Some("a > b"));
    assert_eq!(doc.tree().children(root).len(), 1);
}

#[test]
fn mixed_content_preserves_ordering_and_round_trips() {
    let input = "<p>This <b>is</b> a <i>test</i></p>";
    let doc = doc(input);
    let tree = doc.tree();
    let p = doc.root();

    let children = tree.children(p);
    assert_eq!(children.len(), 4);
    assert_eq!(tree.text(children[0]), Some("This "));
    assert_eq!(tree.name(children[1]), Some("b"));
    assert_eq!(tree.text(tree.children(children[1])[0]), Some("is"));
    assert_eq!(tree.text(children[2]), Some(" a "));
    assert_eq!(tree.name(children[3]), Some("i"));
    assert_eq!(tree.text(tree.children(children[3])[0]), Some("test"));

    assert_eq!(doc.to_compact_string(), input);
}

#[test]
fn mismatch_recovery_keeps_children_and_closes_ancestors() {
    let doc = doc("<a><b></a>");
    let tree = doc.tree();
    let a = doc.root();

    assert_eq!(tree.name(a), Some("a"));
    let children = tree.children(a);
    assert_eq!(children.len(), 1);
    assert_eq!(tree.name(children[0]), Some("b"));
    assert!(tree.children(children[0]).is_empty());
}

#[test]
fn compact_round_trip_reproduces_the_tree() {
    let original = doc(r#"<html lang="en"><head /><body id="b"><p>hi<br /></p></body></html>"#);
    let serialized = original.to_compact_string();
    let reparsed = doc(&serialized);

    assert_eq!(reparsed.to_compact_string(), serialized);
}

#[test]
fn indentation_does_not_change_element_structure() {
    let flat = doc("<html><head><title>t</title></head><body /></html>");
    let indented = doc("<html>\n  <head>\n    <title>t</title>\n  </head>\n  <body />\n</html>\n");

    fn shape(tree: &dom::Tree, id: dom::NodeId, out: &mut String) {
        if let Some(name) = tree.name(id) {
            out.push_str(name);
            out.push('(');
            for &child in tree.children(id) {
                shape(tree, child, out);
            }
            out.push(')');
        }
        // text nodes may differ in captured whitespace; skip them
    }

    let mut a = String::new();
    let mut b = String::new();
    shape(flat.tree(), flat.root(), &mut a);
    shape(indented.tree(), indented.root(), &mut b);
    assert_eq!(a, b);
}

#[test]
fn find_locates_a_nested_select() {
    let doc = doc(
        "<html><body><div><form><fieldset>\
         <select name=\"q\"><option>1</option></select>\
         </fieldset></form></div></body></html>",
    );

    let hits = doc.find(of_type("select"));
    assert_eq!(hits.len(), 1);
    assert_eq!(doc.tree().attr(hits[0], "name"), Some("q"));

    assert_eq!(doc.find(with_attribute("name")), hits);
    assert_eq!(doc.find(attribute_equals("name", "q")), hits);
    assert!(doc.find(of_type("table")).is_empty());
}

#[test]
fn empty_input_yields_failure() {
    for input in ["", "   ", "\n\t  \n"] {
        let err = parse_str(input).unwrap_err();
        assert!(matches!(err, ParseError::NoContent), "input {input:?}");
        assert_eq!(err.to_string(), "failed to parse content");
    }
}

#[test]
fn empty_tag_name_is_fatal() {
    let err = parse_str("<html><></html>").unwrap_err();
    assert!(matches!(err, ParseError::EmptyTag));
    assert_eq!(err.to_string(), "encountered empty tag");
}

#[test]
fn comments_never_reach_the_tree() {
    let doc = doc("<div><!-- note -->kept</div>");
    let tree = doc.tree();

    let children = tree.children(doc.root());
    assert_eq!(children.len(), 1);
    assert_eq!(tree.text(children[0]), Some("kept"));
}

#[test]
fn parse_reads_from_a_byte_source() {
    let bytes: &[u8] = b"<html><body>bytes</body></html>";
    let doc = parse(bytes).unwrap();
    assert_eq!(doc.to_compact_string(), "<html><body>bytes</body></html>");
}

#[test]
fn parse_honors_a_declared_charset() {
    // 0xE9 is e-acute in ISO-8859-1; as raw UTF-8 it would be replaced.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"<html><head><meta charset=\"ISO-8859-1\" /></head>");
    bytes.extend_from_slice(b"<body>caf\xE9</body></html>");

    let doc = parse(bytes.as_slice()).unwrap();
    let body = doc.find_first(of_type("body")).unwrap();
    let text = doc.tree().children(body)[0];
    assert_eq!(doc.tree().text(text), Some("caf\u{00E9}"));
}

#[test]
fn io_failure_is_wrapped_with_its_cause() {
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "peer went away",
            ))
        }
    }

    let err = parse(Broken).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
    assert!(err.to_string().contains("peer went away"));
}

#[test]
fn caller_can_mutate_the_returned_tree() {
    let mut doc = doc("<ul><li>one</li></ul>");
    let root = doc.root();

    let li = doc.tree_mut().new_element("li", dom::AttrList::new());
    let text = doc.tree_mut().new_text("two");
    doc.tree_mut().append_child(li, text).unwrap();
    doc.tree_mut().append_child(root, li).unwrap();

    assert_eq!(
        doc.to_compact_string(),
        "<ul><li>one</li><li>two</li></ul>"
    );
}

#[test]
fn stray_close_tolerates_out_of_order_nesting() {
    // end tag for a never-opened element inside an open one: closes <i>
    // implicitly, is swallowed once it reaches the top level
    let doc = doc("<p><i>x</wrong>y</p>");
    // </wrong> closes i and then p; "y" lands at the top level and is
    // dropped with everything after the root
    assert_eq!(doc.to_compact_string(), "<p><i>x</i></p>");
}
