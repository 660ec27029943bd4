//! Predicate-based search over a subtree.
//!
//! [`find`] walks the subtree in pre-order (self included) and returns every
//! node the predicate accepts. The constructors below cover the common
//! name/attribute lookups; anything else can be expressed as a closure over
//! `(&Tree, NodeId)`.

use crate::node::{NodeId, Tree};

/// Collects all nodes under `start` (pre-order, `start` included) matching
/// the predicate.
pub fn find<P>(tree: &Tree, start: NodeId, predicate: P) -> Vec<NodeId>
where
    P: Fn(&Tree, NodeId) -> bool,
{
    let mut out = Vec::new();
    walk(tree, start, &predicate, &mut out);
    out
}

/// First match in pre-order, if any.
pub fn find_first<P>(tree: &Tree, start: NodeId, predicate: P) -> Option<NodeId>
where
    P: Fn(&Tree, NodeId) -> bool,
{
    find(tree, start, predicate).into_iter().next()
}

fn walk<P>(tree: &Tree, id: NodeId, predicate: &P, out: &mut Vec<NodeId>)
where
    P: Fn(&Tree, NodeId) -> bool,
{
    if predicate(tree, id) {
        out.push(id);
    }
    for &child in tree.children(id) {
        walk(tree, child, predicate, out);
    }
}

/// Matches elements whose name equals `name`, case-insensitively.
pub fn of_type(name: impl Into<String>) -> impl Fn(&Tree, NodeId) -> bool {
    let name = name.into();
    move |tree, id| tree.is_named(id, &name)
}

/// Matches elements carrying `key`, with or without a value.
pub fn with_attribute(key: impl Into<String>) -> impl Fn(&Tree, NodeId) -> bool {
    let key = key.into();
    move |tree, id| tree.attributes(id).is_some_and(|a| a.contains(&key))
}

/// Matches elements whose `key` attribute equals `value` exactly.
pub fn attribute_equals(
    key: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&Tree, NodeId) -> bool {
    let key = key.into();
    let value = value.into();
    move |tree, id| tree.attr(id, &key) == Some(value.as_str())
}

/// Matches elements whose `key` attribute contains `value` as a substring.
pub fn attribute_contains(
    key: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&Tree, NodeId) -> bool {
    let key = key.into();
    let value = value.into();
    move |tree, id| tree.attr(id, &key).is_some_and(|v| v.contains(&value))
}

/// Matches elements with a space-separated `key` attribute containing the
/// token `value`, e.g. `class="top left"` matched by `("class", "left")`.
pub fn attribute_has(
    key: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&Tree, NodeId) -> bool {
    let key = key.into();
    let value = value.into();
    move |tree, id| {
        tree.attr(id, &key)
            .is_some_and(|v| v.split(' ').any(|token| token == value))
    }
}

/// Matches elements whose `key` attribute starts with `value`.
pub fn attribute_starts_with(
    key: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&Tree, NodeId) -> bool {
    let key = key.into();
    let value = value.into();
    move |tree, id| tree.attr(id, &key).is_some_and(|v| v.starts_with(&value))
}

/// Matches elements whose `key` attribute ends with `value`.
pub fn attribute_ends_with(
    key: impl Into<String>,
    value: impl Into<String>,
) -> impl Fn(&Tree, NodeId) -> bool {
    let key = key.into();
    let value = value.into();
    move |tree, id| tree.attr(id, &key).is_some_and(|v| v.ends_with(&value))
}
