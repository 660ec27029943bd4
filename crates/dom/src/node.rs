use crate::attrs::AttrList;
use crate::error::DomError;

/// Index of a node within its [`Tree`].
///
/// Ids are only meaningful for the tree that allocated them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the persisted tree.
///
/// Only elements and text survive parsing; comments are dropped before tree
/// construction. The parent link is a back-reference index, never an
/// ownership edge.
#[derive(Clone, Debug)]
pub enum Node {
    Element {
        /// Tag name, case preserved as written in the source.
        name: String,
        attributes: AttrList,
        children: Vec<NodeId>,
        parent: Option<NodeId>,
    },
    Text {
        /// Raw run of character data, entities left undecoded.
        text: String,
        parent: Option<NodeId>,
    },
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Element { parent, .. } | Node::Text { parent, .. } => *parent,
        }
    }

    fn set_parent(&mut self, new_parent: Option<NodeId>) {
        match self {
            Node::Element { parent, .. } | Node::Text { parent, .. } => *parent = new_parent,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }
}

/// Arena owning all nodes of a document.
///
/// Detached subtrees stay allocated until the tree is dropped; ids remain
/// valid for the lifetime of the tree.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("tree node count fits in u32"));
        self.nodes.push(node);
        id
    }

    /// Allocates a detached element node.
    pub fn new_element(&mut self, name: impl Into<String>, attributes: AttrList) -> NodeId {
        self.push(Node::Element {
            name: name.into(),
            attributes,
            children: Vec::new(),
            parent: None,
        })
    }

    /// Allocates a detached text node.
    pub fn new_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(Node::Text {
            text: text.into(),
            parent: None,
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of allocated nodes, including detached ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Element name, or `None` for text nodes.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            Node::Element { name, .. } => Some(name),
            Node::Text { .. } => None,
        }
    }

    /// Text content, or `None` for elements.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            Node::Text { text, .. } => Some(text),
            Node::Element { .. } => None,
        }
    }

    pub fn attributes(&self, id: NodeId) -> Option<&AttrList> {
        match self.get(id)? {
            Node::Element { attributes, .. } => Some(attributes),
            Node::Text { .. } => None,
        }
    }

    pub fn attributes_mut(&mut self, id: NodeId) -> Option<&mut AttrList> {
        match self.get_mut(id)? {
            Node::Element { attributes, .. } => Some(attributes),
            Node::Text { .. } => None,
        }
    }

    /// Shortcut for a single attribute value.
    pub fn attr(&self, id: NodeId, key: &str) -> Option<&str> {
        self.attributes(id)?.value(key)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(Node::Element { children, .. }) => children,
            _ => &[],
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent()
    }

    /// True if `id` is an element whose name matches `name`
    /// case-insensitively.
    pub fn is_named(&self, id: NodeId, name: &str) -> bool {
        self.name(id).is_some_and(|n| n.eq_ignore_ascii_case(name))
    }

    fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// This models a move: the child is first detached from any current
    /// parent. Appending to a text node or parenting a node under itself or
    /// one of its own descendants is rejected.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.nodes[parent.index()].is_element() {
            return Err(DomError::NotAnElement);
        }
        if parent == child || self.is_descendant_of(parent, child) {
            return Err(DomError::WouldCycle);
        }
        self.detach(child);
        if let Node::Element { children, .. } = &mut self.nodes[parent.index()] {
            children.push(child);
        }
        self.nodes[child.index()].set_parent(Some(parent));
        Ok(())
    }

    /// Detaches `id` from its parent, clearing the back-reference.
    /// A node without a parent is left untouched.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Node::Element { children, .. } = &mut self.nodes[parent.index()] {
            children.retain(|&c| c != id);
        }
        self.nodes[id.index()].set_parent(None);
    }

    /// Removes `child` from `parent`. Returns false when `child` is not a
    /// child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }
}
