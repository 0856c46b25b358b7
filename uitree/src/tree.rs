use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::element::{Child, Element};

/// Handle to a node stored in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeKind {
    Element {
        tag: String,
        attributes: HashMap<String, String>,
        classes: Vec<String>,
    },
    Text(String),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct TreeInner {
    nodes: Vec<Node>,
}

impl TreeInner {
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn insert(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(node) = self.node_mut(parent) {
            node.children.push(id);
        }
        id
    }

    fn mount(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.insert(
            parent,
            NodeKind::Element {
                tag: element.tag,
                attributes: element.attributes.into_iter().collect(),
                classes: element.classes,
            },
        );
        for child in element.children {
            match child {
                Child::Element(child) => {
                    self.mount(id, child);
                }
                Child::Text(content) => {
                    self.insert(id, NodeKind::Text(content));
                }
            }
        }
        id
    }

    fn collect_by_class(&self, scope: NodeId, class: &str, out: &mut Vec<NodeId>) {
        let Some(node) = self.node(scope) else {
            return;
        };
        for &child in &node.children {
            if let Some(NodeKind::Element { classes, .. }) = self.node(child).map(|n| &n.kind) {
                if classes.iter().any(|c| c == class) {
                    out.push(child);
                }
            }
            self.collect_by_class(child, class, out);
        }
    }
}

/// A retained UI tree behind a cheap-clone handle.
///
/// Nodes are either elements (tag, attributes, class list, children) or text.
/// All accessors are total: a stale or foreign [`NodeId`] reads as
/// absent and writes are dropped.
#[derive(Debug, Clone)]
pub struct Tree {
    inner: Arc<RwLock<TreeInner>>,
}

impl Tree {
    /// Create an empty tree containing only a synthetic root element.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TreeInner {
                nodes: vec![Node {
                    kind: NodeKind::Element {
                        tag: "root".to_string(),
                        attributes: HashMap::new(),
                        classes: Vec::new(),
                    },
                    parent: None,
                    children: Vec::new(),
                }],
            })),
        }
    }

    /// The synthetic root element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Mount a built [`Element`] fragment under `parent`.
    ///
    /// Returns the id of the fragment root, or `None` when `parent` does not
    /// exist in this tree.
    pub fn mount(&self, parent: NodeId, element: Element) -> Option<NodeId> {
        let mut guard = self.inner.write().ok()?;
        if guard.node(parent).is_none() {
            log::warn!("[uitree] mount target {parent:?} does not exist");
            return None;
        }
        Some(guard.mount(parent, element))
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.inner
            .read()
            .map(|guard| {
                matches!(
                    guard.node(id).map(|n| &n.kind),
                    Some(NodeKind::Element { .. })
                )
            })
            .unwrap_or(false)
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.inner
            .read()
            .map(|guard| matches!(guard.node(id).map(|n| &n.kind), Some(NodeKind::Text(_))))
            .unwrap_or(false)
    }

    /// Content of a text node.
    pub fn text(&self, id: NodeId) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            match guard.node(id).map(|n| &n.kind) {
                Some(NodeKind::Text(content)) => Some(content.clone()),
                _ => None,
            }
        })
    }

    /// Tag of an element node.
    pub fn tag(&self, id: NodeId) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            match guard.node(id).map(|n| &n.kind) {
                Some(NodeKind::Element { tag, .. }) => Some(tag.clone()),
                _ => None,
            }
        })
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.node(id).and_then(|n| n.parent))
    }

    /// Children in insertion order, elements and text nodes alike.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .node(id)
                    .map(|n| n.children.clone())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// The next sibling of any kind, element or text.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.inner.read().ok().and_then(|guard| {
            let parent = guard.node(id).and_then(|n| n.parent)?;
            let siblings = &guard.node(parent)?.children;
            let position = siblings.iter().position(|s| *s == id)?;
            siblings.get(position + 1).copied()
        })
    }

    /// Read an attribute of an element node.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            match guard.node(id).map(|n| &n.kind) {
                Some(NodeKind::Element { attributes, .. }) => attributes.get(name).cloned(),
                _ => None,
            }
        })
    }

    /// Set an attribute on an element node. A no-op on text or absent nodes.
    pub fn set_attribute(&self, id: NodeId, name: &str, value: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(NodeKind::Element { attributes, .. }) =
                guard.node_mut(id).map(|n| &mut n.kind)
            {
                attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.inner
            .read()
            .map(|guard| match guard.node(id).map(|n| &n.kind) {
                Some(NodeKind::Element { classes, .. }) => classes.iter().any(|c| c == class),
                _ => false,
            })
            .unwrap_or(false)
    }

    /// Append a class token, unless the exact token is already present.
    pub fn add_class(&self, id: NodeId, class: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(NodeKind::Element { classes, .. }) = guard.node_mut(id).map(|n| &mut n.kind)
            {
                if !classes.iter().any(|c| c == class) {
                    classes.push(class.to_string());
                }
            }
        }
    }

    /// Remove every occurrence of a class token.
    pub fn remove_class(&self, id: NodeId, class: &str) {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(NodeKind::Element { classes, .. }) = guard.node_mut(id).map(|n| &mut n.kind)
            {
                classes.retain(|c| c != class);
            }
        }
    }

    /// The space-joined class list of an element node.
    pub fn class_name(&self, id: NodeId) -> String {
        self.inner
            .read()
            .map(|guard| match guard.node(id).map(|n| &n.kind) {
                Some(NodeKind::Element { classes, .. }) => classes.join(" "),
                _ => String::new(),
            })
            .unwrap_or_default()
    }

    /// All element descendants of `scope` (exclusive) carrying the class
    /// token, in document (depth-first preorder) order.
    pub fn find_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.inner
            .read()
            .map(|guard| {
                let mut out = Vec::new();
                guard.collect_by_class(scope, class, &mut out);
                out
            })
            .unwrap_or_default()
    }

    /// First element descendant of `scope` carrying the class token.
    pub fn first_by_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.find_by_class(scope, class).into_iter().next()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
