//! Group configuration.

use uitree::{NodeId, Tree};

/// Default class marker for body panels.
pub const DEFAULT_BODY_CLASS: &str = "collapsible-content-body";
/// Default class marker for item containers.
pub const DEFAULT_ITEM_CLASS: &str = "collapsible-content-item";
/// Default class marker for toggle controls.
pub const DEFAULT_TOGGLE_CLASS: &str = "collapsible-content-toggle";

/// Configuration for one collapsible group.
///
/// Holds the tree, the root element the group is bound to, and the class
/// markers used during discovery. Class markers default to the
/// `collapsible-content-*` family; `with_*` methods override them.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) tree: Tree,
    pub(crate) element: NodeId,
    pub(crate) body_container_class: String,
    pub(crate) item_container_class: String,
    pub(crate) toggle_container_class: String,
}

impl Config {
    /// Configuration for the group rooted at `element`, with default class
    /// markers.
    pub fn new(tree: Tree, element: NodeId) -> Self {
        Self {
            tree,
            element,
            body_container_class: DEFAULT_BODY_CLASS.to_string(),
            item_container_class: DEFAULT_ITEM_CLASS.to_string(),
            toggle_container_class: DEFAULT_TOGGLE_CLASS.to_string(),
        }
    }

    pub fn with_body_container_class(mut self, class: impl Into<String>) -> Self {
        self.body_container_class = class.into();
        self
    }

    pub fn with_item_container_class(mut self, class: impl Into<String>) -> Self {
        self.item_container_class = class.into();
        self
    }

    pub fn with_toggle_container_class(mut self, class: impl Into<String>) -> Self {
        self.toggle_container_class = class.into();
        self
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn body_container_class(&self) -> &str {
        &self.body_container_class
    }

    pub fn item_container_class(&self) -> &str {
        &self.item_container_class
    }

    pub fn toggle_container_class(&self) -> &str {
        &self.toggle_container_class
    }
}
