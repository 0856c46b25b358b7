/// A child of an [`Element`] under construction.
#[derive(Debug, Clone)]
pub(crate) enum Child {
    Element(Element),
    Text(String),
}

/// A detached element description.
///
/// Built fluently and mounted into a [`Tree`](crate::Tree) in one call:
///
/// ```
/// use uitree::{Element, Tree};
///
/// let tree = Tree::new();
/// let root = tree.root();
/// let panel = tree.mount(
///     root,
///     Element::new("section")
///         .class("panel")
///         .attr("data-name", "faq")
///         .child(Element::new("p").text("hello")),
/// );
/// assert!(panel.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) classes: Vec<String>,
    pub(crate) children: Vec<Child>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class token.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append an element child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append several element children.
    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(new_children.into_iter().map(Child::Element));
        self
    }

    /// Append a text child.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Child::Text(content.into()));
        self
    }
}
