//! Collapsible group state.

use std::sync::{Arc, RwLock};

use uitree::{ClickRouter, NodeId, Tree};
use viewport::{Device, Size, SubscriberId, Viewport};

use crate::config::Config;
use crate::error::Error;

pub(crate) const ATTR_NAME: &str = "data-name";
pub(crate) const ATTR_PARENT: &str = "data-parent";
pub(crate) const ATTR_VISIBLE_MOBILE: &str = "data-visible-mobile";
pub(crate) const ATTR_VISIBLE_TABLET: &str = "data-visible-tablet";
pub(crate) const ATTR_VISIBLE_DESKTOP: &str = "data-visible-desktop";
pub(crate) const ARIA_EXPANDED: &str = "aria-expanded";
pub(crate) const ARIA_HIDDEN: &str = "aria-hidden";
pub(crate) const ARIA_CONTROLS: &str = "aria-controls";
pub(crate) const OPEN_CLASS: &str = "open";

/// Group-key value meaning "no grouping".
const NONE_SENTINEL: &str = "none";

/// Per-breakpoint default visibility, read once from the root element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DefaultVisibility {
    pub(crate) mobile: bool,
    pub(crate) tablet: bool,
    pub(crate) desktop: bool,
}

impl DefaultVisibility {
    fn for_device(&self, device: Device) -> bool {
        match device {
            Device::Mobile => self.mobile,
            Device::Tablet => self.tablet,
            Device::Desktop => self.desktop,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) config: Config,
    pub(crate) router: ClickRouter,
    pub(crate) viewport: Viewport,
    /// Normalized group key, read once at construction and stable for the
    /// group's lifetime; `None` covers both an absent `data-name` and the
    /// literal `"none"` sentinel.
    pub(crate) group_key: Option<String>,
    pub(crate) items: Vec<NodeId>,
    pub(crate) toggles: Vec<NodeId>,
    pub(crate) bodies: Vec<NodeId>,
    /// Open flag per item; the four wire facets serialize from this.
    pub(crate) open: Vec<bool>,
    pub(crate) defaults: DefaultVisibility,
    /// Unknown until `init` consults the viewport service.
    pub(crate) device: Option<Device>,
    pub(crate) size: Size,
    pub(crate) subscription: Option<SubscriberId>,
}

/// A collapsible group bound to one root element.
///
/// Discovers item/toggle/body triples beneath the root, wires toggle clicks,
/// applies per-breakpoint default visibility, and keeps the `open` class
/// markers and ARIA attributes of every item in lockstep.
///
/// Cheap to clone; all clones share one group. The click router and viewport
/// service hold clones of the group while it is wired, so dropping the last
/// caller-side handle does not tear it down — call
/// [`detach`](CollapsibleContent::detach) for that.
///
/// # Example
///
/// ```
/// use collapsible::{CollapsibleContent, Config};
/// use uitree::{ClickRouter, Element, Tree};
/// use viewport::{Size, Viewport};
///
/// let tree = Tree::new();
/// let root = tree
///     .mount(
///         tree.root(),
///         Element::new("section").attr("data-visible-desktop", "true").child(
///             Element::new("div")
///                 .class("collapsible-content-item")
///                 .child(Element::new("a").class("collapsible-content-toggle").text("More"))
///                 .child(Element::new("div").class("collapsible-content-body").text("...")),
///         ),
///     )
///     .unwrap();
///
/// let router = ClickRouter::new();
/// let viewport = Viewport::new(Size::new(200, 50));
/// let group =
///     CollapsibleContent::mount(Config::new(tree.clone(), root), &router, &viewport).unwrap();
///
/// assert_eq!(group.len(), 1);
/// assert!(group.is_open(0));
/// ```
#[derive(Debug)]
pub struct CollapsibleContent {
    pub(crate) inner: Arc<RwLock<Inner>>,
}

impl CollapsibleContent {
    /// Create a group without initializing it.
    ///
    /// Nothing is discovered and no subscriptions are taken until the caller
    /// invokes [`init`](Self::init) (or [`render`](Self::render) for
    /// discovery without viewport tracking).
    pub fn new(config: Config, router: &ClickRouter, viewport: &Viewport) -> Result<Self, Error> {
        if !config.tree.is_element(config.element) {
            return Err(Error::MissingRootElement);
        }
        let group_key = normalize_key(config.tree.attribute(config.element, ATTR_NAME));
        Ok(Self {
            inner: Arc::new(RwLock::new(Inner {
                config,
                router: router.clone(),
                viewport: viewport.clone(),
                group_key,
                items: Vec::new(),
                toggles: Vec::new(),
                bodies: Vec::new(),
                open: Vec::new(),
                defaults: DefaultVisibility::default(),
                device: None,
                size: Size::default(),
                subscription: None,
            })),
        })
    }

    /// Create a group and initialize it immediately.
    pub fn mount(
        config: Config,
        router: &ClickRouter,
        viewport: &Viewport,
    ) -> Result<Self, Error> {
        let group = Self::new(config, router, viewport)?;
        group.init();
        Ok(group)
    }

    /// Subscribe to viewport notifications and run the render pipeline.
    ///
    /// Idempotent with respect to the subscription: calling `init` again
    /// re-renders without stacking another viewport subscription.
    pub fn init(&self) {
        let (viewport, subscribed) = match self.inner.read() {
            Ok(guard) => (guard.viewport.clone(), guard.subscription.is_some()),
            Err(_) => return,
        };
        if let Ok(mut guard) = self.inner.write() {
            guard.device = Some(viewport.device());
            guard.size = viewport.size();
        }
        if !subscribed {
            let id = viewport.track_size(Arc::new(self.clone()));
            if let Ok(mut guard) = self.inner.write() {
                guard.subscription = Some(id);
            }
        }
        self.render();
    }

    /// Re-run the full discovery and default-application pipeline.
    pub fn render(&self) {
        self.discover();
        self.apply_defaults();
    }

    /// Drop the viewport subscription and unwire every toggle.
    ///
    /// The discovered state stays readable; `init` brings the group back.
    pub fn detach(&self) {
        let (viewport, router, subscription, toggles) = match self.inner.read() {
            Ok(guard) => (
                guard.viewport.clone(),
                guard.router.clone(),
                guard.subscription,
                guard.toggles.clone(),
            ),
            Err(_) => return,
        };
        if let Some(id) = subscription {
            viewport.untrack(id);
        }
        for toggle in toggles {
            router.unregister(toggle);
        }
        if let Ok(mut guard) = self.inner.write() {
            guard.subscription = None;
        }
    }

    fn discover(&self) {
        let (tree, router, root, group_key, previous, item_class, toggle_class, body_class) =
            match self.inner.read() {
                Ok(guard) => (
                    guard.config.tree.clone(),
                    guard.router.clone(),
                    guard.config.element,
                    guard.group_key.clone(),
                    guard.toggles.clone(),
                    guard.config.item_container_class.clone(),
                    guard.config.toggle_container_class.clone(),
                    guard.config.body_container_class.clone(),
                ),
                Err(_) => return,
            };

        // re-discovery must not stack click registrations
        for toggle in previous {
            router.unregister(toggle);
        }

        let mut matched = Vec::new();
        for item in tree.find_by_class(root, &item_class) {
            if normalize_key(tree.attribute(item, ATTR_PARENT)) == group_key {
                matched.push(item);
            }
        }

        let defaults = DefaultVisibility {
            mobile: flag(tree.attribute(root, ATTR_VISIBLE_MOBILE)),
            tablet: flag(tree.attribute(root, ATTR_VISIBLE_TABLET)),
            desktop: flag(tree.attribute(root, ATTR_VISIBLE_DESKTOP)),
        };

        let mut items = Vec::new();
        let mut toggles = Vec::new();
        let mut bodies = Vec::new();
        for item in matched {
            let toggle = tree.first_by_class(item, &toggle_class);
            let body = tree.first_by_class(item, &body_class);
            match (toggle, body) {
                (Some(toggle), Some(body)) => {
                    items.push(item);
                    toggles.push(toggle);
                    bodies.push(body);
                }
                (None, _) => {
                    log::warn!("[collapsible] item {item:?} has no toggle, skipped");
                }
                (Some(_), None) => {
                    log::warn!("[collapsible] item {item:?} has no body, skipped");
                }
            }
        }

        for (i, (&toggle, &body)) in toggles.iter().zip(bodies.iter()).enumerate() {
            let linkage = match &group_key {
                Some(key) => format!("{key}-collapsible-{i}"),
                None => format!("collapsible-{i}"),
            };
            tree.add_class(body, &linkage);
            tree.set_attribute(toggle, ARIA_CONTROLS, &linkage);
            router.register(toggle, Arc::new(self.clone()));
        }

        log::debug!(
            "[collapsible] group {group_key:?}: {} item(s) discovered",
            items.len()
        );

        if let Ok(mut guard) = self.inner.write() {
            guard.open = vec![false; items.len()];
            guard.items = items;
            guard.toggles = toggles;
            guard.bodies = bodies;
            guard.defaults = defaults;
        }
    }

    /// Apply the current breakpoint's default visibility to every item.
    pub(crate) fn apply_defaults(&self) {
        let (tree, toggles, bodies, defaults, device) = match self.inner.read() {
            Ok(guard) => (
                guard.config.tree.clone(),
                guard.toggles.clone(),
                guard.bodies.clone(),
                guard.defaults,
                guard.device,
            ),
            Err(_) => return,
        };
        let Some(device) = device else {
            log::debug!("[collapsible] no device category yet, defaults not applied");
            return;
        };
        let visible = defaults.for_device(device);
        for (&toggle, &body) in toggles.iter().zip(bodies.iter()) {
            write_facets(&tree, toggle, body, visible);
        }
        if let Ok(mut guard) = self.inner.write() {
            guard.open = vec![visible; guard.toggles.len()];
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Item elements in document order.
    pub fn items(&self) -> Vec<NodeId> {
        self.inner
            .read()
            .map(|guard| guard.items.clone())
            .unwrap_or_default()
    }

    /// Toggle controls, index-aligned with [`items`](Self::items).
    pub fn toggles(&self) -> Vec<NodeId> {
        self.inner
            .read()
            .map(|guard| guard.toggles.clone())
            .unwrap_or_default()
    }

    /// Body panels, index-aligned with [`items`](Self::items).
    pub fn bodies(&self) -> Vec<NodeId> {
        self.inner
            .read()
            .map(|guard| guard.bodies.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the item at `index` is open. Out-of-range reads as closed.
    pub fn is_open(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|guard| guard.open.get(index).copied().unwrap_or(false))
            .unwrap_or(false)
    }

    /// The normalized group key, `None` when ungrouped.
    pub fn group_key(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.group_key.clone())
    }

    /// The tracked device category, `None` before `init`.
    pub fn device(&self) -> Option<Device> {
        self.inner.read().ok().and_then(|guard| guard.device)
    }

    /// The last viewport size seen.
    pub fn size(&self) -> Size {
        self.inner
            .read()
            .map(|guard| guard.size)
            .unwrap_or_default()
    }
}

impl Clone for CollapsibleContent {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Write all four facets of one item from its open flag: toggle
/// `aria-expanded` and `open` class, body `aria-hidden` and `open` class.
pub(crate) fn write_facets(tree: &Tree, toggle: NodeId, body: NodeId, open: bool) {
    tree.set_attribute(toggle, ARIA_EXPANDED, bool_str(open));
    if open {
        tree.add_class(toggle, OPEN_CLASS);
    } else {
        tree.remove_class(toggle, OPEN_CLASS);
    }
    tree.set_attribute(body, ARIA_HIDDEN, bool_str(!open));
    if open {
        tree.add_class(body, OPEN_CLASS);
    } else {
        tree.remove_class(body, OPEN_CLASS);
    }
}

/// Attribute absent and the literal `"none"` both mean "no grouping".
fn normalize_key(attr: Option<String>) -> Option<String> {
    attr.filter(|value| value != NONE_SENTINEL)
}

fn flag(attr: Option<String>) -> bool {
    attr.as_deref() == Some("true")
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
