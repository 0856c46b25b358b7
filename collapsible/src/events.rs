//! Click and viewport event handling for collapsible groups.

use uitree::{ClickEvent, ClickTarget, EventResult, NodeId, Tree};
use viewport::{Device, Size, SizeObserver};

use crate::state::{CollapsibleContent, write_facets};

impl ClickTarget for CollapsibleContent {
    /// A click on a wired toggle flips that single item, leaving every other
    /// item untouched. The triggering interaction's default action is
    /// suppressed so toggling never navigates.
    fn dispatch_click(&self, target: NodeId, event: &mut ClickEvent) -> EventResult {
        if self.toggle_item(target) {
            event.prevent_default();
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl SizeObserver for CollapsibleContent {
    /// Crossing a category boundary re-applies that category's defaults,
    /// overwriting any manual per-item state. A resize within the same
    /// category only updates the tracked size.
    fn on_resize(&self, device: Device, size: Size) {
        let changed = match self.inner.write() {
            Ok(mut guard) => {
                let changed = guard.device != Some(device);
                guard.device = Some(device);
                guard.size = size;
                changed
            }
            Err(_) => return,
        };
        if changed {
            self.apply_defaults();
        }
    }
}

impl CollapsibleContent {
    /// Flip the open state of the item owning `toggle`.
    ///
    /// The body is not assumed to be the toggle's direct neighbor: the walk
    /// skips text siblings until the first element sibling. Returns whether
    /// a transition happened.
    fn toggle_item(&self, toggle: NodeId) -> bool {
        let (tree, index, was_open) = match self.inner.read() {
            Ok(guard) => match guard.toggles.iter().position(|t| *t == toggle) {
                Some(index) => (
                    guard.config.tree.clone(),
                    index,
                    guard.open.get(index).copied().unwrap_or(false),
                ),
                None => return false,
            },
            Err(_) => return false,
        };

        let Some(body) = next_element_sibling(&tree, toggle) else {
            log::warn!("[collapsible] toggle {toggle:?} has no element sibling, click dropped");
            return false;
        };

        let open = !was_open;
        write_facets(&tree, toggle, body, open);
        if let Ok(mut guard) = self.inner.write()
            && let Some(slot) = guard.open.get_mut(index)
        {
            *slot = open;
        }
        true
    }
}

/// First element sibling after `node`, skipping text nodes.
fn next_element_sibling(tree: &Tree, node: NodeId) -> Option<NodeId> {
    let mut current = tree.next_sibling(node);
    while let Some(id) = current {
        if tree.is_element(id) {
            return Some(id);
        }
        current = tree.next_sibling(id);
    }
    None
}
