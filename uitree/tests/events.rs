use std::sync::{Arc, Mutex};

use uitree::{ClickEvent, ClickRouter, ClickTarget, Element, EventResult, MouseButton, NodeId, Tree};

/// Records every click it receives.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<NodeId>>,
}

impl ClickTarget for Recorder {
    fn dispatch_click(&self, target: NodeId, event: &mut ClickEvent) -> EventResult {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(target);
        }
        event.prevent_default();
        EventResult::Consumed
    }
}

fn two_buttons(tree: &Tree) -> (NodeId, NodeId) {
    let root = tree
        .mount(
            tree.root(),
            Element::new("div")
                .child(Element::new("button"))
                .child(Element::new("button")),
        )
        .unwrap();
    let kids = tree.children(root);
    (kids[0], kids[1])
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_dispatch_reaches_registered_target() {
    let tree = Tree::new();
    let (first, second) = two_buttons(&tree);
    let router = ClickRouter::new();
    let recorder = Arc::new(Recorder::default());
    router.register(first, recorder.clone());

    let mut event = ClickEvent::new(3, 1, MouseButton::Left);
    assert_eq!(router.dispatch(first, &mut event), EventResult::Consumed);
    assert!(event.default_prevented());
    assert_eq!(*recorder.seen.lock().unwrap(), vec![first]);

    // nothing is registered for the second button
    let mut event = ClickEvent::new(3, 2, MouseButton::Left);
    assert_eq!(router.dispatch(second, &mut event), EventResult::Ignored);
    assert!(!event.default_prevented());
}

#[test]
fn test_unregister_stops_dispatch() {
    let tree = Tree::new();
    let (first, _) = two_buttons(&tree);
    let router = ClickRouter::new();
    router.register(first, Arc::new(Recorder::default()));

    assert!(router.is_registered(first));
    assert!(router.unregister(first));
    assert!(!router.unregister(first));

    let mut event = ClickEvent::new(0, 0, MouseButton::Left);
    assert_eq!(router.dispatch(first, &mut event), EventResult::Ignored);
}

#[test]
fn test_register_replaces_previous_target() {
    let tree = Tree::new();
    let (first, _) = two_buttons(&tree);
    let router = ClickRouter::new();
    let old = Arc::new(Recorder::default());
    let new = Arc::new(Recorder::default());
    router.register(first, old.clone());
    router.register(first, new.clone());

    let mut event = ClickEvent::new(0, 0, MouseButton::Left);
    router.dispatch(first, &mut event);
    assert!(old.seen.lock().unwrap().is_empty());
    assert_eq!(new.seen.lock().unwrap().len(), 1);
}

#[test]
fn test_clones_share_one_registry() {
    let tree = Tree::new();
    let (first, _) = two_buttons(&tree);
    let router = ClickRouter::new();
    let clone = router.clone();
    let recorder = Arc::new(Recorder::default());
    router.register(first, recorder.clone());

    let mut event = ClickEvent::new(0, 0, MouseButton::Left);
    assert_eq!(clone.dispatch(first, &mut event), EventResult::Consumed);
}

// ============================================================================
// Reentrancy
// ============================================================================

/// Unregisters itself from the router when clicked.
struct OneShot {
    router: ClickRouter,
}

impl ClickTarget for OneShot {
    fn dispatch_click(&self, target: NodeId, _event: &mut ClickEvent) -> EventResult {
        self.router.unregister(target);
        EventResult::Consumed
    }
}

#[test]
fn test_target_may_unregister_during_dispatch() {
    let tree = Tree::new();
    let (first, _) = two_buttons(&tree);
    let router = ClickRouter::new();
    router.register(
        first,
        Arc::new(OneShot {
            router: router.clone(),
        }),
    );

    let mut event = ClickEvent::new(0, 0, MouseButton::Left);
    assert_eq!(router.dispatch(first, &mut event), EventResult::Consumed);
    assert!(!router.is_registered(first));

    let mut event = ClickEvent::new(0, 0, MouseButton::Left);
    assert_eq!(router.dispatch(first, &mut event), EventResult::Ignored);
}
