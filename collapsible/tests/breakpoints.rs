use collapsible::{CollapsibleContent, Config};
use uitree::{ClickEvent, ClickRouter, Element, MouseButton, NodeId, Tree};
use viewport::{Device, Size, Viewport};

fn entry() -> Element {
    Element::new("div")
        .class("collapsible-content-item")
        .child(
            Element::new("a")
                .class("collapsible-content-toggle")
                .text("toggle"),
        )
        .text("\n  ")
        .child(
            Element::new("div")
                .class("collapsible-content-body")
                .text("body"),
        )
}

fn click(router: &ClickRouter, toggle: NodeId) {
    let mut event = ClickEvent::new(0, 0, MouseButton::Left);
    router.dispatch(toggle, &mut event);
}

/// Root opening on desktop, closed elsewhere, with two items.
fn fixture() -> (Tree, ClickRouter, Viewport, CollapsibleContent) {
    let tree = Tree::new();
    let root = tree
        .mount(
            tree.root(),
            Element::new("section")
                .attr("data-visible-desktop", "true")
                .child(entry())
                .child(entry()),
        )
        .unwrap();
    let router = ClickRouter::new();
    let viewport = Viewport::new(Size::new(200, 50));
    let group = CollapsibleContent::mount(Config::new(tree.clone(), root), &router, &viewport)
        .expect("valid root");
    (tree, router, viewport, group)
}

// ============================================================================
// Category boundaries
// ============================================================================

#[test]
fn test_category_change_resets_manual_state() {
    let (tree, router, viewport, group) = fixture();
    assert!(group.is_open(0) && group.is_open(1));

    // close the first item by hand
    click(&router, group.toggles()[0]);
    assert!(!group.is_open(0));

    // crossing into mobile applies the mobile default (closed) everywhere
    viewport.update(60, 20);
    assert_eq!(group.device(), Some(Device::Mobile));
    assert!(!group.is_open(0) && !group.is_open(1));

    // crossing back resets to the desktop default, manual state is gone
    viewport.update(200, 50);
    assert!(group.is_open(0) && group.is_open(1));
    assert_eq!(
        tree.attribute(group.toggles()[0], "aria-expanded").as_deref(),
        Some("true")
    );
}

#[test]
fn test_same_category_resize_preserves_manual_state() {
    let (tree, router, viewport, group) = fixture();

    click(&router, group.toggles()[0]);
    assert!(!group.is_open(0));
    assert!(group.is_open(1));

    // still desktop, only the tracked size moves
    viewport.update(240, 60);
    assert_eq!(group.device(), Some(Device::Desktop));
    assert_eq!(group.size(), Size::new(240, 60));
    assert!(!group.is_open(0));
    assert!(group.is_open(1));
    assert_eq!(
        tree.attribute(group.bodies()[0], "aria-hidden").as_deref(),
        Some("true")
    );
}

#[test]
fn test_tablet_uses_its_own_default() {
    let tree = Tree::new();
    let root = tree
        .mount(
            tree.root(),
            Element::new("section")
                .attr("data-visible-tablet", "true")
                .child(entry()),
        )
        .unwrap();
    let router = ClickRouter::new();
    let viewport = Viewport::new(Size::new(200, 50));
    let group = CollapsibleContent::mount(Config::new(tree.clone(), root), &router, &viewport)
        .expect("valid root");

    // desktop default is closed here
    assert!(!group.is_open(0));

    viewport.update(100, 30);
    assert_eq!(group.device(), Some(Device::Tablet));
    assert!(group.is_open(0));

    viewport.update(60, 20);
    assert!(!group.is_open(0));
}

#[test]
fn test_size_is_tracked_across_updates() {
    let (_, _, viewport, group) = fixture();
    assert_eq!(group.size(), Size::new(200, 50));
    viewport.update(220, 55);
    viewport.update(230, 40);
    assert_eq!(group.size(), Size::new(230, 40));
}

// ============================================================================
// Multiple groups
// ============================================================================

#[test]
fn test_disjoint_groups_do_not_interact() {
    let tree = Tree::new();
    let first_root = tree
        .mount(
            tree.root(),
            Element::new("section")
                .attr("data-name", "a")
                .attr("data-visible-desktop", "true")
                .child(entry().attr("data-parent", "a")),
        )
        .unwrap();
    let second_root = tree
        .mount(
            tree.root(),
            Element::new("section")
                .attr("data-name", "b")
                .child(entry().attr("data-parent", "b")),
        )
        .unwrap();

    let router = ClickRouter::new();
    let viewport = Viewport::new(Size::new(200, 50));
    let first =
        CollapsibleContent::mount(Config::new(tree.clone(), first_root), &router, &viewport)
            .expect("valid root");
    let second =
        CollapsibleContent::mount(Config::new(tree.clone(), second_root), &router, &viewport)
            .expect("valid root");

    assert!(first.is_open(0));
    assert!(!second.is_open(0));

    // toggling in one group leaves the other alone
    click(&router, second.toggles()[0]);
    assert!(first.is_open(0));
    assert!(second.is_open(0));

    // a breakpoint change resets each group to its own defaults
    viewport.update(60, 20);
    viewport.update(200, 50);
    assert!(first.is_open(0));
    assert!(!second.is_open(0));
}
