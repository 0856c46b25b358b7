//! Drives a collapsible FAQ group without a renderer: builds the document,
//! clicks toggles through the router, and crosses breakpoints through the
//! viewport service, printing the wire state after each step.
//!
//! Run with `cargo run --example demo`; debug logs land in `collapsible-demo.log`.

use std::fs::File;

use collapsible::{CollapsibleContent, Config};
use simplelog::{LevelFilter, WriteLogger};
use uitree::{ClickEvent, ClickRouter, Element, MouseButton, Tree};
use viewport::{Size, Viewport};

fn faq_item(question: &str, answer: &str) -> Element {
    Element::new("div")
        .class("collapsible-content-item")
        .attr("data-parent", "faq")
        .child(
            Element::new("a")
                .class("collapsible-content-toggle")
                .text(question),
        )
        .text("\n  ")
        .child(
            Element::new("div")
                .class("collapsible-content-body")
                .text(answer),
        )
}

fn print_group(label: &str, tree: &Tree, group: &CollapsibleContent) {
    println!("-- {label}");
    for (i, (toggle, body)) in group.toggles().iter().zip(group.bodies()).enumerate() {
        let question = tree
            .children(*toggle)
            .first()
            .and_then(|child| tree.text(*child))
            .unwrap_or_default();
        println!(
            "   [{i}] {} {question}  (aria-expanded={}, aria-hidden={})",
            if group.is_open(i) { "v" } else { ">" },
            tree.attribute(*toggle, "aria-expanded").unwrap_or_default(),
            tree.attribute(body, "aria-hidden").unwrap_or_default(),
        );
    }
}

fn main() {
    let log_file = File::create("collapsible-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
        .expect("Failed to initialize logger");

    let tree = Tree::new();
    let root = tree
        .mount(
            tree.root(),
            Element::new("section")
                .attr("data-name", "faq")
                .attr("data-visible-desktop", "true")
                .child(faq_item("How long does shipping take?", "3-5 business days."))
                .child(faq_item("Can I return an item?", "Within 30 days, yes."))
                .child(faq_item("Do you ship abroad?", "To most countries.")),
        )
        .expect("mount under the tree root");

    let router = ClickRouter::new();
    let viewport = Viewport::new(Size::new(200, 50));
    let group = CollapsibleContent::mount(Config::new(tree.clone(), root), &router, &viewport)
        .expect("root element exists");

    print_group("mounted on desktop (default open)", &tree, &group);

    let mut click = ClickEvent::new(0, 0, MouseButton::Left);
    router.dispatch(group.toggles()[1], &mut click);
    print_group("clicked the second toggle", &tree, &group);

    viewport.update(60, 20);
    print_group("resized to mobile (default closed)", &tree, &group);

    let mut click = ClickEvent::new(0, 0, MouseButton::Left);
    router.dispatch(group.toggles()[0], &mut click);
    print_group("opened the first item by hand", &tree, &group);

    viewport.update(70, 20);
    print_group("resized within mobile (state kept)", &tree, &group);

    viewport.update(200, 50);
    print_group("back on desktop (defaults reapplied)", &tree, &group);

    group.detach();
    println!("-- detached: {} viewport observers left", viewport.observer_count());
}
