//! Collapsible content groups for retained UI trees.
//!
//! A group binds to one root element, discovers `item`/`toggle`/`body`
//! triples beneath it by class marker, wires toggle clicks through a
//! [`uitree::ClickRouter`], and applies per-breakpoint default visibility
//! driven by a [`viewport::Viewport`] subscription. Open/closed state is
//! mirrored into an `open` class token and an ARIA attribute on both the
//! toggle (`aria-expanded`) and the body (`aria-hidden`), and the two never
//! disagree.
//!
//! Declarative attributes on the root element steer discovery:
//!
//! - `data-name` — group identifier; `"none"` or absent means ungrouped.
//!   Items declare membership with a matching `data-parent`.
//! - `data-visible-mobile` / `data-visible-tablet` / `data-visible-desktop`
//!   — `"true"` opens the group's items by default at that breakpoint;
//!   anything else (or absence) closes them.
//!
//! # Example
//!
//! ```
//! use collapsible::{CollapsibleContent, Config};
//! use uitree::{ClickEvent, ClickRouter, Element, MouseButton, Tree};
//! use viewport::{Size, Viewport};
//!
//! let tree = Tree::new();
//! let root = tree
//!     .mount(
//!         tree.root(),
//!         Element::new("section")
//!             .attr("data-name", "faq")
//!             .attr("data-visible-desktop", "true")
//!             .child(
//!                 Element::new("div")
//!                     .class("collapsible-content-item")
//!                     .attr("data-parent", "faq")
//!                     .child(
//!                         Element::new("a")
//!                             .class("collapsible-content-toggle")
//!                             .text("Shipping"),
//!                     )
//!                     .child(
//!                         Element::new("div")
//!                             .class("collapsible-content-body")
//!                             .text("3-5 business days."),
//!                     ),
//!             ),
//!     )
//!     .unwrap();
//!
//! let router = ClickRouter::new();
//! let viewport = Viewport::new(Size::new(200, 50)); // desktop
//! let group =
//!     CollapsibleContent::mount(Config::new(tree.clone(), root), &router, &viewport).unwrap();
//!
//! // desktop default opened the item
//! let toggle = group.toggles()[0];
//! assert_eq!(tree.attribute(toggle, "aria-expanded").as_deref(), Some("true"));
//! assert_eq!(tree.attribute(toggle, "aria-controls").as_deref(), Some("faq-collapsible-0"));
//!
//! // a click flips it closed
//! let mut click = ClickEvent::new(0, 0, MouseButton::Left);
//! router.dispatch(toggle, &mut click);
//! assert!(click.default_prevented());
//! assert_eq!(tree.attribute(toggle, "aria-expanded").as_deref(), Some("false"));
//! ```

mod config;
mod error;
mod events;
mod state;

pub use config::{Config, DEFAULT_BODY_CLASS, DEFAULT_ITEM_CLASS, DEFAULT_TOGGLE_CLASS};
pub use error::Error;
pub use state::CollapsibleContent;
