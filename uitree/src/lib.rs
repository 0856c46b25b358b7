pub mod element;
pub mod event;
pub mod tree;

pub use element::Element;
pub use event::{ClickEvent, ClickRouter, ClickTarget, EventResult, Modifiers, MouseButton};
pub use tree::{NodeId, Tree};
