use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::tree::NodeId;

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// A click delivered to a [`ClickTarget`].
///
/// Carries a cancelable default action: a handler that fully consumes the
/// click calls [`prevent_default`](Self::prevent_default) so the event source
/// skips whatever it would otherwise do with it (follow a link, move focus).
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(x: u16, y: u16, button: MouseButton) -> Self {
        Self {
            x,
            y,
            button,
            modifiers: Modifiers::default(),
            default_prevented: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Suppress the event source's default action for this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Outcome of dispatching an event to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The target handled the event.
    Consumed,
    /// The target did not handle the event.
    Ignored,
}

/// A receiver of routed clicks.
///
/// Implementors hold their mutable state behind interior mutability; dispatch
/// takes `&self` and runs to completion on the delivering thread.
pub trait ClickTarget: Send + Sync {
    fn dispatch_click(&self, target: NodeId, event: &mut ClickEvent) -> EventResult;
}

/// Routes clicks to the target registered for a node.
///
/// Cheap to clone; all clones share one registry. Dispatch resolves the
/// target under the lock but invokes it with no lock held, so targets may
/// register and unregister nodes from inside their handlers.
#[derive(Clone)]
pub struct ClickRouter {
    inner: Arc<RwLock<HashMap<NodeId, Arc<dyn ClickTarget>>>>,
}

impl ClickRouter {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register `target` as the click receiver for `node`, replacing any
    /// previous registration.
    pub fn register(&self, node: NodeId, target: Arc<dyn ClickTarget>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.insert(node, target);
        }
    }

    /// Remove the registration for `node`. Returns whether one existed.
    pub fn unregister(&self, node: NodeId) -> bool {
        self.inner
            .write()
            .map(|mut guard| guard.remove(&node).is_some())
            .unwrap_or(false)
    }

    pub fn is_registered(&self, node: NodeId) -> bool {
        self.inner
            .read()
            .map(|guard| guard.contains_key(&node))
            .unwrap_or(false)
    }

    /// Deliver a click to the target registered for `node`.
    pub fn dispatch(&self, node: NodeId, event: &mut ClickEvent) -> EventResult {
        let target = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.get(&node).cloned());
        match target {
            Some(target) => target.dispatch_click(node, event),
            None => EventResult::Ignored,
        }
    }
}

impl Default for ClickRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClickRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.inner.read().map(|guard| guard.len()).unwrap_or(0);
        write!(f, "ClickRouter({count} targets)")
    }
}

// Conversion from crossterm types
impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
