//! Viewport breakpoint detection.
//!
//! Classifies a window size into a device category (`mobile`, `tablet`,
//! `desktop`) and notifies registered observers whenever the size changes.
//! Observers receive every size update; filtering out same-category updates
//! is the subscriber's business.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Device category derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Mobile,
    Tablet,
    Desktop,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
            Device::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Window size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Inclusive width upper bounds for the mobile and tablet categories.
/// Anything wider than `tablet_max` is desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub mobile_max: u16,
    pub tablet_max: u16,
}

impl Breakpoints {
    pub fn classify(&self, width: u16) -> Device {
        if width <= self.mobile_max {
            Device::Mobile
        } else if width <= self.tablet_max {
            Device::Tablet
        } else {
            Device::Desktop
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 79,
            tablet_max: 159,
        }
    }
}

/// Unique identifier for a size-tracking subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

impl SubscriberId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// A receiver of size-change notifications.
pub trait SizeObserver: Send + Sync {
    fn on_resize(&self, device: Device, size: Size);
}

#[derive(Clone)]
struct Subscriber {
    id: SubscriberId,
    observer: Arc<dyn SizeObserver>,
}

struct ViewportInner {
    device: Device,
    size: Size,
    breakpoints: Breakpoints,
    subscribers: Vec<Subscriber>,
}

/// The viewport detection service.
///
/// Cheap to clone; all clones share the same state and subscriber registry.
#[derive(Clone)]
pub struct Viewport {
    inner: Arc<RwLock<ViewportInner>>,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self::with_breakpoints(size, Breakpoints::default())
    }

    pub fn with_breakpoints(size: Size, breakpoints: Breakpoints) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ViewportInner {
                device: breakpoints.classify(size.width),
                size,
                breakpoints,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Seed from the current terminal size, falling back to 80x24 when the
    /// terminal cannot be queried.
    pub fn from_terminal() -> Self {
        let size = crossterm::terminal::size()
            .map(|(width, height)| Size::new(width, height))
            .unwrap_or_else(|_| Size::new(80, 24));
        Self::new(size)
    }

    /// The current device category.
    pub fn device(&self) -> Device {
        self.inner
            .read()
            .map(|guard| guard.device)
            .unwrap_or(Device::Mobile)
    }

    /// The last seen window size.
    pub fn size(&self) -> Size {
        self.inner
            .read()
            .map(|guard| guard.size)
            .unwrap_or_default()
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.inner
            .read()
            .map(|guard| guard.breakpoints)
            .unwrap_or_default()
    }

    /// Register an observer for size updates. The observer is called on
    /// every subsequent [`update`](Self::update).
    pub fn track_size(&self, observer: Arc<dyn SizeObserver>) -> SubscriberId {
        let id = SubscriberId::new();
        if let Ok(mut guard) = self.inner.write() {
            guard.subscribers.push(Subscriber { id, observer });
        }
        id
    }

    /// Drop a subscription. Returns whether it was still registered.
    pub fn untrack(&self, id: SubscriberId) -> bool {
        self.inner
            .write()
            .map(|mut guard| {
                let before = guard.subscribers.len();
                guard.subscribers.retain(|s| s.id != id);
                guard.subscribers.len() != before
            })
            .unwrap_or(false)
    }

    /// Number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.subscribers.len())
            .unwrap_or(0)
    }

    /// Record a new window size, reclassify the device, and notify every
    /// subscriber with the `(device, size)` pair.
    ///
    /// Subscribers are snapshotted under the lock and invoked outside it, so
    /// a subscriber may call [`track_size`](Self::track_size) or
    /// [`untrack`](Self::untrack) from its callback.
    pub fn update(&self, width: u16, height: u16) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        let size = Size::new(width, height);
        let device = guard.breakpoints.classify(width);
        if device != guard.device {
            log::debug!("[viewport] {} -> {} at {}x{}", guard.device, device, width, height);
        }
        guard.size = size;
        guard.device = device;
        let subscribers = guard.subscribers.clone();
        drop(guard);

        for subscriber in subscribers {
            subscriber.observer.on_resize(device, size);
        }
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Viewport({} {}x{}, {} observers)",
            self.device(),
            self.size().width,
            self.size().height,
            self.observer_count()
        )
    }
}
