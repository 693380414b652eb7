//! Scroll observer for the edible-vibe site
//!
//! Publishes the viewport scroll position to any number of subscribers.
//! The viewport listener is attached lazily by the first subscriber and
//! detached when the last [`ScrollSubscription`] is dropped.

use crate::progress::scroll_progress;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::debug;

/// Vertical scroll distance from the top of the document, in pixels
///
/// Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset(0.0);

    /// Clamp a raw measurement (elastic overscroll can report negatives)
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self(raw)
        } else {
            Self::TOP
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_top(self) -> bool {
        self.0 == 0.0
    }
}

/// One viewport measurement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub offset: ScrollOffset,
    /// Document height minus viewport height
    pub scrollable_height: f64,
}

impl ScrollPosition {
    pub fn new(offset: f64, scrollable_height: f64) -> Self {
        Self {
            offset: ScrollOffset::new(offset),
            scrollable_height,
        }
    }

    /// Normalized progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        scroll_progress(self.offset, self.scrollable_height)
    }
}

/// External viewport capability
///
/// `attach` must start forwarding scroll events to the publisher until
/// `detach` is called. The browser implementation wraps a `window` scroll
/// listener.
pub trait ScrollSource: Send + Sync {
    /// Current measurement, read when the listener is attached
    fn sample(&self) -> ScrollPosition;

    /// Start forwarding scroll events
    fn attach(&self, publisher: ScrollPublisher);

    /// Stop forwarding scroll events and release the listener
    fn detach(&self);
}

type Callback = Arc<dyn Fn(ScrollPosition) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    live: usize,
    attached: bool,
    callbacks: Vec<(u64, Callback)>,
}

struct Inner {
    sender: watch::Sender<ScrollPosition>,
    source: Box<dyn ScrollSource>,
    registry: Mutex<Registry>,
    /// Held across the attach/detach decision and the source call, so a
    /// late `detach` can never undo a newer `attach`. Never taken by
    /// `publish`, so sources may publish from inside `attach`.
    lifecycle: Mutex<()>,
}

impl Inner {
    fn publish(&self, position: ScrollPosition) -> bool {
        let changed = self.sender.send_if_modified(|current| {
            if *current == position {
                false
            } else {
                *current = position;
                true
            }
        });

        if changed {
            // Clone out so callbacks may subscribe/unsubscribe re-entrantly
            let callbacks: Vec<Callback> = self
                .registry
                .lock()
                .callbacks
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect();
            for callback in callbacks {
                callback(position);
            }
        }

        changed
    }

    fn release(&self, id: u64) {
        let _lifecycle = self.lifecycle.lock();
        let should_detach = {
            let mut registry = self.registry.lock();
            registry.callbacks.retain(|(cb_id, _)| *cb_id != id);
            registry.live = registry.live.saturating_sub(1);
            if registry.live == 0 && registry.attached {
                registry.attached = false;
                true
            } else {
                false
            }
        };

        if should_detach {
            debug!("Last scroll subscriber gone, detaching viewport listener");
            self.source.detach();
        }
    }
}

/// Handle given to a [`ScrollSource`] for pushing measurements
///
/// Holds a weak reference: a source never keeps the observer alive.
#[derive(Clone)]
pub struct ScrollPublisher {
    inner: Weak<Inner>,
}

impl ScrollPublisher {
    /// Publish a new measurement. Returns false if nothing changed or the
    /// observer is gone.
    pub fn publish(&self, position: ScrollPosition) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.publish(position))
            .unwrap_or(false)
    }
}

/// Shared scroll observer
///
/// Cheap to clone (Arc internally). Provided once at the app root and read
/// by the header and the progress indicator.
#[derive(Clone)]
pub struct ScrollObserver {
    inner: Arc<Inner>,
}

impl ScrollObserver {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        let (sender, _) = watch::channel(ScrollPosition::default());
        Self {
            inner: Arc::new(Inner {
                sender,
                source: Box::new(source),
                registry: Mutex::new(Registry::default()),
                lifecycle: Mutex::new(()),
            }),
        }
    }

    /// Latest known offset (0 before the first measurement)
    pub fn current_offset(&self) -> ScrollOffset {
        self.inner.sender.borrow().offset
    }

    /// Latest known measurement
    pub fn current(&self) -> ScrollPosition {
        *self.inner.sender.borrow()
    }

    /// Subscribe without a callback (poll or await [`ScrollSubscription::changed`])
    pub fn subscribe(&self) -> ScrollSubscription {
        self.register(None)
    }

    /// Subscribe with a callback invoked synchronously on every change
    pub fn subscribe_with<F>(&self, callback: F) -> ScrollSubscription
    where
        F: Fn(ScrollPosition) + Send + Sync + 'static,
    {
        self.register(Some(Arc::new(callback)))
    }

    /// Push a measurement directly (used by sources and tests)
    pub fn publish(&self, position: ScrollPosition) -> bool {
        self.inner.publish(position)
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.registry.lock().live
    }

    /// Whether the viewport listener is currently attached
    pub fn is_listening(&self) -> bool {
        self.inner.registry.lock().attached
    }

    fn register(&self, callback: Option<Callback>) -> ScrollSubscription {
        let lifecycle = self.inner.lifecycle.lock();
        let (id, needs_attach) = {
            let mut registry = self.inner.registry.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.live += 1;
            if let Some(cb) = callback {
                registry.callbacks.push((id, cb));
            }
            let needs_attach = !registry.attached;
            registry.attached = true;
            (id, needs_attach)
        };

        let receiver = self.inner.sender.subscribe();

        if needs_attach {
            debug!("First scroll subscriber, attaching viewport listener");
            self.inner.source.attach(ScrollPublisher {
                inner: Arc::downgrade(&self.inner),
            });
        }
        drop(lifecycle);

        // Outside the lifecycle lock: callbacks may subscribe or drop re-entrantly
        if needs_attach {
            let initial = self.inner.source.sample();
            self.inner.publish(initial);
        }

        ScrollSubscription {
            id,
            receiver,
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Live subscription to a [`ScrollObserver`]
///
/// Dropping it unsubscribes; dropping the last one detaches the viewport
/// listener.
pub struct ScrollSubscription {
    id: u64,
    receiver: watch::Receiver<ScrollPosition>,
    inner: Arc<Inner>,
}

impl ScrollSubscription {
    /// Latest measurement
    pub fn current(&self) -> ScrollPosition {
        *self.receiver.borrow()
    }

    pub fn current_offset(&self) -> ScrollOffset {
        self.receiver.borrow().offset
    }

    /// Wait for the next change. Intermediate values may be coalesced.
    pub async fn changed(&mut self) -> ScrollPosition {
        // The sender lives in `inner`, which we hold, so this cannot close
        let _ = self.receiver.changed().await;
        *self.receiver.borrow_and_update()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.inner.release(self.id);
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("id", &self.id)
            .field("current", &self.current())
            .finish()
    }
}
