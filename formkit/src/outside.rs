//! Detection of pointer events outside a widget.
//!
//! Widgets subscribe with the region they occupy (the field, its buttons
//! and its dropdown) and get called back for every press that lands
//! somewhere else. The returned [`Subscription`] is the listener's
//! lifetime: dropping it on unmount removes the listener.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::events::{PointerEvent, PointerEventKind};

/// An area of the element tree a listener owns.
pub trait Region: Send + Sync {
    /// Returns `true` if the element with this id is part of the region.
    fn contains(&self, target: &str) -> bool;
}

/// A region made of a root id and every id derived from it.
///
/// Widgets name their sub-elements `{id}-dropdown`, `{id}-opt-{n}` and so
/// on, so the whole widget, dropdown included, is one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPrefixRegion {
    root: String,
    prefix: String,
}

impl IdPrefixRegion {
    /// Create a region rooted at `root`.
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let prefix = format!("{}-", root);
        Self { root, prefix }
    }

    /// The root element id.
    pub fn root(&self) -> &str {
        &self.root
    }
}

impl Region for IdPrefixRegion {
    fn contains(&self, target: &str) -> bool {
        target == self.root || target.starts_with(&self.prefix)
    }
}

impl<F> Region for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn contains(&self, target: &str) -> bool {
        self(target)
    }
}

type Handler = Arc<Mutex<dyn FnMut(&PointerEvent) + Send>>;

struct Listener {
    region: Box<dyn Region>,
    kind: PointerEventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Dispatches pointer events to listeners whose region they missed.
///
/// Cheap to clone; clones share the same listeners.
#[derive(Clone, Default)]
pub struct OutsideClickDetector {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for OutsideClickDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutsideClickDetector")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl OutsideClickDetector {
    /// Create a detector with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register `handler` for `kind` events landing outside `region`.
    ///
    /// The listener stays active until the returned [`Subscription`] is
    /// dropped or [`Subscription::unsubscribe`] is called.
    pub fn subscribe<R, F>(&self, region: R, kind: PointerEventKind, handler: F) -> Subscription
    where
        R: Region + 'static,
        F: FnMut(&PointerEvent) + Send + 'static,
    {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        let handler: Handler = Arc::new(Mutex::new(handler));
        registry.listeners.insert(
            id,
            Listener {
                region: Box::new(region),
                kind,
                handler,
            },
        );
        log::debug!("OutsideClickDetector::subscribe id={} kind={:?}", id, kind);

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer event.
    ///
    /// Every listener of the matching kind whose region does not contain the
    /// target is called exactly once. Events without a target are outside
    /// every region. Returns the number of listeners called.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let handlers: Vec<Handler> = {
            let registry = self.lock();
            registry
                .listeners
                .values()
                .filter(|listener| listener.kind == event.kind)
                .filter(|listener| match event.target.as_deref() {
                    Some(target) => !listener.region.contains(target),
                    None => true,
                })
                .map(|listener| Arc::clone(&listener.handler))
                .collect()
        };

        // Called without the registry lock so handlers may unsubscribe.
        for handler in &handlers {
            let mut handler = handler
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            (&mut *handler)(event);
        }
        handlers.len()
    }

    /// Number of active listeners.
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Handle to an active listener. Dropping it removes the listener.
#[derive(Debug)]
#[must_use = "dropping a Subscription removes the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if registry.listeners.remove(&self.id).is_some() {
                log::debug!("OutsideClickDetector::unsubscribe id={}", self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut(&PointerEvent) + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move |_: &PointerEvent| {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_id_prefix_region() {
        let region = IdPrefixRegion::new("country");
        assert!(region.contains("country"));
        assert!(region.contains("country-dropdown"));
        assert!(region.contains("country-opt-3"));
        assert!(!region.contains("countryside"));
        assert!(!region.contains("city"));
    }

    #[test]
    fn test_fires_only_outside() {
        let detector = OutsideClickDetector::new();
        let (count, handler) = counter();
        let _sub = detector.subscribe(
            IdPrefixRegion::new("country"),
            PointerEventKind::MouseDown,
            handler,
        );

        assert_eq!(detector.dispatch(&PointerEvent::mouse_down("country-opt-1")), 0);
        assert_eq!(detector.dispatch(&PointerEvent::mouse_down("country")), 0);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert_eq!(detector.dispatch(&PointerEvent::mouse_down("submit")), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_untargeted_is_outside() {
        let detector = OutsideClickDetector::new();
        let (count, handler) = counter();
        let _sub = detector.subscribe(
            IdPrefixRegion::new("country"),
            PointerEventKind::MouseDown,
            handler,
        );

        detector.dispatch(&PointerEvent::untargeted(PointerEventKind::MouseDown));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_kind_filter() {
        let detector = OutsideClickDetector::new();
        let (count, handler) = counter();
        let _sub = detector.subscribe(
            IdPrefixRegion::new("country"),
            PointerEventKind::MouseUp,
            handler,
        );

        detector.dispatch(&PointerEvent::mouse_down("elsewhere"));
        assert_eq!(count.load(Ordering::SeqCst), 0);

        detector.dispatch(&PointerEvent::mouse_up("elsewhere"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let detector = OutsideClickDetector::new();
        let (count, handler) = counter();
        let sub = detector.subscribe(
            IdPrefixRegion::new("country"),
            PointerEventKind::MouseDown,
            handler,
        );
        assert_eq!(detector.listener_count(), 1);

        drop(sub);
        assert_eq!(detector.listener_count(), 0);

        detector.dispatch(&PointerEvent::mouse_down("elsewhere"));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_closure_region() {
        let detector = OutsideClickDetector::new();
        let (count, handler) = counter();
        let _sub = detector.subscribe(
            |target: &str| target == "menu" || target == "menu-button",
            PointerEventKind::MouseDown,
            handler,
        );

        detector.dispatch(&PointerEvent::mouse_down("menu-button"));
        detector.dispatch(&PointerEvent::mouse_down("body"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_outlives_detector() {
        let detector = OutsideClickDetector::new();
        let (_count, handler) = counter();
        let sub = detector.subscribe(
            IdPrefixRegion::new("country"),
            PointerEventKind::MouseDown,
            handler,
        );

        drop(detector);
        sub.unsubscribe();
    }
}
