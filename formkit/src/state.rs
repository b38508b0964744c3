//! Shared widget state polled by the render layer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Widget state shared between event handlers, async tasks and the renderer.
///
/// Clones point at the same value. Writes raise a dirty flag; the renderer
/// redraws when [`take_dirty`](Self::take_dirty) reports a change. A
/// poisoned lock is recovered rather than dropping the write, since a
/// panicking callback must not freeze the widget.
///
/// ```ignore
/// let state = State::new(ComboboxController::new(ComboboxConfig::select(), options, None));
///
/// let handle = state.clone();
/// let transition = handle.update_with(|c| c.handle(ComboboxEvent::OutsideClick));
///
/// if state.take_dirty() {
///     state.with(|c| redraw(c));
/// }
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.dirty.store(true, Ordering::SeqCst);
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// A copy of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read().clone()
    }

    /// Borrow the value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read())
    }

    /// Replace the value.
    pub fn set(&self, value: T) {
        *self.write() = value;
    }

    /// Modify the value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.write());
    }

    /// Modify the value and hand back what `f` returns.
    ///
    /// The lock is released on return, so the result can drive callbacks
    /// that read the state again.
    pub fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.write())
    }

    /// Whether anything was written since the flag was last cleared.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
