//! Combobox widget shell: shared state, value callback, outside clicks.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::events::{EventResult, PointerEventKind};
use crate::keybinds::KeyCombo;
use crate::outside::{IdPrefixRegion, OutsideClickDetector, Subscription};
use crate::state::State;
use crate::utils::geometry::DropdownLayout;
use crate::widgets::item::ComboItem;

use super::controller::{ComboboxConfig, ComboboxController};
use super::events::{ComboboxEvent, Effect, Transition};

/// Callback receiving the committed value, or `None` when it is cleared.
pub type ChangeHandler<V> = Arc<dyn Fn(Option<V>) + Send + Sync>;

/// Carries out transition effects on behalf of the widget.
///
/// Cloned into the outside-click listener so dismissals run the same way as
/// direct events.
struct Emitter<V> {
    on_change: Option<ChangeHandler<V>>,
    focus_requested: Arc<AtomicBool>,
}

impl<V> Clone for Emitter<V> {
    fn clone(&self) -> Self {
        Self {
            on_change: self.on_change.clone(),
            focus_requested: Arc::clone(&self.focus_requested),
        }
    }
}

impl<V: Clone> Emitter<V> {
    fn run(&self, effects: &[Effect<V>]) {
        for effect in effects {
            match effect {
                Effect::Commit(value) => {
                    if let Some(on_change) = &self.on_change {
                        on_change(Some(value.clone()));
                    }
                }
                Effect::Clear => {
                    if let Some(on_change) = &self.on_change {
                        on_change(None);
                    }
                }
                Effect::Refocus => self.focus_requested.store(true, Ordering::SeqCst),
                Effect::Scroll(top) => log::trace!("Combobox scroll_top={}", top),
                // Fetching is the owning widget's business.
                Effect::Refresh(_) => {}
            }
        }
    }
}

/// A combobox instance: controller state plus the wiring around it.
///
/// The element id doubles as the outside-click region root: the renderer
/// must name sub-elements with [`listbox_id`](Self::listbox_id) and
/// [`option_id`](Self::option_id) so clicks on them count as inside.
pub struct Combobox<T: ComboItem> {
    id: String,
    placeholder: String,
    state: State<ComboboxController<T>>,
    emitter: Emitter<T::Value>,
    subscription: Option<Subscription>,
}

impl<T: ComboItem> fmt::Debug for Combobox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("id", &self.id)
            .field("placeholder", &self.placeholder)
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}

impl<T: ComboItem> Combobox<T> {
    /// Create a combobox with no value.
    pub fn new(id: impl Into<String>, config: ComboboxConfig, options: Vec<T>) -> Self {
        let id = id.into();
        log::debug!("Combobox::new id={} options={}", id, options.len());
        Self {
            id,
            placeholder: String::new(),
            state: State::new(ComboboxController::new(config, options, None)),
            emitter: Emitter {
                on_change: None,
                focus_requested: Arc::new(AtomicBool::new(false)),
            },
            subscription: None,
        }
    }

    /// Set the placeholder shown while the field is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial value.
    pub fn value(self, value: Option<T::Value>) -> Self {
        self.state.update(|c| c.set_value(value));
        self
    }

    /// Set the callback receiving committed values.
    ///
    /// Must be called before [`attach`](Self::attach); the outside-click
    /// listener keeps the callback it was attached with.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<T::Value>) + Send + Sync + 'static,
    {
        self.emitter.on_change = Some(Arc::new(f));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    /// Id of the dropdown list element.
    pub fn listbox_id(&self) -> String {
        format!("{}-listbox", self.id)
    }

    /// Id of the option row at `index`.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-opt-{}", self.id, index)
    }

    /// Shared controller state, for rendering.
    pub fn state(&self) -> &State<ComboboxController<T>> {
        &self.state
    }

    /// Current field text.
    pub fn text(&self) -> String {
        self.state.with(|c| c.text().to_owned())
    }

    /// Committed value.
    pub fn committed(&self) -> Option<T::Value> {
        self.state.with(|c| c.committed().cloned())
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|c| c.is_open())
    }

    pub fn active(&self) -> Option<usize> {
        self.state.with(|c| c.active())
    }

    /// Returns `true` once after a transition asked for focus on the field.
    pub fn take_focus_request(&self) -> bool {
        self.emitter.focus_requested.swap(false, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Apply an event and run its effects.
    ///
    /// Effects run after the state lock is released, so the value callback
    /// may read the widget.
    pub fn handle(&self, event: ComboboxEvent) -> Transition<T::Value> {
        let transition = self.state.update_with(|c| c.handle(event));
        self.emitter.run(&transition.effects);
        transition
    }

    /// Handle a key press on the field.
    pub fn on_key(&self, key: &KeyCombo) -> EventResult {
        match ComboboxEvent::from_key(key) {
            Some(event) => self.handle(event).result,
            None => EventResult::Ignored,
        }
    }

    /// Commit row `index` of the displayed list.
    pub fn select_option(&self, index: usize) -> Transition<T::Value> {
        self.handle(ComboboxEvent::Select(index))
    }

    /// Install a fetched option list, running any auto-commit.
    pub fn receive_options(&self, options: Vec<T>) -> Transition<T::Value> {
        let transition = self.state.update_with(|c| c.receive_options(options));
        self.emitter.run(&transition.effects);
        transition
    }

    /// Replace the static option list.
    pub fn set_options(&self, options: Vec<T>) {
        self.state.update(|c| c.set_options(options));
    }

    /// Sync the value from the owner. The callback is not invoked.
    pub fn set_value(&self, value: Option<T::Value>) {
        self.state.update(|c| c.set_value(value));
    }

    /// Set text and value from outside the option list, notifying the owner.
    pub fn assign(&self, text: impl Into<String>, value: T::Value) {
        self.state.update(|c| c.assign(text, Some(value.clone())));
        self.emitter.run(&[Effect::Commit(value)]);
    }

    /// Record the dropdown geometry measured by the renderer.
    pub fn set_layout(&self, layout: DropdownLayout) {
        self.state.update(|c| c.set_layout(layout));
    }

    // -------------------------------------------------------------------------
    // Outside clicks
    // -------------------------------------------------------------------------

    /// Start listening for presses outside this widget.
    ///
    /// Re-attaching replaces the previous listener.
    pub fn attach(&mut self, detector: &OutsideClickDetector) {
        let state = self.state.clone();
        let emitter = self.emitter.clone();
        let subscription = detector.subscribe(
            IdPrefixRegion::new(self.id.clone()),
            PointerEventKind::MouseDown,
            move |_| {
                let transition = state.update_with(|c| c.handle(ComboboxEvent::OutsideClick));
                emitter.run(&transition.effects);
            },
        );
        self.subscription = Some(subscription);
    }

    /// Stop listening for outside presses.
    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}
