//! The combobox state machine shared by every widget variant.

use crate::utils::geometry::DropdownLayout;
use crate::utils::text::filter_options;
use crate::widgets::item::ComboItem;

use super::events::{ComboboxEvent, Effect, Transition};

// =============================================================================
// Configuration
// =============================================================================

/// Where the option list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    /// A fixed list supplied by the owner. `filterable` narrows it to the
    /// options matching the typed text.
    Static { filterable: bool },
    /// A list fetched for every edit. The controller asks for it with
    /// [`Effect::Refresh`] and receives it through
    /// [`ComboboxController::receive_options`].
    Dynamic,
}

/// Behaviour switches that distinguish the widget variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboboxConfig {
    /// Option list origin.
    pub source: OptionSource,
    /// Commit an option as soon as the text equals its label.
    pub auto_commit_exact: bool,
    /// Reconcile text and value when the field loses focus.
    pub reconcile_on_blur: bool,
    /// Clear the committed value on every edit.
    pub clear_on_edit: bool,
}

impl ComboboxConfig {
    /// Button-style select: no text entry, no filtering.
    pub const fn select() -> Self {
        Self {
            source: OptionSource::Static { filterable: false },
            auto_commit_exact: false,
            reconcile_on_blur: false,
            clear_on_edit: false,
        }
    }

    /// Text field filtering a static list.
    pub const fn select_autocomplete() -> Self {
        Self {
            source: OptionSource::Static { filterable: true },
            auto_commit_exact: true,
            reconcile_on_blur: true,
            clear_on_edit: false,
        }
    }

    /// Text field backed by remote address suggestions.
    pub const fn address() -> Self {
        Self {
            source: OptionSource::Dynamic,
            auto_commit_exact: true,
            reconcile_on_blur: false,
            clear_on_edit: true,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Field text, option list, active row and committed value of one combobox.
///
/// Every change goes through [`handle`](Self::handle) (or one of the
/// external sync methods) and comes back as a [`Transition`]; the
/// controller itself never calls out.
#[derive(Debug, Clone)]
pub struct ComboboxController<T: ComboItem> {
    config: ComboboxConfig,
    text: String,
    open: bool,
    active: Option<usize>,
    committed: Option<T::Value>,
    options: Vec<T>,
    /// Indices into `options`, in display order.
    displayed: Vec<usize>,
    layout: DropdownLayout,
}

impl<T: ComboItem> ComboboxController<T> {
    /// Create a closed controller showing the label of `value`.
    pub fn new(config: ComboboxConfig, options: Vec<T>, value: Option<T::Value>) -> Self {
        let mut controller = Self {
            config,
            text: String::new(),
            open: false,
            active: None,
            committed: None,
            displayed: (0..options.len()).collect(),
            options,
            layout: DropdownLayout::default(),
        };
        controller.set_value(value);
        controller
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    /// Current field text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the dropdown is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted row, as an index into the displayed list.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The value last committed or synced from the owner.
    pub fn committed(&self) -> Option<&T::Value> {
        self.committed.as_ref()
    }

    /// Every option, filtered or not.
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Number of rows in the displayed list.
    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Rows of the displayed list in order.
    pub fn displayed(&self) -> impl Iterator<Item = &T> + '_ {
        self.displayed.iter().filter_map(|&i| self.options.get(i))
    }

    /// Row `index` of the displayed list.
    pub fn option_at(&self, index: usize) -> Option<&T> {
        self.displayed.get(index).and_then(|&i| self.options.get(i))
    }

    /// The highlighted option, if any.
    pub fn active_option(&self) -> Option<&T> {
        self.active.and_then(|index| self.option_at(index))
    }

    /// Whether row `index` holds the committed value.
    pub fn is_selected(&self, index: usize) -> bool {
        match (self.option_at(index), self.committed.as_ref()) {
            (Some(option), Some(value)) => option.combo_value() == *value,
            _ => false,
        }
    }

    /// Label of the committed value, when it is in the option list.
    pub fn committed_label(&self) -> Option<&str> {
        let value = self.committed.as_ref()?;
        self.options
            .iter()
            .find(|option| option.combo_value() == *value)
            .map(|option| option.combo_label())
    }

    pub fn layout(&self) -> &DropdownLayout {
        &self.layout
    }

    /// Record the dropdown geometry measured by the renderer.
    pub fn set_layout(&mut self, layout: DropdownLayout) {
        self.layout = layout;
    }

    // -------------------------------------------------------------------------
    // External sync
    // -------------------------------------------------------------------------

    /// Replace the committed value from outside, showing its label.
    ///
    /// No effect is produced: the owner already knows the value.
    pub fn set_value(&mut self, value: Option<T::Value>) {
        self.committed = value;
        self.text = self.committed_label().map(str::to_owned).unwrap_or_default();
        self.refilter();
    }

    /// Set text and value together, for values that are not in the list
    /// (e.g. a geolocated address).
    pub fn assign(&mut self, text: impl Into<String>, value: Option<T::Value>) {
        self.text = text.into();
        self.committed = value;
        self.refilter();
    }

    /// Replace the option list without committing anything.
    ///
    /// For static sources the text follows the committed value's label, as
    /// it does on construction.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.active = None;
        if matches!(self.config.source, OptionSource::Static { .. }) {
            self.text = self.committed_label().map(str::to_owned).unwrap_or_default();
        }
        self.refilter();
    }

    /// Install a freshly fetched option list.
    ///
    /// Auto-commits an option whose label equals the current text.
    pub fn receive_options(&mut self, options: Vec<T>) -> Transition<T::Value> {
        self.options = options;
        self.active = None;
        self.refilter();
        log::debug!(
            "ComboboxController::receive_options count={} text={:?}",
            self.options.len(),
            self.text
        );

        let mut transition = Transition::ignored();
        if let Some(effect) = self.auto_commit() {
            transition = transition.with(effect);
        }
        transition
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Apply one event.
    pub fn handle(&mut self, event: ComboboxEvent) -> Transition<T::Value> {
        log::debug!("ComboboxController::handle {:?}", event);
        match event {
            ComboboxEvent::Focus => {
                self.open = true;
                Transition::ignored()
            }
            ComboboxEvent::Toggle => self.toggle(),
            ComboboxEvent::TextChanged(text) => self.text_changed(text),
            ComboboxEvent::ArrowDown => self.navigate(true),
            ComboboxEvent::ArrowUp => self.navigate(false),
            ComboboxEvent::Enter => match self.active {
                Some(index) if index < self.displayed.len() => self.select(index),
                _ => Transition::ignored(),
            },
            ComboboxEvent::Escape => {
                if self.open {
                    self.open = false;
                    Transition::consumed()
                } else {
                    Transition::ignored()
                }
            }
            ComboboxEvent::Hover(index) => {
                self.active = index.filter(|&i| i < self.displayed.len());
                Transition::ignored()
            }
            ComboboxEvent::Select(index) => self.select(index),
            ComboboxEvent::Blur { inside: true } => Transition::ignored(),
            ComboboxEvent::Blur { inside: false } | ComboboxEvent::OutsideClick => self.dismiss(),
            ComboboxEvent::Clear => self.clear(),
        }
    }

    /// Commit row `index` of the displayed list.
    ///
    /// Always closes the dropdown and resets the active row.
    pub fn select(&mut self, index: usize) -> Transition<T::Value> {
        let Some(option) = self.option_at(index).cloned() else {
            return Transition::ignored();
        };
        let value = option.combo_value();
        log::debug!("ComboboxController::select {:?}", option.combo_label());

        self.text = option.combo_label().to_owned();
        self.committed = Some(value.clone());
        self.active = None;
        self.open = false;
        self.refilter();

        Transition::consumed()
            .with(Effect::Commit(value))
            .with(Effect::Refocus)
    }

    fn toggle(&mut self) -> Transition<T::Value> {
        self.open = !self.open;
        if self.open {
            // Start from the committed row so arrows move relative to it.
            self.active = (0..self.displayed.len()).find(|&i| self.is_selected(i));
            if let Some(top) = self.active.and_then(|i| self.reveal(i)) {
                return Transition::consumed().with(Effect::Scroll(top));
            }
        }
        Transition::consumed()
    }

    fn text_changed(&mut self, text: String) -> Transition<T::Value> {
        self.text = text;
        self.open = true;
        self.active = None;

        let mut transition = Transition::ignored();
        if self.config.clear_on_edit && self.committed.take().is_some() {
            transition = transition.with(Effect::Clear);
        }

        match self.config.source {
            OptionSource::Static { .. } => {
                self.refilter();
                if let Some(effect) = self.auto_commit() {
                    transition = transition.with(effect);
                }
            }
            OptionSource::Dynamic => {
                if self.text.trim().is_empty() {
                    self.options.clear();
                    self.displayed.clear();
                } else {
                    transition = transition.with(Effect::Refresh(self.text.clone()));
                }
            }
        }
        transition
    }

    fn navigate(&mut self, forward: bool) -> Transition<T::Value> {
        let count = self.displayed.len();
        let current = self.active.filter(|&i| i < count);

        self.active = if count == 0 {
            None
        } else if !self.open {
            Some(0)
        } else {
            Some(match (current, forward) {
                (Some(i), true) => (i + 1) % count,
                (None, true) => 0,
                (Some(0) | None, false) => count - 1,
                (Some(i), false) => i - 1,
            })
        };
        self.open = true;

        let mut transition = Transition::consumed();
        if let Some(top) = self.active.and_then(|i| self.reveal(i)) {
            transition = transition.with(Effect::Scroll(top));
        }
        transition
    }

    fn dismiss(&mut self) -> Transition<T::Value> {
        self.open = false;
        self.active = None;
        if !self.config.reconcile_on_blur {
            return Transition::ignored();
        }
        Transition::ignored().with_all(self.reconcile())
    }

    fn clear(&mut self) -> Transition<T::Value> {
        self.text.clear();
        self.committed = None;
        self.active = None;
        self.refilter();
        Transition::consumed().with(Effect::Clear)
    }

    /// Settle the text after focus left the field.
    ///
    /// A label typed in full stays; otherwise the committed label comes
    /// back; otherwise text and value are both emptied.
    fn reconcile(&mut self) -> Option<Effect<T::Value>> {
        if self
            .options
            .iter()
            .any(|option| option.combo_label() == self.text)
        {
            return None;
        }
        if let Some(label) = self.committed_label().map(str::to_owned) {
            self.text = label;
            self.refilter();
            return None;
        }

        let changed = !self.text.is_empty() || self.committed.is_some();
        self.text.clear();
        self.committed = None;
        self.refilter();
        changed.then_some(Effect::Clear)
    }

    /// Commit the first option labelled exactly like the text, unless it is
    /// already the committed value.
    fn auto_commit(&mut self) -> Option<Effect<T::Value>> {
        if !self.config.auto_commit_exact {
            return None;
        }
        let value = self
            .options
            .iter()
            .find(|option| option.combo_label() == self.text)?
            .combo_value();
        if self.committed.as_ref() == Some(&value) {
            return None;
        }
        self.committed = Some(value.clone());
        Some(Effect::Commit(value))
    }

    fn refilter(&mut self) {
        self.displayed = match self.config.source {
            OptionSource::Static { filterable: true } if !self.text.is_empty() => {
                let labels: Vec<&str> = self.options.iter().map(|o| o.combo_label()).collect();
                filter_options(&self.text, &labels)
            }
            _ => (0..self.options.len()).collect(),
        };
        if self.active.is_some_and(|i| i >= self.displayed.len()) {
            self.active = None;
        }
    }

    fn reveal(&mut self, index: usize) -> Option<u32> {
        let top = self.layout.reveal(index)?;
        self.layout.scroll_top = top;
        Some(top)
    }
}
