//! Button-style single select.

use crate::events::EventResult;
use crate::keybinds::KeyCombo;
use crate::outside::OutsideClickDetector;
use crate::state::State;
use crate::utils::geometry::DropdownLayout;
use crate::widgets::combobox::{Combobox, ComboboxConfig, ComboboxController, ComboboxEvent, Transition};
use crate::widgets::item::{ComboItem, ComboOption};

/// A button that opens a list of static options.
///
/// There is no text entry: the button shows the committed label, or the
/// placeholder when nothing is selected. Outside presses only close the
/// list.
#[derive(Debug)]
pub struct Select<T: ComboItem = ComboOption<String>> {
    combobox: Combobox<T>,
    clearable: bool,
}

impl<T: ComboItem> Select<T> {
    pub fn new(id: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            combobox: Combobox::new(id, ComboboxConfig::select(), options),
            clearable: false,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.combobox = self.combobox.placeholder(placeholder);
        self
    }

    pub fn value(mut self, value: Option<T::Value>) -> Self {
        self.combobox = self.combobox.value(value);
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<T::Value>) + Send + Sync + 'static,
    {
        self.combobox = self.combobox.on_change(f);
        self
    }

    /// Offer a clear button while a value is selected.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        self.combobox.id()
    }

    /// Text for the button face.
    pub fn display_text(&self) -> String {
        self.combobox
            .state()
            .with(|c| c.committed_label().map(str::to_owned))
            .unwrap_or_else(|| self.combobox.placeholder_text().to_owned())
    }

    /// Whether the button face shows the placeholder.
    pub fn shows_placeholder(&self) -> bool {
        self.combobox.state().with(|c| c.committed_label().is_none())
    }

    /// Whether to render the clear button, given the pointer hover state.
    pub fn clear_visible(&self, hovered: bool) -> bool {
        self.clearable && self.committed().is_some() && (hovered || self.is_open())
    }

    /// Shared controller state, for rendering the list.
    pub fn state(&self) -> &State<ComboboxController<T>> {
        self.combobox.state()
    }

    /// The committed value.
    pub fn committed(&self) -> Option<T::Value> {
        self.combobox.committed()
    }

    pub fn is_open(&self) -> bool {
        self.combobox.is_open()
    }

    pub fn combobox(&self) -> &Combobox<T> {
        &self.combobox
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Button click.
    pub fn click(&self) -> Transition<T::Value> {
        self.combobox.handle(ComboboxEvent::Toggle)
    }

    /// Key released on the button.
    pub fn on_key(&self, key: &KeyCombo) -> EventResult {
        self.combobox.on_key(key)
    }

    pub fn hover(&self, index: Option<usize>) {
        self.combobox.handle(ComboboxEvent::Hover(index));
    }

    pub fn select_option(&self, index: usize) -> Transition<T::Value> {
        self.combobox.select_option(index)
    }

    /// Clear button click.
    pub fn clear(&self) -> Transition<T::Value> {
        self.combobox.handle(ComboboxEvent::Clear)
    }

    pub fn set_value(&self, value: Option<T::Value>) {
        self.combobox.set_value(value);
    }

    pub fn set_options(&self, options: Vec<T>) {
        self.combobox.set_options(options);
    }

    pub fn set_layout(&self, layout: DropdownLayout) {
        self.combobox.set_layout(layout);
    }

    pub fn attach(&mut self, detector: &OutsideClickDetector) {
        self.combobox.attach(detector);
    }

    pub fn detach(&mut self) {
        self.combobox.detach();
    }
}
