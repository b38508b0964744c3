//! Text field filtering a static option list.

use crate::events::EventResult;
use crate::keybinds::KeyCombo;
use crate::outside::OutsideClickDetector;
use crate::state::State;
use crate::utils::geometry::DropdownLayout;
use crate::widgets::combobox::{Combobox, ComboboxConfig, ComboboxController, ComboboxEvent, Transition};
use crate::widgets::item::{ComboItem, ComboOption};

/// Select with a text field narrowing the options as the user types.
///
/// Typing a label exactly commits that option. When focus leaves the
/// widget, text that does not name an option is replaced by the committed
/// label, or cleared together with the value.
#[derive(Debug)]
pub struct SelectAutocomplete<T: ComboItem = ComboOption<String>> {
    combobox: Combobox<T>,
    clearable: bool,
}

impl<T: ComboItem> SelectAutocomplete<T> {
    pub fn new(id: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            combobox: Combobox::new(id, ComboboxConfig::select_autocomplete(), options),
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

    pub fn id(&self) -> &str {
        self.combobox.id()
    }

    /// Current field text.
    pub fn text(&self) -> String {
        self.combobox.text()
    }

    /// The committed value.
    pub fn committed(&self) -> Option<T::Value> {
        self.combobox.committed()
    }

    pub fn is_open(&self) -> bool {
        self.combobox.is_open()
    }

    /// Whether to render the clear button, given the pointer hover state.
    pub fn clear_visible(&self, hovered: bool) -> bool {
        self.clearable && self.committed().is_some() && (hovered || self.is_open())
    }

    /// Labels of the options matching the current text.
    pub fn visible_labels(&self) -> Vec<String> {
        self.combobox
            .state()
            .with(|c| c.displayed().map(|o| o.combo_label().to_owned()).collect())
    }

    pub fn state(&self) -> &State<ComboboxController<T>> {
        self.combobox.state()
    }

    pub fn combobox(&self) -> &Combobox<T> {
        &self.combobox
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn focus(&self) {
        self.combobox.handle(ComboboxEvent::Focus);
    }

    /// The field text was edited.
    pub fn set_text(&self, text: impl Into<String>) -> Transition<T::Value> {
        self.combobox.handle(ComboboxEvent::TextChanged(text.into()))
    }

    /// Focus left the field; `inside` when it moved within the widget.
    pub fn blur(&self, inside: bool) -> Transition<T::Value> {
        self.combobox.handle(ComboboxEvent::Blur { inside })
    }

    /// Dropdown button click.
    pub fn toggle(&self) -> Transition<T::Value> {
        self.combobox.handle(ComboboxEvent::Toggle)
    }

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
