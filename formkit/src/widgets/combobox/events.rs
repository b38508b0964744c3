//! Events consumed and effects produced by the combobox state machine.

use crate::events::EventResult;
use crate::keybinds::{Key, KeyCombo};

/// An intent raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEvent {
    /// The field gained focus.
    Focus,
    /// The dropdown button (or the select button) was clicked.
    Toggle,
    /// The field text was edited.
    TextChanged(String),
    /// Arrow down key.
    ArrowDown,
    /// Arrow up key.
    ArrowUp,
    /// Enter key.
    Enter,
    /// Escape key.
    Escape,
    /// The pointer entered a row (`Some`) or left the list (`None`).
    Hover(Option<usize>),
    /// A row of the displayed list was clicked.
    Select(usize),
    /// The field lost focus. `inside` is `true` when focus moved to another
    /// element of the same widget (e.g. an option row).
    Blur { inside: bool },
    /// A pointer press landed outside the widget.
    OutsideClick,
    /// The clear button was clicked.
    Clear,
}

impl ComboboxEvent {
    /// Map a key press to an event.
    ///
    /// Returns `None` for keys the combobox leaves to the text field, and
    /// for anything pressed with ctrl or alt.
    pub fn from_key(key: &KeyCombo) -> Option<Self> {
        if key.modifiers.is_shortcut() {
            return None;
        }
        match key.key {
            Key::Down => Some(Self::ArrowDown),
            Key::Up => Some(Self::ArrowUp),
            Key::Enter => Some(Self::Enter),
            Key::Escape => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Work a transition asks the widget to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<V> {
    /// Emit this value to the owner.
    Commit(V),
    /// Emit "no value" to the owner.
    Clear,
    /// Move keyboard focus back to the field.
    Refocus,
    /// Scroll the dropdown to this offset.
    Scroll(u32),
    /// Fetch a new option list for this text.
    Refresh(String),
}

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<V> {
    /// Whether the platform default should be suppressed.
    pub result: EventResult,
    /// Effects in the order they must run.
    pub effects: Vec<Effect<V>>,
}

impl<V> Transition<V> {
    /// Event not handled, nothing to do.
    pub fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            effects: Vec::new(),
        }
    }

    /// Event handled.
    pub fn consumed() -> Self {
        Self {
            result: EventResult::Consumed,
            effects: Vec::new(),
        }
    }

    /// Append an effect.
    pub fn with(mut self, effect: Effect<V>) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append several effects.
    pub fn with_all(mut self, effects: impl IntoIterator<Item = Effect<V>>) -> Self {
        self.effects.extend(effects);
        self
    }

    /// The value committed by this transition, if any.
    pub fn committed(&self) -> Option<&V> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Commit(value) => Some(value),
            _ => None,
        })
    }

    /// Returns `true` if the transition clears the owner's value.
    pub fn clears(&self) -> bool {
        self.effects.iter().any(|effect| matches!(effect, Effect::Clear))
    }

    /// The text to fetch options for, if the transition asks for it.
    pub fn refresh(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Refresh(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
