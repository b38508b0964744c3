//! Combobox: a text field or button with a dropdown of options.
//!
//! [`ComboboxController`] is the portable state machine. [`Combobox`] wraps
//! it in shared [`State`](crate::state::State), carries out the
//! [`Effect`]s of each transition and owns the outside-click subscription.

mod controller;
mod events;
mod widget;

pub use controller::*;
pub use events::*;
pub use widget::*;
