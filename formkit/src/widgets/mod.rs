//! Form widgets built on the shared combobox state machine.

pub mod address;
pub mod combobox;
pub mod item;
pub mod select;
pub mod select_autocomplete;
