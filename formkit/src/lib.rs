pub mod events;
pub mod keybinds;
pub mod outside;
pub mod request;
pub mod state;
pub mod utils;
pub mod widgets;

pub mod prelude {
    pub use crate::events::{EventResult, PointerEvent, PointerEventKind};
    pub use crate::keybinds::{Key, KeyCombo, Modifiers};
    pub use crate::outside::{IdPrefixRegion, OutsideClickDetector, Region, Subscription};
    pub use crate::request::{RequestSequencer, SearchTicket};
    pub use crate::state::State;
    pub use crate::utils::geometry::DropdownLayout;
    pub use crate::utils::text::{filter_options, normalize};
    pub use crate::widgets::address::{
        ADDRESS_AUTOCOMPLETE_LIMIT, AddressAutocomplete, AddressSource, AddressValue, ErrorTag, GeolocationError,
        GeolocationProvider, GeolocationState,
    };
    pub use crate::widgets::combobox::{
        Combobox, ComboboxConfig, ComboboxController, ComboboxEvent, Effect, OptionSource, Transition,
    };
    pub use crate::widgets::item::{ComboItem, ComboOption};
    pub use crate::widgets::select::Select;
    pub use crate::widgets::select_autocomplete::SelectAutocomplete;
}
