//! Address field with remote suggestions and optional geolocation.

mod error;
mod geolocation;
mod source;

pub use error::*;
pub use geolocation::*;
pub use source::*;

use std::fmt;
use std::sync::Arc;

use geoportail_lib::error::ApiError;
use geoportail_lib::model::{AddressResult, Location};

use crate::events::EventResult;
use crate::keybinds::KeyCombo;
use crate::outside::OutsideClickDetector;
use crate::request::{RequestSequencer, SearchTicket};
use crate::state::State;
use crate::utils::geometry::DropdownLayout;
use crate::widgets::combobox::{Combobox, ComboboxConfig, ComboboxController, ComboboxEvent, Transition};

/// Suggestions requested per keystroke.
pub const ADDRESS_AUTOCOMPLETE_LIMIT: usize = 20;

/// Callback receiving error tags.
pub type ErrorHandler = Arc<dyn Fn(ErrorTag) + Send + Sync>;

/// Address text field backed by an [`AddressSource`].
///
/// Every edit clears the committed value and fetches suggestions for the
/// new text; a suggestion whose label equals the text is committed as soon
/// as it arrives. Responses for superseded edits are dropped.
///
/// The optional geolocation action fills the field with the address at the
/// device position.
pub struct AddressAutocomplete {
    combobox: Combobox<AddressResult>,
    source: Arc<dyn AddressSource>,
    limit: usize,
    sequencer: RequestSequencer,
    geolocation: State<GeolocationState>,
    geolocation_enabled: bool,
    provider: Option<Arc<dyn GeolocationProvider>>,
    on_error: Option<ErrorHandler>,
}

impl fmt::Debug for AddressAutocomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressAutocomplete")
            .field("combobox", &self.combobox)
            .field("limit", &self.limit)
            .field("geolocation", &self.geolocation.get())
            .field("geolocation_enabled", &self.geolocation_enabled)
            .finish()
    }
}

impl AddressAutocomplete {
    /// Create an empty field querying `source`.
    pub fn new<S>(id: impl Into<String>, source: S) -> Self
    where
        S: AddressSource + 'static,
    {
        Self::with_source(id, Arc::new(source))
    }

    /// Create an empty field querying a shared source.
    pub fn with_source(id: impl Into<String>, source: Arc<dyn AddressSource>) -> Self {
        Self {
            combobox: Combobox::new(id, ComboboxConfig::address(), Vec::new()),
            source,
            limit: ADDRESS_AUTOCOMPLETE_LIMIT,
            sequencer: RequestSequencer::new(),
            geolocation: State::new(GeolocationState::Off),
            geolocation_enabled: false,
            provider: None,
            on_error: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.combobox = self.combobox.placeholder(placeholder);
        self
    }

    /// Set the initial address. The change callback is not invoked.
    pub fn value(self, value: Option<AddressValue>) -> Self {
        let text = value
            .as_ref()
            .map(|value| value.address.clone())
            .unwrap_or_default();
        self.combobox.state().update(|c| c.assign(text, value));
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<AddressValue>) + Send + Sync + 'static,
    {
        self.combobox = self.combobox.on_change(f);
        self
    }

    /// Set the callback receiving error tags.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(ErrorTag) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(f));
        self
    }

    /// Maximum number of suggestions per search.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Show the geolocation action.
    pub fn geolocation(mut self, enabled: bool) -> Self {
        self.geolocation_enabled = enabled;
        self
    }

    /// Platform capability used by [`locate`](Self::locate).
    pub fn geolocation_provider<P>(mut self, provider: P) -> Self
    where
        P: GeolocationProvider + 'static,
    {
        self.provider = Some(Arc::new(provider));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        self.combobox.id()
    }

    pub fn text(&self) -> String {
        self.combobox.text()
    }

    /// The committed address.
    pub fn committed(&self) -> Option<AddressValue> {
        self.combobox.committed()
    }

    pub fn is_open(&self) -> bool {
        self.combobox.is_open()
    }

    /// Labels of the current suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        self.combobox
            .state()
            .with(|c| c.displayed().map(|r| r.label.clone()).collect())
    }

    pub fn geolocation_state(&self) -> GeolocationState {
        self.geolocation.get()
    }

    /// Whether the geolocation action is shown.
    pub fn geolocation_enabled(&self) -> bool {
        self.geolocation_enabled
    }

    pub fn state(&self) -> &State<ComboboxController<AddressResult>> {
        self.combobox.state()
    }

    pub fn combobox(&self) -> &Combobox<AddressResult> {
        &self.combobox
    }

    // -------------------------------------------------------------------------
    // Field events
    // -------------------------------------------------------------------------

    pub fn focus(&self) {
        self.combobox.handle(ComboboxEvent::Focus);
    }

    /// Focus left the field; `inside` when it moved within the widget.
    pub fn blur(&self, inside: bool) -> Transition<AddressValue> {
        self.combobox.handle(ComboboxEvent::Blur { inside })
    }

    pub fn on_key(&self, key: &KeyCombo) -> EventResult {
        self.combobox.on_key(key)
    }

    pub fn hover(&self, index: Option<usize>) {
        self.combobox.handle(ComboboxEvent::Hover(index));
    }

    pub fn select_option(&self, index: usize) -> Transition<AddressValue> {
        self.combobox.select_option(index)
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

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Apply an edit and return the ticket of the search it needs.
    ///
    /// Returns `None` when the text is blank and no search is needed. Pair
    /// with [`finish_search`](Self::finish_search) when driving the source
    /// yourself; [`text_changed`](Self::text_changed) does both.
    pub fn begin_search(&self, text: impl Into<String>) -> Option<SearchTicket> {
        self.geolocation.set(GeolocationState::Off);
        let transition = self.combobox.handle(ComboboxEvent::TextChanged(text.into()));
        match transition.refresh() {
            Some(query) => Some(self.sequencer.issue(query)),
            None => {
                self.sequencer.cancel_all();
                None
            }
        }
    }

    /// Apply a search response.
    ///
    /// Returns `false` when a newer search was started after `ticket`, in
    /// which case the response, success or failure, is dropped.
    pub fn finish_search(
        &self,
        ticket: &SearchTicket,
        result: Result<Vec<AddressResult>, ApiError>,
    ) -> bool {
        if !self.sequencer.is_latest(ticket) {
            log::warn!(
                "AddressAutocomplete: dropping stale response for {:?} (seq {})",
                ticket.query,
                ticket.seq
            );
            return false;
        }

        match result {
            Ok(results) => {
                log::debug!(
                    "AddressAutocomplete: {} suggestions for {:?}",
                    results.len(),
                    ticket.query
                );
                self.combobox.receive_options(results);
            }
            Err(e) => {
                log::warn!("AddressAutocomplete: search {:?} failed: {}", ticket.query, e);
                self.report(ErrorTag::ApiError);
            }
        }
        true
    }

    /// Handle an edit end to end: update the field, search, apply.
    pub async fn text_changed(&self, text: impl Into<String>) {
        let Some(ticket) = self.begin_search(text) else {
            return;
        };
        let result = self.source.search(&ticket.query, self.limit).await;
        self.finish_search(&ticket, result);
    }

    // -------------------------------------------------------------------------
    // Geolocation
    // -------------------------------------------------------------------------

    /// Fill the field with the address at the device position.
    ///
    /// Ignored while a previous attempt is pending or when the action is
    /// not enabled. Returns the resulting state.
    pub async fn locate(&self) -> GeolocationState {
        if !self.geolocation_enabled {
            log::debug!("AddressAutocomplete::locate ignored, geolocation not enabled");
            return self.geolocation.get();
        }

        let started = self.geolocation.update_with(|state| {
            if *state == GeolocationState::Pending {
                false
            } else {
                *state = GeolocationState::Pending;
                true
            }
        });
        if !started {
            log::debug!("AddressAutocomplete::locate ignored, already pending");
            return GeolocationState::Pending;
        }

        let Some(provider) = self.provider.as_ref().filter(|p| p.is_supported()) else {
            return self.settle(Err(GeolocationState::Disabled));
        };

        let outcome = match provider.current_position().await {
            Err(GeolocationError::PermissionDenied) => Err(GeolocationState::PermissionDenied),
            Err(GeolocationError::Unavailable(reason)) => {
                log::warn!("AddressAutocomplete: position unavailable: {}", reason);
                Err(GeolocationState::Unavailable)
            }
            Ok(coordinates) => match self.source.reverse(coordinates).await {
                Ok(Some(location)) => Ok(location),
                Ok(None) => Err(GeolocationState::Unavailable),
                Err(e) => {
                    log::warn!("AddressAutocomplete: reverse geocoding failed: {}", e);
                    Err(GeolocationState::ApiError)
                }
            },
        };
        self.settle(outcome)
    }

    /// Resolve a pending attempt, unless an edit cancelled it meanwhile.
    fn settle(&self, outcome: Result<Location, GeolocationState>) -> GeolocationState {
        let next = match &outcome {
            Ok(_) => GeolocationState::On,
            Err(state) => *state,
        };
        let applied = self.geolocation.update_with(|state| {
            if *state == GeolocationState::Pending {
                *state = next;
                true
            } else {
                false
            }
        });
        if !applied {
            log::debug!("AddressAutocomplete: geolocation result dropped after edit");
            return self.geolocation.get();
        }

        match outcome {
            Ok(location) => {
                log::debug!("AddressAutocomplete: located {:?}", location.address);
                self.sequencer.cancel_all();
                let text = location.address.clone();
                self.combobox.assign(text, AddressValue::from(location));
            }
            Err(state) => {
                if let Some(tag) = ErrorTag::for_geolocation(state) {
                    self.report(tag);
                }
            }
        }
        next
    }

    fn report(&self, tag: ErrorTag) {
        if let Some(on_error) = &self.on_error {
            on_error(tag);
        }
    }
}
