//! Where address suggestions and reverse geocoding come from.

use async_trait::async_trait;
use geoportail_lib::GeoportailClient;
use geoportail_lib::error::ApiError;
use geoportail_lib::model::{AddressResult, Coordinates, Location};

use crate::widgets::item::ComboItem;

/// Backend for [`AddressAutocomplete`](super::AddressAutocomplete).
///
/// Implemented for [`GeoportailClient`]; tests and offline setups plug in
/// their own.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Up to `limit` addresses matching `query`.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<AddressResult>, ApiError>;

    /// The address at a position, if any.
    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<Location>, ApiError>;
}

#[async_trait]
impl AddressSource for GeoportailClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<AddressResult>, ApiError> {
        self.search_addresses(query, limit).await
    }

    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<Location>, ApiError> {
        self.reverse_geocode(coordinates).await
    }
}

/// Value an address field reports to its owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressValue {
    pub address: String,
    /// `[lon, lat]`, empty when unknown.
    pub coordinates: Vec<f64>,
}

impl AddressValue {
    pub fn new(address: impl Into<String>, coordinates: Vec<f64>) -> Self {
        Self {
            address: address.into(),
            coordinates,
        }
    }
}

impl From<Location> for AddressValue {
    fn from(location: Location) -> Self {
        Self {
            address: location.address,
            coordinates: location.coordinates,
        }
    }
}

impl ComboItem for AddressResult {
    type Value = AddressValue;

    fn combo_label(&self) -> &str {
        &self.label
    }

    fn combo_value(&self) -> AddressValue {
        AddressValue {
            address: self.value.clone(),
            coordinates: self.coordinates.clone(),
        }
    }
}
