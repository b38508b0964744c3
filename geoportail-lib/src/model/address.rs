//! Normalized records returned by the client

use super::Feature;
use super::feature_coordinates;

/// A geocoded address or locality.
///
/// Both search endpoints produce this exact shape, so widgets never need to
/// know which endpoint an option came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressResult {
    /// Display label.
    pub label: String,
    /// Identity of the option. The API uses the label for this.
    pub value: String,
    /// `[lon, lat]`, or empty when the hit has no usable location.
    pub coordinates: Vec<f64>,
}

impl AddressResult {
    /// Returns `true` if the result carries a usable location.
    pub fn has_location(&self) -> bool {
        !self.coordinates.is_empty()
    }
}

impl From<Feature> for AddressResult {
    fn from(feature: Feature) -> Self {
        let coordinates = feature_coordinates(&feature);
        let label = feature.properties.label;
        Self {
            value: label.clone(),
            label,
            coordinates,
        }
    }
}

/// A device position in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a new position.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Result of a reverse geocoding request.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Formatted address, see [`address_from_location`](super::address_from_location).
    pub address: String,
    /// `[lon, lat]` of the matched address.
    pub coordinates: Vec<f64>,
}

/// Result of a postcode lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PostcodeLocation {
    /// Postcode area, e.g. `"L-1234"`.
    pub location: String,
    /// `[lon, lat]` of the postcode area.
    pub coordinates: Vec<f64>,
}
