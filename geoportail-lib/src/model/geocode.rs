//! Payloads of the `geocode/search` and `geocode/reverse` endpoints

use serde::Deserialize;
use serde_json::Value;

/// Envelope shared by both geocode endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    /// Matches, best first. Required: a body without it is malformed.
    pub results: Vec<GeocodeResult>,
}

/// A single geocode match.
///
/// Address parts come back as strings or numbers depending on the record,
/// so they are kept as raw JSON and rendered by [`address_from_location`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResult {
    /// House number.
    #[serde(default)]
    pub number: Value,
    /// Street name.
    #[serde(default)]
    pub street: Value,
    /// Postal code without the `L-` prefix.
    #[serde(default)]
    pub postal_code: Value,
    /// Locality name.
    #[serde(default)]
    pub locality: Value,
    /// Free-form address, used by postcode lookups.
    #[serde(default)]
    pub address: Option<String>,
    /// Geometry in the national projection. Only checked for presence.
    #[serde(default)]
    pub geom: Option<Value>,
    /// Geometry in WGS84.
    #[serde(default)]
    pub geomlonlat: Option<LonLatGeometry>,
}

/// The WGS84 point attached to a geocode match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LonLatGeometry {
    /// `[lon, lat]`.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl GeocodeResult {
    /// Returns `true` if the match has a geometry.
    pub fn has_geometry(&self) -> bool {
        matches!(&self.geom, Some(geom) if !geom.is_null())
    }
}

/// Formats a geocode match as `"{number}, {street}, L-{postal_code} {locality}"`.
pub fn address_from_location(location: &GeocodeResult) -> String {
    format!(
        "{}, {}, L-{} {}",
        display_part(&location.number),
        display_part(&location.street),
        display_part(&location.postal_code),
        display_part(&location.locality)
    )
}

/// Returns `"L-{first segment}"` for a postcode lookup address.
pub fn postcode_area(address: &str) -> String {
    let first = address.split(',').next().unwrap_or_default();
    format!("L-{}", first)
}

fn display_part(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_address_from_location() {
        let location: GeocodeResult = serde_json::from_value(json!({
            "number": 12,
            "street": "Rue Example",
            "postal_code": "1234",
            "locality": "Luxembourg"
        }))
        .unwrap();

        assert_eq!(
            address_from_location(&location),
            "12, Rue Example, L-1234 Luxembourg"
        );
    }

    #[test]
    fn test_address_from_string_number() {
        let location: GeocodeResult = serde_json::from_value(json!({
            "number": "12A",
            "street": "Rue Example",
            "postal_code": 1234,
            "locality": "Luxembourg"
        }))
        .unwrap();

        assert_eq!(
            address_from_location(&location),
            "12A, Rue Example, L-1234 Luxembourg"
        );
    }

    #[test]
    fn test_results_are_required() {
        let missing = serde_json::from_value::<GeocodeResponse>(json!({ "error": "oops" }));
        assert!(missing.is_err());

        let empty: GeocodeResponse = serde_json::from_value(json!({ "results": [] })).unwrap();
        assert!(empty.results.is_empty());
    }

    #[test]
    fn test_postcode_area() {
        assert_eq!(postcode_area("1234,Luxembourg"), "L-1234");
        assert_eq!(postcode_area("1234"), "L-1234");
        assert_eq!(postcode_area(""), "L-");
    }

    #[test]
    fn test_geometry_presence() {
        let with: GeocodeResult = serde_json::from_value(json!({
            "geom": { "type": "Point", "coordinates": [77000.0, 75000.0] },
            "geomlonlat": { "type": "Point", "coordinates": [6.13, 49.61] }
        }))
        .unwrap();
        assert!(with.has_geometry());
        assert_eq!(with.geomlonlat.map(|g| g.coordinates), Some(vec![6.13, 49.61]));

        let without: GeocodeResult = serde_json::from_value(json!({ "geom": null })).unwrap();
        assert!(!without.has_geometry());
        assert!(without.geomlonlat.is_none());
    }
}
