//! GeoJSON features returned by the full-text search endpoint

use serde::Deserialize;
use serde_json::Value;

/// Layer name the search endpoint uses for localities.
pub const LOCALITY_LAYER: &str = "Localité";

/// Layer filter the search endpoint accepts for street addresses.
pub const ADDRESS_LAYER: &str = "Adresse";

/// A feature collection as returned by `fulltextsearch`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    /// The matching features, best match first.
    pub features: Vec<Feature>,
}

/// A single search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Feature properties.
    pub properties: FeatureProperties,
    /// Feature geometry. Some layers return hits without one.
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// The subset of feature properties the client reads.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    /// Human-readable label, e.g. `"12 Rue Example, 1234 Luxembourg"`.
    pub label: String,
    /// Source layer, e.g. `"Adresse"` or `"Localité"`.
    #[serde(default)]
    pub layer_name: Option<String>,
}

impl Feature {
    /// Returns `true` if the feature belongs to the locality layer.
    pub fn is_locality(&self) -> bool {
        self.properties.layer_name.as_deref() == Some(LOCALITY_LAYER)
    }
}

/// A GeoJSON geometry.
///
/// Coordinates are kept raw because their nesting depends on `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// GeoJSON geometry type (`Point`, `Polygon`, `LineString`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Raw coordinate array.
    #[serde(default)]
    pub coordinates: Value,
}

impl Geometry {
    /// Creates a geometry of the given type.
    pub fn new(kind: impl Into<String>, coordinates: Value) -> Self {
        Self {
            kind: kind.into(),
            coordinates,
        }
    }

    /// Returns the representative position of this geometry.
    ///
    /// `Point` yields its own position and `Polygon` the first vertex of its
    /// first ring. Every other type, and malformed coordinates, yield an
    /// empty vector: the hit is still usable as a label, just not as a
    /// location.
    pub fn representative_position(&self) -> Vec<f64> {
        let position = match self.kind.as_str() {
            "Point" => Some(&self.coordinates),
            "Polygon" => self.coordinates.get(0).and_then(|ring| ring.get(0)),
            _ => None,
        };

        position
            .and_then(|value| Vec::<f64>::deserialize(value).ok())
            .unwrap_or_default()
    }
}

/// Extracts the coordinates of a search hit.
///
/// See [`Geometry::representative_position`].
pub fn feature_coordinates(feature: &Feature) -> Vec<f64> {
    feature
        .geometry
        .as_ref()
        .map(Geometry::representative_position)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_point_coordinates() {
        let geometry = Geometry::new("Point", json!([6.13, 49.61]));
        assert_eq!(geometry.representative_position(), vec![6.13, 49.61]);
    }

    #[test]
    fn test_polygon_first_vertex() {
        let geometry = Geometry::new("Polygon", json!([[[6.1, 49.6], [6.2, 49.7]]]));
        assert_eq!(geometry.representative_position(), vec![6.1, 49.6]);
    }

    #[test]
    fn test_other_geometry_is_empty() {
        let geometry = Geometry::new("LineString", json!([[6.1, 49.6], [6.2, 49.7]]));
        assert!(geometry.representative_position().is_empty());

        let geometry = Geometry::new("MultiPolygon", json!([[[[6.1, 49.6]]]]));
        assert!(geometry.representative_position().is_empty());
    }

    #[test]
    fn test_malformed_coordinates_are_empty() {
        let geometry = Geometry::new("Point", json!("nope"));
        assert!(geometry.representative_position().is_empty());

        let geometry = Geometry::new("Polygon", json!([]));
        assert!(geometry.representative_position().is_empty());
    }

    #[test]
    fn test_feature_deserialize() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "properties": { "label": "Luxembourg", "layer_name": "Localité" },
            "geometry": { "type": "Polygon", "coordinates": [[[6.1, 49.6], [6.2, 49.7]]] }
        }))
        .unwrap();

        assert!(feature.is_locality());
        assert_eq!(feature_coordinates(&feature), vec![6.1, 49.6]);
    }

    #[test]
    fn test_feature_without_geometry() {
        let feature: Feature = serde_json::from_value(json!({
            "properties": { "label": "Somewhere" }
        }))
        .unwrap();

        assert!(!feature.is_locality());
        assert!(feature_coordinates(&feature).is_empty());
    }
}
