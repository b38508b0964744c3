//! Postcode lookup and reverse geocoding

use crate::GeoportailClient;
use crate::error::ApiError;
use crate::model::Coordinates;
use crate::model::GeocodeResponse;
use crate::model::Location;
use crate::model::PostcodeLocation;
use crate::model::address_from_location;
use crate::model::postcode_area;

use super::postcode_search_path;
use super::reverse_geocode_path;

impl GeoportailClient {
    /// Finds the address closest to a position.
    ///
    /// Returns `Ok(None)` when nothing is found there.
    pub async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<Location>, ApiError> {
        let response: GeocodeResponse = self.get_json(&reverse_geocode_path(coordinates)).await?;

        let Some(first) = response.results.first() else {
            return Ok(None);
        };

        let Some(geometry) = first.geomlonlat.as_ref() else {
            return Err(ApiError::parse("reverse geocode result has no geomlonlat"));
        };

        Ok(Some(Location {
            address: address_from_location(first),
            coordinates: geometry.coordinates.clone(),
        }))
    }

    /// Looks up the area and position of a postcode.
    ///
    /// Returns `Ok(None)` when the first match has no geometry or there is
    /// no match at all. A located match missing its address or lon/lat is
    /// a parse error.
    pub async fn lookup_postcode(&self, postcode: &str) -> Result<Option<PostcodeLocation>, ApiError> {
        let response: GeocodeResponse = self.get_json(&postcode_search_path(postcode)).await?;

        let Some(first) = response.results.first() else {
            return Ok(None);
        };
        if !first.has_geometry() {
            return Ok(None);
        }

        let Some(address) = first.address.as_deref() else {
            return Err(ApiError::parse("postcode result has no address"));
        };
        let Some(geometry) = first.geomlonlat.as_ref() else {
            return Err(ApiError::parse("postcode result has no geomlonlat"));
        };

        Ok(Some(PostcodeLocation {
            location: postcode_area(address),
            coordinates: geometry.coordinates.clone(),
        }))
    }
}
