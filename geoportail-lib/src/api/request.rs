//! Request execution and endpoint URLs

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::GeoportailClient;
use crate::error::ApiError;
use crate::model::ADDRESS_LAYER;
use crate::model::Coordinates;

/// Relative path of the full-text search endpoint.
pub const FULLTEXT_SEARCH_PATH: &str = "fulltextsearch";

/// Relative path of the postcode search endpoint.
pub const GEOCODE_SEARCH_PATH: &str = "geocode/search";

/// Relative path of the reverse geocoding endpoint.
pub const GEOCODE_REVERSE_PATH: &str = "geocode/reverse";

/// Builds the relative URL for an address search.
pub fn address_search_path(query: &str, limit: usize) -> String {
    format!(
        "{}?limit={}&layer={}&query={}",
        FULLTEXT_SEARCH_PATH,
        limit,
        ADDRESS_LAYER,
        urlencoding::encode(query)
    )
}

/// Builds the relative URL for an unrestricted search.
pub fn fulltext_search_path(query: &str, limit: usize) -> String {
    format!(
        "{}?limit={}&query={}",
        FULLTEXT_SEARCH_PATH,
        limit,
        urlencoding::encode(query)
    )
}

/// Builds the relative URL for a postcode lookup.
pub fn postcode_search_path(postcode: &str) -> String {
    format!("{}?zip={}", GEOCODE_SEARCH_PATH, urlencoding::encode(postcode))
}

/// Builds the relative URL for a reverse geocoding request.
pub fn reverse_geocode_path(coordinates: Coordinates) -> String {
    format!(
        "{}?lon={}&lat={}",
        GEOCODE_REVERSE_PATH, coordinates.longitude, coordinates.latitude
    )
}

impl GeoportailClient {
    /// Sends a GET request for `path` (relative to the base URL) and decodes
    /// the JSON body.
    ///
    /// Non-success statuses become [`ApiError::Http`], bodies that do not
    /// match `T` become [`ApiError::Parse`].
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url(), path);
        let url = Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;

        log::debug!("GET {}", url);

        let mut request = self.http_client().get(url.clone());
        if let Some(timeout) = self.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            };
            log::warn!("GET {} failed with HTTP {}", url, status.as_u16());
            return Err(ApiError::http(status.as_u16(), message));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::warn!("GET {} returned an unexpected payload: {}", url, e);
            ApiError::parse_with_body(e.to_string(), body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_search_path() {
        assert_eq!(
            address_search_path("rue de la gare", 5),
            "fulltextsearch?limit=5&layer=Adresse&query=rue%20de%20la%20gare"
        );
    }

    #[test]
    fn test_query_is_percent_encoded() {
        assert_eq!(
            fulltext_search_path("Esch/Alzette & co", 20),
            "fulltextsearch?limit=20&query=Esch%2FAlzette%20%26%20co"
        );
        assert_eq!(
            postcode_search_path("L-1234 #2"),
            "geocode/search?zip=L-1234%20%232"
        );
    }

    #[test]
    fn test_reverse_geocode_path() {
        assert_eq!(
            reverse_geocode_path(Coordinates::new(49.61, 6.13)),
            "geocode/reverse?lon=6.13&lat=49.61"
        );
    }
}
