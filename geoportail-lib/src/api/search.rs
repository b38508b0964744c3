//! Full-text search operations

use crate::GeoportailClient;
use crate::error::ApiError;
use crate::model::AddressResult;
use crate::model::FeatureCollection;

use super::address_search_path;
use super::fulltext_search_path;

impl GeoportailClient {
    /// Searches street addresses.
    ///
    /// The search is restricted to the address layer. Hits without a usable
    /// geometry are kept with empty coordinates.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let hits = client.search_addresses("12 rue", DEFAULT_SEARCH_LIMIT).await?;
    /// for hit in hits {
    ///     println!("{} {:?}", hit.label, hit.coordinates);
    /// }
    /// ```
    pub async fn search_addresses(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AddressResult>, ApiError> {
        let collection: FeatureCollection =
            self.get_json(&address_search_path(query, limit)).await?;

        Ok(collection
            .features
            .into_iter()
            .map(AddressResult::from)
            .collect())
    }

    /// Searches localities.
    ///
    /// Runs an unrestricted search and keeps only locality hits, so fewer
    /// than `limit` results may come back.
    pub async fn search_localities(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AddressResult>, ApiError> {
        let collection: FeatureCollection =
            self.get_json(&fulltext_search_path(query, limit)).await?;

        Ok(collection
            .features
            .into_iter()
            .filter(|feature| feature.is_locality())
            .map(AddressResult::from)
            .collect())
    }
}
