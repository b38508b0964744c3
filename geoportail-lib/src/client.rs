//! GeoportailClient and its builder

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::error::ApiError;

/// Public endpoint of the Geoportail Luxembourg API.
pub const DEFAULT_API_URL: &str = "https://apiv3.geoportail.lu/";

/// Number of hits requested when the caller does not say otherwise.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// The client for the geoportail.lu geocoding API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. Every call is a single round trip: there is no
/// caching and no retry.
///
/// # Example
///
/// ```ignore
/// use geoportail_lib::GeoportailClient;
///
/// let client = GeoportailClient::new()?;
/// let hits = client.search_addresses("rue de la gare", 5).await?;
/// ```
#[derive(Clone, Debug)]
pub struct GeoportailClient {
    inner: Arc<GeoportailClientInner>,
}

#[derive(Debug)]
struct GeoportailClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl GeoportailClient {
    /// Creates a client for the public endpoint with default settings.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Starts configuring a client.
    pub fn builder() -> GeoportailClientBuilder {
        GeoportailClientBuilder::new()
    }

    /// Returns the base URL requests are resolved against.
    ///
    /// Always ends with a `/`.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.inner.http_client
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }
}

/// Configuration for a [`GeoportailClient`].
///
/// # Example
///
/// ```ignore
/// let client = GeoportailClient::builder()
///     .base_url("http://localhost:8080")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GeoportailClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl GeoportailClientBuilder {
    /// A builder targeting [`DEFAULT_API_URL`] without timeouts.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the API base URL.
    ///
    /// Defaults to [`DEFAULT_API_URL`]. A trailing `/` is added if missing.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Limits each request, response body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Limits how long connecting may take.
    ///
    /// Ignored when a custom [`http_client`](Self::http_client) is given.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Uses an existing reqwest client, e.g. one shared with other services.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validates the settings and creates the client.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<GeoportailClient, ApiError> {
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        url::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(GeoportailClient {
            inner: Arc::new(GeoportailClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for GeoportailClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = GeoportailClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_trailing_slash_added() {
        let client = GeoportailClient::builder()
            .base_url("http://localhost:8080/geo")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/geo/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = GeoportailClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
