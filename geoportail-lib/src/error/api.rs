//! Failures of a geoportail request

/// A geoportail request that did not produce a usable response.
///
/// "No results" is never an error: the client returns an empty list or
/// `None` for that. Everything here is a transport or payload failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("geoportail returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never got an answer (DNS, TLS, timeout, reset).
    #[error("request to geoportail failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured base URL or a built endpoint URL is malformed.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// The body did not have the expected JSON shape.
    #[error("unexpected response payload: {message}")]
    Parse {
        message: String,
        /// Raw body, kept for the logs.
        body: Option<String>,
    },
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// A parse error that keeps the offending body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Status of an [`ApiError::Http`] error.
    pub fn status_code(&self) -> Option<u16> {
        if let Self::Http { status, .. } = self {
            Some(*status)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_display() {
        let err = ApiError::http(503, "Service Unavailable");
        assert_eq!(err.to_string(), "geoportail returned HTTP 503: Service Unavailable");
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_parse_keeps_body() {
        let err = ApiError::parse_with_body("missing field `features`", "{}");
        match err {
            ApiError::Parse { body, .. } => assert_eq!(body.as_deref(), Some("{}")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(ApiError::parse("bad").status_code(), None);
    }
}
