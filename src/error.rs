//! Error types for Cachet API operations.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Errors that can occur during Cachet API operations.
#[derive(Debug, Error)]
pub enum CachetError {
    /// Client configuration is missing or unusable.
    #[error("Cachet configuration required: {0}")]
    Config(String),

    /// A call path could not be resolved against the instance URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request never produced a response (connect failure, timeout,
    /// too many redirects).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API call to {} failed: {}", .0.url, .0.status)]
    Api(Box<ApiFailure>),

    /// A success response body could not be parsed as the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl CachetError {
    /// The HTTP status of the failed call, when the service answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CachetError::Api(failure) => Some(failure.status),
            _ => None,
        }
    }
}

/// Everything the service said when a call failed.
///
/// Non-success responses keep their status, headers and full body here so
/// callers can log the failure or pull a structured error out of it.
#[derive(Debug)]
pub struct ApiFailure {
    /// HTTP method of the failed call.
    pub method: Method,
    /// URL the call went to.
    pub url: Url,
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiFailure {
    /// The response body as text, lossily decoded.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the response body as JSON.
    ///
    /// Cachet error bodies usually carry an `errors` array; this lets callers
    /// pull it out without giving up the raw bytes.
    pub fn json<T: DeserializeOwned>(&self) -> core::result::Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Result type alias for Cachet operations.
pub type Result<T> = core::result::Result<T, CachetError>;
