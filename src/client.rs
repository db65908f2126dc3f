//! Cachet API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::Credential;
use crate::error::{ApiFailure, CachetError, Result};

const ENV_INSTANCE: &str = "CACHET_API_URL";
const ENV_TOKEN: &str = "CACHET_API_TOKEN";
const USER_AGENT: &str = concat!("cachet-api/", env!("CARGO_PKG_VERSION"));

/// Absent request body, for calls that send none.
const NO_BODY: Option<&()> = None;

/// Low-level Cachet API client.
///
/// Handles URL resolution, authentication, and HTTP requests against a
/// Cachet instance. Entity-specific operations are implemented via the
/// `Get`, `List`, `Create`, `Update`, and `Delete` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use cachet_api::CachetClient;
///
/// # fn example() -> cachet_api::Result<()> {
/// // Create from environment variables
/// let client = CachetClient::from_env()?;
///
/// // Or configure manually
/// let mut client = CachetClient::new("https://demo.cachethq.io/")?;
/// client.set_token_auth("MY-SECRET-TOKEN");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CachetClient {
    http: reqwest::Client,
    base_url: Arc<Url>,
    auth: Credential,
}

impl fmt::Debug for CachetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachetClient")
            .field("base_url", &self.base_url.as_str())
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl CachetClient {
    /// Create a new client for the given instance URL.
    ///
    /// The URL names the root of a Cachet installation, e.g.
    /// `https://demo.cachethq.io/`; call paths like `api/v1/components` are
    /// resolved against it.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance URL is empty or does not parse.
    pub fn new(instance: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(CachetError::Transport)?;

        Self::with_http_client(instance, http)
    }

    /// Create a client that sends requests through the provided
    /// [`reqwest::Client`].
    ///
    /// Useful for custom timeouts, proxies, or TLS settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance URL is empty or does not parse.
    pub fn with_http_client(instance: &str, http: reqwest::Client) -> Result<Self> {
        if instance.is_empty() {
            return Err(CachetError::Config("no Cachet instance given".to_string()));
        }

        // Ensure the base URL ends with / so relative paths resolve under it
        let instance_str = if instance.ends_with('/') {
            instance.to_string()
        } else {
            format!("{instance}/")
        };

        let base_url = Url::parse(&instance_str).map_err(|err| {
            CachetError::Config(format!("invalid instance URL {instance:?}: {err}"))
        })?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            auth: Credential::Unset,
        })
    }

    /// Create a client from environment variables.
    ///
    /// Uses `CACHET_API_URL` for the instance URL and, when set,
    /// `CACHET_API_TOKEN` for token authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if `CACHET_API_URL` is not set or does not parse.
    pub fn from_env() -> Result<Self> {
        let instance = env::var(ENV_INSTANCE).map_err(|_| {
            CachetError::Config(format!("{ENV_INSTANCE} environment variable not set"))
        })?;

        let mut client = Self::new(&instance)?;
        if let Ok(token) = env::var(ENV_TOKEN) {
            client.set_token_auth(token);
        }

        Ok(client)
    }

    /// Get the instance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Switch to HTTP Basic authentication with a dashboard user's email and
    /// password. Replaces any previously configured credential.
    pub fn set_basic_auth(&mut self, username: impl Into<String>, secret: impl Into<String>) {
        self.auth = Credential::Basic {
            username: username.into(),
            secret: secret.into(),
        };
    }

    /// Switch to token authentication. Replaces any previously configured
    /// credential.
    pub fn set_token_auth(&mut self, secret: impl Into<String>) {
        self.auth = Credential::Token {
            secret: secret.into(),
        };
    }

    /// Whether a credential is configured.
    #[must_use]
    pub fn has_auth(&self) -> bool {
        self.auth.is_configured()
    }

    /// Resolve a call path against the instance URL.
    ///
    /// A single leading slash is stripped so `"/foo"` and `"foo"` name the
    /// same resource under the instance. Everything else follows standard
    /// URL resolution: `..` segments collapse, absolute URLs replace the
    /// base entirely (which is what lets pagination links be followed).
    fn url_for(&self, path: &str) -> Result<Url> {
        let relative = path.strip_prefix('/').unwrap_or(path);
        Ok(self.base_url.join(relative)?)
    }

    /// Attach the credential and standard headers to a request.
    fn decorate(&self, mut request: RequestBuilder) -> RequestBuilder {
        if self.auth.is_configured() {
            request = self.auth.apply(request);
            // Content-Type travels with the credential only. Unauthenticated
            // requests have never carried it, and the service tolerates both,
            // so the pairing is kept as-is.
            request = request.header(CONTENT_TYPE, "application/json");
        }

        request.header(ACCEPT, "application/json")
    }

    /// Build a request without sending it.
    ///
    /// Bodies are JSON-encoded with a trailing newline, byte-for-byte what
    /// the service has always been fed.
    pub(crate) fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        let mut request = self.http.request(method, url);

        if let Some(body) = body {
            let mut payload = serde_json::to_vec(body).map_err(CachetError::Encode)?;
            payload.push(b'\n');
            request = request.body(payload);
        }

        Ok(self.decorate(request).build()?)
    }

    /// Perform the network round trip.
    ///
    /// Connect failures, timeouts, and redirect loops surface here; no
    /// response exists for them.
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        self.http
            .execute(request)
            .await
            .map_err(CachetError::Transport)
    }

    /// Make one API call: build the request, send it, and decode the JSON
    /// body into `T`.
    ///
    /// The response metadata comes back alongside the decoded value. When
    /// the service answers with a non-success status, the returned
    /// [`CachetError::Api`] keeps the status, headers, and full body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body fails to encode, the request fails to
    /// send, the service answers with a non-success status, or the response
    /// body fails to decode.
    #[tracing::instrument(skip(self, body))]
    pub async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(T, ApiResponse)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(method.clone(), path, body)?;
        let response = self.execute(request).await?;
        let (meta, bytes) = split_response(method, response).await?;

        let value = serde_json::from_slice(&bytes).map_err(CachetError::Decode)?;
        Ok((value, meta))
    }

    /// Like [`call`](Self::call), but hands the body back verbatim with no
    /// JSON step.
    ///
    /// Status classification still applies; only the decode is skipped.
    #[tracing::instrument(skip(self, body))]
    pub async fn call_raw<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(Vec<u8>, ApiResponse)>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method.clone(), path, body)?;
        let response = self.execute(request).await?;
        split_response(method, response)
            .await
            .map(|(meta, bytes)| (bytes, meta))
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<(T, ApiResponse)> {
        self.call(Method::GET, path, NO_BODY).await
    }

    /// Make a GET request with query parameters.
    ///
    /// `None` fields of `query` are left out of the query string entirely.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<(T, ApiResponse)>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        let request = self.decorate(self.http.get(url).query(query)).build()?;
        let response = self.execute(request).await?;
        let (meta, bytes) = split_response(Method::GET, response).await?;

        let value = serde_json::from_slice(&bytes).map_err(CachetError::Decode)?;
        Ok((value, meta))
    }

    /// Make a POST request with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<(T, ApiResponse)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, Some(body)).await
    }

    /// Make a PUT request with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<(T, ApiResponse)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::PUT, path, Some(body)).await
    }

    /// Make a DELETE request, discarding whatever body comes back.
    ///
    /// Cachet answers deletions with `204 No Content`.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        let (_, meta) = self.call_raw(Method::DELETE, path, NO_BODY).await?;
        Ok(meta)
    }
}

/// Status line, headers, and final URL of a completed round trip.
///
/// Only success responses produce one of these; failed calls carry the same
/// details inside [`CachetError::Api`]. Bodies are consumed by decoding and
/// are not retained here.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: reqwest::StatusCode,
    headers: reqwest::header::HeaderMap,
    url: Url,
}

impl ApiResponse {
    /// Response status.
    #[must_use]
    pub fn status(&self) -> reqwest::StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &reqwest::header::HeaderMap {
        &self.headers
    }

    /// URL the call resolved to, after any redirects.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Read the body off a response and classify the status.
///
/// Non-success statuses become [`CachetError::Api`] with the body attached;
/// success responses come back as metadata plus raw bytes for the caller to
/// decode.
async fn split_response(
    method: Method,
    response: reqwest::Response,
) -> Result<(ApiResponse, Vec<u8>)> {
    let meta = ApiResponse {
        status: response.status(),
        headers: response.headers().clone(),
        url: response.url().clone(),
    };
    let bytes = response.bytes().await.map_err(CachetError::Transport)?;

    if !meta.status.is_success() {
        return Err(CachetError::Api(Box::new(ApiFailure {
            method,
            url: meta.url,
            status: meta.status,
            headers: meta.headers,
            body: bytes.to_vec(),
        })));
    }

    Ok((meta, bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use serde::Serialize;

    use crate::auth::TOKEN_HEADER;

    fn client() -> CachetClient {
        CachetClient::new("https://demo.example.io/").unwrap()
    }

    #[test]
    fn test_empty_instance_is_rejected() {
        let err = CachetClient::new("").unwrap_err();
        assert!(matches!(err, CachetError::Config(_)));
    }

    #[test]
    fn test_unparseable_instance_is_rejected() {
        let err = CachetClient::new("://not-existing").unwrap_err();
        assert!(matches!(err, CachetError::Config(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = CachetClient::new("https://demo.cachethq.io").unwrap();
        let client2 = CachetClient::new("https://demo.cachethq.io/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_client_debug_redacts_credentials() {
        let mut client = client();
        client.set_token_auth("super-secret-token");

        let debug = format!("{client:?}");
        assert!(debug.contains("CachetClient"));
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_request_url_joins_relative_path() {
        let request = client()
            .build_request(Method::GET, "foo", NO_BODY)
            .unwrap();
        assert_eq!(request.url().as_str(), "https://demo.example.io/foo");
    }

    #[test]
    fn test_request_url_strips_one_leading_slash() {
        let request = client()
            .build_request(Method::GET, "/foo", NO_BODY)
            .unwrap();
        assert_eq!(request.url().as_str(), "https://demo.example.io/foo");
    }

    #[test]
    fn test_request_url_empty_path_is_the_instance() {
        let request = client().build_request(Method::GET, "/", NO_BODY).unwrap();
        assert_eq!(request.url().as_str(), "https://demo.example.io/");
    }

    #[test]
    fn test_request_url_collapses_dot_segments() {
        let request = client()
            .build_request(Method::GET, "api/v1/../v1/ping", NO_BODY)
            .unwrap();
        assert_eq!(request.url().as_str(), "https://demo.example.io/api/v1/ping");
    }

    #[test]
    fn test_request_url_bad_path_is_an_error() {
        // An opening bracket starts an IPv6 host that never closes.
        let err = client()
            .build_request(Method::GET, "http://[", NO_BODY)
            .unwrap_err();
        assert!(matches!(err, CachetError::Url(_)));
    }

    #[test]
    fn test_request_body_bytes_end_with_newline() {
        #[derive(Serialize)]
        struct Payload {
            name: String,
            status: u8,
        }

        let payload = Payload {
            name: "X".to_string(),
            status: 1,
        };
        let request = client()
            .build_request(Method::POST, "api/v1/components", Some(&payload))
            .unwrap();

        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(bytes, b"{\"name\":\"X\",\"status\":1}\n");
    }

    #[test]
    fn test_request_without_body_has_none() {
        let request = client().build_request(Method::GET, "/", NO_BODY).unwrap();
        assert!(request.body().is_none());
    }

    #[test]
    fn test_accept_header_is_always_sent() {
        let request = client()
            .build_request(Method::GET, "api/v1/ping", NO_BODY)
            .unwrap();
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_content_type_absent_without_credential() {
        let request = client()
            .build_request(Method::POST, "api/v1/components", Some(&()))
            .unwrap();

        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert!(request.headers().get(TOKEN_HEADER).is_none());
    }

    #[test]
    fn test_content_type_present_with_token() {
        let mut client = client();
        client.set_token_auth("MY-SECRET-TOKEN");

        let request = client
            .build_request(Method::POST, "api/v1/components", Some(&()))
            .unwrap();

        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(request.headers().get(TOKEN_HEADER).unwrap(), "MY-SECRET-TOKEN");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_basic_auth_header_round_trips_credentials() {
        let mut client = client();
        client.set_basic_auth("test@test.com", "test123");

        let request = client
            .build_request(Method::GET, "api/v1/components", NO_BODY)
            .unwrap();

        // base64("test@test.com:test123")
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Basic dGVzdEB0ZXN0LmNvbTp0ZXN0MTIz"
        );
        assert!(request.headers().get(TOKEN_HEADER).is_none());
    }

    #[test]
    fn test_switching_credential_replaces_previous() {
        let mut client = client();
        client.set_basic_auth("test@test.com", "test123");
        client.set_token_auth("MY-SECRET-TOKEN");

        let request = client
            .build_request(Method::GET, "api/v1/components", NO_BODY)
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.headers().get(TOKEN_HEADER).unwrap(), "MY-SECRET-TOKEN");
        assert!(client.has_auth());
    }
}
