//! Async HTTP client for the Helium explorer API.
//!
//! [`HeliumClient::execute`] is the single request path: it turns a
//! [`RequestSpec`] into exactly one HTTPS request against the configured host
//! and hands back the raw body of a `200 OK` response. The resource handles
//! ([`Accounts`], [`Hotspots`], ...) build on it and decode the body into the
//! records in [`crate::types`].

mod accounts;
mod blocks;
mod cities;
mod hotspots;
mod locations;
#[cfg(test)]
mod mock;
mod oracle;
mod pending_transactions;
mod stats;
mod transactions;
mod validators;

pub use accounts::Accounts;
pub use blocks::Blocks;
pub use cities::Cities;
pub use hotspots::Hotspots;
pub use locations::Locations;
pub use oracle::Oracle;
pub use pending_transactions::PendingTransactions;
pub use stats::NetworkStats;
pub use transactions::Transactions;
pub use validators::Validators;

use std::fmt;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::params::{ParamError, QueryParams};

/// Production API host.
pub const MAINNET_HOST: &str = "api.helium.io/v1";

/// Beta API host, which tracks upcoming API changes.
pub const BETA_HOST: &str = "api.helium.wtf/v1";

/// Per-request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const API_KEY_HEADER: &str = "key";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client configuration is unusable (empty host, malformed API key).
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A parameter object was rejected; no request was sent.
    #[error("invalid parameters: {0}")]
    Params(#[from] ParamError),
    /// The request could not be sent or no response arrived in time.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with anything other than `200 OK`.
    #[error("request returned {0}")]
    Api(StatusCode),
    /// The body did not match the expected record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if the call was rejected before any network I/O.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Params(_))
    }

    /// Returns `true` if the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }

    /// The response status, for [`Error::Api`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(status) => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Connection settings for a [`HeliumClient`].
///
/// ```
/// use std::time::Duration;
/// use helium_api_client::client::{ClientConfig, BETA_HOST};
///
/// let config = ClientConfig::default()
///     .with_host(BETA_HOST)
///     .with_api_key("secret")
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.host(), "api.helium.wtf/v1");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    api_key: Option<String>,
    timeout: Duration,
    scheme: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: MAINNET_HOST.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            scheme: "https",
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Settings for the production API (same as `default()`).
    pub fn mainnet() -> Self {
        Self::default()
    }

    /// Settings for the beta API at [`BETA_HOST`].
    pub fn beta() -> Self {
        Self::default().with_host(BETA_HOST)
    }

    /// Host and optional path prefix, e.g. `api.helium.io/v1`.
    ///
    /// Requests always use HTTPS; a scheme given here is dropped, as are
    /// trailing slashes.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = normalize_host(&host.into());
        self
    }

    /// Send `key` as the `key` header on every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[cfg(test)]
    pub(crate) fn plain_http(mut self) -> Self {
        self.scheme = "http";
        self
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

/// One API call: method, path below the host, query pairs and optional body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestSpec {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// Async client for the Helium explorer API.
///
/// Cheap to clone and safe to share between tasks; the configuration is fixed
/// at construction and the only shared state is the connection pool.
///
/// # Example
///
/// ```no_run
/// use helium_api_client::HeliumClient;
///
/// #[tokio::main]
/// async fn main() -> helium_api_client::client::Result<()> {
///     let client = HeliumClient::mainnet()?;
///     let height = client.blocks().height().await?;
///     println!("Height: {}", height.data.height);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct HeliumClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HeliumClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.host.is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }
        Url::parse(&format!("{}://{}", config.scheme, config.host))
            .map_err(|e| Error::Config(format!("invalid host {:?}: {e}", config.host)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| Error::Config(format!("invalid API key: {e}")))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, config })
    }

    /// Create a client for the production API with default settings.
    pub fn mainnet() -> Result<Self> {
        Self::new(ClientConfig::mainnet())
    }

    /// Create a client for the beta API with default settings.
    pub fn beta() -> Result<Self> {
        Self::new(ClientConfig::beta())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for a request: `https://{host}{path}`, plus the query string
    /// when there are query pairs.
    pub fn url(&self, spec: &RequestSpec) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}://{}{}",
            self.config.scheme, self.config.host, spec.path
        ))
        .map_err(|e| Error::Config(format!("invalid request path {:?}: {e}", spec.path)))?;
        if !spec.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&spec.query);
        }
        Ok(url)
    }

    /// Send one request and return the body of a `200 OK` response.
    ///
    /// Nothing is retried: transport failures, timeouts and non-200 statuses
    /// are all returned to the caller as-is.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Vec<u8>> {
        let url = self.url(&spec)?;
        log::debug!("{} {}", spec.method, url);

        let mut request = self.http.request(spec.method, url);
        if let Some(body) = spec.body {
            request = request.body(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::debug!("request returned {status}");
            return Err(Error::Api(status));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// GET `path` with validated query parameters and decode the JSON body.
    ///
    /// Useful for endpoints that have no dedicated accessor yet.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &impl QueryParams,
    ) -> Result<T> {
        params.validate()?;
        let spec = RequestSpec::get(path).with_query(params.query_pairs());
        let body = self.execute(spec).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let spec = RequestSpec::post(path, serde_json::to_vec(body)?);
        let body = self.execute(spec).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // ── Resources ────────────────────────────────────────────────

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn blocks(&self) -> Blocks<'_> {
        Blocks { client: self }
    }

    pub fn cities(&self) -> Cities<'_> {
        Cities { client: self }
    }

    pub fn hotspots(&self) -> Hotspots<'_> {
        Hotspots { client: self }
    }

    pub fn locations(&self) -> Locations<'_> {
        Locations { client: self }
    }

    pub fn oracle(&self) -> Oracle<'_> {
        Oracle { client: self }
    }

    pub fn pending_transactions(&self) -> PendingTransactions<'_> {
        PendingTransactions { client: self }
    }

    pub fn stats(&self) -> NetworkStats<'_> {
        NetworkStats { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub fn validators(&self) -> Validators<'_> {
        Validators { client: self }
    }
}
