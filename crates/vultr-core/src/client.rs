//! Request executor trait and the `reqwest`-backed HTTP client.
//!
//! Resource crates (networks, etc.) never talk to `reqwest` directly. They
//! depend on the [`RequestExecutor`] trait, which performs one authenticated
//! call and hands back the raw success body; [`VultrClient`] is the real
//! implementation. Tests substitute a recording double at the same seam.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{ClientBuilder, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("vultr-rs/", env!("CARGO_PKG_VERSION"));

/// Default base URL for the Vultr v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.vultr.com";

/// Default request timeout in seconds.
pub const API_DEFAULT_TIMEOUT: u64 = 30;

/// Default idle timeout for connection pools, in seconds.
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client configuration.
///
/// Cancellation is ambient: the per-request timeout below bounds every
/// call, and dropping an in-flight future aborts it. There is no retry
/// machinery; a failed call surfaces exactly one error.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(API_DEFAULT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes one authenticated HTTP exchange against the provider.
///
/// `form` pairs travel as the query string for GET requests and as an
/// `application/x-www-form-urlencoded` body for everything else. A
/// successful call yields the raw response body; non-2xx statuses come
/// back as [`Error::Api`] with the body text verbatim.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Perform the call and return the raw success body.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<Vec<u8>>;
}

/// Decode a JSON response body into `target`'s type.
///
/// An empty body decodes as JSON `null`, which matches targets like
/// `Option<T>` and `()`-shaped values; anything else is a decode error.
pub fn decode_body<T>(path: &str, bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    if bytes.is_empty() {
        serde_json::from_value(serde_json::Value::Null).map_err(|err| {
            Error::Decode(format!("Empty response body for `{path}`: {err}"))
        })
    } else {
        serde_json::from_slice(bytes)
            .map_err(|err| Error::Decode(format!("Failed to decode response for `{path}`: {err}")))
    }
}

/// Builder for [`VultrClient`].
#[derive(Debug, Clone)]
pub struct VultrClientBuilder {
    base_url: Url,
    http_config: ClientConfig,
    api_key: Option<String>,
}

impl VultrClientBuilder {
    /// Create a new builder from the provided base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(base_url.as_ref()).map_err(|err| {
            Error::Config(format!("Invalid base URL `{}`: {err}", base_url.as_ref()))
        })?;

        Ok(Self {
            base_url: url,
            http_config: ClientConfig::new(),
            api_key: None,
        })
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Configure the `API-Key` header used for authentication.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Build the client instance.
    pub fn build(self) -> Result<VultrClient> {
        let mut builder = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
            .connect_timeout(Duration::from_secs(10));

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(VultrClient {
            http,
            base_url: self.base_url,
            api_key: self.api_key,
        })
    }
}

/// Authenticated asynchronous client for the Vultr v1 API.
#[derive(Debug, Clone)]
pub struct VultrClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl VultrClient {
    /// Construct a client for the public API with the given key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        VultrClientBuilder::new(DEFAULT_BASE_URL)?
            .with_api_key(api_key)
            .build()
    }

    /// Construct a builder for a custom endpoint or configuration.
    pub fn builder(base_url: impl AsRef<str>) -> Result<VultrClientBuilder> {
        VultrClientBuilder::new(base_url)
    }

    /// Access the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let normalized = path.strip_prefix('/').unwrap_or(path);
        self.base_url
            .join(normalized)
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid API path `{path}`: {err}")))
    }
}

#[async_trait]
impl RequestExecutor for VultrClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<Vec<u8>> {
        let url = self.build_url(path)?;
        debug!(method = %method, path, "Vultr API request");

        let is_get = method == Method::GET;
        let mut request = self.http.request(method, url);

        if let Some(key) = &self.api_key {
            request = request.header("API-Key", key);
        }
        request = request.header("Accept", "application/json");

        if !form.is_empty() {
            request = if is_get {
                request.query(form)
            } else {
                request.form(form)
            };
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::Transport(format!("Failed to read response body: {err}")))?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        Err(Error::Api {
            status: status.as_u16(),
            message: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
