//! # Transport Configuration.

use http::header::{InvalidHeaderName, InvalidHeaderValue};
use http::{HeaderMap, HeaderName};
use std::str::FromStr;
use std::time::Duration;
use url::{ParseError, Url};

/// Default exchange timeout is 25 seconds.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(25_000);

/// An enumeration of potential errors related to the transport configuration.
#[derive(thiserror::Error, Debug)]
pub enum HttpConfigError {
    /// Configured with an invalid endpoint URL.
    #[error("`{0}`")]
    InvalidUrl(#[from] ParseError),
    /// Configured with an invalid header value.
    #[error("`{0}`")]
    InvalidHeader(#[from] InvalidHeaderValue),
    /// Configured with an invalid header name.
    #[error("`{0}`")]
    InvalidHeaderName(#[from] InvalidHeaderName),
    /// The underlying HTTP client could not be built.
    #[error("`{0}`")]
    Client(#[from] reqwest::Error),
}

/// A struct representing the configuration for the management API transport.
///
/// # Examples
///
/// Creating a new `HttpConfig` pointing at a management API root:
///
/// ```rust
/// use rabbitmq_management_client::HttpConfig;
///
/// let config = HttpConfig::new("http://localhost:15672/api").unwrap();
/// ```
///
/// Adding credentials and a custom timeout:
///
/// ```rust
/// use std::time::Duration;
/// use rabbitmq_management_client::HttpConfig;
///
/// let config = HttpConfig::new("http://localhost:15672/api")
///     .unwrap()
///     .with_basic_auth("guest", "guest")
///     .with_timeout(Duration::from_secs(5));
/// ```
pub struct HttpConfig {
    pub(super) endpoint: Url,
    pub(super) headers: HeaderMap,
    pub(super) basic_auth: Option<(String, String)>,
    pub(super) timeout: Duration,
}

impl HttpConfig {
    /// Construct a new `HttpConfig` from the management API root URL.
    ///
    /// Every operation path is joined onto this endpoint, so it should
    /// include the prefix the broker serves the API under (usually `/api`).
    ///
    /// # Errors
    ///
    /// This function will return an error if the provided URL is not valid.
    pub fn new(endpoint: &str) -> Result<Self, HttpConfigError> {
        Ok(Self {
            endpoint: Url::from_str(endpoint)?,
            headers: HeaderMap::new(),
            basic_auth: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Optionally include custom headers into the HTTP requests.
    ///
    /// Custom headers can be added using an input iterator that provides
    /// key-value pairs. If the key already exists in the current header map,
    /// the new value will overwrite the old one.
    ///
    /// # Errors
    ///
    /// This function will return an error if the provided key or value is
    /// not valid.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Result<Self, HttpConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (ref key, ref val) in headers {
            let _ = self
                .headers
                .insert(HeaderName::from_str(key.as_ref())?, val.as_ref().parse()?);
        }
        Ok(self)
    }

    /// Authenticate every request with HTTP basic auth.
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.basic_auth = Some((username.to_string(), password.to_string()));
        self
    }

    /// Define a custom timeout for the transport.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}
