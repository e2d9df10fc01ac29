//! # HTTP Client Module
//!
//! One exchange per call: merge the path and verb into the stored
//! configuration, issue the request, normalize the outcome.

use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use serde_json::Value;
use url::Url;

use crate::error::{ApiResult, Error};
use crate::http::config::{HttpConfig, HttpConfigError};

/// An asynchronous trait that defines the single-exchange entry points the
/// operation groups delegate to.
///
/// [`send`](HttpClient::send) performs exactly one HTTP exchange. A response
/// with a 2xx status produces the decoded body as the success value; any
/// other status becomes [`Error::ApiFailure`] carrying the original status
/// and body; a missing response becomes [`Error::Transport`].
#[async_trait]
pub trait HttpClient: Sync {
    /// Issue one request against the configured endpoint and relay the
    /// normalized outcome.
    async fn send(&self, path: &str, method: Method, body: Option<Value>) -> ApiResult<Value>;

    /// [`send`](HttpClient::send) with the GET verb and no body.
    async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send(path, Method::GET, None).await
    }

    /// [`send`](HttpClient::send) with the PUT verb.
    async fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.send(path, Method::PUT, Some(body)).await
    }

    /// [`send`](HttpClient::send) with the POST verb.
    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.send(path, Method::POST, Some(body)).await
    }

    /// [`send`](HttpClient::send) with the DELETE verb and no body.
    async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send(path, Method::DELETE, None).await
    }
}

/// An implementation of the [`HttpClient`] trait using the reqwest library.
///
/// Holds one reusable request configuration and one timeout, shared by every
/// operation issued through the same instance. The configuration is consumed
/// at construction, so no caller-side mutation can affect in-flight or
/// future requests; the timeout is replaceable through
/// [`set_timeout`](HttpTransport::set_timeout), which requires exclusive
/// access. Callers needing per-call configuration should build a dedicated
/// instance per context.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    basic_auth: Option<(String, String)>,
    timeout: Duration,
}

impl HttpTransport {
    /// Construct a new `HttpTransport` from the given `HttpConfig`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built from the
    /// configured headers.
    pub fn new(config: HttpConfig) -> Result<Self, HttpConfigError> {
        let endpoint = config.endpoint.clone();
        let basic_auth = config.basic_auth.clone();
        let timeout = config.timeout;
        Ok(Self {
            client: reqwest::Client::try_from(config)?,
            endpoint,
            basic_auth,
            timeout,
        })
    }

    /// Replace the timeout used by all subsequent exchanges on this
    /// instance.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.as_str().trim_end_matches('/'), path)
    }
}

/// Implement TryFrom trait to create a reqwest::Client from HttpConfig
impl TryFrom<HttpConfig> for reqwest::Client {
    type Error = HttpConfigError;
    fn try_from(value: HttpConfig) -> Result<Self, Self::Error> {
        Ok(reqwest::Client::builder()
            .default_headers(value.headers)
            .build()?)
    }
}

#[async_trait]
impl HttpClient for HttpTransport {
    async fn send(&self, path: &str, method: Method, body: Option<Value>) -> ApiResult<Value> {
        let url = self.url_for(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), url.as_str())
            .timeout(self.timeout);
        if let Some((username, password)) = &self.basic_auth {
            request = request.basic_auth(username, Some(password));
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let decoded = decode_body(&text);
        if status.is_success() {
            return Ok(decoded);
        }

        tracing::error!("{} {} answered {}", method, url, status);
        Err(Error::ApiFailure {
            status,
            body: decoded,
        })
    }
}

// The broker answers with JSON documents, occasionally with an empty body
// (204 on PUT/DELETE). Anything else, such as plain text from an
// intermediary, is relayed as a string.
fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}


#[cfg(test)]
mod transport_test {
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    use super::*;

    fn transport_for(server: &MockServer) -> HttpTransport {
        HttpTransport::new(HttpConfig::new(&server.url("/api")).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn relays_the_decoded_body_on_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/queues");
                then.status(200).json_body(json!([{"name": "orders"}]));
            })
            .await;

        let value = transport_for(&server).get("/queues").await.unwrap();

        mock.assert_async().await;
        assert_eq!(value, json!([{"name": "orders"}]));
    }

    #[tokio::test]
    async fn failure_carries_the_original_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/queues/prod/missing");
                then.status(404)
                    .json_body(json!({"error": "Object Not Found", "reason": "Not Found"}));
            })
            .await;

        let err = transport_for(&server)
            .get("/queues/prod/missing")
            .await
            .unwrap_err();

        match err {
            Error::ApiFailure { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(
                    body,
                    json!({"error": "Object Not Found", "reason": "Not Found"})
                );
            }
            err => panic!("expected ApiFailure, found {err}"),
        }
    }

    #[tokio::test]
    async fn an_empty_success_body_decodes_to_null() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/vhosts/staging");
                then.status(201);
            })
            .await;

        let value = transport_for(&server)
            .put("/vhosts/staging", json!({}))
            .await
            .unwrap();

        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn a_non_json_body_is_relayed_as_a_string() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/extensions");
                then.status(200).body("proxy says hi");
            })
            .await;

        let value = transport_for(&server).get("/extensions").await.unwrap();

        assert_eq!(value, Value::String("proxy says hi".to_string()));
    }

    #[tokio::test]
    async fn a_timeout_surfaces_as_a_transport_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/nodes");
                then.status(200)
                    .json_body(json!([]))
                    .delay(Duration::from_millis(500));
            })
            .await;

        let mut transport = transport_for(&server);
        transport.set_timeout(Duration::from_millis(50));
        let err = transport.get("/nodes").await.unwrap_err();

        // no status present, unlike a request failure
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn basic_auth_and_custom_headers_are_attached() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/connections")
                    .header("authorization", "Basic Z3Vlc3Q6Z3Vlc3Q=")
                    .header("x-request-source", "tests");
                then.status(200).json_body(json!([]));
            })
            .await;

        let config = HttpConfig::new(&server.url("/api"))
            .unwrap()
            .with_headers(vec![("x-request-source", "tests")])
            .unwrap()
            .with_basic_auth("guest", "guest");
        let transport = HttpTransport::new(config).unwrap();
        transport.get("/connections").await.unwrap();

        mock.assert_async().await;
    }
}
