//! Broker-wide introspection operations.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Filters for listing consumers.
#[derive(Debug, Clone, Default)]
pub struct ConsumerFilter {
    /// Restrict the listing to one virtual host.
    pub vhost: Option<String>,
    /// Extra query pairs forwarded to the broker.
    pub query: Vec<(String, String)>,
}

/// Broker-wide introspection operations.
pub struct General<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> General<'_, C> {
    /// Retrieve a summary of the cluster.
    pub async fn overview(&self) -> ApiResult<Value> {
        self.transport.get("/cluster-name").await
    }

    /// List the management plugin's extensions.
    pub async fn extensions(&self) -> ApiResult<Value> {
        self.transport.get("/extensions").await
    }

    /// List consumers, optionally scoped to one virtual host and filtered by
    /// query pairs.
    pub async fn consumers(&self, filter: ConsumerFilter) -> ApiResult<Value> {
        let mut list_path = String::from("/consumers");
        if let Some(vhost) = &filter.vhost {
            list_path.push('/');
            list_path.push_str(&path::segment(vhost));
        }
        if !filter.query.is_empty() {
            list_path.push('?');
            list_path.push_str(&path::query(
                filter.query.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            ));
        }
        self.transport.get(&list_path).await
    }
}
