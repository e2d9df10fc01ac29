//! Cluster metadata operations.

use serde_json::Value;

use crate::api::{body, require};
use crate::error::ApiResult;
use crate::http::HttpClient;

/// Operations on cluster-wide metadata.
pub struct Cluster<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Cluster<'_, C> {
    /// Retrieve the name of the cluster.
    pub async fn name(&self) -> ApiResult<Value> {
        self.transport.get("/cluster-name").await
    }

    /// Set the name of the cluster.
    pub async fn set_name(&self, name: &str) -> ApiResult<Value> {
        require(name, "cluster name")?;
        let put_body = body(vec![("name", Some(Value::from(name)))]);
        self.transport.put("/cluster-name", put_body).await
    }
}
