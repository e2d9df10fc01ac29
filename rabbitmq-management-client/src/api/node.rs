//! Cluster node operations.

use serde_json::Value;

use crate::api::require;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Operations on cluster nodes.
pub struct Nodes<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Nodes<'_, C> {
    /// List every node in the cluster.
    pub async fn list(&self) -> ApiResult<Value> {
        self.transport.get("/nodes").await
    }

    /// Retrieve one node, optionally including its memory breakdown.
    pub async fn get(&self, name: &str, memory: bool) -> ApiResult<Value> {
        require(name, "node name")?;
        let mut get_path = format!("/nodes/{}", path::segment(name));
        if memory {
            get_path.push_str("?memory=true");
        }
        self.transport.get(&get_path).await
    }
}
