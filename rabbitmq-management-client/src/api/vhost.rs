//! Virtual host operations.

use serde_json::{json, Value};

use crate::api::require;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Operations on virtual hosts.
pub struct Vhosts<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Vhosts<'_, C> {
    /// List every virtual host, or a single one when a name is given.
    pub async fn list(&self, vhost: Option<&str>) -> ApiResult<Value> {
        let mut path = String::from("/vhosts");
        if let Some(vhost) = vhost {
            path.push('/');
            path.push_str(&path::segment(vhost));
        }
        self.transport.get(&path).await
    }

    /// Create a virtual host.
    pub async fn create(&self, vhost: &str) -> ApiResult<Value> {
        require(vhost, "vhost name")?;
        let path = format!("/vhosts/{}", path::segment(vhost));
        self.transport.put(&path, json!({})).await
    }

    /// Delete a virtual host.
    pub async fn delete(&self, vhost: &str) -> ApiResult<Value> {
        require(vhost, "vhost name")?;
        let path = format!("/vhosts/{}", path::segment(vhost));
        self.transport.delete(&path).await
    }

    /// List the permissions granted on a virtual host.
    pub async fn permissions(&self, vhost: &str) -> ApiResult<Value> {
        require(vhost, "vhost name")?;
        let path = format!("/vhosts/{}/permissions", path::segment(vhost));
        self.transport.get(&path).await
    }
}
