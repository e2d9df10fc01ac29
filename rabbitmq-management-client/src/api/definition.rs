//! Broker definition operations.

use serde_json::Value;

use crate::api::body;
use crate::error::{ApiResult, Error};
use crate::http::HttpClient;

/// Operations on the broker's exported definitions.
pub struct Definitions<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Definitions<'_, C> {
    /// Export the broker's definitions: vhosts, exchanges, queues, bindings,
    /// users, permissions, parameters.
    pub async fn list(&self) -> ApiResult<Value> {
        self.transport.get("/definitions").await
    }

    /// Upload a definitions document to the broker.
    pub async fn set(&self, definitions: Value) -> ApiResult<Value> {
        if definitions.is_null() {
            return Err(Error::Validation(
                "definitions payload not provided".to_string(),
            ));
        }
        let post_body = body(vec![("file", Some(definitions))]);
        self.transport.post("/definitions", post_body).await
    }
}
