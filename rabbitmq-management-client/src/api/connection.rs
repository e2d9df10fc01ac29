//! Connection operations.

use serde_json::Value;

use crate::api::require;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Operations on client connections.
pub struct Connections<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Connections<'_, C> {
    /// List every connection currently open against the broker.
    pub async fn list(&self) -> ApiResult<Value> {
        self.transport.get("/connections").await
    }

    /// Retrieve one connection.
    pub async fn get(&self, connection: &str) -> ApiResult<Value> {
        require(connection, "connection name")?;
        let get_path = format!("/connections/{}", path::segment(connection));
        self.transport.get(&get_path).await
    }

    /// Force-close a connection.
    pub async fn close(&self, connection: &str) -> ApiResult<Value> {
        require(connection, "connection name")?;
        let delete_path = format!("/connections/{}", path::segment(connection));
        self.transport.delete(&delete_path).await
    }
}

#[cfg(test)]
mod test {
    use http::Method;
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::http::client::test::MockTransport;

    fn connections(transport: &MockTransport) -> Connections<'_, MockTransport> {
        Connections { transport }
    }

    #[tokio::test]
    async fn get_without_a_name_is_rejected_before_any_call() {
        let transport = MockTransport::new();

        let err = connections(&transport).get("").await.unwrap_err();

        assert!(matches!(err, Error::Validation(ref m) if m == "connection name not provided"));
    }

    #[tokio::test]
    async fn close_encodes_the_connection_name() {
        let mut transport = MockTransport::new();
        transport.should_send(
            "/connections/127.0.0.1%3A5672%20-%3E%20127.0.0.1%3A49154",
            Method::DELETE,
            None,
            Value::Null,
        );

        connections(&transport)
            .close("127.0.0.1:5672 -> 127.0.0.1:49154")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn list_hits_the_collection() {
        let mut transport = MockTransport::new();
        transport.should_send("/connections", Method::GET, None, json!([]));

        connections(&transport).list().await.unwrap();
    }
}
