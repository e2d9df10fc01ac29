//! Binding operations.

use serde_json::Value;

use crate::api::require;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Operations on bindings.
pub struct Bindings<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Bindings<'_, C> {
    /// List every binding, optionally scoped to one virtual host.
    pub async fn list(&self, vhost: Option<&str>) -> ApiResult<Value> {
        let mut list_path = String::from("/bindings");
        if let Some(vhost) = vhost {
            list_path.push('/');
            list_path.push_str(&path::segment(vhost));
        }
        self.transport.get(&list_path).await
    }

    /// List the bindings where the given exchange is the source.
    pub async fn for_source(&self, vhost: &str, exchange: &str) -> ApiResult<Value> {
        let get_path = format!("{}/bindings/source", exchange_path(vhost, exchange)?);
        self.transport.get(&get_path).await
    }

    /// List the bindings where the given exchange is the destination.
    pub async fn for_destination(&self, vhost: &str, exchange: &str) -> ApiResult<Value> {
        let get_path = format!("{}/bindings/destination", exchange_path(vhost, exchange)?);
        self.transport.get(&get_path).await
    }
}

fn exchange_path(vhost: &str, exchange: &str) -> ApiResult<String> {
    require(vhost, "vhost name")?;
    require(exchange, "exchange name")?;
    Ok(format!(
        "/exchanges/{}/{}",
        path::segment(vhost),
        path::segment(exchange)
    ))
}

#[cfg(test)]
mod test {
    use http::Method;
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::http::client::test::MockTransport;

    fn bindings(transport: &MockTransport) -> Bindings<'_, MockTransport> {
        Bindings { transport }
    }

    #[tokio::test]
    async fn for_source_builds_the_exchange_scoped_path() {
        let mut transport = MockTransport::new();
        transport.should_send(
            "/exchanges/%2F/events/bindings/source",
            Method::GET,
            None,
            json!([]),
        );

        bindings(&transport).for_source("/", "events").await.unwrap();
    }

    #[tokio::test]
    async fn for_destination_without_an_exchange_is_rejected() {
        let transport = MockTransport::new();

        let err = bindings(&transport)
            .for_destination("/", "")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(ref m) if m == "exchange name not provided"));
    }

    #[tokio::test]
    async fn list_scopes_to_a_vhost_when_given() {
        let mut transport = MockTransport::new();
        transport.should_send("/bindings/staging", Method::GET, None, json!([]));

        bindings(&transport).list(Some("staging")).await.unwrap();
    }

    #[tokio::test]
    async fn list_hits_the_collection_when_unscoped() {
        let mut transport = MockTransport::new();
        transport.should_send("/bindings", Method::GET, None, json!([]));

        bindings(&transport).list(None).await.unwrap();
    }
}
