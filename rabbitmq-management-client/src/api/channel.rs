//! Channel operations.

use serde_json::Value;

use crate::api::require;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Filters for listing channels.
#[derive(Debug, Clone, Default)]
pub struct ChannelFilter {
    /// Restrict the listing to channels in one virtual host.
    pub vhost: Option<String>,
    /// Restrict the listing to channels on one connection. Wins over
    /// `vhost` when both are set.
    pub connection: Option<String>,
}

/// Operations on channels.
pub struct Channels<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Channels<'_, C> {
    /// List channels, optionally scoped to one virtual host or connection.
    pub async fn list(&self, filter: ChannelFilter) -> ApiResult<Value> {
        let list_path = if let Some(connection) = &filter.connection {
            format!("/connections/{}/channels", path::segment(connection))
        } else if let Some(vhost) = &filter.vhost {
            format!("/vhosts/{}/channels", path::segment(vhost))
        } else {
            String::from("/channels")
        };
        self.transport.get(&list_path).await
    }

    /// Retrieve one channel.
    pub async fn get(&self, channel: &str) -> ApiResult<Value> {
        require(channel, "channel name")?;
        let get_path = format!("/channels/{}", path::segment(channel));
        self.transport.get(&get_path).await
    }
}

#[cfg(test)]
mod test {
    use http::Method;
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::http::client::test::MockTransport;

    fn channels(transport: &MockTransport) -> Channels<'_, MockTransport> {
        Channels { transport }
    }

    #[tokio::test]
    async fn the_connection_filter_wins_over_the_vhost_filter() {
        let mut transport = MockTransport::new();
        transport.should_send("/connections/conn-1/channels", Method::GET, None, json!([]));

        let filter = ChannelFilter {
            vhost: Some("/".to_string()),
            connection: Some("conn-1".to_string()),
        };
        channels(&transport).list(filter).await.unwrap();
    }

    #[tokio::test]
    async fn the_vhost_filter_scopes_the_listing() {
        let mut transport = MockTransport::new();
        transport.should_send("/vhosts/%2F/channels", Method::GET, None, json!([]));

        let filter = ChannelFilter {
            vhost: Some("/".to_string()),
            connection: None,
        };
        channels(&transport).list(filter).await.unwrap();
    }

    #[tokio::test]
    async fn list_hits_the_collection_when_unfiltered() {
        let mut transport = MockTransport::new();
        transport.should_send("/channels", Method::GET, None, json!([]));

        channels(&transport).list(ChannelFilter::default()).await.unwrap();
    }

    #[tokio::test]
    async fn get_without_a_name_is_rejected_before_any_call() {
        let transport = MockTransport::new();

        let err = channels(&transport).get("").await.unwrap_err();

        assert!(matches!(err, Error::Validation(ref m) if m == "channel name not provided"));
    }
}
