//! Message publish and fetch operations.

use serde_json::Value;

use crate::api::{body, require};
use crate::error::{ApiResult, Error};
use crate::http::HttpClient;
use crate::path;

/// Parameters for publishing one message through an exchange.
#[derive(Debug, Clone, Default)]
pub struct MessagePublish {
    /// Virtual host the exchange lives in.
    pub vhost: String,
    /// Exchange to publish through.
    pub exchange: String,
    /// AMQP properties attached to the message. `Null` counts as missing;
    /// pass an empty object for no properties.
    pub properties: Value,
    /// Routing key the exchange routes on.
    pub routing_key: String,
    /// Message payload.
    pub payload: String,
    /// How the payload is encoded: `string` or `base64`.
    pub payload_encoding: String,
}

/// Parameters for fetching messages from a queue.
#[derive(Debug, Clone, Default)]
pub struct MessageFetch {
    /// Virtual host the queue lives in.
    pub vhost: String,
    /// Queue to fetch from.
    pub queue: String,
    /// Maximum number of messages to fetch.
    pub count: Option<u32>,
    /// Put the fetched messages back on the queue afterwards.
    pub requeue: Option<bool>,
    /// How payloads should be returned: `auto` or `base64`.
    pub encoding: Option<String>,
    /// Truncate payloads above this many bytes.
    pub truncate: Option<u64>,
}

impl MessageFetch {
    /// Validate the operation-specific fields and assemble the POST body.
    pub(crate) fn body(&self) -> ApiResult<Value> {
        if self.count.is_none()
            || self.requeue.is_none()
            || self.encoding.as_deref().unwrap_or("").is_empty()
        {
            return Err(Error::Validation(
                "body missing mandatory field: count, requeue, encoding".to_string(),
            ));
        }
        Ok(body(vec![
            ("count", self.count.map(Value::from)),
            ("requeue", self.requeue.map(Value::from)),
            ("encoding", self.encoding.clone().map(Value::from)),
            ("truncate", self.truncate.map(Value::from)),
        ]))
    }
}

/// Message operations.
pub struct Messages<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Messages<'_, C> {
    /// Publish one message through an exchange.
    pub async fn publish(&self, publish: MessagePublish) -> ApiResult<Value> {
        require(&publish.vhost, "vhost name")?;
        require(&publish.exchange, "exchange name")?;
        if publish.properties.is_null()
            || publish.routing_key.is_empty()
            || publish.payload.is_empty()
            || publish.payload_encoding.is_empty()
        {
            return Err(Error::Validation(
                "body missing mandatory field: properties, routing_key, payload, payload_encoding"
                    .to_string(),
            ));
        }
        let post_path = format!(
            "/exchanges/{}/{}/bindings/destination",
            path::segment(&publish.vhost),
            path::segment(&publish.exchange)
        );
        let post_body = body(vec![
            ("properties", Some(publish.properties)),
            ("routing_key", Some(Value::from(publish.routing_key))),
            ("payload", Some(Value::from(publish.payload))),
            ("payload_encoding", Some(Value::from(publish.payload_encoding))),
        ]);
        self.transport.post(&post_path, post_body).await
    }

    /// Fetch messages from a queue.
    pub async fn fetch(&self, fetch: MessageFetch) -> ApiResult<Value> {
        require(&fetch.vhost, "vhost name")?;
        require(&fetch.queue, "queue name")?;
        let post_body = fetch.body()?;
        let post_path = format!(
            "/queues/{}/{}/get",
            path::segment(&fetch.vhost),
            path::segment(&fetch.queue)
        );
        self.transport.post(&post_path, post_body).await
    }
}
