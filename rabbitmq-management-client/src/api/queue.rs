//! Queue operations.

use serde_json::Value;

use crate::api::message::MessageFetch;
use crate::api::{body, require};
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Filters for listing queues.
#[derive(Debug, Clone, Default)]
pub struct QueueFilter {
    /// Restrict the listing to one virtual host.
    pub vhost: Option<String>,
    /// Extra query pairs forwarded to the broker (state, pagination, ...).
    pub query: Vec<(String, String)>,
}

/// Parameters for declaring a queue.
#[derive(Debug, Clone, Default)]
pub struct QueueSpec {
    /// Virtual host the queue lives in.
    pub vhost: String,
    /// Queue name.
    pub queue: String,
    /// Delete the queue once the last consumer disconnects.
    pub auto_delete: Option<bool>,
    /// Survive broker restarts.
    pub durable: Option<bool>,
    /// Node the queue should be located on.
    pub node: Option<String>,
    /// Additional broker-specific arguments.
    pub arguments: Option<Value>,
}

/// Operations on queues.
pub struct Queues<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Queues<'_, C> {
    /// List queues, optionally scoped to one virtual host and filtered by
    /// query pairs.
    pub async fn list(&self, filter: QueueFilter) -> ApiResult<Value> {
        let mut list_path = String::from("/queues");
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

    /// Retrieve one queue.
    pub async fn get(&self, vhost: &str, queue: &str) -> ApiResult<Value> {
        self.transport.get(&queue_path(vhost, queue)?).await
    }

    /// Declare a queue.
    pub async fn create(&self, spec: QueueSpec) -> ApiResult<Value> {
        let put_path = queue_path(&spec.vhost, &spec.queue)?;
        let put_body = body(vec![
            ("auto_delete", spec.auto_delete.map(Value::from)),
            ("durable", spec.durable.map(Value::from)),
            ("node", spec.node.map(Value::from)),
            ("arguments", spec.arguments),
        ]);
        self.transport.put(&put_path, put_body).await
    }

    /// Delete a queue.
    pub async fn delete(&self, vhost: &str, queue: &str) -> ApiResult<Value> {
        self.transport.delete(&queue_path(vhost, queue)?).await
    }

    /// List the bindings attached to a queue.
    pub async fn bindings(&self, vhost: &str, queue: &str) -> ApiResult<Value> {
        let get_path = format!("{}/bindings", queue_path(vhost, queue)?);
        self.transport.get(&get_path).await
    }

    /// Drop every message currently held by a queue.
    pub async fn purge(&self, vhost: &str, queue: &str) -> ApiResult<Value> {
        let delete_path = format!("{}/contents", queue_path(vhost, queue)?);
        self.transport.delete(&delete_path).await
    }

    /// Trigger a broker-side action on a queue, such as `sync`.
    pub async fn invoke_action(&self, vhost: &str, queue: &str, action: &str) -> ApiResult<Value> {
        let post_path = format!("{}/actions", queue_path(vhost, queue)?);
        require(action, "action")?;
        let post_body = body(vec![("action", Some(Value::from(action)))]);
        self.transport.post(&post_path, post_body).await
    }

    /// Fetch messages from a queue.
    pub async fn get_messages(&self, fetch: MessageFetch) -> ApiResult<Value> {
        let post_path = format!("{}/get", queue_path(&fetch.vhost, &fetch.queue)?);
        let post_body = fetch.body()?;
        self.transport.post(&post_path, post_body).await
    }
}

/// Validate the identifying fields and build `/queues/{vhost}/{queue}`.
fn queue_path(vhost: &str, queue: &str) -> ApiResult<String> {
    require(vhost, "vhost name")?;
    require(queue, "queue name")?;
    Ok(format!(
        "/queues/{}/{}",
        path::segment(vhost),
        path::segment(queue)
    ))
}
