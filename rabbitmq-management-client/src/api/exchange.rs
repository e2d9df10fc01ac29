//! Exchange operations.

use serde_json::Value;

use crate::api::{body, require};
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::path;

/// Parameters for declaring an exchange.
#[derive(Debug, Clone, Default)]
pub struct ExchangeSpec {
    /// Virtual host the exchange lives in.
    pub vhost: String,
    /// Exchange name.
    pub exchange: String,
    /// Exchange type: `direct`, `topic`, `fanout`, or `headers`.
    pub kind: String,
    /// Delete the exchange once nothing is bound to it anymore.
    pub auto_delete: Option<bool>,
    /// Survive broker restarts.
    pub durable: Option<bool>,
    /// Refuse direct publishes; only exchange-to-exchange bindings may feed
    /// an internal exchange.
    pub internal: Option<bool>,
    /// Additional broker-specific arguments.
    pub arguments: Option<Value>,
}

/// Operations on exchanges.
pub struct Exchanges<'a, C: HttpClient> {
    pub(crate) transport: &'a C,
}

impl<C: HttpClient> Exchanges<'_, C> {
    /// List every exchange, optionally scoped to one virtual host.
    pub async fn list(&self, vhost: Option<&str>) -> ApiResult<Value> {
        let mut path = String::from("/exchanges");
        if let Some(vhost) = vhost {
            path.push('/');
            path.push_str(&path::segment(vhost));
        }
        self.transport.get(&path).await
    }

    /// Retrieve one exchange.
    pub async fn get(&self, vhost: &str, exchange: &str) -> ApiResult<Value> {
        self.transport.get(&exchange_path(vhost, exchange)?).await
    }

    /// Declare an exchange.
    pub async fn create(&self, spec: ExchangeSpec) -> ApiResult<Value> {
        let path = exchange_path(&spec.vhost, &spec.exchange)?;
        require(&spec.kind, "exchange type")?;
        let put_body = body(vec![
            ("type", Some(Value::from(spec.kind))),
            ("auto_delete", spec.auto_delete.map(Value::from)),
            ("durable", spec.durable.map(Value::from)),
            ("internal", spec.internal.map(Value::from)),
            ("arguments", spec.arguments),
        ]);
        self.transport.put(&path, put_body).await
    }

    /// Delete an exchange.
    pub async fn delete(&self, vhost: &str, exchange: &str) -> ApiResult<Value> {
        self.transport
            .delete(&exchange_path(vhost, exchange)?)
            .await
    }
}

/// Validate the identifying fields and build `/exchanges/{vhost}/{exchange}`.
fn exchange_path(vhost: &str, exchange: &str) -> ApiResult<String> {
    require(vhost, "vhost name")?;
    require(exchange, "exchange name")?;
    Ok(format!(
        "/exchanges/{}/{}",
        path::segment(vhost),
        path::segment(exchange)
    ))
}
