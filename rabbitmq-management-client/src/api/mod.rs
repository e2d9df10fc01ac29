//! Resource operation groups.
//!
//! One module per resource kind. Every operation validates its required
//! fields first (vhost before resource name before operation-specific
//! fields), then builds the resource path and delegates to the transport
//! with the matching verb. Groups never call each other; they only share
//! the facade's transport instance.

use serde_json::{Map, Value};

use crate::error::{ApiResult, Error};

pub mod binding;
pub mod channel;
pub mod cluster;
pub mod connection;
pub mod definition;
pub mod exchange;
pub mod general;
pub mod message;
pub mod node;
pub mod queue;
pub mod vhost;

/// Reject an empty required identifier before any request is built.
pub(crate) fn require(value: &str, what: &str) -> ApiResult<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{what} not provided")));
    }
    Ok(())
}

/// Build a JSON object from the recognized fields of an operation, dropping
/// the ones that were not supplied.
pub(crate) fn body(fields: Vec<(&str, Option<Value>)>) -> Value {
    let mut map = Map::new();
    for (key, value) in fields {
        if let Some(value) = value {
            map.insert(key.to_string(), value);
        }
    }
    Value::Object(map)
}
