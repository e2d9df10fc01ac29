//! RabbitMQ management HTTP API client library.
//!
//! Maps management operations on broker resources (virtual hosts, exchanges,
//! queues, bindings, connections, channels, nodes, cluster metadata,
//! definitions, messages) onto REST calls. Each operation validates its
//! required fields, builds a percent-encoded resource path, and relays the
//! broker's response or error back to the caller. Nothing is retried,
//! cached, or pooled.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod http;

pub(crate) mod path;

pub mod client;
pub use client::ManagementClient;
pub use error::{ApiResult, Error};
pub use http::{HttpClient, HttpConfig, HttpConfigError, HttpTransport};
