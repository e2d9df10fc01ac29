//! Transport layer: reusable request configuration and the single-exchange
//! HTTP client the operation groups delegate to.

pub mod config;

pub(crate) mod client;

pub use config::{HttpConfig, HttpConfigError};

pub use client::{HttpClient, HttpTransport};
