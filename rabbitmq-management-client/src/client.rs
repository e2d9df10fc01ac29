//! Management client facade.

use std::time::Duration;

use crate::api::binding::Bindings;
use crate::api::channel::Channels;
use crate::api::cluster::Cluster;
use crate::api::connection::Connections;
use crate::api::definition::Definitions;
use crate::api::exchange::Exchanges;
use crate::api::general::General;
use crate::api::message::Messages;
use crate::api::node::Nodes;
use crate::api::queue::Queues;
use crate::api::vhost::Vhosts;
use crate::http::{HttpClient, HttpConfig, HttpConfigError, HttpTransport};

/// Entry point to the management API.
///
/// Owns a single transport instance shared by every resource group; the
/// group accessors hand out lightweight handles borrowing it. Construct one
/// client per configuration and reuse it across calls.
///
/// # Examples
///
/// ```no_run
/// use rabbitmq_management_client::{HttpConfig, ManagementClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HttpConfig::new("http://localhost:15672/api")?
///     .with_basic_auth("guest", "guest");
/// let client = ManagementClient::new(config)?;
/// let queues = client.queues().list(Default::default()).await?;
/// # Ok(())
/// # }
/// ```
pub struct ManagementClient<C = HttpTransport>
where
    C: HttpClient,
{
    transport: C,
}

impl ManagementClient<HttpTransport> {
    /// Construct a client over the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be built from the
    /// configuration.
    pub fn new(config: HttpConfig) -> Result<Self, HttpConfigError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    /// Replace the timeout used by all subsequent calls on this client.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.transport.set_timeout(timeout);
    }
}

impl<C> ManagementClient<C>
where
    C: HttpClient,
{
    /// Construct a client over a caller-supplied transport.
    pub fn with_transport(transport: C) -> Self {
        Self { transport }
    }

    /// Virtual host operations.
    pub fn vhosts(&self) -> Vhosts<'_, C> {
        Vhosts {
            transport: &self.transport,
        }
    }

    /// Exchange operations.
    pub fn exchanges(&self) -> Exchanges<'_, C> {
        Exchanges {
            transport: &self.transport,
        }
    }

    /// Queue operations.
    pub fn queues(&self) -> Queues<'_, C> {
        Queues {
            transport: &self.transport,
        }
    }

    /// Binding operations.
    pub fn bindings(&self) -> Bindings<'_, C> {
        Bindings {
            transport: &self.transport,
        }
    }

    /// Connection operations.
    pub fn connections(&self) -> Connections<'_, C> {
        Connections {
            transport: &self.transport,
        }
    }

    /// Channel operations.
    pub fn channels(&self) -> Channels<'_, C> {
        Channels {
            transport: &self.transport,
        }
    }

    /// Cluster node operations.
    pub fn nodes(&self) -> Nodes<'_, C> {
        Nodes {
            transport: &self.transport,
        }
    }

    /// Cluster metadata operations.
    pub fn cluster(&self) -> Cluster<'_, C> {
        Cluster {
            transport: &self.transport,
        }
    }

    /// Definition export and import operations.
    pub fn definitions(&self) -> Definitions<'_, C> {
        Definitions {
            transport: &self.transport,
        }
    }

    /// Message publish and fetch operations.
    pub fn messages(&self) -> Messages<'_, C> {
        Messages {
            transport: &self.transport,
        }
    }

    /// Broker-wide introspection operations.
    pub fn general(&self) -> General<'_, C> {
        General {
            transport: &self.transport,
        }
    }
}
