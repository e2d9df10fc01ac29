use std::time::Duration;

use rabbitmq_management_client::{HttpConfig, ManagementClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let endpoint = std::env::var("RABBITMQ_API")
        .unwrap_or_else(|_| "http://localhost:15672/api".to_string());
    let username = std::env::var("RABBITMQ_USER").unwrap_or_else(|_| "guest".to_string());
    let password = std::env::var("RABBITMQ_PASSWORD").unwrap_or_else(|_| "guest".to_string());

    let config = HttpConfig::new(&endpoint)?
        .with_basic_auth(&username, &password)
        .with_timeout(Duration::from_secs(5));
    let client = ManagementClient::new(config)?;

    let cluster = client.cluster().name().await?;
    println!("cluster: {cluster}");

    let nodes = client.nodes().list().await?;
    println!("nodes: {nodes}");

    let vhosts = client.vhosts().list(None).await?;
    println!("vhosts: {vhosts}");

    let queues = client.queues().list(Default::default()).await?;
    println!("queues: {queues}");

    Ok(())
}
