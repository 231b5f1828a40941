//! Lists every server the API key can reach, with live usage.
//!
//! Reads the key from `PLEXHOST_API_KEY` (a `.env` file works too).

use plexhost::{PlexHostClient, PlexHostResult};

#[tokio::main]
async fn main() -> PlexHostResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    dotenvy::dotenv().ok();

    let client = PlexHostClient::from_env()?;
    client.verify_key().await?;

    for mut server in client.get_servers().await? {
        let usage = server.get_usage().await?;
        println!(
            "{} ({}) on {}: {:?}, {} MiB RAM{}",
            server.get_name().unwrap_or("unnamed"),
            server.get_id(),
            server.get_node().unwrap_or("?"),
            usage.state,
            usage.resources.memory_bytes.unwrap_or(0) / (1024 * 1024),
            if server.is_suspended() { " [suspended]" } else { "" }
        );
    }

    Ok(())
}
