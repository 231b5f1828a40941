//! Sends a power action to one server.
//!
//! Usage: `cargo run --example power_control -- <server-id> <start|restart|stop|kill>`

use plexhost::{PlexHostClient, PlexHostError, PlexHostResult};

#[tokio::main]
async fn main() -> PlexHostResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(id), Some(action)) = (args.next(), args.next()) else {
        return Err(PlexHostError::MissingArgument(
            "usage: power_control <server-id> <action>".to_string(),
        ));
    };

    let client = PlexHostClient::from_env()?;
    let server = client.get_server(&id).await?;
    server.send_power_action(&action).await?;
    println!("Sent '{}' to {}", action, server.get_id());

    Ok(())
}
