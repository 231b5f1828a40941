mod core;
mod resources;

pub use crate::core::domain::error::{PanelErrorDetail, PlexHostError, PlexHostResult};
pub use crate::core::domain::model::{
    client_config::ClientConfig,
    envelope::{Envelope, Normalized, normalize},
    file_object::FileObject,
    server_record::{ServerRecord, SftpDetails},
    subuser_record::SubuserRecord,
    usage::{ServerResources, ServerState, UsageSnapshot},
};
pub use crate::core::domain::value_object::{
    DEFAULT_BASE_URL, PlexHostApiKey, PlexHostUrl, PowerSignal, permission,
};
pub use crate::core::infrastructure::api_client::{RawResponse, RawResult, RequestOptions};
pub use crate::resources::{server::Server, subuser::Subuser};

use crate::core::{
    domain::value_object::validate_path_segment, infrastructure::api_client::ApiClient,
};
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Environment variable read by [`PlexHostClient::from_env`].
pub const API_KEY_ENV: &str = "PLEXHOST_API_KEY";

/// A client for the PlexHost panel API
///
/// This client provides a typed interface for:
/// - Listing and fetching the servers an API key can reach
/// - Power control, console commands and file listing on a server
/// - Subuser management for servers the key owns
///
/// # Examples
///
/// ```no_run
/// use plexhost::{PlexHostClient, PlexHostResult};
///
/// #[tokio::main]
/// async fn main() -> PlexHostResult<()> {
///     let client = PlexHostClient::new("ptlc_your_api_key")?;
///
///     for mut server in client.get_servers().await? {
///         let usage = server.get_usage().await?;
///         println!("{}: {:?}", server.get_id(), usage.state);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlexHostClient {
    api_client: Arc<ApiClient>,
}

/// Builder for PlexHostClient configuration
#[derive(Debug, Default)]
pub struct PlexHostClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    config: ClientConfig,
}

impl PlexHostClientBuilder {
    /// Sets the panel API key (`ptlc_...`).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Reads the API key from the environment variable `name`.
    /// An unset variable leaves the key unset, so `build` fails.
    pub fn api_key_from_env(mut self, name: &str) -> Self {
        self.api_key = std::env::var(name).ok();
        self
    }

    /// Overrides the panel base URL (defaults to [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a whole-request timeout. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header (defaults to `plexhost-rs/{version}`).
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// No request is made.
    ///
    /// # Errors
    /// Returns `PlexHostError::InvalidArgument` if the API key is absent or
    /// malformed, or if the base URL is invalid.
    pub fn build(self) -> PlexHostResult<PlexHostClient> {
        let api_key = PlexHostApiKey::new(self.api_key.ok_or_else(|| {
            PlexHostError::InvalidArgument("API key is required".to_string())
        })?)?;

        let base_url = match self.base_url {
            Some(url) => PlexHostUrl::new(url)?,
            None => PlexHostUrl::default(),
        };

        let api_client = ApiClient::new(base_url, api_key, &self.config)?;
        Ok(PlexHostClient {
            api_client: Arc::new(api_client),
        })
    }
}

impl PlexHostClient {
    /// Creates a client for the default panel with the given API key.
    ///
    /// # Errors
    /// Returns `PlexHostError::InvalidArgument` if the key is empty or malformed.
    pub fn new(api_key: impl Into<String>) -> PlexHostResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a client for the default panel with the key from `PLEXHOST_API_KEY`.
    pub fn from_env() -> PlexHostResult<Self> {
        Self::builder().api_key_from_env(API_KEY_ENV).build()
    }

    /// Creates a new builder for PlexHostClient configuration
    pub fn builder() -> PlexHostClientBuilder {
        PlexHostClientBuilder::default()
    }

    /// The base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &PlexHostUrl {
        self.api_client.base_url()
    }

    /// Performs a raw request against the panel.
    ///
    /// # Errors
    /// See [`RequestOptions`] for output selection; errors follow the
    /// classification of 400/422 as `InternalPanel` and any other failure
    /// status as `Http`.
    pub async fn request(
        &self,
        endpoint: &str,
        method: &str,
        options: RequestOptions,
    ) -> PlexHostResult<RawResult> {
        self.api_client.execute(endpoint, method, options).await
    }

    /// Checks that the panel accepts the API key.
    ///
    /// # Errors
    /// Returns `PlexHostError::Forbidden` if the panel answers 401 or 403.
    pub async fn verify_key(&self) -> PlexHostResult<()> {
        match self.api_client.get("", RequestOptions::new()).await {
            Err(PlexHostError::Http { status, .. })
                if status == reqwest::StatusCode::UNAUTHORIZED
                    || status == reqwest::StatusCode::FORBIDDEN =>
            {
                Err(PlexHostError::Forbidden("API key is invalid".to_string()))
            }
            other => other.map(|_| ()),
        }
    }

    /// The servers the API key has access to, in panel order.
    pub async fn get_servers(&self) -> PlexHostResult<Vec<Server>> {
        let records: Vec<ServerRecord> = self
            .api_client
            .get_normalized("", RequestOptions::new(), false)
            .await?
            .into_records()?;

        debug!(count = records.len(), "fetched servers");
        Ok(records
            .into_iter()
            .map(|record| Server::new(Arc::clone(&self.api_client), record))
            .collect())
    }

    /// The server with the given identifier.
    ///
    /// # Errors
    /// Returns `PlexHostError::MissingArgument` for an empty identifier and
    /// `PlexHostError::InvalidArgument` for one containing `/`, `?` or `#`.
    pub async fn get_server(&self, identifier: &str) -> PlexHostResult<Server> {
        let record: ServerRecord = self
            .api_client
            .get_normalized(&server_endpoint(identifier)?, RequestOptions::new(), false)
            .await?
            .into_record()?;
        Ok(Server::new(Arc::clone(&self.api_client), record))
    }

    /// The full `servers/{id}` body, envelope and `meta` included.
    pub async fn get_server_details(
        &self,
        identifier: &str,
    ) -> PlexHostResult<serde_json::Value> {
        Ok(self
            .api_client
            .get_normalized(&server_endpoint(identifier)?, RequestOptions::new(), true)
            .await?
            .into_value())
    }
}

fn server_endpoint(identifier: &str) -> PlexHostResult<String> {
    if identifier.is_empty() {
        return Err(PlexHostError::MissingArgument(
            "server identifier cannot be empty".to_string(),
        ));
    }
    validate_path_segment(identifier)?;
    Ok(format!("servers/{}", identifier))
}
