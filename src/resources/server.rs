//! Live accessor over one server record.

use crate::{
    PlexHostError, PlexHostResult,
    core::{
        domain::{
            model::{
                file_object::FileObject,
                server_action::{CommandRequest, PowerRequest},
                server_record::{ServerRecord, SftpDetails},
                subuser_record::{CreateSubuserRequest, SubuserRecord},
                usage::{ResourceUsage, UsageSnapshot},
            },
            value_object::{PowerSignal, validate_permissions},
        },
        infrastructure::api_client::{ApiClient, RequestOptions},
    },
    resources::subuser::Subuser,
};
use std::sync::Arc;
use tracing::debug;

/// A server the API key has access to.
///
/// The record is a snapshot taken when the server was fetched. Read
/// accessors never touch the network; the action methods each issue exactly
/// one request through the client that produced this server.
#[derive(Debug, Clone)]
pub struct Server {
    client: Arc<ApiClient>,
    record: ServerRecord,
}

impl Server {
    pub(crate) fn new(client: Arc<ApiClient>, record: ServerRecord) -> Self {
        Self { client, record }
    }

    /// The underlying record.
    pub fn record(&self) -> &ServerRecord {
        &self.record
    }

    /// Whether the API key belongs to the owner of this server.
    pub fn is_owner(&self) -> bool {
        self.record.server_owner
    }

    /// The identifier used in every `servers/{id}` endpoint.
    pub fn get_id(&self) -> &str {
        &self.record.identifier
    }

    /// The panel's numeric id, rendered as a string.
    pub fn get_internal_id(&self) -> Option<&str> {
        self.record.internal_id.as_deref()
    }

    /// The display name shown in the panel.
    pub fn get_name(&self) -> Option<&str> {
        self.record.name.as_deref()
    }

    /// The free-text description set by the owner.
    pub fn get_description(&self) -> Option<&str> {
        self.record.description.as_deref()
    }

    /// The node the server is located on.
    pub fn get_node(&self) -> Option<&str> {
        self.record.node.as_deref()
    }

    /// The address and port of the server's SFTP endpoint.
    pub fn get_sftp(&self) -> Option<&SftpDetails> {
        self.record.sftp_details.as_ref()
    }

    /// The panel status (e.g. `installing`), `None` when the server is ready.
    pub fn get_status(&self) -> Option<&str> {
        self.record.status.as_deref()
    }

    /// Whether the server is suspended, as of the last fetch or usage query.
    pub fn is_suspended(&self) -> bool {
        self.record.is_suspended
    }

    /// Whether the server is still being installed.
    pub fn is_installing(&self) -> bool {
        self.record.is_installing
    }

    /// Whether the server is being moved to another node.
    pub fn is_transferring(&self) -> bool {
        self.record.is_transferring
    }

    /// Fetches live resource usage.
    ///
    /// This is the only operation that updates the local record: the
    /// suspended flag is replaced with the one reported alongside the usage.
    ///
    /// # Errors
    /// Returns `PlexHostError` if the request fails or the response lacks
    /// `current_state`.
    pub async fn get_usage(&mut self) -> PlexHostResult<UsageSnapshot> {
        let usage: ResourceUsage = self
            .client
            .get_normalized(&self.endpoint("resources"), RequestOptions::new(), false)
            .await?
            .into_record()?;

        self.record.is_suspended = usage.is_suspended;
        Ok(usage.into_snapshot())
    }

    /// Sends a console command to the server.
    ///
    /// # Errors
    /// Returns `PlexHostError::MissingArgument` for an empty command, without
    /// issuing a request.
    pub async fn send_command(&self, command: &str) -> PlexHostResult<()> {
        if command.is_empty() {
            return Err(PlexHostError::MissingArgument(
                "command cannot be empty".to_string(),
            ));
        }
        debug!(server = self.get_id(), "sending console command");
        self.client
            .post_action(&self.endpoint("command"), &CommandRequest { command })
            .await
    }

    /// Starts the server.
    pub async fn start(&self) -> PlexHostResult<()> {
        self.power(PowerSignal::Start).await
    }

    /// Restarts the server.
    pub async fn restart(&self) -> PlexHostResult<()> {
        self.power(PowerSignal::Restart).await
    }

    /// Stops the server gracefully.
    pub async fn stop(&self) -> PlexHostResult<()> {
        self.power(PowerSignal::Stop).await
    }

    /// Terminates the server process immediately.
    pub async fn kill(&self) -> PlexHostResult<()> {
        self.power(PowerSignal::Kill).await
    }

    /// Sends a power action by name (`start`, `restart`, `stop` or `kill`,
    /// any case).
    ///
    /// # Errors
    /// Returns `PlexHostError::BadRequest` for any other name, without
    /// issuing a request.
    pub async fn send_power_action(&self, action: &str) -> PlexHostResult<()> {
        let signal: PowerSignal = action.parse()?;
        self.power(signal).await
    }

    /// Sends a typed power action.
    pub async fn power(&self, signal: PowerSignal) -> PlexHostResult<()> {
        debug!(server = self.get_id(), %signal, "sending power action");
        self.client
            .post_action(&self.endpoint("power"), &PowerRequest { signal })
            .await
    }

    /// Lists the files in `path` (e.g. `plugins`), or in the root directory
    /// when `path` is `None`.
    pub async fn list_files(&self, path: Option<&str>) -> PlexHostResult<Vec<FileObject>> {
        let mut options = RequestOptions::new();
        if let Some(path) = path {
            options = options.param("directory", path);
        }
        self.client
            .get_normalized(&self.endpoint("files/list"), options, false)
            .await?
            .into_records()
    }

    /// Lists the server's subusers.
    pub async fn get_subusers(&self) -> PlexHostResult<Vec<Subuser>> {
        let records: Vec<SubuserRecord> = self
            .client
            .get_normalized(&self.endpoint("users"), RequestOptions::new(), false)
            .await?
            .into_records()?;

        Ok(records
            .into_iter()
            .map(|record| self.subuser(record))
            .collect())
    }

    /// Same as [`Server::get_subusers`].
    pub async fn get_users(&self) -> PlexHostResult<Vec<Subuser>> {
        self.get_subusers().await
    }

    /// Invites `email` as a subuser with the given permission tags.
    ///
    /// # Errors
    /// All of these are raised before any request is issued:
    /// - `PlexHostError::Forbidden` if the key does not own the server.
    /// - `PlexHostError::MissingArgument` for an empty email.
    /// - `PlexHostError::BadRequest` for a tag outside [`crate::permission::ALL`].
    pub async fn create_user<S: AsRef<str>>(
        &self,
        email: &str,
        permissions: &[S],
    ) -> PlexHostResult<Subuser> {
        if !self.is_owner() {
            return Err(PlexHostError::Forbidden(
                "Only the server owner can create subusers".to_string(),
            ));
        }
        if email.trim().is_empty() {
            return Err(PlexHostError::MissingArgument(
                "email cannot be empty".to_string(),
            ));
        }
        let permissions = validate_permissions(permissions)?;

        debug!(server = self.get_id(), "creating subuser");
        let record: SubuserRecord = self
            .client
            .post_normalized(
                &self.endpoint("users"),
                &CreateSubuserRequest {
                    email,
                    permissions: &permissions,
                },
            )
            .await?
            .into_record()?;

        Ok(self.subuser(record))
    }

    fn subuser(&self, record: SubuserRecord) -> Subuser {
        Subuser::new(
            Arc::clone(&self.client),
            self.record.identifier.clone(),
            self.record.server_owner,
            record,
        )
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("servers/{}/{}", self.record.identifier, suffix)
    }
}
