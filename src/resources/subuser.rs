//! Live accessor over one server subuser.

use crate::{
    PlexHostError, PlexHostResult,
    core::{
        domain::{
            model::subuser_record::{SubuserRecord, UpdateSubuserRequest},
            value_object::validate_permissions,
        },
        infrastructure::api_client::ApiClient,
    },
};
use std::sync::Arc;
use tracing::debug;

/// A secondary account with a subset of permissions on one server.
#[derive(Debug, Clone)]
pub struct Subuser {
    client: Arc<ApiClient>,
    server_identifier: String,
    server_owner: bool,
    record: SubuserRecord,
}

impl Subuser {
    pub(crate) fn new(
        client: Arc<ApiClient>,
        server_identifier: String,
        server_owner: bool,
        record: SubuserRecord,
    ) -> Self {
        Self {
            client,
            server_identifier,
            server_owner,
            record,
        }
    }

    /// The underlying record.
    pub fn record(&self) -> &SubuserRecord {
        &self.record
    }

    /// Identifier of the server this subuser belongs to.
    pub fn server_id(&self) -> &str {
        &self.server_identifier
    }

    /// The subuser's UUID, used in `servers/{id}/users/{uuid}`.
    pub fn get_uuid(&self) -> &str {
        &self.record.uuid
    }

    /// The panel username.
    pub fn get_username(&self) -> &str {
        &self.record.username
    }

    /// The email address the subuser was invited with.
    pub fn get_email(&self) -> &str {
        &self.record.email
    }

    /// The avatar URL, if the panel reports one.
    pub fn get_image(&self) -> Option<&str> {
        self.record.image.as_deref()
    }

    /// Whether two-factor authentication is enabled on the account.
    pub fn has_2fa_enabled(&self) -> bool {
        self.record.two_factor_enabled
    }

    /// When the subuser was created, as the panel's timestamp string.
    pub fn get_created(&self) -> Option<&str> {
        self.record.created_at.as_deref()
    }

    /// The permission tags granted on this server.
    pub fn permissions(&self) -> &[String] {
        &self.record.permissions
    }

    /// Replaces the subuser's permissions and refreshes the local record
    /// from the panel's answer.
    ///
    /// # Errors
    /// `PlexHostError::Forbidden` without server ownership and
    /// `PlexHostError::BadRequest` for unknown tags, both before any request.
    pub async fn update_permissions<S: AsRef<str>>(
        &mut self,
        permissions: &[S],
    ) -> PlexHostResult<()> {
        self.require_owner("update")?;
        let permissions = validate_permissions(permissions)?;

        debug!(server = %self.server_identifier, subuser = %self.record.uuid, "updating subuser");
        self.record = self
            .client
            .post_normalized(
                &self.endpoint(),
                &UpdateSubuserRequest {
                    permissions: &permissions,
                },
            )
            .await?
            .into_record()?;
        Ok(())
    }

    /// Removes the subuser from the server.
    ///
    /// # Errors
    /// `PlexHostError::Forbidden` without server ownership, before any request.
    pub async fn delete(self) -> PlexHostResult<()> {
        self.require_owner("delete")?;
        debug!(server = %self.server_identifier, subuser = %self.record.uuid, "deleting subuser");
        self.client.delete(&self.endpoint()).await
    }

    fn require_owner(&self, action: &str) -> PlexHostResult<()> {
        if self.server_owner {
            Ok(())
        } else {
            Err(PlexHostError::Forbidden(format!(
                "Only the server owner can {} subusers",
                action
            )))
        }
    }

    fn endpoint(&self) -> String {
        format!("servers/{}/users/{}", self.server_identifier, self.record.uuid)
    }
}
