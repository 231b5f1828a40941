//! Domain model for subusers from `servers/{id}/users`.

use serde::{Deserialize, Serialize};

/// The flat attributes of one subuser.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubuserRecord {
    pub uuid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "2fa_enabled", default)]
    pub two_factor_enabled: bool,
    /// ISO-8601 creation timestamp, as sent by the panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Capability tags; see [`crate::permission`].
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Body of `POST servers/{id}/users`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateSubuserRequest<'a> {
    pub email: &'a str,
    pub permissions: &'a [String],
}

/// Body of `POST servers/{id}/users/{uuid}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateSubuserRequest<'a> {
    pub permissions: &'a [String],
}
