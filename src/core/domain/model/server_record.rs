//! Domain model for a server as returned by `/` and `servers/{id}`.

use crate::core::domain::value_object::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};

/// The flat attributes of one server.
///
/// Fields the panel omits are left at their defaults; only the identifier is
/// required, since every follow-up request is addressed by it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerRecord {
    /// Short identifier used in every `servers/{id}` endpoint.
    pub identifier: String,
    /// The panel's internal numeric identifier.
    #[serde(
        default,
        deserialize_with = "string_or_number::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the node hosting the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sftp_details: Option<SftpDetails>,
    /// Panel status string (`null` for a normal, installed server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether the API key belongs to the server's owner.
    #[serde(default)]
    pub server_owner: bool,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub is_installing: bool,
    #[serde(default)]
    pub is_transferring: bool,
}

/// Where to reach the server over SFTP.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SftpDetails {
    pub ip: String,
    pub port: u16,
}
