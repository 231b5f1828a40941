use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for PlexHost panel operations.
///
/// The first five variants are the wrapper-level taxonomy every caller can
/// branch on. The remaining variants describe transport failures: the
/// request never completed, the panel answered with a non-success status,
/// or a normalized record could not be read into its typed form.
#[derive(Error, Debug)]
pub enum PlexHostError {
    /// A construction parameter (e.g. the API key) is absent or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required call parameter was omitted
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// A value outside an enumerated closed set was supplied
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The key was rejected, or an owner-only action was attempted without owner rights
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The panel answered 400/422 with a structured error list
    ///
    /// # Fields
    /// * `errors` - The raw entries of the body's `errors` field
    #[error("API request resulted in errors: {}", format_errors(.errors))]
    InternalPanel { errors: Vec<serde_json::Value> },

    /// Any other non-success HTTP status
    ///
    /// # Fields
    /// * `status` - The HTTP status the panel answered with
    /// * `body` - The response body as text, possibly empty
    #[error("HTTP error ({status}): {body}")]
    Http { status: StatusCode, body: String },

    /// The request could not be sent or its body could not be read
    #[error("Connection error: {0}")]
    Connection(String),

    /// A normalized record lacks fields its typed form needs
    #[error("Deserialization error: {message}")]
    Deserialization { message: String },
}

impl PlexHostError {
    /// Returns `true` for failures raised locally before any request was issued,
    /// or for a rejected key.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::MissingArgument(_)
                | Self::BadRequest(_)
                | Self::Forbidden(_)
        )
    }

    /// Returns `true` when the panel reported that the request itself was malformed.
    pub fn is_panel_error(&self) -> bool {
        matches!(self, Self::InternalPanel { .. })
    }

    /// The HTTP status that caused this error, when one is known.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The panel's error list parsed into [`PanelErrorDetail`] entries.
    ///
    /// Entries that do not have the usual `{code, status, detail}` shape are skipped.
    pub fn panel_errors(&self) -> Vec<PanelErrorDetail> {
        match self {
            Self::InternalPanel { errors } => errors
                .iter()
                .filter_map(|e| serde_json::from_value(e.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One entry of the panel's `errors` list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PanelErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

fn format_errors(errors: &[serde_json::Value]) -> String {
    serde_json::to_string(errors).unwrap_or_else(|_| format!("{} error(s)", errors.len()))
}

/// Type alias for Results that may fail with a PlexHostError
pub type PlexHostResult<T> = Result<T, PlexHostError>;
