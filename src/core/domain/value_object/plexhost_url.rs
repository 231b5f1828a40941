use crate::core::domain::error::PlexHostError;
use std::fmt;
use url::Url;

/// The panel's client API root. Relative endpoints are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://panel.plexhost.net/api/client/";

const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];

/// A validated base URL for the panel API.
///
/// The stored value always ends with `/`, so joining an endpoint is a plain
/// concatenation and the empty endpoint addresses the base URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlexHostUrl {
    value: String,
}

impl PlexHostUrl {
    /// Creates a validated base URL, appending a trailing `/` when missing.
    ///
    /// # Errors
    /// Returns `PlexHostError::InvalidArgument` if the URL cannot be parsed,
    /// is not http(s), or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, PlexHostError> {
        let mut value = url.into();
        validate_url(&value)?;
        if !value.ends_with('/') {
            value.push('/');
        }
        Ok(Self { value })
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Builds the absolute URL for a relative endpoint.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}{}", self.value, endpoint.trim_start_matches('/'))
    }
}

impl Default for PlexHostUrl {
    fn default() -> Self {
        Self {
            value: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Display for PlexHostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Validates that a string is a usable panel base URL.
pub(crate) fn validate_url(url: &str) -> Result<(), PlexHostError> {
    if url.is_empty() {
        return Err(PlexHostError::InvalidArgument(
            "Base URL cannot be empty".to_string(),
        ));
    }

    let parsed = Url::parse(url)
        .map_err(|e| PlexHostError::InvalidArgument(format!("Invalid base URL: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(PlexHostError::InvalidArgument(format!(
            "Invalid scheme '{}'. Must be one of: {}",
            parsed.scheme(),
            ALLOWED_SCHEMES.join(", ")
        )));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(PlexHostError::InvalidArgument(
            "Base URL cannot carry a query or fragment".to_string(),
        ));
    }

    Ok(())
}

/// Characters that would make a path segment address a different endpoint.
const RESERVED_SEGMENT_CHARS: [char; 4] = ['/', '\\', '?', '#'];

/// Validates that an identifier can be used as a single endpoint path segment.
pub(crate) fn validate_path_segment(segment: &str) -> Result<(), PlexHostError> {
    if segment == "." || segment == ".." || segment.contains(RESERVED_SEGMENT_CHARS) {
        return Err(PlexHostError::InvalidArgument(format!(
            "'{}' is not a valid identifier",
            segment
        )));
    }
    Ok(())
}
