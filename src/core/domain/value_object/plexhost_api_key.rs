use crate::core::domain::error::PlexHostError;
use std::fmt;

/// A panel API key, sent as a bearer token on every request.
///
/// The key is immutable once the client is built. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct PlexHostApiKey(String);

impl PlexHostApiKey {
    /// Creates a validated API key.
    ///
    /// # Errors
    /// Returns `PlexHostError::InvalidArgument` if the key is empty, blank or
    /// contains whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, PlexHostError> {
        let key = key.into();
        validate_api_key(&key)?;
        Ok(Self(key))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the key as an `Authorization` header value.
    #[must_use]
    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for PlexHostApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlexHostApiKey").field(&"<redacted>").finish()
    }
}

/// Validates the format of an API key string.
fn validate_api_key(key: &str) -> Result<(), PlexHostError> {
    if key.trim().is_empty() {
        return Err(PlexHostError::InvalidArgument(
            "API key cannot be empty".to_string(),
        ));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(PlexHostError::InvalidArgument(
            "API key cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}
