use std::time::Duration;

/// Transport settings applied when the HTTP client is built.
///
/// The defaults match the panel's expectations: no explicit timeout beyond
/// what the transport provides, and a crate-identifying user agent.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("plexhost-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
