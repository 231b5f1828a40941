pub mod permission;
mod plexhost_api_key;
mod plexhost_url;
mod power_signal;
pub(crate) mod serde_helpers;

pub use plexhost_api_key::PlexHostApiKey;
pub use plexhost_url::{DEFAULT_BASE_URL, PlexHostUrl};
pub use power_signal::PowerSignal;

// Re-export validation functions for internal use
pub(crate) use permission::validate_permissions;
pub(crate) use plexhost_url::validate_path_segment;
