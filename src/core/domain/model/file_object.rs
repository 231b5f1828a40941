//! Domain model for entries of `servers/{id}/files/list`.

use serde::{Deserialize, Serialize};

/// One file or directory in a server's file system.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileObject {
    pub name: String,
    /// Symbolic mode, e.g. `-rw-r--r--`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_bits: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub is_file: bool,
    #[serde(default)]
    pub is_symlink: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

impl FileObject {
    /// `true` for directories (anything that is neither a file nor a symlink).
    #[must_use]
    pub fn is_directory(&self) -> bool {
        !self.is_file && !self.is_symlink
    }
}
