//! Subuser permission tags understood by the panel.

use crate::core::domain::error::PlexHostError;

pub const CONTROL_CONSOLE: &str = "control.console";
pub const CONTROL_START: &str = "control.start";
pub const CONTROL_STOP: &str = "control.stop";
pub const CONTROL_RESTART: &str = "control.restart";

pub const USER_CREATE: &str = "user.create";
pub const USER_READ: &str = "user.read";
pub const USER_UPDATE: &str = "user.update";
pub const USER_DELETE: &str = "user.delete";

pub const FILE_CREATE: &str = "file.create";
pub const FILE_READ: &str = "file.read";
pub const FILE_READ_CONTENT: &str = "file.read-content";
pub const FILE_UPDATE: &str = "file.update";
pub const FILE_DELETE: &str = "file.delete";
pub const FILE_ARCHIVE: &str = "file.archive";
pub const FILE_SFTP: &str = "file.sftp";

pub const BACKUP_CREATE: &str = "backup.create";
pub const BACKUP_READ: &str = "backup.read";
pub const BACKUP_DELETE: &str = "backup.delete";
pub const BACKUP_DOWNLOAD: &str = "backup.download";
pub const BACKUP_RESTORE: &str = "backup.restore";

pub const ALLOCATION_READ: &str = "allocation.read";
pub const ALLOCATION_CREATE: &str = "allocation.create";
pub const ALLOCATION_UPDATE: &str = "allocation.update";
pub const ALLOCATION_DELETE: &str = "allocation.delete";

pub const STARTUP_READ: &str = "startup.read";
pub const STARTUP_UPDATE: &str = "startup.update";
pub const STARTUP_DOCKER_IMAGE: &str = "startup.docker-image";

pub const DATABASE_CREATE: &str = "database.create";
pub const DATABASE_READ: &str = "database.read";
pub const DATABASE_UPDATE: &str = "database.update";
pub const DATABASE_DELETE: &str = "database.delete";
pub const DATABASE_VIEW_PASSWORD: &str = "database.view_password";

pub const SCHEDULE_CREATE: &str = "schedule.create";
pub const SCHEDULE_READ: &str = "schedule.read";
pub const SCHEDULE_UPDATE: &str = "schedule.update";
pub const SCHEDULE_DELETE: &str = "schedule.delete";

pub const SETTINGS_RENAME: &str = "settings.rename";
pub const SETTINGS_REINSTALL: &str = "settings.reinstall";

pub const WEBSOCKET_CONNECT: &str = "websocket.connect";

/// The complete vocabulary, in documentation order.
pub const ALL: &[&str] = &[
    CONTROL_CONSOLE,
    CONTROL_START,
    CONTROL_STOP,
    CONTROL_RESTART,
    USER_CREATE,
    USER_READ,
    USER_UPDATE,
    USER_DELETE,
    FILE_CREATE,
    FILE_READ,
    FILE_READ_CONTENT,
    FILE_UPDATE,
    FILE_DELETE,
    FILE_ARCHIVE,
    FILE_SFTP,
    BACKUP_CREATE,
    BACKUP_READ,
    BACKUP_DELETE,
    BACKUP_DOWNLOAD,
    BACKUP_RESTORE,
    ALLOCATION_READ,
    ALLOCATION_CREATE,
    ALLOCATION_UPDATE,
    ALLOCATION_DELETE,
    STARTUP_READ,
    STARTUP_UPDATE,
    STARTUP_DOCKER_IMAGE,
    DATABASE_CREATE,
    DATABASE_READ,
    DATABASE_UPDATE,
    DATABASE_DELETE,
    DATABASE_VIEW_PASSWORD,
    SCHEDULE_CREATE,
    SCHEDULE_READ,
    SCHEDULE_UPDATE,
    SCHEDULE_DELETE,
    SETTINGS_RENAME,
    SETTINGS_REINSTALL,
    WEBSOCKET_CONNECT,
];

/// Returns `true` if `tag` belongs to the documented vocabulary.
#[must_use]
pub fn is_known(tag: &str) -> bool {
    ALL.contains(&tag)
}

/// Checks every tag against the vocabulary and returns them as owned strings.
pub(crate) fn validate_permissions<S: AsRef<str>>(
    permissions: &[S],
) -> Result<Vec<String>, PlexHostError> {
    permissions
        .iter()
        .map(|p| {
            let tag = p.as_ref();
            if is_known(tag) {
                Ok(tag.to_string())
            } else {
                Err(PlexHostError::BadRequest(format!(
                    "Unknown permission '{}'",
                    tag
                )))
            }
        })
        .collect()
}
