//! Request bodies for fire-and-forget server actions.

use crate::core::domain::value_object::PowerSignal;
use serde::Serialize;

/// Body of `POST servers/{id}/command`.
#[derive(Debug, Serialize)]
pub(crate) struct CommandRequest<'a> {
    pub command: &'a str,
}

/// Body of `POST servers/{id}/power`.
#[derive(Debug, Serialize)]
pub(crate) struct PowerRequest {
    pub signal: PowerSignal,
}
