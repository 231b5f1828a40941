use crate::core::domain::error::PlexHostError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A power action accepted by `servers/{id}/power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal {
    Start,
    Restart,
    Stop,
    Kill,
}

impl PowerSignal {
    /// Every signal, in the order the panel documents them.
    pub const ALL: [PowerSignal; 4] = [Self::Start, Self::Restart, Self::Stop, Self::Kill];

    /// The wire name of the signal.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Restart => "restart",
            Self::Stop => "stop",
            Self::Kill => "kill",
        }
    }
}

impl fmt::Display for PowerSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerSignal {
    type Err = PlexHostError;

    /// Parses a signal name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|signal| signal.as_str() == lowered)
            .ok_or_else(|| {
                PlexHostError::BadRequest(format!(
                    "Invalid action specified ({}). Must be one of: {}",
                    s,
                    Self::ALL.map(|signal| signal.as_str()).join(", ")
                ))
            })
    }
}
