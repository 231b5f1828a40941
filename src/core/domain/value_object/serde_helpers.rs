//! Serde helpers for panel fields with loose typing.

use serde::{Deserialize, Deserializer};

/// Deserialization for identifiers the panel sends either as a JSON string
/// or as a number. Both are surfaced as `Option<String>`.
pub mod string_or_number {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    /// Deserialize a string, number or null into an `Option<String>`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<Loose>::deserialize(deserializer)?.map(|loose| match loose {
                Loose::Text(s) => s,
                Loose::Unsigned(n) => n.to_string(),
                Loose::Signed(n) => n.to_string(),
            }),
        )
    }
}
