//! The panel's response envelope and the normalization applied to it.
//!
//! Every resource response is either a list envelope
//! (`{"object": "list", "data": [{"attributes": {..}}, ..]}`) or a single
//! resource (`{"object": "server", "attributes": {..}, "meta": {..}}`).
//! Normalization strips the envelope so callers see flat records.

use crate::core::domain::error::{PlexHostError, PlexHostResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

/// Discriminator value marking a list envelope.
pub const LIST_OBJECT: &str = "list";

/// A decoded envelope, discriminated by its top-level `object` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `object == "list"`: the ordered `data` items, each still wrapped.
    List(Vec<Value>),
    /// Anything else: one resource.
    Single(Value),
}

impl Envelope {
    /// Classifies a decoded body. Never fails; a list without `data` is empty.
    pub fn from_value(body: Value) -> Self {
        let is_list = body.get("object").and_then(Value::as_str) == Some(LIST_OBJECT);
        if !is_list {
            return Self::Single(body);
        }
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => Self::List(items),
                _ => Self::List(Vec::new()),
            },
            _ => Self::List(Vec::new()),
        }
    }
}

/// The shape produced by [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The body exactly as decoded (detail mode).
    Detailed(Value),
    /// One flat record per list item, in source order.
    List(Vec<Value>),
    /// One flat record.
    Single(Value),
}

/// Strips the envelope from a decoded body.
///
/// With `detail` set the body is returned unchanged, which keeps
/// out-of-band fields such as `meta` timestamps. Otherwise a list envelope
/// yields the `attributes` of each item and a single resource yields its
/// `attributes`. A body or item without an `attributes` object is taken to
/// be flat already.
///
/// This function performs no I/O and never fails.
pub fn normalize(body: Value, detail: bool) -> Normalized {
    if detail {
        trace!("normalize: detail mode, body returned as-is");
        return Normalized::Detailed(body);
    }

    match Envelope::from_value(body) {
        Envelope::List(items) => {
            trace!(count = items.len(), "normalize: list envelope");
            Normalized::List(items.into_iter().map(attributes_of).collect())
        }
        Envelope::Single(body) => {
            trace!("normalize: single resource");
            Normalized::Single(attributes_of(body))
        }
    }
}

fn attributes_of(item: Value) -> Value {
    match item {
        Value::Object(mut map) => match map.remove("attributes") {
            Some(Value::Object(attributes)) => Value::Object(attributes),
            Some(other) => {
                map.insert("attributes".to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        Value::Null => Value::Object(Map::new()),
        other => other,
    }
}

impl Normalized {
    /// Collapses the shape back into a single JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Detailed(value) | Self::Single(value) => value,
            Self::List(items) => Value::Array(items),
        }
    }

    /// Reads a single record into its typed form.
    ///
    /// # Errors
    /// Returns `PlexHostError::Deserialization` if the shape is a list or the
    /// record lacks required fields.
    pub fn into_record<T: DeserializeOwned>(self) -> PlexHostResult<T> {
        match self {
            Self::Single(value) | Self::Detailed(value) => from_record(value),
            Self::List(_) => Err(PlexHostError::Deserialization {
                message: "expected a single resource, got a list".to_string(),
            }),
        }
    }

    /// Reads every list item into its typed form, preserving order.
    ///
    /// # Errors
    /// Returns `PlexHostError::Deserialization` if the shape is not a list or
    /// any item lacks required fields.
    pub fn into_records<T: DeserializeOwned>(self) -> PlexHostResult<Vec<T>> {
        match self {
            Self::List(items) => items.into_iter().map(from_record).collect(),
            Self::Single(_) | Self::Detailed(_) => Err(PlexHostError::Deserialization {
                message: "expected a list of resources, got a single resource".to_string(),
            }),
        }
    }
}

fn from_record<T: DeserializeOwned>(value: Value) -> PlexHostResult<T> {
    serde_json::from_value(value).map_err(|e| PlexHostError::Deserialization {
        message: e.to_string(),
    })
}
