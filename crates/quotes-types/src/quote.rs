//! Quote types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::Author;

/// A text record attributed to exactly one author.
///
/// Serialized with the owning author embedded, never with a bare `author_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub author: Author,
    pub text: String,
}

/// Quote creation request (the author comes from the route)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub text: String,
}

/// Mutable quote fields accepted by an edit.
///
/// Identity and ownership (`id`, `author_id`) are not part of the patch and
/// cannot be rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Reasons a raw field map cannot become a [`QuotePatch`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("field {0} cannot be modified")]
    ForbiddenField(String),

    #[error("invalid value for a permitted field")]
    InvalidValue,
}

impl QuotePatch {
    /// Keys a caller is allowed to send.
    pub const FIELDS: &'static [&'static str] = &["text"];

    /// Build a patch from an arbitrary key/value map, naming the first key
    /// that is not on the allow-list.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, PatchError> {
        if let Some(key) = fields
            .keys()
            .find(|key| !Self::FIELDS.contains(&key.as_str()))
        {
            return Err(PatchError::ForbiddenField(key.clone()));
        }

        serde_json::from_value(Value::Object(fields)).map_err(|_| PatchError::InvalidValue)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}
