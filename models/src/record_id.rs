//! Identifier handling for backend documents.

use serde::{Deserialize, Serialize};

/// Document identifier as sent by the backend.
///
/// Documents may carry `_id`, a virtual `id`, or both with the same value.
/// Both are kept so either form decodes without a duplicate-field error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordId {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            mongo_id: None,
            id: Some(id.into()),
        }
    }

    /// Preferred identifier, `id` first then `_id`.
    pub fn as_str(&self) -> Option<&str> {
        self.id.as_deref().or(self.mongo_id.as_deref())
    }
}

/// A reference to another document: either its bare id or the populated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Populated(T),
}

/// Records that can appear populated inside a [`Reference`].
pub trait Identified {
    fn record_id(&self) -> Option<&str>;
}

impl<T: Identified> Reference<T> {
    pub fn id(&self) -> Option<&str> {
        match self {
            Reference::Id(id) => Some(id.as_str()),
            Reference::Populated(record) => record.record_id(),
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Reference::Id(_) => None,
            Reference::Populated(record) => Some(record),
        }
    }
}
