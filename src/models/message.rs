use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::advisory::AdvisoryResponse;
use super::enums::Role;

/// One transcript entry. Identifiers are decimal epoch-millisecond
/// strings issued by the session so lexical order matches insertion
/// order; the one exception is the synthetic `"welcome"` seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AdvisoryResponse>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: String, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            content: content.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(
        id: String,
        content: impl Into<String>,
        data: Option<AdvisoryResponse>,
    ) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: content.into(),
            data,
            timestamp: Utc::now(),
        }
    }
}
