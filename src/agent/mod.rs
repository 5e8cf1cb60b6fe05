//! Remote AI-agent collaborator boundary.
//!
//! Two traits cover everything the resolution engine needs from the
//! outside world: `AgentClient` (free-text invocation of a named agent,
//! optionally with uploaded assets) and `FileUploader`. Replies are
//! loose JSON decoded defensively in `payload` — nothing past this
//! boundary trusts the remote shape.

pub mod http;
pub mod payload;

pub use http::HttpAgentGateway;
pub use payload::ReplyKind;

use serde::Deserialize;
use thiserror::Error;

/// Errors from the remote collaborators. The engine never surfaces
/// these to the user; they route to the local fallback (chat) or a
/// logged abort (scan).
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Cannot connect to agent service at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Agent service returned HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Failed to parse agent response: {0}")]
    ResponseParsing(String),
}

/// Envelope of one agent invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentInvocation {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<AgentReply>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The loosely-typed reply body. `result` may be a structured object,
/// a bare string, or absent entirely; classification happens in
/// `payload::classify`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Outcome of one file upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub asset_ids: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadOutcome {
    /// An upload is usable only when it succeeded AND produced at least
    /// one asset reference.
    pub fn has_assets(&self) -> bool {
        self.success && !self.asset_ids.is_empty()
    }
}

/// Invoke a named agent with a free-text message and optional assets.
pub trait AgentClient {
    fn invoke(
        &self,
        message: &str,
        agent_id: &str,
        assets: &[String],
    ) -> Result<AgentInvocation, AgentError>;
}

/// Upload a file, yielding asset references the agents can consume.
pub trait FileUploader {
    fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<UploadOutcome, AgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_decodes_minimal_envelope() {
        let inv: AgentInvocation = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(inv.success);
        assert!(inv.response.is_none());
        assert!(inv.error.is_none());
    }

    #[test]
    fn invocation_decodes_full_envelope() {
        let inv: AgentInvocation = serde_json::from_str(
            r#"{"success":true,"response":{"result":{"message":"ok"},"status":"complete"}}"#,
        )
        .unwrap();
        let reply = inv.response.unwrap();
        assert!(reply.result.is_some());
        assert_eq!(reply.status.as_deref(), Some("complete"));
    }

    #[test]
    fn reply_decodes_string_result() {
        let reply: AgentReply = serde_json::from_str(r#"{"result":"plain text answer"}"#).unwrap();
        assert!(reply.result.as_ref().unwrap().is_string());
    }

    #[test]
    fn upload_outcome_requires_success_and_assets() {
        let ok: UploadOutcome =
            serde_json::from_str(r#"{"success":true,"asset_ids":["a1"]}"#).unwrap();
        assert!(ok.has_assets());

        let no_assets: UploadOutcome = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(!no_assets.has_assets());

        let failed: UploadOutcome =
            serde_json::from_str(r#"{"success":false,"asset_ids":["a1"]}"#).unwrap();
        assert!(!failed.has_assets());
    }
}
