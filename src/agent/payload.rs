//! Defensive classification of agent replies.
//!
//! Remote payloads arrive as loose JSON; they are classified into a
//! tagged union at this boundary and the user-facing message is chosen
//! by an ordered list of extraction strategies, first success wins.
//! Nothing downstream touches the raw shape.

use serde_json::{Map, Value};

use super::{AgentInvocation, AgentReply};

/// Fixed text used when a successful reply carries nothing usable.
pub const NEED_MORE_INFO: &str =
    "I received your question. However, I need more information to provide a proper response.";

/// Classified reply body.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyKind {
    /// `result` was a JSON object — the structured advisory path.
    Structured {
        result: Map<String, Value>,
        message: Option<String>,
    },
    /// Only a top-level `message` string was present.
    MessageOnly(String),
    /// `result` was a bare string.
    StringResult(String),
    /// Nothing usable in the reply.
    Empty,
}

/// Whether an invocation must be treated as unavailable: transport-level
/// failure, an explicit error field, or a reply whose status reads
/// "error". Callers route these to the local fallback.
pub fn is_unusable(invocation: &AgentInvocation) -> bool {
    if !invocation.success || invocation.error.is_some() {
        return true;
    }
    matches!(
        invocation.response.as_ref().and_then(|r| r.status.as_deref()),
        Some("error")
    )
}

/// Classify a reply into its variant. The precedence mirrors the
/// extraction order: a structured object wins over a bare message,
/// which wins over a string result.
pub fn classify(reply: &AgentReply) -> ReplyKind {
    match &reply.result {
        Some(Value::Object(map)) => ReplyKind::Structured {
            result: map.clone(),
            message: reply.message.clone(),
        },
        Some(Value::String(text)) => match &reply.message {
            Some(message) => ReplyKind::MessageOnly(message.clone()),
            None => ReplyKind::StringResult(text.clone()),
        },
        _ => match &reply.message {
            Some(message) => ReplyKind::MessageOnly(message.clone()),
            None => ReplyKind::Empty,
        },
    }
}

/// Resolve the user-facing message for a classified reply.
///
/// For the structured variant an ordered strategy list runs over
/// (result object, top-level message): the object's own `message`
/// field, then the top-level `message`, then a pretty-printed dump of
/// the object. The other variants resolve directly.
pub fn resolve_message(kind: &ReplyKind) -> String {
    match kind {
        ReplyKind::Structured { result, message } => {
            type Extract = fn(&Map<String, Value>, Option<&str>) -> Option<String>;
            let strategies: [Extract; 3] = [
                |result, _| {
                    result
                        .get("message")
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                },
                |_, message| message.filter(|s| !s.is_empty()).map(str::to_string),
                |result, _| serde_json::to_string_pretty(&Value::Object(result.clone())).ok(),
            ];
            strategies
                .iter()
                .find_map(|strategy| strategy(result, message.as_deref()))
                .unwrap_or_else(|| NEED_MORE_INFO.to_string())
        }
        ReplyKind::MessageOnly(message) => message.clone(),
        ReplyKind::StringResult(text) => text.clone(),
        ReplyKind::Empty => NEED_MORE_INFO.to_string(),
    }
}

/// The structured object to attach to the assistant message, if any.
/// Mirrors the display rule: only a non-empty structured result rides
/// along as advisory data.
pub fn structured_result(kind: &ReplyKind) -> Option<&Map<String, Value>> {
    match kind {
        ReplyKind::Structured { result, .. } if !result.is_empty() => Some(result),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> AgentReply {
        serde_json::from_str(json).unwrap()
    }

    // ── Unavailability classification ──

    #[test]
    fn failed_invocation_is_unusable() {
        let inv = AgentInvocation {
            success: false,
            ..Default::default()
        };
        assert!(is_unusable(&inv));
    }

    #[test]
    fn explicit_error_field_is_unusable() {
        let inv = AgentInvocation {
            success: true,
            error: Some("upstream overloaded".into()),
            ..Default::default()
        };
        assert!(is_unusable(&inv));
    }

    #[test]
    fn error_status_is_unusable() {
        let inv = AgentInvocation {
            success: true,
            response: Some(reply(r#"{"status":"error"}"#)),
            ..Default::default()
        };
        assert!(is_unusable(&inv));
    }

    #[test]
    fn successful_invocation_is_usable() {
        let inv = AgentInvocation {
            success: true,
            response: Some(reply(r#"{"message":"hello"}"#)),
            ..Default::default()
        };
        assert!(!is_unusable(&inv));
    }

    // ── Variant classification ──

    #[test]
    fn object_result_classifies_structured() {
        let kind = classify(&reply(r#"{"result":{"message":"ok"},"message":"outer"}"#));
        match kind {
            ReplyKind::Structured { result, message } => {
                assert_eq!(result.get("message").unwrap(), "ok");
                assert_eq!(message.as_deref(), Some("outer"));
            }
            other => panic!("Expected Structured, got: {other:?}"),
        }
    }

    #[test]
    fn message_only_classifies() {
        let kind = classify(&reply(r#"{"message":"just a message"}"#));
        assert_eq!(kind, ReplyKind::MessageOnly("just a message".into()));
    }

    #[test]
    fn string_result_classifies() {
        let kind = classify(&reply(r#"{"result":"bare string"}"#));
        assert_eq!(kind, ReplyKind::StringResult("bare string".into()));
    }

    #[test]
    fn message_outranks_string_result() {
        let kind = classify(&reply(r#"{"result":"bare","message":"msg"}"#));
        assert_eq!(kind, ReplyKind::MessageOnly("msg".into()));
    }

    #[test]
    fn bare_reply_classifies_empty() {
        assert_eq!(classify(&reply("{}")), ReplyKind::Empty);
    }

    #[test]
    fn non_object_non_string_result_falls_back_to_message() {
        let kind = classify(&reply(r#"{"result":42,"message":"numeric result"}"#));
        assert_eq!(kind, ReplyKind::MessageOnly("numeric result".into()));
    }

    // ── Message extraction priority ──

    #[test]
    fn structured_message_field_wins() {
        let kind = classify(&reply(r#"{"result":{"message":"inner"},"message":"outer"}"#));
        assert_eq!(resolve_message(&kind), "inner");
    }

    #[test]
    fn top_level_message_is_second() {
        let kind = classify(&reply(r#"{"result":{"risk_level":"LOW"},"message":"outer"}"#));
        assert_eq!(resolve_message(&kind), "outer");
    }

    #[test]
    fn pretty_dump_is_last_resort() {
        let kind = classify(&reply(r#"{"result":{"risk_level":"LOW"}}"#));
        let text = resolve_message(&kind);
        assert!(text.contains("\"risk_level\""));
        assert!(text.contains("LOW"));
    }

    #[test]
    fn empty_reply_resolves_need_more_info() {
        assert_eq!(resolve_message(&ReplyKind::Empty), NEED_MORE_INFO);
    }

    #[test]
    fn string_result_resolves_verbatim() {
        let kind = ReplyKind::StringResult("verbatim".into());
        assert_eq!(resolve_message(&kind), "verbatim");
    }

    // ── Structured attachment rule ──

    #[test]
    fn empty_structured_object_attaches_nothing() {
        let kind = classify(&reply(r#"{"result":{},"message":"outer"}"#));
        assert!(structured_result(&kind).is_none());
    }

    #[test]
    fn non_empty_structured_object_attaches() {
        let kind = classify(&reply(r#"{"result":{"risk_level":"HIGH"}}"#));
        assert!(structured_result(&kind).is_some());
    }
}
