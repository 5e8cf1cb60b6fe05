//! Response resolution engine.
//!
//! Turns a user utterance or a scan into transcript entries: remote
//! agents first, the local rule table when the chat agent is
//! unavailable. Coordinates: guard → invoke → classify → normalize →
//! append → record activity.

pub mod prompt;
pub mod rules;

pub use rules::generate_health_response;

use serde_json::Value;

use crate::agent::payload::{self, ReplyKind};
use crate::agent::{AgentClient, FileUploader};
use crate::chat;
use crate::config;
use crate::models::{ActivityKind, AdvisoryResponse, ScanResult};
use crate::session::{SelectedFile, SessionState};
use crate::store::KeyValueStore;

/// Which path produced an assistant answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Remote,
    Fallback,
}

/// Drives both agent flows against the session state. Generic over the
/// collaborator traits so tests can substitute canned replies.
pub struct Resolver<'a, A: AgentClient, U: FileUploader> {
    agents: &'a A,
    uploader: &'a U,
}

impl<'a, A: AgentClient, U: FileUploader> Resolver<'a, A, U> {
    pub fn new(agents: &'a A, uploader: &'a U) -> Self {
        Self { agents, uploader }
    }

    // ── Chat flow ────────────────────────────────────────────

    /// Resolve one typed question. Returns `None` when the submission
    /// was ignored (blank input or a call already in flight), otherwise
    /// which path answered. No error text ever reaches the transcript:
    /// an unusable remote reply routes to the local rule table.
    pub fn send_message<S: KeyValueStore>(
        &self,
        session: &mut SessionState<S>,
        input: &str,
    ) -> Option<ResolutionSource> {
        let input = input.trim();
        if input.is_empty() || session.is_loading() {
            return None;
        }

        session.push_user_message(input);
        session.set_loading(true);

        let context = prompt::chat_context(session.profile(), session.language(), input);
        let source = match self
            .agents
            .invoke(&context, config::HEALTH_ASSISTANT_AGENT_ID, &[])
        {
            Err(e) => {
                tracing::warn!(error = %e, "Health assistant call failed, using fallback");
                self.respond_with_fallback(session, input);
                ResolutionSource::Fallback
            }
            Ok(invocation) if payload::is_unusable(&invocation) => {
                tracing::info!("Health assistant unavailable, using fallback");
                self.respond_with_fallback(session, input);
                ResolutionSource::Fallback
            }
            Ok(invocation) => {
                let kind = match invocation.response.as_ref() {
                    Some(reply) => payload::classify(reply),
                    None => ReplyKind::Empty,
                };
                let message = payload::resolve_message(&kind);
                let data = advisory_payload(&kind);
                session.push_assistant_message(message, data);
                ResolutionSource::Remote
            }
        };

        session.record_activity(ActivityKind::Chat, chat::activity_title(input));
        session.set_loading(false);
        Some(source)
    }

    fn respond_with_fallback<S: KeyValueStore>(
        &self,
        session: &mut SessionState<S>,
        input: &str,
    ) {
        let advisory =
            rules::generate_health_response(input, session.profile(), session.language());
        session.push_assistant_message(advisory.message.clone(), Some(advisory));
    }

    // ── Scan flow ────────────────────────────────────────────

    /// Scan the selected image: upload, extract, then cascade into a
    /// personalized health check. No retries; any failure after upload
    /// is logged and the flow stops silently with the loading flag
    /// cleared.
    pub fn scan_medicine<S: KeyValueStore>(&self, session: &mut SessionState<S>) {
        if session.is_loading() {
            return;
        }
        let Some(file) = session.selected_file().cloned() else {
            return;
        };

        session.set_loading(true);
        session.clear_scan_result();

        self.run_scan(session, &file);

        session.set_loading(false);
    }

    fn run_scan<S: KeyValueStore>(&self, session: &mut SessionState<S>, file: &SelectedFile) {
        // Step 1: upload the image. A failed upload aborts with no
        // user-visible advisory.
        let outcome = match self.uploader.upload(&file.name, &file.bytes) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Medicine image upload failed");
                return;
            }
        };
        if !outcome.has_assets() {
            tracing::error!(message = ?outcome.message, "Upload rejected by the asset service");
            return;
        }

        // Step 2: extract the medicine from the uploaded image.
        let invocation = match self.agents.invoke(
            prompt::SCAN_PROMPT,
            config::MEDICINE_SCANNER_AGENT_ID,
            &outcome.asset_ids,
        ) {
            Ok(invocation) => invocation,
            Err(e) => {
                tracing::error!(error = %e, "Medicine scanner call failed");
                return;
            }
        };
        let reply = match (invocation.success, invocation.response.as_ref()) {
            (true, Some(reply)) => reply,
            _ => {
                tracing::warn!("Medicine scanner returned no usable reply");
                return;
            }
        };

        let kind = payload::classify(reply);
        let scan = match &kind {
            ReplyKind::Structured { result, .. } => {
                ScanResult::from_value(&Value::Object(result.clone()))
            }
            _ => ScanResult::default(),
        };

        // Step 3: without a medicine name there is nothing to assess.
        // Surface the explanatory text on a placeholder card.
        if !scan.has_medicine_name() {
            let explanation = reply.message.clone().unwrap_or_else(|| {
                "Could not extract medicine information from the image. \
                 Please try with a clearer image."
                    .to_string()
            });
            session.set_scan_result(ScanResult::placeholder(explanation));
            return;
        }

        session.set_scan_result(scan.clone());
        tracing::info!(medicine = %scan.medicine_name, "Medicine identified");

        // Step 4: cascade into a personalized safety check.
        let context = prompt::scan_health_context(session.profile(), session.language(), &scan);
        let health = match self
            .agents
            .invoke(&context, config::HEALTH_ASSISTANT_AGENT_ID, &[])
        {
            Ok(invocation) => invocation,
            Err(e) => {
                tracing::error!(error = %e, "Post-scan health assessment failed");
                return;
            }
        };
        let health_kind = match (health.success, health.response.as_ref()) {
            (true, Some(reply)) => payload::classify(reply),
            _ => {
                tracing::warn!("Post-scan health assessment returned no usable reply");
                return;
            }
        };

        let message = payload::resolve_message(&health_kind);
        let data = advisory_payload(&health_kind);

        session.push_user_message(format!("Scanned medicine: {}", scan.medicine_name));
        session.push_assistant_message(message, data);
        session.record_activity(ActivityKind::Scan, scan.medicine_name.clone());
        session.open_chat();
    }
}

/// Decode the structured advisory to attach to an assistant message.
/// Only a non-empty structured result rides along.
fn advisory_payload(kind: &ReplyKind) -> Option<AdvisoryResponse> {
    payload::structured_result(kind)
        .map(|map| AdvisoryResponse::from_value(&Value::Object(map.clone())))
}
