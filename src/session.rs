//! Session state store — single source of truth for one session.
//!
//! Owns the profile, language, transcript, activity log, and the
//! ephemeral UI state (current screen, loading flag, selected file,
//! scan result, expanded panel). Every mutation that touches a
//! persisted entity writes through to the key-value store immediately;
//! writes are fire-and-forget and a failed write never fails the
//! mutation.
//!
//! Key properties:
//! - Transcript is append-only; messages are immutable once appended
//! - Message ids are decimal epoch-millisecond strings, strictly
//!   monotonic within the session
//! - The activity log never holds more than 3 entries, newest first
//! - The welcome seed is inserted exactly once, on entering the chat
//!   screen with an empty transcript

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::chat;
use crate::config;
use crate::models::{
    ActivityItem, ActivityKind, AdvisoryResponse, ChatMessage, Language, ScanResult, Screen,
    UserProfile,
};
use crate::store::KeyValueStore;

/// Maximum entries kept in the recent-activity log.
pub const MAX_RECENT_ACTIVITY: usize = 3;

/// An image the user picked for scanning, held until the scan runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// All state for one session, backed by a key-value store.
pub struct SessionState<S: KeyValueStore> {
    store: S,
    profile: UserProfile,
    language: Language,
    messages: Vec<ChatMessage>,
    activity: Vec<ActivityItem>,
    screen: Screen,
    loading: bool,
    selected_file: Option<SelectedFile>,
    scan_result: Option<ScanResult>,
    expanded_panel: Option<String>,
    last_message_id_millis: i64,
}

impl<S: KeyValueStore> SessionState<S> {
    /// Load persisted state and derive the initial screen.
    ///
    /// Each key parses independently: a corrupt value is logged and
    /// discarded, the remaining keys still load. Navigation rule: both
    /// profile and language present → dashboard; profile only →
    /// language selection; otherwise login.
    pub fn initialize(store: S) -> Self {
        let profile: Option<UserProfile> = load_key(&store, config::PROFILE_KEY);
        let language: Option<Language> = load_key(&store, config::LANGUAGE_KEY);
        let messages: Vec<ChatMessage> =
            load_key(&store, config::MESSAGES_KEY).unwrap_or_default();
        let activity: Vec<ActivityItem> =
            load_key(&store, config::ACTIVITY_KEY).unwrap_or_default();

        let screen = match (&profile, &language) {
            (Some(_), Some(_)) => Screen::Dashboard,
            (Some(_), None) => Screen::Language,
            _ => Screen::Login,
        };

        let last_message_id_millis = messages
            .iter()
            .filter_map(|m| m.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        tracing::info!(
            messages = messages.len(),
            activity = activity.len(),
            screen = ?screen,
            "Session initialized"
        );

        Self {
            store,
            profile: profile.unwrap_or_default(),
            language: language.unwrap_or_default(),
            messages,
            activity,
            screen,
            loading: false,
            selected_file: None,
            scan_result: None,
            expanded_panel: None,
            last_message_id_millis,
        }
    }

    // ── Accessors ────────────────────────────────────────────

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn activity(&self) -> &[ActivityItem] {
        &self.activity
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn scan_result(&self) -> Option<&ScanResult> {
        self.scan_result.as_ref()
    }

    pub fn expanded_panel(&self) -> Option<&str> {
        self.expanded_panel.as_deref()
    }

    /// The backing store (read access, e.g. for verification).
    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Persisted mutations ──────────────────────────────────

    /// Replace the profile. Persists only when the name is non-empty,
    /// so an all-empty initial profile never reaches the store.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        if !self.profile.name.is_empty() {
            persist(&mut self.store, config::PROFILE_KEY, &self.profile);
        }
    }

    /// Replace the language. Persists only when a language is chosen.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if self.language.is_set() {
            persist(&mut self.store, config::LANGUAGE_KEY, &self.language);
        }
    }

    /// Append a message to the transcript and persist it.
    pub fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        if !self.messages.is_empty() {
            persist(&mut self.store, config::MESSAGES_KEY, &self.messages);
        }
    }

    /// Append a user turn with a freshly allocated id.
    pub fn push_user_message(&mut self, content: impl Into<String>) {
        let id = self.next_message_id();
        self.append_message(ChatMessage::user(id, content));
    }

    /// Append an assistant turn with a freshly allocated id.
    pub fn push_assistant_message(
        &mut self,
        content: impl Into<String>,
        data: Option<AdvisoryResponse>,
    ) {
        let id = self.next_message_id();
        self.append_message(ChatMessage::assistant(id, content, data));
    }

    /// Prepend a recent-activity entry, drop entries beyond the cap,
    /// and persist the log.
    pub fn record_activity(&mut self, kind: ActivityKind, title: impl Into<String>) {
        self.activity.insert(0, ActivityItem::new(kind, title));
        self.activity.truncate(MAX_RECENT_ACTIVITY);
        if !self.activity.is_empty() {
            persist(&mut self.store, config::ACTIVITY_KEY, &self.activity);
        }
    }

    /// Seed the welcome greeting — a no-op unless the transcript is
    /// empty, which makes the seed a once-per-session event.
    pub fn seed_welcome(&mut self) {
        if !self.messages.is_empty() {
            return;
        }
        let content = chat::welcome_message(&self.profile, self.language);
        self.append_message(ChatMessage::assistant(
            chat::WELCOME_MESSAGE_ID.to_string(),
            content,
            None,
        ));
    }

    // ── Navigation ───────────────────────────────────────────

    /// Advance login → language selection. Refuses (returning false,
    /// with no error surfaced) unless the profile is complete.
    pub fn submit_profile(&mut self) -> bool {
        if self.screen == Screen::Login && self.profile.is_complete() {
            self.screen = Screen::Language;
            true
        } else {
            false
        }
    }

    /// Record the chosen language and move to the dashboard.
    pub fn select_language(&mut self, language: Language) {
        self.set_language(language);
        self.screen = Screen::Dashboard;
    }

    /// Enter the chat screen, seeding the welcome greeting when the
    /// transcript is empty.
    pub fn open_chat(&mut self) {
        self.screen = Screen::Chat;
        self.seed_welcome();
    }

    pub fn open_scan(&mut self) {
        self.screen = Screen::Scan;
    }

    /// The language screen stays reachable from the dashboard so the
    /// selection can be changed later.
    pub fn open_language(&mut self) {
        self.screen = Screen::Language;
    }

    pub fn back_to_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
    }

    // ── Ephemeral state ──────────────────────────────────────

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn select_file(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.selected_file = Some(SelectedFile {
            name: name.into(),
            bytes,
        });
    }

    pub fn set_scan_result(&mut self, result: ScanResult) {
        self.scan_result = Some(result);
    }

    pub fn clear_scan_result(&mut self) {
        self.scan_result = None;
    }

    /// Expand a dashboard panel; toggling the expanded panel collapses it.
    pub fn toggle_panel(&mut self, panel: &str) {
        if self.expanded_panel.as_deref() == Some(panel) {
            self.expanded_panel = None;
        } else {
            self.expanded_panel = Some(panel.to_string());
        }
    }

    // ── Message ids ──────────────────────────────────────────

    /// Allocate the next message id: current epoch milliseconds, bumped
    /// past the last issued id when two messages land in the same
    /// millisecond. Lexical order therefore matches insertion order.
    pub fn next_message_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let id = if now <= self.last_message_id_millis {
            self.last_message_id_millis + 1
        } else {
            now
        };
        self.last_message_id_millis = id;
        id.to_string()
    }
}

/// Read and parse one persisted key. Parse failures are logged and
/// treated as absent so one corrupt value cannot poison the whole load.
fn load_key<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(value) => value?,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted value");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding corrupt persisted value");
            None
        }
    }
}

/// Write one entity's canonical JSON encoding. Fire-and-forget: a
/// failed write is logged at warn level and the mutation stands.
fn persist<S: KeyValueStore, T: Serialize>(store: &mut S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => {
            if let Err(e) = store.set(key, &json) {
                tracing::warn!(key, error = %e, "Persistence write failed");
            }
        }
        Err(e) => tracing::warn!(key, error = %e, "Failed to encode value for persistence"),
    }
}
