use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medimart";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Agent identity for the medicine scanner.
pub const MEDICINE_SCANNER_AGENT_ID: &str = "6985a5fb5eb49186d63e5df4";
/// Agent identity for the health assistant.
pub const HEALTH_ASSISTANT_AGENT_ID: &str = "6985a61fe2c0086a4fc43bf1";

// ── Persistent store keys ────────────────────────────────────
// One key per persisted entity; the load path assumes the shape
// the save path last wrote.

pub const PROFILE_KEY: &str = "medimart_profile";
pub const LANGUAGE_KEY: &str = "medimart_language";
pub const MESSAGES_KEY: &str = "medimart_messages";
pub const ACTIVITY_KEY: &str = "medimart_activity";

/// Get the application data directory
/// ~/Medimart/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Default location of the persistent key-value store.
pub fn default_store_path() -> PathBuf {
    app_data_dir().join("medimart.db")
}

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "medimart=info".to_string()
}

/// Initialize tracing for a host shell embedding this crate.
///
/// Honors RUST_LOG when present; falls back to the crate default.
/// Call once at startup — a second call is a no-op via `try_init`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .try_init();
}
