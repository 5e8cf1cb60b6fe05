//! Medimart application core.
//!
//! The session and decision logic behind a bilingual (Hindi/English)
//! pregnancy and medicine-safety companion. A thin UI shell drives it:
//! one mutation per user event, one resolver call per agent
//! round-trip. The crate owns:
//!
//! - the session state (profile, language, transcript, activity log,
//!   screen navigation) with write-through persistence,
//! - the response resolution engine — remote agents first, a
//!   deterministic keyword rule table when the chat agent is
//!   unavailable,
//! - the medicine-scan flow that cascades a successful extraction into
//!   a personalized safety check,
//! - defensive decoding of the loosely-typed agent payloads at the
//!   boundary.
//!
//! Rendering, timers, and file pickers stay in the shell; the remote
//! service and the key-value store are reached through traits so tests
//! run without a network or a disk.

pub mod agent;
pub mod chat;
pub mod config;
pub mod engine;
pub mod models;
pub mod session;
pub mod store;
pub mod tips;

pub use agent::HttpAgentGateway;
pub use engine::{generate_health_response, ResolutionSource, Resolver};
pub use session::SessionState;
pub use store::{MemoryStore, SqliteStore};
