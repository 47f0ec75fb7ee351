//! Core domain logic for QuickNote.
//! This crate is the single source of truth for note invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::note::{Note, NoteDraft, NoteId, NoteValidationError};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::note_service::{derive_preview, NoteListItem, NoteService, NoteServiceError};
pub use session::note_session::{IgnoredReason, Intent, NoteSession, Outcome, Screen};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
