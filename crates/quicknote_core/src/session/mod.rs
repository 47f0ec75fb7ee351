//! Presentation session state.
//!
//! # Responsibility
//! - Model which screen is open and the draft it owns.
//! - Turn user intents from any front end into service calls.
//!
//! # Invariants
//! - Drafts are local to the open form and only reach the store on commit.
//! - The session is owned by one front end; nothing here is shared.

pub mod note_session;
