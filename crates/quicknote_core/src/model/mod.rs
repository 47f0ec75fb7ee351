//! Domain model for the note list.
//!
//! # Responsibility
//! - Define the canonical note record and the form draft used to build it.
//! - Own the "both fields non-empty" rule shared by create and edit paths.
//!
//! # Invariants
//! - Every note is identified by a stable, non-nil `NoteId`.
//! - A draft never reaches storage until an explicit commit.

pub mod note;
