//! Repository layer for the note collection.
//!
//! # Responsibility
//! - Define the data access contract used by the note service.
//! - Provide the in-memory collection that lives for the process lifetime.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) rather than
//!   silently ignoring unknown ids.
//! - Repositories do not validate field content; the service layer does.

pub mod note_repo;
