//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep front ends (FFI, CLI) decoupled from collection details.

pub mod note_service;
