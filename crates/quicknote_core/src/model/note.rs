//! Note domain model.
//!
//! # Responsibility
//! - Define the `Note` record rendered by list/detail views.
//! - Define `NoteDraft`, the working copy owned by an open form.
//! - Provide field validation shared by create and update.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` and `body` are non-empty after trimming whitespace and newlines
//!   whenever they pass through `validate_fields`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Validation failure for note fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Body is empty or whitespace-only.
    EmptyBody,
    /// Caller-provided id is the nil UUID.
    NilId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::EmptyBody => write!(f, "note body must not be empty"),
            Self::NilId => write!(f, "note id must not be nil"),
        }
    }
}

impl Error for NoteValidationError {}

/// One note as shown in the list and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Assigned at creation, immutable.
    pub id: NoteId,
    /// Display title. Stored exactly as entered.
    pub title: String,
    /// Free-form text. Stored exactly as entered.
    pub body: String,
}

impl Note {
    /// Creates a note with a freshly generated id.
    ///
    /// # Errors
    /// - `EmptyTitle` / `EmptyBody` when a field is blank after trimming.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        Self::with_id(Uuid::new_v4(), title, body)
    }

    /// Creates a note with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyTitle` / `EmptyBody` when a field is blank after trimming.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, NoteValidationError> {
        if id.is_nil() {
            return Err(NoteValidationError::NilId);
        }
        let title = title.into();
        let body = body.into();
        validate_fields(&title, &body)?;
        Ok(Self { id, title, body })
    }
}

/// Working copy of a note's editable fields, owned by an open form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
}

impl NoteDraft {
    /// Empty draft for the creation form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-populated from an existing note for the edit form.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            body: note.body.clone(),
        }
    }

    /// Whether the form's submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        validate_fields(&self.title, &self.body).is_ok()
    }
}

/// Checks the "both fields non-empty" rule.
///
/// Title is checked first, so a draft with both fields blank reports
/// `EmptyTitle`.
pub fn validate_fields(title: &str, body: &str) -> Result<(), NoteValidationError> {
    if is_blank(title) {
        return Err(NoteValidationError::EmptyTitle);
    }
    if is_blank(body) {
        return Err(NoteValidationError::EmptyBody);
    }
    Ok(())
}

/// Returns true for empty or whitespace/newline-only text.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{is_blank, validate_fields, NoteDraft, NoteValidationError};

    #[test]
    fn is_blank_treats_newlines_as_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t\r "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn validate_fields_reports_title_before_body() {
        assert_eq!(
            validate_fields("  ", "  "),
            Err(NoteValidationError::EmptyTitle)
        );
        assert_eq!(
            validate_fields("title", "\n"),
            Err(NoteValidationError::EmptyBody)
        );
        assert_eq!(validate_fields("title", "body"), Ok(()));
    }

    #[test]
    fn empty_draft_cannot_submit() {
        let mut draft = NoteDraft::new();
        assert!(!draft.can_submit());

        draft.title = "Groceries".to_string();
        assert!(!draft.can_submit());

        draft.body = "Milk".to_string();
        assert!(draft.can_submit());
    }
}
