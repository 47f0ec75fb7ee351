//! Note use-case service.
//!
//! # Responsibility
//! - Provide the create/update/delete/list entry points used by front ends.
//! - Enforce the non-empty title/body rule on both create and update.
//! - Derive list-row previews from note bodies.
//!
//! # Invariants
//! - Rejected writes never mutate the collection.
//! - Log events carry ids and counts only, never note text.

use crate::model::note::{validate_fields, Note, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PREVIEW_MAX_CHARS: usize = 80;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Title or body failed the non-empty rule.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Collection-level failure other than not-found.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Read model for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    pub title: String,
    /// Whitespace-collapsed body summary; `None` when the body is blank.
    pub preview: Option<String>,
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note and appends it to the end of the list.
    ///
    /// # Errors
    /// - `Validation` when title or body is blank after trimming.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        let note = match Note::new(title, body) {
            Ok(note) => note,
            Err(err) => {
                warn!(
                    "event=note_create module=service status=rejected reason={}",
                    validation_reason(err)
                );
                return Err(err.into());
            }
        };

        self.repo.insert_note(note.clone())?;
        info!(
            "event=note_create module=service status=ok note_id={} total={}",
            note.id,
            self.repo.notes().len()
        );
        Ok(note)
    }

    /// Replaces title and body of an existing note in place.
    ///
    /// Unknown ids are reported before field validation.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` does not exist.
    /// - `Validation` when title or body is blank after trimming.
    pub fn update_note(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        if self.repo.get_note(id).is_none() {
            warn!("event=note_update module=service status=not_found note_id={id}");
            return Err(NoteServiceError::NoteNotFound(id));
        }

        let title = title.into();
        let body = body.into();
        if let Err(err) = validate_fields(&title, &body) {
            warn!(
                "event=note_update module=service status=rejected note_id={} reason={}",
                id,
                validation_reason(err)
            );
            return Err(err.into());
        }

        let updated = self.repo.replace_note(id, title, body)?;
        info!("event=note_update module=service status=ok note_id={id}");
        Ok(updated)
    }

    /// Removes one note by id.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` does not exist, including a repeated delete.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        match self.repo.remove_note(id) {
            Ok(_) => {
                info!(
                    "event=note_delete module=service status=ok note_id={} total={}",
                    id,
                    self.repo.notes().len()
                );
                Ok(())
            }
            Err(err) => {
                warn!("event=note_delete module=service status=not_found note_id={id}");
                Err(err.into())
            }
        }
    }

    /// Removes the notes at `positions` in one step and returns how many went.
    ///
    /// Positions refer to the order before this call. Duplicates and
    /// out-of-range positions are skipped.
    pub fn delete_notes_at(&mut self, positions: &[usize]) -> usize {
        let before = self.repo.notes().len();
        let removed = self.repo.remove_positions(positions);
        let out_of_range = positions
            .iter()
            .filter(|position| **position >= before)
            .count();
        if out_of_range > 0 {
            warn!(
                "event=note_delete_at module=service status=partial out_of_range={} len={}",
                out_of_range, before
            );
        }
        info!(
            "event=note_delete_at module=service status=ok removed={} total={}",
            removed.len(),
            self.repo.notes().len()
        );
        removed.len()
    }

    /// Returns all notes in display order.
    pub fn list_notes(&self) -> &[Note] {
        self.repo.notes()
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.repo.get_note(id)
    }

    /// Gets the note shown at `position`.
    pub fn note_at(&self, position: usize) -> Option<&Note> {
        self.repo.notes().get(position)
    }

    /// Returns list rows with derived previews.
    pub fn list_items(&self) -> Vec<NoteListItem> {
        self.repo
            .notes()
            .iter()
            .map(|note| NoteListItem {
                id: note.id,
                title: note.title.clone(),
                preview: derive_preview(&note.body),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.repo.notes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.notes().is_empty()
    }
}

/// Derives a one-line preview from a note body.
///
/// Rules:
/// - runs of whitespace (including newlines) collapse to one space.
/// - first 80 chars are kept; longer text ends with `...`.
pub fn derive_preview(body: &str) -> Option<String> {
    let normalized = WHITESPACE_RE.replace_all(body, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut preview = trimmed.chars().take(PREVIEW_MAX_CHARS).collect::<String>();
    if trimmed.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    Some(preview)
}

fn validation_reason(err: NoteValidationError) -> &'static str {
    match err {
        NoteValidationError::EmptyTitle => "empty_title",
        NoteValidationError::EmptyBody => "empty_body",
        NoteValidationError::NilId => "nil_id",
    }
}

#[cfg(test)]
mod tests {
    use super::derive_preview;

    #[test]
    fn preview_collapses_whitespace() {
        let preview = derive_preview("Milk,\n\n  eggs\tbread");
        assert_eq!(preview.as_deref(), Some("Milk, eggs bread"));
    }

    #[test]
    fn preview_is_none_for_blank_body() {
        assert_eq!(derive_preview(" \n "), None);
    }

    #[test]
    fn preview_truncates_long_bodies() {
        let body = "x".repeat(200);
        let preview = derive_preview(&body).expect("preview should exist");
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 83);
    }
}
