//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered note collection and its only mutation paths.
//! - Keep positional and id-based removal free of index-shift hazards.
//!
//! # Invariants
//! - Insertion order is display order; nothing re-sorts the collection.
//! - Note ids are unique within the collection at all times.
//! - Updates replace fields in place; id and position never change.
//! - Multi-position removal resolves every position against one snapshot.

use crate::model::note::{Note, NoteId};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note collection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No note with this id exists.
    NotFound(NoteId),
    /// Insert attempted with an id already present.
    DuplicateId(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::DuplicateId(id) => write!(f, "note id already exists: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the ordered note collection.
pub trait NoteRepository {
    /// Appends one note to the end of the collection.
    fn insert_note(&mut self, note: Note) -> RepoResult<()>;
    /// Replaces title and body of an existing note and returns the result.
    fn replace_note(&mut self, id: NoteId, title: String, body: String) -> RepoResult<Note>;
    /// Removes one note by id and returns it.
    fn remove_note(&mut self, id: NoteId) -> RepoResult<Note>;
    /// Removes notes at the given positions and returns them in original order.
    ///
    /// Duplicate and out-of-range positions are ignored.
    fn remove_positions(&mut self, positions: &[usize]) -> Vec<Note>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> Option<&Note>;
    /// Returns all notes in display order.
    fn notes(&self) -> &[Note];
}

/// Vec-backed note repository living for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn insert_note(&mut self, note: Note) -> RepoResult<()> {
        if self.position_of(note.id).is_some() {
            return Err(RepoError::DuplicateId(note.id));
        }
        self.notes.push(note);
        Ok(())
    }

    fn replace_note(&mut self, id: NoteId, title: String, body: String) -> RepoResult<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(RepoError::NotFound(id))?;
        note.title = title;
        note.body = body;
        Ok(note.clone())
    }

    fn remove_note(&mut self, id: NoteId) -> RepoResult<Note> {
        let index = self.position_of(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.notes.remove(index))
    }

    fn remove_positions(&mut self, positions: &[usize]) -> Vec<Note> {
        let doomed = positions
            .iter()
            .copied()
            .filter(|position| *position < self.notes.len())
            .collect::<BTreeSet<_>>();
        if doomed.is_empty() {
            return Vec::new();
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.notes)
            .into_iter()
            .enumerate()
            .partition(|(index, _)| doomed.contains(index));
        self.notes = kept.into_iter().map(|(_, note)| note).collect();
        removed.into_iter().map(|(_, note)| note).collect()
    }

    fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }
}
