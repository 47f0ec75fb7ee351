//! Note session: screens, intents, and intent dispatch.
//!
//! # Responsibility
//! - Replace two-way UI bindings with explicit intents applied in one place.
//! - Keep "which form is showing" out of the note data model.
//!
//! # Invariants
//! - Every intent is either applied fully or ignored with a reason.
//! - Dismissing a form discards its draft without touching the store.
//! - Not-found results from the service are absorbed, not surfaced as errors.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::note_repo::{InMemoryNoteRepository, NoteRepository};
use crate::service::note_service::{NoteService, NoteServiceError};
use log::debug;

/// Screen currently presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Note list with the "add" button.
    List,
    /// Creation form with its working copy.
    NewNote(NoteDraft),
    /// Detail/edit form for one note.
    Detail { note_id: NoteId, draft: NoteDraft },
}

/// User action forwarded from a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show the creation form with an empty draft.
    OpenNewNote,
    /// Change fields of the open form's draft. `None` keeps a field as is.
    EditDraft {
        title: Option<String>,
        body: Option<String>,
    },
    /// Commit the creation form.
    SubmitNewNote,
    /// Open the detail form for the row at `position`.
    OpenDetail { position: usize },
    /// Commit the detail form's draft.
    SaveDetail,
    /// Delete the note shown in the detail form.
    DeleteDetail,
    /// Swipe-delete rows from the list in one step.
    DeleteRows { positions: Vec<usize> },
    /// Close the open form without committing.
    Dismiss,
}

impl Intent {
    fn label(&self) -> &'static str {
        match self {
            Self::OpenNewNote => "open_new_note",
            Self::EditDraft { .. } => "edit_draft",
            Self::SubmitNewNote => "submit_new_note",
            Self::OpenDetail { .. } => "open_detail",
            Self::SaveDetail => "save_detail",
            Self::DeleteDetail => "delete_detail",
            Self::DeleteRows { .. } => "delete_rows",
            Self::Dismiss => "dismiss",
        }
    }
}

/// Why an intent left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Intent does not apply to the current screen.
    WrongScreen,
    /// Submit control is disabled: a draft field is blank.
    DraftIncomplete,
    /// Target note no longer exists.
    NoteNotFound,
    /// No row at the requested position.
    NoSuchRow,
}

/// Result of applying one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Ignored(IgnoredReason),
}

/// One front end's session over a note service.
pub struct NoteSession<R: NoteRepository = InMemoryNoteRepository> {
    service: NoteService<R>,
    screen: Screen,
}

impl NoteSession<InMemoryNoteRepository> {
    /// Starts an empty session on the list screen.
    pub fn new() -> Self {
        Self::with_service(NoteService::new(InMemoryNoteRepository::new()))
    }
}

impl Default for NoteSession<InMemoryNoteRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NoteRepository> NoteSession<R> {
    /// Starts a session on the list screen over an existing service.
    pub fn with_service(service: NoteService<R>) -> Self {
        Self {
            service,
            screen: Screen::List,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn service(&self) -> &NoteService<R> {
        &self.service
    }

    pub fn notes(&self) -> &[Note] {
        self.service.list_notes()
    }

    /// Whether the open form's commit control is enabled.
    ///
    /// Always false on the list screen.
    pub fn can_submit(&self) -> bool {
        match &self.screen {
            Screen::List => false,
            Screen::NewNote(draft) | Screen::Detail { draft, .. } => draft.can_submit(),
        }
    }

    /// Applies one intent and reports whether anything changed.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        let label = intent.label();
        let outcome = self.dispatch(intent);
        debug!(
            "event=session_intent module=session intent={} outcome={}",
            label,
            outcome_label(outcome)
        );
        outcome
    }

    fn dispatch(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::OpenNewNote => match self.screen {
                Screen::List => {
                    self.screen = Screen::NewNote(NoteDraft::new());
                    Outcome::Changed
                }
                _ => Outcome::Ignored(IgnoredReason::WrongScreen),
            },
            Intent::EditDraft { title, body } => match &mut self.screen {
                Screen::List => Outcome::Ignored(IgnoredReason::WrongScreen),
                Screen::NewNote(draft) | Screen::Detail { draft, .. } => {
                    if let Some(title) = title {
                        draft.title = title;
                    }
                    if let Some(body) = body {
                        draft.body = body;
                    }
                    Outcome::Changed
                }
            },
            Intent::SubmitNewNote => self.submit_new_note(),
            Intent::OpenDetail { position } => {
                if self.screen != Screen::List {
                    return Outcome::Ignored(IgnoredReason::WrongScreen);
                }
                match self.service.note_at(position) {
                    Some(note) => {
                        self.screen = Screen::Detail {
                            note_id: note.id,
                            draft: NoteDraft::from_note(note),
                        };
                        Outcome::Changed
                    }
                    None => Outcome::Ignored(IgnoredReason::NoSuchRow),
                }
            }
            Intent::SaveDetail => self.save_detail(),
            Intent::DeleteDetail => self.delete_detail(),
            Intent::DeleteRows { positions } => {
                if self.screen != Screen::List {
                    return Outcome::Ignored(IgnoredReason::WrongScreen);
                }
                if self.service.delete_notes_at(&positions) == 0 {
                    return Outcome::Ignored(IgnoredReason::NoSuchRow);
                }
                Outcome::Changed
            }
            Intent::Dismiss => match self.screen {
                Screen::List => Outcome::Ignored(IgnoredReason::WrongScreen),
                _ => {
                    self.screen = Screen::List;
                    Outcome::Changed
                }
            },
        }
    }

    fn submit_new_note(&mut self) -> Outcome {
        let Screen::NewNote(draft) = &self.screen else {
            return Outcome::Ignored(IgnoredReason::WrongScreen);
        };
        if !draft.can_submit() {
            return Outcome::Ignored(IgnoredReason::DraftIncomplete);
        }

        let NoteDraft { title, body } = draft.clone();
        match self.service.create_note(title, body) {
            Ok(_) => {
                self.screen = Screen::List;
                Outcome::Changed
            }
            Err(err) => Outcome::Ignored(ignored_reason(&err)),
        }
    }

    fn save_detail(&mut self) -> Outcome {
        let Screen::Detail { note_id, draft } = &self.screen else {
            return Outcome::Ignored(IgnoredReason::WrongScreen);
        };

        let note_id = *note_id;
        let NoteDraft { title, body } = draft.clone();
        match self.service.update_note(note_id, title, body) {
            Ok(_) => {
                self.screen = Screen::List;
                Outcome::Changed
            }
            Err(err) => Outcome::Ignored(ignored_reason(&err)),
        }
    }

    fn delete_detail(&mut self) -> Outcome {
        let Screen::Detail { note_id, .. } = &self.screen else {
            return Outcome::Ignored(IgnoredReason::WrongScreen);
        };

        match self.service.delete_note(*note_id) {
            Ok(()) => {
                self.screen = Screen::List;
                Outcome::Changed
            }
            Err(err) => Outcome::Ignored(ignored_reason(&err)),
        }
    }
}

fn ignored_reason(err: &NoteServiceError) -> IgnoredReason {
    match err {
        NoteServiceError::Validation(_) => IgnoredReason::DraftIncomplete,
        NoteServiceError::NoteNotFound(_) | NoteServiceError::Repo(_) => {
            IgnoredReason::NoteNotFound
        }
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Changed => "changed",
        Outcome::Ignored(IgnoredReason::WrongScreen) => "ignored_wrong_screen",
        Outcome::Ignored(IgnoredReason::DraftIncomplete) => "ignored_draft_incomplete",
        Outcome::Ignored(IgnoredReason::NoteNotFound) => "ignored_not_found",
        Outcome::Ignored(IgnoredReason::NoSuchRow) => "ignored_no_such_row",
    }
}
