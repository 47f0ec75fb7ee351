//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose note create/update/delete/list functions to Dart via FRB.
//! - Hold the single process-wide note collection the UI renders.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids cross the boundary as canonical UUID strings.
//! - Not-found results come back as `ok=false` envelopes, never as errors.

use log::warn;
use quicknote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InMemoryNoteRepository, Note, NoteId, NoteService,
};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

type SharedNotes = Mutex<NoteService<InMemoryNoteRepository>>;

static NOTES: OnceLock<SharedNotes> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One note row as rendered by the Flutter list/detail views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub note_id: String,
    pub title: String,
    pub body: String,
}

/// Ordered list snapshot for re-rendering after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Notes in display order.
    pub items: Vec<NoteItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for note mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected note ID, when there is one.
    pub note_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note_id: Option<NoteId>) -> Self {
        Self {
            ok: true,
            note_id: note_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Creates a note from the "New Note" sheet.
///
/// # FFI contract
/// - Rejects blank title or body with `ok=false`; the UI should already keep
///   the submit button disabled in that case.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_create(title: String, body: String) -> NoteActionResponse {
    with_notes(|service| match service.create_note(title, body) {
        Ok(note) => NoteActionResponse::success("Note created.", Some(note.id)),
        Err(err) => NoteActionResponse::failure(format!("notes_create failed: {err}")),
    })
    .unwrap_or_else(NoteActionResponse::failure)
}

/// Saves the detail form's fields for one note.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_update(note_id: String, title: String, body: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    with_notes(|service| match service.update_note(id, title, body) {
        Ok(note) => NoteActionResponse::success("Note saved.", Some(note.id)),
        Err(err) => NoteActionResponse::failure(format!("notes_update failed: {err}")),
    })
    .unwrap_or_else(NoteActionResponse::failure)
}

/// Deletes one note from the detail form.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    with_notes(|service| match service.delete_note(id) {
        Ok(()) => NoteActionResponse::success("Note deleted.", Some(id)),
        Err(err) => NoteActionResponse::failure(format!("notes_delete failed: {err}")),
    })
    .unwrap_or_else(NoteActionResponse::failure)
}

/// Deletes the rows swiped away in the list, by display position.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete_at(positions: Vec<u32>) -> NoteActionResponse {
    let positions = positions
        .into_iter()
        .map(|position| position as usize)
        .collect::<Vec<_>>();
    with_notes(|service| {
        let removed = service.delete_notes_at(&positions);
        NoteActionResponse::success(format!("Deleted {removed} note(s)."), None)
    })
    .unwrap_or_else(NoteActionResponse::failure)
}

/// Returns all notes in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesListResponse {
    match with_notes(|service| service.list_notes().iter().map(to_note_item).collect::<Vec<_>>()) {
        Ok(items) => {
            let message = if items.is_empty() {
                "No notes.".to_string()
            } else {
                format!("{} note(s).", items.len())
            };
            NotesListResponse { items, message }
        }
        Err(message) => NotesListResponse {
            items: Vec::new(),
            message,
        },
    }
}

/// Loads one note for the detail form; `None` when it no longer exists.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_get(note_id: String) -> Option<NoteItem> {
    let id = parse_note_id(&note_id).ok()?;
    with_notes(|service| service.get_note(id).map(to_note_item))
        .ok()
        .flatten()
}

fn with_notes<T>(
    f: impl FnOnce(&mut NoteService<InMemoryNoteRepository>) -> T,
) -> Result<T, String> {
    let shared = NOTES.get_or_init(|| Mutex::new(NoteService::new(InMemoryNoteRepository::new())));
    match shared.lock() {
        Ok(mut service) => Ok(f(&mut service)),
        Err(_) => {
            warn!("event=notes_lock module=ffi status=error error_code=poisoned");
            Err("note store unavailable: lock poisoned".to_string())
        }
    }
}

fn parse_note_id(raw: &str) -> Result<NoteId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid note id `{raw}`"))
}

fn to_note_item(note: &Note) -> NoteItem {
    NoteItem {
        note_id: note.id.to_string(),
        title: note.title.clone(),
        body: note.body.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, notes_create, notes_delete, notes_delete_at, notes_get,
        notes_list, notes_update, ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn create_update_delete_round_trip() {
        let title = unique_token("groceries");
        let created = notes_create(title.clone(), "Milk, eggs".to_string());
        assert!(created.ok, "{}", created.message);
        let note_id = created.note_id.expect("create should return note_id");

        let listed = notes_list();
        assert!(listed.items.iter().any(|item| item.note_id == note_id));

        let updated = notes_update(
            note_id.clone(),
            format!("{title} v2"),
            "Milk, eggs, bread".to_string(),
        );
        assert!(updated.ok, "{}", updated.message);
        let loaded = notes_get(note_id.clone()).expect("note should exist");
        assert_eq!(loaded.title, format!("{title} v2"));
        assert_eq!(loaded.body, "Milk, eggs, bread");

        let deleted = notes_delete(note_id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(notes_get(note_id.clone()).is_none());

        let again = notes_delete(note_id);
        assert!(!again.ok);
        assert!(again.message.contains("not found"));
    }

    #[test]
    fn create_rejects_blank_fields() {
        let response = notes_create("   ".to_string(), "body".to_string());
        assert!(!response.ok);
        assert!(response.note_id.is_none());
        assert!(response.message.contains("title"));
    }

    #[test]
    fn invalid_ids_fail_without_panicking() {
        let response = notes_update("not-a-uuid".to_string(), "t".to_string(), "b".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid note id"));
        assert!(notes_get("not-a-uuid".to_string()).is_none());
    }

    #[test]
    fn delete_at_out_of_range_is_a_no_op() {
        let response = notes_delete_at(vec![u32::MAX]);
        assert!(response.ok, "{}", response.message);
        assert!(response.message.contains("Deleted 0"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
