use quicknote_core::{init_logging, logging_status, InMemoryNoteRepository, NoteService};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir = tempfile::tempdir().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).unwrap();
    init_logging("INFO", &log_dir_str).unwrap();

    let level_error = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging("info", &other_dir_str).unwrap_err();
    assert!(dir_error.contains("refusing to switch"));

    let status = logging_status().unwrap();
    assert_eq!(status.level, "info");
    assert_eq!(status.log_dir, log_dir.path());

    // Service events go through the active logger without leaking note text.
    let mut service = NoteService::new(InMemoryNoteRepository::new());
    service.create_note("secret title", "secret body").unwrap();
    log::logger().flush();

    let mut saw_log_file = false;
    for entry in std::fs::read_dir(log_dir.path()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("log") {
            saw_log_file = true;
            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(contents.contains("event=note_create"));
            assert!(!contents.contains("secret"));
        }
    }
    assert!(saw_log_file);
}

#[test]
fn init_logging_rejects_bad_input() {
    assert!(init_logging("verbose", "/tmp/quicknote-logs").is_err());
    assert!(init_logging("info", "relative/logs").is_err());
    assert!(init_logging("info", "").is_err());
}
