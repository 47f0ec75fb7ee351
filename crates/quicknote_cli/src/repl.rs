//! Line-oriented presentation layer over `NoteSession`.
//!
//! Each input line becomes one command; the current screen is re-rendered
//! after every command that changes state. Row numbers shown to the user are
//! 1-based.

use quicknote_core::{IgnoredReason, Intent, NoteSession, Outcome, Screen};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  list                 show the note list
  new                  open the new note form
  title <text>         set the open form's title
  body <text>          set the open form's body (\\n for a line break)
  add                  create the note from the new note form
  open <n>             open note n for editing
  save                 save the open note
  delete               delete the open note
  rm <n> [<n>...]      delete rows from the list
  back                 close the open form without saving
  json                 print all notes as JSON
  help                 show this help
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    New,
    Title(String),
    Body(String),
    Add,
    Open(usize),
    Save,
    Delete,
    Remove(Vec<usize>),
    Back,
    Json,
    Help,
    Quit,
}

/// Reads commands until EOF or `quit`.
pub fn run<R: BufRead, W: Write>(
    session: &mut NoteSession,
    input: R,
    mut output: W,
) -> io::Result<()> {
    render(session, &mut output)?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(session, command, &mut output)?,
            Err(message) => writeln!(output, "{message}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed.trim_end(), ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "new" => Ok(Command::New),
        "title" => Ok(Command::Title(rest.to_string())),
        "body" => Ok(Command::Body(rest.replace("\\n", "\n"))),
        "add" => Ok(Command::Add),
        "open" => parse_row(rest).map(Command::Open),
        "save" => Ok(Command::Save),
        "delete" => Ok(Command::Delete),
        "rm" => {
            let rows = rest
                .split_whitespace()
                .map(parse_row)
                .collect::<Result<Vec<_>, _>>()?;
            if rows.is_empty() {
                return Err("usage: rm <n> [<n>...]".to_string());
            }
            Ok(Command::Remove(rows))
        }
        "back" | "cancel" => Ok(Command::Back),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

/// Converts a 1-based row label into a 0-based position.
fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(format!("invalid row `{}`; rows start at 1", raw.trim())),
    }
}

fn execute<W: Write>(session: &mut NoteSession, command: Command, output: &mut W) -> io::Result<()> {
    let intent = match command {
        Command::List => return render(session, output),
        Command::Help => return writeln!(output, "{HELP}"),
        Command::Json => return write_json(session, output),
        Command::Quit => return Ok(()),
        Command::New => Intent::OpenNewNote,
        Command::Title(title) => Intent::EditDraft {
            title: Some(title),
            body: None,
        },
        Command::Body(body) => Intent::EditDraft {
            title: None,
            body: Some(body),
        },
        Command::Add => Intent::SubmitNewNote,
        Command::Open(position) => Intent::OpenDetail { position },
        Command::Save => Intent::SaveDetail,
        Command::Delete => Intent::DeleteDetail,
        Command::Remove(positions) => Intent::DeleteRows { positions },
        Command::Back => Intent::Dismiss,
    };

    match session.apply(intent) {
        Outcome::Changed => render(session, output),
        Outcome::Ignored(reason) => writeln!(output, "{}", ignored_message(reason)),
    }
}

fn ignored_message(reason: IgnoredReason) -> &'static str {
    match reason {
        IgnoredReason::WrongScreen => "not available on this screen",
        IgnoredReason::DraftIncomplete => "title and body must both be filled in",
        IgnoredReason::NoteNotFound => "that note no longer exists",
        IgnoredReason::NoSuchRow => "no such row",
    }
}

fn render<W: Write>(session: &NoteSession, output: &mut W) -> io::Result<()> {
    match session.screen() {
        Screen::List => {
            writeln!(output, "Notes")?;
            let items = session.service().list_items();
            if items.is_empty() {
                writeln!(output, "  (no notes yet; type `new` to add one)")?;
            }
            for (index, item) in items.iter().enumerate() {
                match &item.preview {
                    Some(preview) => writeln!(output, "  {}. {} - {}", index + 1, item.title, preview)?,
                    None => writeln!(output, "  {}. {}", index + 1, item.title)?,
                }
            }
        }
        Screen::NewNote(draft) => {
            writeln!(output, "New Note")?;
            writeln!(output, "  title: {}", draft.title)?;
            writeln!(output, "  body:  {}", draft.body)?;
            let hint = if session.can_submit() {
                "`add` to create, `back` to cancel"
            } else {
                "fill in title and body; `back` to cancel"
            };
            writeln!(output, "  ({hint})")?;
        }
        Screen::Detail { draft, .. } => {
            writeln!(output, "Edit Note")?;
            writeln!(output, "  title: {}", draft.title)?;
            writeln!(output, "  body:  {}", draft.body)?;
            writeln!(output, "  (`save`, `delete`, or `back`)")?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(session: &NoteSession, output: &mut W) -> io::Result<()> {
    let json = serde_json::to_string_pretty(session.notes()).map_err(io::Error::other)?;
    writeln!(output, "{json}")
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run, Command};
    use quicknote_core::NoteSession;

    fn run_script(session: &mut NoteSession, script: &str) -> String {
        let mut output = Vec::new();
        run(session, script.as_bytes(), &mut output).expect("script should run");
        String::from_utf8(output).expect("output should be UTF-8")
    }

    #[test]
    fn parse_command_converts_rows_to_positions() {
        assert_eq!(parse_command("open 2"), Ok(Command::Open(1)));
        assert_eq!(parse_command("rm 3 1"), Ok(Command::Remove(vec![2, 0])));
        assert!(parse_command("open 0").is_err());
        assert!(parse_command("rm").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn parse_command_keeps_text_arguments() {
        assert_eq!(
            parse_command("title  Groceries list "),
            Ok(Command::Title("Groceries list".to_string()))
        );
        assert_eq!(
            parse_command("body Milk\\neggs"),
            Ok(Command::Body("Milk\neggs".to_string()))
        );
    }

    #[test]
    fn script_creates_edits_and_deletes_notes() {
        let mut session = NoteSession::new();
        let output = run_script(
            &mut session,
            "new\ntitle Groceries\nbody Milk, eggs\nadd\nopen 1\ntitle Groceries v2\nsave\nquit\n",
        );

        assert!(output.contains("1. Groceries - Milk, eggs"));
        assert!(output.contains("1. Groceries v2 - Milk, eggs"));
        assert_eq!(session.notes().len(), 1);
        assert_eq!(session.notes()[0].title, "Groceries v2");

        let output = run_script(&mut session, "open 1\ndelete\n");
        assert!(output.contains("no notes yet"));
        assert!(session.notes().is_empty());
    }

    #[test]
    fn add_with_blank_body_is_refused() {
        let mut session = NoteSession::new();
        let output = run_script(&mut session, "new\ntitle Only title\nadd\n");

        assert!(output.contains("title and body must both be filled in"));
        assert!(session.notes().is_empty());
    }

    #[test]
    fn rm_removes_several_rows_at_once() {
        let mut session = NoteSession::new();
        run_script(
            &mut session,
            "new\ntitle a\nbody x\nadd\nnew\ntitle b\nbody x\nadd\nnew\ntitle c\nbody x\nadd\n",
        );

        run_script(&mut session, "rm 3 1\n");
        assert_eq!(session.notes().len(), 1);
        assert_eq!(session.notes()[0].title, "b");
    }

    #[test]
    fn json_prints_note_fields() {
        let mut session = NoteSession::new();
        let output = run_script(&mut session, "new\ntitle a\nbody x\nadd\njson\n");

        assert!(output.contains("\"title\": \"a\""));
        assert!(output.contains("\"body\": \"x\""));
    }
}
