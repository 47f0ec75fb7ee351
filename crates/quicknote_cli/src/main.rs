//! Interactive terminal front end.
//!
//! # Responsibility
//! - Parse logging flags, initialize core logging, and run the note REPL.
//! - Keep all terminal I/O out of `quicknote_core`.

mod repl;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use quicknote_core::{default_log_level, init_logging, NoteSession};
use std::io;

/// Single-screen note list for the terminal.
#[derive(Debug, Parser)]
#[command(name = "quicknote", version, about)]
struct Args {
    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "QUICKNOTE_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = match args.log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };
    init_logging(&level, &log_dir).map_err(|err| anyhow!(err))?;
    info!("event=cli_start module=cli status=ok");

    let mut session = NoteSession::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), stdout.lock()).context("terminal session failed")?;

    info!(
        "event=cli_exit module=cli status=ok notes={}",
        session.notes().len()
    );
    Ok(())
}

fn default_log_dir() -> Result<String> {
    let dir = std::env::temp_dir().join("quicknote-logs");
    dir.to_str()
        .map(str::to_owned)
        .ok_or_else(|| anyhow!("temp directory path is not valid UTF-8"))
}
