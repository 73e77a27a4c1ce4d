//! Interactive line-editing console.
//!
//! Reads commands with `rustyline`, runs them against a shared
//! [`Session`], and prints the outcome. The console exits on `QUIT`,
//! Ctrl-D or Ctrl-C.

pub mod helper;
pub mod highlighter;

pub use helper::LineweaveHelper;

use crate::commands::{execute, Command, CommandResult, HELP_TEXT};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::sync::Arc;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            history_file: crate::cli::paths::history_file_path(),
            max_history: 1000,
        }
    }
}

/// Run the console until the user quits.
pub fn run(session: Arc<Session>, config: &ReplConfig) -> Result<()> {
    let rustyline_config = Config::builder()
        .max_history_size(config.max_history)?
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let mut editor: Editor<LineweaveHelper, DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(LineweaveHelper::new(Arc::clone(&session))));

    if let Some(history_path) = &config.history_file {
        if history_path.exists() {
            if let Err(e) = editor.load_history(history_path) {
                log::warn!("could not load history {}: {}", history_path.display(), e);
            }
        }
    }

    print_banner(&session);

    loop {
        let line = match editor.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(crate::commands::CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                continue;
            }
        };

        let result = execute(command, &session);
        print_result(&result);
        if result.should_exit {
            break;
        }
    }

    if let Some(history_path) = &config.history_file {
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    Ok(())
}

/// Print a command outcome. Document text is shown dimmed under a header
/// after mutations; other output is printed as is.
pub fn print_result(result: &CommandResult) {
    if result.modified {
        println!("{}", "[document]".bright_cyan());
        print!("{}", result.output.dimmed());
        if !result.output.is_empty() && !result.output.ends_with('\n') {
            println!();
        }
    } else if result.should_exit {
        println!("{}", result.output.green());
    } else if !result.output.is_empty() {
        println!("{}", result.output.trim_end_matches('\n'));
    }
}

fn print_banner(session: &Session) {
    let settings = session.settings();
    let words = session.with_dictionary(|dict| dict.len());

    println!();
    println!("{}", "lineweave".bright_cyan().bold());
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!(
        "  Dictionary: {} word(s), suggestions: limit {}, max distance {}",
        words.to_string().green().bold(),
        settings.limit,
        settings.max_distance
    );
    println!();
    println!("{}", "Commands:".bold());
    for line in HELP_TEXT.lines() {
        println!("  {}", line);
    }
    println!();
}
