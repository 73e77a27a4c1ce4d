//! lineweave - line editor with undo/redo, autocomplete and autocorrect
//!
//! Runs the interactive console by default; `correct` and `complete` answer
//! a single query and exit.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;
use std::sync::Arc;

use lineweave::cli::{Cli, Commands, PersistentConfig};
use lineweave::dictionary::{load_words_from_path, Dictionary};
use lineweave::repl::{self, ReplConfig};
use lineweave::session::Session;
use lineweave::suggest::format_suggestions;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file_config = PersistentConfig::load_from(cli.config.as_deref())?;
    let config = file_config.merge_with_cli(&cli.overrides());
    let settings = config.settings();

    let command = cli.subcommand();
    if let Commands::Config { save } = command {
        println!("{}", serde_json::to_string_pretty(&config)?);
        if save {
            let path = config.save_to(cli.config.as_deref())?;
            println!("Saved to {}", path.display().to_string().cyan());
        }
        return Ok(());
    }

    let dictionary = load_dictionary(&config)?;
    let session = Arc::new(Session::with_settings(dictionary, settings));

    match command {
        Commands::Correct { word } => {
            let results = session
                .with_dictionary(|dict| dict.autocorrect(&word, settings.max_distance, settings.limit))
                .with_context(|| format!("Could not correct '{}'", word))?;
            println!("{}", format_suggestions(&results, true));
        }
        Commands::Complete { prefix } => {
            let results = session
                .with_dictionary(|dict| dict.autocomplete(&prefix, settings.limit))
                .with_context(|| format!("Could not complete '{}'", prefix))?;
            println!("{}", format_suggestions(&results, false));
        }
        Commands::Repl | Commands::Config { .. } => {
            repl::run(session, &ReplConfig::default())?;
        }
    }

    Ok(())
}

fn load_dictionary(config: &PersistentConfig) -> Result<Dictionary> {
    let mut dictionary = Dictionary::new();
    let Some(path) = config.word_list() else {
        eprintln!(
            "{}: No word list found; suggestions are disabled",
            "Warning".yellow()
        );
        return Ok(dictionary);
    };

    let stats = load_words_from_path(&path, &mut dictionary)
        .with_context(|| format!("Failed to load word list: {}", path.display()))?;
    log::info!(
        "{}: {} words from {} lines ({} skipped)",
        path.display(),
        dictionary.len(),
        stats.lines,
        stats.skipped
    );
    Ok(dictionary)
}
