//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments.
///
/// Suggestion options are global so they may appear before or after the
/// subcommand. Unset options fall back to the persistent config, then to
/// built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "lineweave")]
#[command(about = "Line editor with undo/redo, autocomplete and autocorrect")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Word list to load (one word per line, optional count)
    #[arg(short, long, global = true)]
    pub dict: Option<PathBuf>,

    /// Maximum number of suggestions
    #[arg(short, long, global = true)]
    pub limit: Option<usize>,

    /// Maximum edit distance for corrections
    #[arg(short = 'm', long, global = true)]
    pub max_distance: Option<usize>,

    /// Shortest word that triggers autocomplete
    #[arg(short = 'p', long, global = true)]
    pub min_prefix: Option<usize>,

    /// Subcommand (defaults to `repl`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Launch the interactive editor
    Repl,

    /// Print corrections for a word and exit
    Correct {
        /// Word to correct
        word: String,
    },

    /// Print completions for a prefix and exit
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Show the effective configuration
    Config {
        /// Persist the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

impl Cli {
    /// The subcommand to run, defaulting to the REPL.
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Repl)
    }
}
