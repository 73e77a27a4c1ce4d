//! CLI interface for lineweave
//!
//! Argument parsing and the persistent configuration file.

pub mod args;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, PersistentConfig};

impl Cli {
    /// Options given on the command line, in config-file shape.
    pub fn overrides(&self) -> PersistentConfig {
        PersistentConfig {
            dict_path: self.dict.clone(),
            limit: self.limit,
            max_distance: self.max_distance,
            min_prefix_len: self.min_prefix,
        }
    }
}
