//! CLI argument definitions

use crate::error::Result;
use crate::infrastructure::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ocean-notes")]
#[command(about = "Memory-only terminal notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Read session commands from a file instead of standard input
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty note collection
    #[arg(long)]
    pub no_samples: bool,

    /// Quiet period in milliseconds before title and content edits are saved
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    ///
    /// The merged configuration goes through the same checks as a config file.
    pub fn apply_overrides(&self, config: &mut Config) -> Result<()> {
        if self.no_samples {
            config.seed_samples = false;
        }
        if let Some(ms) = self.debounce_ms {
            config.debounce_ms = ms;
        }
        config.validate()
    }
}
