pub mod toml_config;

use crate::core::records::{DEFAULT_HISTORY_PREFIX, DEFAULT_ROSTER_FILE};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_prefix, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "coffee-roulette")]
#[command(about = "Pair people up for coffee without repeating earlier pairs")]
pub struct CliConfig {
    /// Directory holding the roster and the previous run files
    #[arg(default_value = ".")]
    pub artifacts_dir: String,

    #[arg(long, default_value = DEFAULT_ROSTER_FILE)]
    pub roster_file: String,

    /// File name prefix of the run files, `<prefix><N>.csv`
    #[arg(long, default_value = DEFAULT_HISTORY_PREFIX)]
    pub prefix: String,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML configuration file; replaces the directory, roster and prefix options
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Print the teams without writing a run file")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn artifacts_dir(&self) -> &str {
        &self.artifacts_dir
    }

    fn roster_file(&self) -> &str {
        &self.roster_file
    }

    fn history_prefix(&self) -> &str {
        &self.prefix
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("artifacts_dir", &self.artifacts_dir)?;
        validate_path("roster_file", &self.roster_file)?;
        validate_file_prefix("prefix", &self.prefix)?;
        Ok(())
    }
}
