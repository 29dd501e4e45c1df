pub mod toml_config;

use crate::config::toml_config::{FileConfig, LogFormat};
#[cfg(feature = "cli")]
use crate::domain::model::Candidate;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{parse_bound, single_argument};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "find-primes")]
#[command(version)]
#[command(about = "List all prime numbers smaller than a given integer, largest first")]
pub struct CliConfig {
    /// Exclusive upper bound (exactly one is required)
    // hyphenated tokens that are not known flags land here and fail as parse errors
    #[arg(
        value_name = "POSITIVE_INTEGER",
        allow_negative_numbers = true,
        allow_hyphen_values = true
    )]
    pub bound: Vec<String>,

    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress the header line
    #[arg(long)]
    pub no_header: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The single positional argument parsed as a bound.
    pub fn bound(&self, program: &str) -> Result<Candidate> {
        let raw = single_argument(program, &self.bound)?;
        parse_bound(raw)
    }
}

/// Effective settings after merging the file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub header: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            header: true,
            verbose: false,
            log_level: None,
            log_format: LogFormat::Compact,
        }
    }
}

impl RunSettings {
    /// Flags win over the file; the file wins over defaults.
    pub fn resolve(no_header: bool, verbose: bool, file: Option<&FileConfig>) -> Self {
        let mut settings = Self {
            verbose,
            ..Self::default()
        };

        if let Some(file) = file {
            settings.header = file.header().unwrap_or(true);
            settings.log_level = file.log_level().map(str::to_string);
            settings.log_format = file.log_format();
        }

        if no_header {
            settings.header = false;
        }

        settings
    }
}
