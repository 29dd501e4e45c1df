use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(
        "Exactly one argument must be given on the command line (got {found}).\n    Usage: {program} <a positive integer number>\n    Program stopped."
    )]
    ArgumentCountError { program: String, found: usize },

    #[error("invalid literal for integer with base 10: '{value}' ({source})")]
    ArgumentParseError { value: String, source: ParseIntError },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ArgumentParseError { .. } => 1,
            AppError::ArgumentCountError { .. } => 2,
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigParseError(_) => 3,
            AppError::IoError(_) => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ArgumentCountError { .. } => {
                "Pass exactly one integer, e.g. `find-primes 100`"
            }
            AppError::ArgumentParseError { .. } => "Use a base-10 integer such as 15 or -3",
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigParseError(_) => {
                "Check the configuration file against the documented [output] and [logging] keys"
            }
            AppError::IoError(_) => "Check that standard output is writable",
        }
    }

    /// Standard output was closed by the reader, e.g. when piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, AppError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
