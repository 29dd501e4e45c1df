use crate::domain::model::Candidate;
use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Requires exactly one positional argument and returns it.
pub fn single_argument<'a>(program: &str, args: &'a [String]) -> Result<&'a str> {
    match args {
        [only] => Ok(only.as_str()),
        _ => Err(AppError::ArgumentCountError {
            program: program.to_string(),
            found: args.len(),
        }),
    }
}

/// Parses a base-10 integer bound.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// Zero and negative values parse fine; they just produce an empty listing.
pub fn parse_bound(value: &str) -> Result<Candidate> {
    value
        .trim()
        .parse::<Candidate>()
        .map_err(|source| AppError::ArgumentParseError {
            value: value.to_string(),
            source,
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that `value` is a directive `tracing_subscriber::EnvFilter` accepts.
pub fn validate_log_directive(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    tracing_subscriber::EnvFilter::try_new(value)
        .map(|_| ())
        .map_err(|e| AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid log directive: {}", e),
        })
}
