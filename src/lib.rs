pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::FileConfig, RunSettings};
pub use crate::core::{
    enumerator::{primes_below, write_primes_below, DescendingEnumerator},
    primality::{is_prime, TrialDivision},
    report::PrimeReport,
};
pub use crate::domain::{model::Candidate, ports::PrimalityTest};
pub use crate::utils::error::{AppError, Result};
