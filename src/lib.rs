//! Pigeonhole Principle CNF Generator
//!
//! This library emits DIMACS CNF instances stating that `n + 1` pigeons fit
//! into `n` holes with at most one pigeon per hole. Every such instance is
//! unsatisfiable, which makes the family a standard hard benchmark for
//! resolution-based SAT solvers.

pub mod config;
pub mod error;
pub mod sat;
pub mod utils;

pub use config::Settings;
pub use error::GeneratorError;
pub use sat::{EncodingStatistics, PigeonholeEncoder};

/// Parse a hole count as given on the command line
pub fn parse_holes(arg: &str) -> Result<u64, GeneratorError> {
    let value: i64 = arg.trim().parse().map_err(|_| {
        GeneratorError::invalid_argument(format!("'{}' is not an integer", arg))
    })?;

    if value < 1 {
        return Err(GeneratorError::invalid_argument(format!(
            "the number of holes must be greater than zero, got {}",
            value
        )));
    }

    Ok(value as u64)
}
