//! Run Configuration and Validation
//!
//! Everything here happens before any computation starts: malformed
//! input terminates the process with exit code 1 and a descriptive
//! message, never mid-run.

use pibench_core::Method;
use thiserror::Error;

/// Validation errors for the command-line surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// Wrong number of positional arguments (or unparseable ones)
    #[error("error: expected exactly two arguments: <method> <precision>")]
    ArgumentCount,

    /// Method selector outside {1, 2, 3}
    #[error("error: method must be 1, 2, or 3 (got {0})")]
    MethodRange(i64),

    /// Precision outside [1, 15]
    #[error("error: precision must be between 1 and 15 (got {0})")]
    PrecisionRange(i64),
}

/// Validated run configuration. Constructed once from process
/// arguments, immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Selected estimation method
    pub method: Method,
    /// Requested decimal precision, in [1, 15]
    pub precision: u32,
}

impl RunConfig {
    /// Validate the raw selector and precision from the command line.
    pub fn new(method: i64, precision: i64) -> Result<Self, CliError> {
        let method = Method::from_selector(method).ok_or(CliError::MethodRange(method))?;
        if !(1..=15).contains(&precision) {
            return Err(CliError::PrecisionRange(precision));
        }
        Ok(Self {
            method,
            precision: precision as u32,
        })
    }
}
