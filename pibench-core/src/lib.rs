#![warn(missing_docs)]
//! PiBench Core - Estimators and Timing
//!
//! This crate provides the numeric heart of the benchmark:
//! - Three independent pi estimators (Leibniz series, Monte Carlo
//!   sampling, Machin formula)
//! - Iteration-bound derivation from a requested decimal precision
//! - A monotonic `Clock` abstraction so the harness can be tested
//!   without real time passing

mod clock;
mod machin;
mod sampling;
mod series;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use machin::machin;
pub use sampling::monte_carlo;
pub use series::leibniz;

/// Estimation method selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Leibniz series - O(1/N) convergence, simple alternating sum
    Series,
    /// Monte Carlo sampling - O(1/sqrt(N)) statistical convergence
    Sampling,
    /// Machin formula - geometric convergence via two arctangent series
    FastConverging,
}

impl Method {
    /// Map the numeric CLI selector (1, 2, 3) to a method.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Method::Series),
            2 => Some(Method::Sampling),
            3 => Some(Method::FastConverging),
            _ => None,
        }
    }

    /// Human-readable method name for reports.
    pub fn label(self) -> &'static str {
        match self {
            Method::Series => "Leibniz series",
            Method::Sampling => "Monte Carlo sampling",
            Method::FastConverging => "Machin formula",
        }
    }

    /// Iteration budget for a requested decimal precision.
    ///
    /// The slow-converging methods need 10^(precision+6) terms or
    /// trials; the Machin formula needs only a 10^(precision+2) term
    /// bound (and in practice exits far earlier). Saturates at
    /// `u64::MAX` - the Series/Sampling bound for precision 15 exceeds
    /// the integer range.
    pub fn iteration_bound(self, precision: u32) -> u64 {
        let exponent = match self {
            Method::Series | Method::Sampling => precision + 6,
            Method::FastConverging => precision + 2,
        };
        10u64.saturating_pow(exponent)
    }
}

/// Result of a single estimator invocation.
///
/// Value semantics throughout: produced by the executor, consumed by
/// the report builder. `iterations` is the derived bound echoed back
/// for reporting, not a loop exit count.
#[derive(Debug, Clone, Copy)]
pub struct EstimationResult {
    /// Computed approximation of pi
    pub value: f64,
    /// Iteration budget the estimator was invoked with
    pub iterations: u64,
    /// Wall time spent in the estimator, in seconds
    pub elapsed_seconds: f64,
}
