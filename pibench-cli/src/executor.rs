//! Benchmark Execution
//!
//! Drives one estimator run to completion: derive the iteration
//! budget from the validated configuration, read the clock, invoke
//! the estimator, read the clock again, and fold the measurements
//! into a report. Single-threaded, no suspension points, no
//! cancellation path - once running, the estimator finishes.

use crate::config::RunConfig;
use pibench_core::{leibniz, machin, monte_carlo, Clock, EstimationResult, Method};
use pibench_report::{PerformanceTier, Report, ReportMeta};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Run the configured estimator once, timing it via `clock`.
///
/// The iteration count in the result is the derived budget, echoed
/// back for reporting. For the Machin method the series usually exits
/// well before the budget, but throughput figures are defined against
/// the budget for all methods.
pub fn execute(config: &RunConfig, clock: &impl Clock, seed: u64) -> EstimationResult {
    let iterations = config.method.iteration_bound(config.precision);
    tracing::debug!(iterations, seed, "derived iteration budget");

    let start = clock.now();
    let value = match config.method {
        Method::Series => leibniz(iterations),
        Method::Sampling => {
            // Generator scoped to this invocation; seeded once.
            let mut rng = SmallRng::seed_from_u64(seed);
            monte_carlo(iterations, &mut rng)
        }
        Method::FastConverging => machin(config.precision),
    };
    let elapsed = clock.now().saturating_sub(start);

    EstimationResult {
        value,
        iterations,
        elapsed_seconds: elapsed.as_secs_f64(),
    }
}

/// Fold an estimation result into the final report.
///
/// throughput = iterations / elapsed; score = throughput / 1e6 (MOPS).
/// A zero-elapsed run reports zero throughput rather than infinity.
pub fn build_report(config: &RunConfig, result: &EstimationResult) -> Report {
    let reference = std::f64::consts::PI;
    let throughput = if result.elapsed_seconds > 0.0 {
        result.iterations as f64 / result.elapsed_seconds
    } else {
        0.0
    };
    let score = throughput / 1_000_000.0;

    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
        },
        method: config.method.label().to_string(),
        precision: config.precision,
        value: result.value,
        reference,
        abs_error: (result.value - reference).abs(),
        iterations: result.iterations,
        elapsed_seconds: result.elapsed_seconds,
        throughput_ops_sec: throughput,
        score_mops: score,
        tier: PerformanceTier::from_score(score),
    }
}
