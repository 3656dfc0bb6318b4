//! Leibniz Series Estimator
//!
//! pi/4 = 1 - 1/3 + 1/5 - 1/7 + 1/9 - ...

/// Estimate pi by summing `iterations` terms of the Leibniz series.
///
/// The alternating sign is a toggled multiplier, never recomputed via
/// a power function. Convergence is O(1/N): reaching `d` correct
/// decimal digits takes on the order of 10^(d+6) terms, which is why
/// the harness derives this method's budget exponentially from the
/// requested precision.
///
/// `leibniz(0)` is the empty partial sum and returns exactly 0.0 - an
/// approximation of zero, not of pi.
pub fn leibniz(iterations: u64) -> f64 {
    let mut sum = 0.0;
    let mut sign = 1.0;
    for i in 0..iterations {
        sum += sign / (2 * i + 1) as f64;
        sign = -sign;
    }
    4.0 * sum
}
