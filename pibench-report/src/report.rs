//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete benchmark report for a single estimator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report metadata
    pub meta: ReportMeta,
    /// Method label (e.g. "Machin formula")
    pub method: String,
    /// Requested decimal precision
    pub precision: u32,
    /// Computed approximation of pi
    pub value: f64,
    /// Reference constant at full f64 precision
    pub reference: f64,
    /// Absolute error against the reference
    pub abs_error: f64,
    /// Iteration budget the estimator was invoked with
    pub iterations: u64,
    /// Wall time spent in the estimator, in seconds
    pub elapsed_seconds: f64,
    /// Iterations per second
    pub throughput_ops_sec: f64,
    /// Throughput in millions of operations per second
    pub score_mops: f64,
    /// Qualitative performance tier derived from the score
    pub tier: PerformanceTier,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Tool version
    pub version: String,
    /// Report generation time (UTC)
    pub timestamp: DateTime<Utc>,
}

/// Qualitative CPU performance tier.
///
/// Pure function of the MOPS score with strict (exclusive) thresholds:
/// a score of exactly 100.0 is `Good`, not `Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    /// score > 100
    Excellent,
    /// 50 < score <= 100
    Good,
    /// 20 < score <= 50
    Average,
    /// score <= 20
    Low,
}

impl PerformanceTier {
    /// Classify a MOPS score.
    pub fn from_score(score: f64) -> Self {
        if score > 100.0 {
            PerformanceTier::Excellent
        } else if score > 50.0 {
            PerformanceTier::Good
        } else if score > 20.0 {
            PerformanceTier::Average
        } else {
            PerformanceTier::Low
        }
    }

    /// Lowercase label for display.
    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "excellent",
            PerformanceTier::Good => "good",
            PerformanceTier::Average => "average",
            PerformanceTier::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_are_strict() {
        assert_eq!(PerformanceTier::from_score(100.0), PerformanceTier::Good);
        assert_eq!(
            PerformanceTier::from_score(100.000001),
            PerformanceTier::Excellent
        );
        assert_eq!(PerformanceTier::from_score(50.0), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_score(20.0), PerformanceTier::Low);
    }

    #[test]
    fn tier_covers_extremes() {
        assert_eq!(PerformanceTier::from_score(0.0), PerformanceTier::Low);
        assert_eq!(
            PerformanceTier::from_score(f64::MAX),
            PerformanceTier::Excellent
        );
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&PerformanceTier::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
    }
}
