#![warn(missing_docs)]
//! PiBench Report - Rendering the Benchmark Outcome
//!
//! Generates the two supported output formats:
//! - Human-readable terminal text (default)
//! - JSON (machine-readable)

mod human;
mod json;
mod report;

pub use human::format_human_output;
pub use json::generate_json_report;
pub use report::{PerformanceTier, Report, ReportMeta};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
