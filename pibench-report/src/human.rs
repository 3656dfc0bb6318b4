//! Output Formatting
//!
//! Human-readable terminal rendering of a benchmark report. Pure
//! string construction - the caller decides where it goes.

use crate::report::Report;

/// Format a report for human-readable terminal display.
///
/// The computed value is shown to the requested number of decimal
/// places; the reference constant to 15. Error and throughput use
/// scientific notation.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Pi Benchmark Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    output.push_str(&format!("  method:      {}\n", report.method));
    output.push_str(&format!(
        "  computed:    {:.*}\n",
        report.precision as usize, report.value
    ));
    output.push_str(&format!("  reference:   {:.15}\n", report.reference));
    output.push_str(&format!("  abs error:   {:.2e}\n", report.abs_error));
    output.push_str(&format!("  iterations:  {}\n", report.iterations));
    output.push_str(&format!("  elapsed:     {:.6} s\n", report.elapsed_seconds));
    output.push_str(&format!(
        "  throughput:  {:.2e} ops/sec\n",
        report.throughput_ops_sec
    ));

    output.push('\n');
    output.push_str("CPU Performance\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!("  score: {:.2} MOPS\n", report.score_mops));
    output.push_str(&format!("  tier:  {}\n", report.tier.label()));

    output
}
