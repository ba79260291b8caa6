//! Outcome reporting for CLI

use crate::models::ComparisonResult;

/// Print the outcome of one snapshot run.
///
/// Success notices go to stdout, failure notices to stderr, so a wrapping
/// harness can separate the two channels cleanly.
pub fn report_result(result: &ComparisonResult) {
    if result.passed {
        println!("✅ {}", result.message);
    } else {
        eprintln!("❌ {}", result.message);
    }
}
