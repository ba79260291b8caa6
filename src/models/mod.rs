//! Data models for comparison outcomes

use serde::{Deserialize, Serialize};

/// Result of comparing one test's output against its stored baseline.
///
/// Transient: reported to the caller, never persisted. The three terminal
/// outcomes are created (bootstrap run), matched, and mismatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub passed: bool,
    pub message: String,
}

impl ComparisonResult {
    /// Bootstrap outcome: no baseline existed, one was just written.
    #[must_use]
    pub fn created(test_name: &str) -> Self {
        Self {
            passed: true,
            message: format!("New snapshot created for test: {test_name}"),
        }
    }

    /// The new output matched the stored baseline.
    #[must_use]
    pub fn matched(test_name: &str) -> Self {
        Self {
            passed: true,
            message: format!("Snapshot matched for test: {test_name}"),
        }
    }

    /// The new output differed from the stored baseline.
    #[must_use]
    pub fn mismatched(test_name: &str) -> Self {
        Self {
            passed: false,
            message: format!("Snapshot mismatch for test: {test_name}"),
        }
    }
}
