//! Snapshot Testing Library
//!
//! This library records the output of a test function the first time it runs
//! and compares every later run against that stored baseline. A mismatch is
//! reported as a failure and never overwrites the baseline; updating a
//! snapshot means deleting its file and re-running the test.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::ComparisonResult;

use serde::Serialize;
use services::store::SnapshotStore;
use services::store::dir::DirStore;
use std::result;

/// Directory holding snapshot files, resolved relative to the current
/// working directory at invocation time.
pub const SNAPSHOT_DIR: &str = "__snapshots__";

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    Serialize(serde_json::Error),
    CorruptSnapshot {
        path: String,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Serialize(e) => write!(f, "Serialization error: {e}"),
            Error::CorruptSnapshot { path, source } => {
                write!(f, "Corrupt snapshot {path}: {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Run one snapshot test against the given store.
///
/// Invokes `test_fn` once, serializes its output, and compares it against the
/// stored baseline for `test_name`. The first run writes the baseline and
/// passes. A value that cannot be serialized (for example a map with
/// non-string keys) is an error, never a partial snapshot.
///
/// # Errors
/// Returns `Error::InvalidInput` for an empty test name, `Error::Serialize`
/// for unserializable output, and store errors as-is.
pub fn run_snapshot_test_with<S, T, F>(
    store: &mut S,
    test_name: &str,
    test_fn: F,
) -> Result<ComparisonResult>
where
    S: SnapshotStore,
    T: Serialize,
    F: FnOnce() -> T,
{
    if test_name.is_empty() {
        return Err(Error::InvalidInput(
            "test name must not be empty".to_string(),
        ));
    }

    let new_value = serde_json::to_value(test_fn()).map_err(Error::Serialize)?;
    services::compare::compare(store, test_name, &new_value)
}

/// Run one snapshot test against the default `__snapshots__` directory.
///
/// Convenience wrapper over [`run_snapshot_test_with`] for embedding in a
/// larger test harness. The snapshot directory is created on first use.
///
/// # Errors
/// Same as [`run_snapshot_test_with`].
pub fn run_snapshot_test<T, F>(test_name: &str, test_fn: F) -> Result<ComparisonResult>
where
    T: Serialize,
    F: FnOnce() -> T,
{
    let mut store = DirStore::new(SNAPSHOT_DIR);
    run_snapshot_test_with(&mut store, test_name, test_fn)
}
