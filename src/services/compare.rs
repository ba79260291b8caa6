//! Baseline comparison: the decision tree for one test invocation

use crate::models::ComparisonResult;
use crate::services::key::derive_key;
use crate::services::store::SnapshotStore;
use crate::{Error, Result};
use serde_json::Value;

/// Compare `new_value` against the stored baseline for `test_name`.
///
/// If no baseline exists, `new_value` is written as the new baseline and the
/// run passes (bootstrap). Otherwise both sides are re-serialized to canonical
/// JSON text and compared byte-for-byte. Object keys serialize in sorted
/// order, so two structurally equal maps always compare equal regardless of
/// insertion order. A mismatch leaves the stored baseline unmodified.
///
/// # Errors
/// Store read/write failures and corrupt baselines propagate; a corrupt
/// baseline is never treated as a first run.
pub fn compare<S: SnapshotStore>(
    store: &mut S,
    test_name: &str,
    new_value: &Value,
) -> Result<ComparisonResult> {
    let key = derive_key(test_name);

    let Some(baseline) = store.read(&key)? else {
        store.write(&key, new_value)?;
        log::debug!("Baseline created for '{test_name}' (key {key})");
        return Ok(ComparisonResult::created(test_name));
    };

    let old_text = serde_json::to_string(&baseline).map_err(Error::Serialize)?;
    let new_text = serde_json::to_string(new_value).map_err(Error::Serialize)?;

    if old_text == new_text {
        log::debug!("Baseline matched for '{test_name}' (key {key})");
        Ok(ComparisonResult::matched(test_name))
    } else {
        log::debug!("Baseline mismatch for '{test_name}' (key {key})");
        Ok(ComparisonResult::mismatched(test_name))
    }
}
