//! Stable storage keys derived from test names

use sha2::{Digest, Sha256};

/// Filesystem-safe storage key for one test name.
///
/// Always a fixed-length lowercase hex digest, so it can serve directly as a
/// file stem regardless of what characters the test name contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey(String);

impl SnapshotKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name for this key under the snapshot root.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.snap", self.0)
    }
}

impl std::fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the storage key for a test name.
///
/// SHA-256 over the UTF-8 bytes of the name, rendered as 64 lowercase hex
/// characters. Deterministic across runs and platforms. Distinct names can
/// collide in theory; the digest space makes that negligible in practice and
/// no mitigation is attempted.
#[must_use]
pub fn derive_key(test_name: &str) -> SnapshotKey {
    let digest = Sha256::digest(test_name.as_bytes());
    SnapshotKey(format!("{digest:x}"))
}
