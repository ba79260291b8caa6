//! Snapshot file I/O

pub mod snapshot;
