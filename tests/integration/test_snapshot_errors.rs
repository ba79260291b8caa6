//! Error handling for corrupt snapshots and storage failures

#[cfg(test)]
mod tests {
    use crate::fixtures::sample_value;
    use snapcheck::Error;
    use snapcheck::io::snapshot::{read_snapshot, snapshot_path, write_snapshot};
    use snapcheck::services::compare::compare;
    use snapcheck::services::key::derive_key;
    use snapcheck::services::store::dir::DirStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_corrupt_snapshot_is_not_absent() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("__snapshots__");
        let key = derive_key("corrupt-test");

        fs::create_dir_all(&root).unwrap();
        fs::write(snapshot_path(&root, &key), "this is not JSON {{{").unwrap();

        let err = read_snapshot(&root, &key).unwrap_err();
        assert!(matches!(err, Error::CorruptSnapshot { .. }));
    }

    #[test]
    fn test_compare_propagates_corrupt_baseline() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("__snapshots__");
        let key = derive_key("corrupt-compare-test");

        fs::create_dir_all(&root).unwrap();
        let path = snapshot_path(&root, &key);
        fs::write(&path, "garbage!").unwrap();

        let mut store = DirStore::new(&root);
        let err = compare(&mut store, "corrupt-compare-test", &sample_value()).unwrap_err();
        assert!(matches!(err, Error::CorruptSnapshot { .. }));

        // The corrupt file is untouched, not replaced by a fresh baseline
        assert_eq!(fs::read_to_string(&path).unwrap(), "garbage!");
    }

    #[test]
    fn test_write_surfaces_storage_errors() {
        let dir = tempdir().unwrap();

        // A plain file where the snapshot directory should be
        let blocked_root = dir.path().join("__snapshots__");
        fs::write(&blocked_root, "occupied").unwrap();

        let key = derive_key("storage-error-test");
        let err = write_snapshot(&blocked_root, &key, &sample_value()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_corrupt_error_names_the_offending_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("__snapshots__");
        let key = derive_key("named-corrupt-test");

        fs::create_dir_all(&root).unwrap();
        fs::write(snapshot_path(&root, &key), "[1, 2,").unwrap();

        let err = read_snapshot(&root, &key).unwrap_err();
        assert!(err.to_string().contains(key.as_str()));
    }
}
