//! Snapshot write/read round-trip test

#[cfg(test)]
mod tests {
    use crate::fixtures::sample_value;
    use serde_json::json;
    use snapcheck::io::snapshot::{read_snapshot, write_snapshot};
    use snapcheck::services::key::derive_key;
    use tempfile::tempdir;

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("__snapshots__");
        let key = derive_key("roundtrip-test");

        let value = sample_value();
        write_snapshot(&root, &key, &value).unwrap();

        let read_back = read_snapshot(&root, &key).unwrap();
        assert_eq!(read_back, Some(value));
    }

    #[test]
    fn test_roundtrip_preserves_primitive_variety() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("__snapshots__");
        let key = derive_key("primitives-test");

        let value = json!({
            "string": "hello \"quoted\" text",
            "integer": 42,
            "negative": -7,
            "float": 3.25,
            "boolean": false,
            "null": null,
            "empty_list": [],
            "empty_map": {},
            "nested": [[1, 2], [3, [4]]]
        });

        write_snapshot(&root, &key, &value).unwrap();
        let read_back = read_snapshot(&root, &key).unwrap();
        assert_eq!(read_back, Some(value));
    }

    #[test]
    fn test_read_missing_snapshot_is_absent() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("__snapshots__");
        let key = derive_key("never-written");

        let read_back = read_snapshot(&root, &key).unwrap();
        assert!(read_back.is_none());
    }

    #[test]
    fn test_write_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("__snapshots__");
        let key = derive_key("overwrite-test");

        write_snapshot(&root, &key, &json!({"v": 1})).unwrap();
        write_snapshot(&root, &key, &json!({"v": 2})).unwrap();

        let read_back = read_snapshot(&root, &key).unwrap();
        assert_eq!(read_back, Some(json!({"v": 2})));
    }
}
