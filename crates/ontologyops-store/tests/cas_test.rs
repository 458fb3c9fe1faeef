// Integration tests for the filesystem CAS

use ontologyops_core::errors::ExErrorKind;
use ontologyops_store::cas::FsStore;
use tempfile::TempDir;

#[test]
fn test_blob_is_sharded_by_digest_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let cas = FsStore::new(temp_dir.path());

    let digest = cas.write(br#"[["a","b","c"]]"#).unwrap();

    let expected = temp_dir
        .path()
        .join(&digest[..2])
        .join(format!("{digest}.json"));
    assert!(expected.is_file());
    assert!(cas.contains(&digest));
}

#[test]
fn test_write_read_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let cas = FsStore::new(temp_dir.path());

    let digest = cas.write(b"content").unwrap();
    assert_eq!(cas.read(&digest).unwrap(), b"content");
}

#[test]
fn test_missing_blob() {
    let temp_dir = TempDir::new().unwrap();
    let cas = FsStore::new(temp_dir.path());

    let err = cas.read(&"ab".repeat(32)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert!(!cas.contains(&"ab".repeat(32)));
}

#[test]
fn test_concurrent_writers_of_same_blob() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let root = root.clone();
            std::thread::spawn(move || FsStore::new(root).write(b"shared").unwrap())
        })
        .collect();
    let digests: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(digests.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(FsStore::new(root).read(&digests[0]).unwrap(), b"shared");
}
