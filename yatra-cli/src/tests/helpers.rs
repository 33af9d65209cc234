//! Test helpers for writing catalog files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Three sites where `Temple` and `Stupa` sit close together and `Palace`
/// is far away.
pub(super) const SMALL_CATALOG: &str = r#"[
  {"name": "Temple", "latitude": 0.0, "longitude": 0.0, "entry_fee": 100, "tags": ["culture"]},
  {"name": "Stupa", "latitude": 0.0, "longitude": 0.05, "entry_fee": 200, "tags": ["culture"]},
  {"name": "Palace", "latitude": 0.0, "longitude": 5.0, "entry_fee": 50, "tags": ["culture"]}
]"#;

pub(super) const DUPLICATE_CATALOG: &str = r#"[
  {"name": "Temple", "latitude": 0.0, "longitude": 0.0, "entry_fee": 100},
  {"name": "Temple", "latitude": 1.0, "longitude": 1.0, "entry_fee": 50}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// A temporary directory with a UTF-8 root path.
pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Write `contents` to `catalog.json` in a fresh workspace.
pub(super) fn catalog_file(contents: &str) -> (TempDir, Utf8PathBuf) {
    let (tmp, root) = utf8_workspace();
    let path = root.join("catalog.json");
    write_utf8(&path, contents.as_bytes());
    (tmp, path)
}
