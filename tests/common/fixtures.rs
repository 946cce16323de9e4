//! Filesystem fixtures: scaffold the audited project tree.

use std::fs;
use std::path::Path;

use preflight::REQUIRED_FILES;

/// Create a stub file (and its parent directories) under `root`.
pub fn write_stub(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "stub").unwrap();
}

/// Create every required file under `root`.
pub fn scaffold_full_project(root: &Path) {
    for item in REQUIRED_FILES {
        write_stub(root, item.path);
    }
}
