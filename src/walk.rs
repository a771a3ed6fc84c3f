//! Recursive header enumeration
//!
//! Collects every `*.h` file under a root directory. The result is sorted
//! so that record order (and therefore output) is deterministic regardless
//! of the directory iteration order the platform happens to return.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScanError};

/// Collect all `.h` files under `root`, recursively, sorted by path.
///
/// An unreadable directory anywhere in the tree is fatal - the run either
/// sees the whole tree or nothing.
pub fn collect_headers(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_recursive(root, &mut files)?;
    files.sort();
    debug!(root = %root.display(), count = files.len(), "enumerated headers");
    Ok(files)
}

fn collect_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).map_err(|e| ScanError::input(dir.display().to_string(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::input(dir.display().to_string(), e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_recursive(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("h") {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_headers_recursively_and_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "zlib.h");
        touch(dir.path(), "sub/alpha.h");
        touch(dir.path(), "sub/deep/beta.h");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "source.c");

        let files = collect_headers(dir.path()).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(rel, ["sub/alpha.h", "sub/deep/beta.h", "zlib.h"]);
    }

    #[test]
    fn empty_tree_yields_no_files() {
        let dir = TempDir::new().unwrap();
        assert!(collect_headers(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_input_error() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        let err = collect_headers(&gone).unwrap_err();
        assert!(matches!(err, ScanError::Input { .. }));
    }
}
