use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::ScanError;

const JSON_SUFFIX: &str = ".json";

/// Recursively collect every file under `base` whose name ends in `.json`.
///
/// Paths come back in walk order, with siblings sorted by file name so the
/// order is stable across runs. An unreadable `base` is an error; an
/// unreadable subdirectory is logged and skipped.
pub fn find_json_files(base: &Path) -> Result<Vec<PathBuf>, ScanError> {
    std::fs::read_dir(base).map_err(|source| ScanError::BaseDir {
        path: base.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(base).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(JSON_SUFFIX) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
