use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use provisio_core::DecisionRecord;
use tracing::{info, warn};

use crate::{ScanError, find_json_files};

/// Files between progress log lines by default.
pub const DEFAULT_PROGRESS_EVERY: usize = 5000;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Log a progress line every this many files; 0 disables it.
    pub progress_every: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

/// A file that was found but could not be turned into a record.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files_found: usize,
    /// Parsed records in processing order.
    pub records: Vec<DecisionRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// Read and parse one decision file.
pub fn load_decision(path: &Path) -> Result<DecisionRecord, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ScanError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    DecisionRecord::from_value(value).map_err(|source| ScanError::Document {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every decision under `base`, one file at a time.
///
/// A file that fails to load is logged and recorded in
/// [`ScanOutcome::skipped`]; the scan carries on with the next one. Only an
/// unreadable `base` fails the whole scan.
pub fn scan_decisions(base: &Path, options: &ScanOptions) -> Result<ScanOutcome, ScanError> {
    info!(dir = %base.display(), "searching for JSON files");
    let files = find_json_files(base)?;
    let total = files.len();
    info!(count = total, "found JSON files");

    let mut outcome = ScanOutcome {
        files_found: total,
        ..Default::default()
    };

    for (i, path) in files.into_iter().enumerate() {
        let processed = i + 1;
        if options.progress_every > 0 && processed % options.progress_every == 0 {
            info!(processed, total, "scanning decisions");
        }

        match load_decision(&path) {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping decision file");
                outcome.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        parsed = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "scan complete"
    );
    Ok(outcome)
}
