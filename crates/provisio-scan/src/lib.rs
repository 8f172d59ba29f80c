//! Filesystem layer: walks a corpus directory and loads decision records.

mod error;
pub use error::ScanError;

mod walk;
pub use walk::find_json_files;

mod scan;
pub use scan::{
    DEFAULT_PROGRESS_EVERY, ScanOptions, ScanOutcome, SkippedFile, load_decision, scan_decisions,
};
