//! Best-effort removal of intermediate build artifacts

use std::fs;

use crate::config::consts::build::INTERMEDIATE_EXTENSIONS;
use crate::job::CompilationJob;

/// Remove `<basename>.<ext>` for the fixed intermediate extension set.
///
/// Every removal error is discarded: a missing file is the common case
/// and a locked or read-only file must not abort the run.
pub fn clean_intermediates(job: &CompilationJob) {
    for ext in INTERMEDIATE_EXTENSIONS {
        let _ = fs::remove_file(job.artifact_path(ext));
    }
}
