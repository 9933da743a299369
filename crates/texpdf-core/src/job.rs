//! The compilation job model
//!
//! A [`CompilationJob`] captures everything decided up front for one run:
//! which document to build, where its artifacts live, and whether the
//! working directory carries a bibliography database. It holds no open
//! resources and is discarded when the invocation ends.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts;
use crate::error::{Result, TexpdfError};

/// One document compilation, resolved against a working directory
#[derive(Debug, Clone)]
pub struct CompilationJob {
    /// Document name without extension
    pub basename: String,
    /// Path of the `.tex` source, guaranteed to exist at construction
    pub source_path: PathBuf,
    /// Paper size forwarded verbatim to the DVI-to-PDF converter
    pub papersize: String,
    /// Echo commands and subprocess output
    pub verbose: bool,
    /// Whether any `.bib` file was present at construction; never
    /// re-evaluated afterwards
    pub bibliography_present: bool,
    /// Directory the job was resolved in; all artifacts live here
    pub workdir: PathBuf,
}

impl CompilationJob {
    /// Resolve a raw filename argument into a job.
    ///
    /// Accepts the document name with or without a `.tex` suffix. Fails
    /// with [`TexpdfError::SourceNotFound`] when the source file does not
    /// exist in `workdir`.
    pub fn new(raw_name: &str, papersize: &str, verbose: bool, workdir: &Path) -> Result<Self> {
        let basename = raw_name
            .strip_suffix(".tex")
            .unwrap_or(raw_name)
            .to_string();

        let source_path = workdir.join(format!("{basename}.tex"));
        if !source_path.exists() {
            return Err(TexpdfError::SourceNotFound { path: source_path });
        }

        let bibliography_present = scan_for_bibliography(workdir)?;

        Ok(Self {
            basename,
            source_path,
            papersize: papersize.to_string(),
            verbose,
            bibliography_present,
            workdir: workdir.to_path_buf(),
        })
    }

    /// Path of `<basename>.<ext>` in the working directory
    pub fn artifact_path(&self, ext: &str) -> PathBuf {
        self.workdir.join(format!("{}.{}", self.basename, ext))
    }

    /// Intermediate DVI produced by the LaTeX engine
    pub fn dvi_path(&self) -> PathBuf {
        self.artifact_path("dvi")
    }

    /// Final PDF produced by the converter
    pub fn pdf_path(&self) -> PathBuf {
        self.artifact_path("pdf")
    }
}

/// True if any directory entry name ends in the bibliography extension
fn scan_for_bibliography(dir: &Path) -> Result<bool> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry
            .file_name()
            .to_string_lossy()
            .ends_with(consts::build::BIBLIOGRAPHY_EXTENSION)
        {
            return Ok(true);
        }
    }
    Ok(false)
}
