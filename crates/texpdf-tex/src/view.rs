//! Launching the PDF viewer on the final document

use texpdf_core::config::ToolsConfig;
use texpdf_core::job::CompilationJob;

use crate::exec::{ExecOptions, exec_tool};

/// Open the job's PDF in the configured viewer, blocking until it exits.
///
/// Nothing here affects the program's exit status: a missing PDF is a
/// printed diagnostic, a viewer failure prints its captured output, and
/// a viewer that cannot be started prints the spawn error.
pub fn show_pdf(job: &CompilationJob, tools: &ToolsConfig) {
    let pdf = job.pdf_path();
    if !pdf.exists() {
        eprintln!("PDF document '{}' not found.", pdf.display());
        return;
    }

    let options = ExecOptions {
        program: tools.viewer.clone(),
        args: vec![format!("{}.pdf", job.basename)],
        workdir: job.workdir.clone(),
        verbose: job.verbose,
        ignore_errors: false,
    };

    if let Err(e) = exec_tool(&options) {
        eprintln!("{e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use texpdf_testkit::{invocation_count, recording_tool, temp_dir_in_workspace};

    #[test]
    fn test_viewer_runs_when_pdf_exists() {
        let temp = temp_dir_in_workspace();
        let workdir = temp.path().join("work");
        fs::create_dir(&workdir).unwrap();
        fs::write(workdir.join("paper.tex"), "").unwrap();
        fs::write(workdir.join("paper.pdf"), "%PDF").unwrap();

        let log = temp.path().join("calls.log");
        let viewer = recording_tool(&temp.path().join("bin"), "viewer", &log, &[], 0);

        let job = CompilationJob::new("paper", "letter", false, &workdir).unwrap();
        let tools = ToolsConfig {
            viewer: viewer.display().to_string(),
            ..ToolsConfig::default()
        };

        show_pdf(&job, &tools);
        assert_eq!(invocation_count(&log, "viewer"), 1);
    }

    #[test]
    fn test_viewer_skipped_when_pdf_missing() {
        let temp = temp_dir_in_workspace();
        let workdir = temp.path().join("work");
        fs::create_dir(&workdir).unwrap();
        fs::write(workdir.join("paper.tex"), "").unwrap();

        let log = temp.path().join("calls.log");
        let viewer = recording_tool(&temp.path().join("bin"), "viewer", &log, &[], 0);

        let job = CompilationJob::new("paper", "letter", false, &workdir).unwrap();
        let tools = ToolsConfig {
            viewer: viewer.display().to_string(),
            ..ToolsConfig::default()
        };

        show_pdf(&job, &tools);
        assert_eq!(invocation_count(&log, "viewer"), 0);
    }

    #[test]
    fn test_missing_viewer_binary_is_tolerated() {
        let temp = temp_dir_in_workspace();
        let workdir = temp.path().join("work");
        fs::create_dir(&workdir).unwrap();
        fs::write(workdir.join("paper.tex"), "").unwrap();
        fs::write(workdir.join("paper.pdf"), "%PDF").unwrap();

        let job = CompilationJob::new("paper", "letter", false, &workdir).unwrap();
        let tools = ToolsConfig {
            viewer: workdir.join("no-such-viewer").display().to_string(),
            ..ToolsConfig::default()
        };

        // Must not panic; the spawn error is printed and swallowed
        show_pdf(&job, &tools);
    }
}
