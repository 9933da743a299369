//! The compile sequence, one state at a time

use texpdf_core::Result;
use texpdf_core::config::ToolsConfig;
use texpdf_core::job::CompilationJob;

use crate::exec::{ExecOptions, exec_tool};

/// Run the full compile sequence for one job.
///
/// Returns `Ok(true)` iff the primary typeset pass exited zero and the
/// DVI file existed afterwards. The bibliography passes and the
/// DVI-to-PDF conversion are best-effort: their exit codes do not change
/// the overall result. Only a tool that cannot be started at all
/// propagates as an error.
pub fn compile(job: &CompilationJob, tools: &ToolsConfig) -> Result<bool> {
    let primary = exec_tool(&engine_pass(job, tools, false))?;
    if !primary.success() {
        return Ok(false);
    }

    if job.bibliography_present {
        exec_tool(&bibliography_pass(job, tools))?;
        // Two more engine passes to resolve citations and cross-references
        exec_tool(&engine_pass(job, tools, true))?;
        exec_tool(&engine_pass(job, tools, true))?;
    }

    let dvi = job.dvi_path();
    if !dvi.exists() {
        eprintln!("DVI document '{}' not found.", dvi.display());
        return Ok(false);
    }

    exec_tool(&convert_pass(job, tools))?;

    Ok(true)
}

fn engine_pass(job: &CompilationJob, tools: &ToolsConfig, ignore_errors: bool) -> ExecOptions {
    ExecOptions {
        program: tools.latex.clone(),
        args: vec![job.basename.clone()],
        workdir: job.workdir.clone(),
        verbose: job.verbose,
        ignore_errors,
    }
}

fn bibliography_pass(job: &CompilationJob, tools: &ToolsConfig) -> ExecOptions {
    ExecOptions {
        program: tools.bibtex.clone(),
        args: vec![job.basename.clone()],
        workdir: job.workdir.clone(),
        verbose: job.verbose,
        ignore_errors: true,
    }
}

fn convert_pass(job: &CompilationJob, tools: &ToolsConfig) -> ExecOptions {
    ExecOptions {
        program: tools.dvipdf.clone(),
        args: vec![
            "-p".to_string(),
            job.papersize.clone(),
            format!("{}.dvi", job.basename),
        ],
        workdir: job.workdir.clone(),
        verbose: job.verbose,
        ignore_errors: true,
    }
}
