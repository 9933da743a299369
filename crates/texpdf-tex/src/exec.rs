use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use texpdf_core::{Result, TexpdfError};

/// Options for one external tool invocation
#[derive(Debug, Clone)]
pub struct ExecOptions {
    pub program: String,
    pub args: Vec<String>,
    pub workdir: PathBuf,
    pub verbose: bool,
    /// Suppress the error report on non-zero exit; the exit code is
    /// still surfaced through [`ExecResult`]
    pub ignore_errors: bool,
}

/// Result of an external tool invocation
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawn a tool, capture both streams fully, and wait for completion.
///
/// A non-zero exit is never an `Err`: it is reported on stderr (unless
/// `ignore_errors`) and surfaced through [`ExecResult::success`]. Only a
/// failure to start the process at all maps to
/// [`TexpdfError::ToolSpawn`].
pub fn exec_tool(options: &ExecOptions) -> Result<ExecResult> {
    if options.verbose {
        println!("Command: {} {}", options.program, options.args.join(" "));
    }

    let start = Instant::now();
    let output = Command::new(&options.program)
        .args(&options.args)
        .current_dir(&options.workdir)
        .output()
        .map_err(|e| TexpdfError::ToolSpawn {
            tool: options.program.clone(),
            reason: e.to_string(),
        })?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if options.verbose {
        print!("{stdout}");
    }

    if exit_code != 0 && !options.ignore_errors {
        eprintln!("Errors generated by '{}':", options.program);
        eprint!("{stdout}");
        eprint!("{stderr}");
    }

    Ok(ExecResult {
        exit_code,
        stdout,
        stderr,
        duration_ms,
    })
}
