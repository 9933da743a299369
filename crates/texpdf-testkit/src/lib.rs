//! Test utilities for texpdf
//!
//! This crate provides shared testing utilities used across the texpdf
//! workspace: centralized temporary directories and fake external tool
//! binaries that stand in for the LaTeX toolchain.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the crate root
///
/// This ensures all test temporary files are centralized in a single
/// location that is gitignored and easy to clean up manually if needed.
/// The returned `TempDir` cleans up automatically on drop.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the
/// directories cannot be created.
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-panicking callers
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write an executable fake tool with the given script body.
///
/// On Unix the body is a `/bin/sh` script (the shebang is added here);
/// on Windows it becomes a `.bat` file and the caller's body must be
/// batch syntax.
///
/// # Returns
///
/// The path of the created executable.
pub fn fake_tool(bin_dir: &Path, name: &str, body: &str) -> PathBuf {
    std::fs::create_dir_all(bin_dir).expect("Failed to create fake bin directory");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let path = bin_dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake tool");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat fake tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to mark fake tool executable");
        path
    }

    #[cfg(windows)]
    {
        let path = bin_dir.join(format!("{name}.bat"));
        std::fs::write(&path, body).expect("Failed to write fake tool");
        path
    }
}

/// Write a fake tool that records each invocation and creates output files.
///
/// Every run appends `<name> <args...>` as one line to `log`, then creates
/// each file named in `creates` (relative to the process working directory)
/// and exits with `exit_code`.
pub fn recording_tool(
    bin_dir: &Path,
    name: &str,
    log: &Path,
    creates: &[&str],
    exit_code: i32,
) -> PathBuf {
    #[cfg(unix)]
    {
        let mut body = format!("echo \"{} $@\" >> \"{}\"\n", name, log.display());
        for file in creates {
            body.push_str(&format!("echo fake > \"{file}\"\n"));
        }
        body.push_str(&format!("exit {exit_code}"));
        fake_tool(bin_dir, name, &body)
    }

    #[cfg(windows)]
    {
        let mut body = format!("@echo {} %* >> \"{}\"\r\n", name, log.display());
        for file in creates {
            body.push_str(&format!("@echo fake > \"{file}\"\r\n"));
        }
        body.push_str(&format!("@exit /b {exit_code}\r\n"));
        fake_tool(bin_dir, name, &body)
    }
}

/// Count the invocations of `name` recorded in `log`.
///
/// Zero when the log does not exist yet (no tool ever ran).
pub fn invocation_count(log: &Path, name: &str) -> usize {
    let Ok(content) = std::fs::read_to_string(log) else {
        return 0;
    };
    content
        .lines()
        .filter(|line| line.split_whitespace().next() == Some(name))
        .count()
}

/// Return the recorded invocation lines for `name`, arguments included
pub fn invocations(log: &Path, name: &str) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(log) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|line| line.split_whitespace().next() == Some(name))
        .map(str::to_string)
        .collect()
}

/// Build a `PATH` value with `bin_dir` searched first.
///
/// Hand the result to `Command::env("PATH", ...)` so only the spawned
/// process sees the fake tools; the test process environment is untouched.
pub fn path_with(bin_dir: &Path) -> OsString {
    let mut paths = vec![bin_dir.to_path_buf()];
    if let Some(path) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&path));
    }
    std::env::join_paths(paths).expect("PATH entries should join")
}
