//! Compile command - run the LaTeX toolchain to produce a PDF

use anyhow::{Result, bail};
use colored::Colorize;
use std::env;
use std::time::Instant;
use texpdf_core::clean::clean_intermediates;
use texpdf_core::config::{Config, consts};
use texpdf_core::job::CompilationJob;
use texpdf_tex::{compile, show_pdf};

/// Compile one LaTeX document to PDF
///
/// # Arguments
///
/// * `filename` - Document name, with or without the `.tex` extension
/// * `papersize` - Explicit `-p` value, if any; overrides the config file
/// * `show` - Launch the viewer after a successful run
/// * `noclean` - Keep intermediate files after a successful run
/// * `verbose` - Enable verbose output if true
pub fn run(
    filename: &str,
    papersize: Option<&str>,
    show: bool,
    noclean: bool,
    verbose: bool,
) -> Result<()> {
    let workdir = env::current_dir()?;
    let config = Config::load_or_default(workdir.join("texpdf.toml"))?;

    let papersize = papersize
        .map(str::to_string)
        .or_else(|| config.build.papersize.clone())
        .unwrap_or_else(|| consts::build::DEFAULT_PAPERSIZE.to_string());

    let job = CompilationJob::new(filename, &papersize, verbose, &workdir)?;

    if verbose {
        println!("{} Compiling '{}'", "→".cyan(), job.source_path.display());
        if job.bibliography_present {
            println!(
                "{} Bibliography detected, extra passes enabled",
                "→".cyan()
            );
        }
    }

    // Clear stale artifacts from a prior run before compiling
    clean_intermediates(&job);

    let start = Instant::now();
    let success = compile(&job, &config.tools)?;
    let duration_ms = start.elapsed().as_millis();

    if success && !noclean {
        if verbose {
            println!("{} Removing intermediate files", "→".cyan());
        }
        clean_intermediates(&job);
    }

    if success && show {
        show_pdf(&job, &config.tools);
    }

    if !success {
        eprintln!("{} Build failed", "✗".red().bold());
        bail!("Failed to compile the LaTeX document.");
    }

    println!(
        "{} Built '{}' ({}ms)",
        "✓".green().bold(),
        job.pdf_path().display(),
        duration_ms
    );

    Ok(())
}
