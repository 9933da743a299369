//! CLI argument surface using clap

use clap::Parser;

#[derive(Parser)]
#[command(name = "texpdf")]
#[command(version, about = "Convert LaTeX documents into PDF documents", long_about = None)]
pub struct Cli {
    /// LaTeX source file, with or without the .tex extension
    #[arg(value_name = "TEXFILE")]
    pub files: Vec<String>,

    /// Show the completed PDF in the configured viewer
    #[arg(short, long)]
    pub show: bool,

    /// Be verbose. Print commands and subprocess output
    #[arg(short, long)]
    pub verbose: bool,

    /// Keep intermediate files after a successful run
    #[arg(short = 'C', long)]
    pub noclean: bool,

    /// Paper size handed to the DVI-to-PDF converter (default: letter)
    #[arg(short, long, value_name = "SIZE")]
    pub papersize: Option<String>,
}
