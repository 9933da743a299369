//! Fixed names and extension sets used across the workspace

/// Default command names for the external toolchain
pub mod tools {
    /// LaTeX engine producing DVI output
    pub const LATEX: &str = "latex";

    /// Bibliography processor
    pub const BIBTEX: &str = "bibtex";

    /// DVI-to-PDF converter
    pub const DVIPDF: &str = "dvipdfm";

    /// PDF viewer launched by `--show`
    pub const VIEWER: &str = "evince";
}

/// Build artifact conventions
pub mod build {
    /// Paper size handed to the converter when neither the CLI nor the
    /// config file names one
    pub const DEFAULT_PAPERSIZE: &str = "letter";

    /// Extension that marks a bibliography database in the working directory
    pub const BIBLIOGRAPHY_EXTENSION: &str = ".bib";

    /// Extensions of intermediate files removed by cleanup
    pub const INTERMEDIATE_EXTENSIONS: [&str; 6] = ["aux", "bbl", "dvi", "log", "blg", "toc"];
}
