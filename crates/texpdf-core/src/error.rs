use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TexpdfError {
    // Source errors
    #[error("SOURCE_NOT_FOUND: LaTeX source '{}' not found", .path.display())]
    SourceNotFound { path: PathBuf },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse texpdf.toml: {0}")]
    ConfigParse(String),

    // Toolchain errors
    #[error("TOOL_SPAWN_FAILED: failed to start '{tool}': {reason}")]
    ToolSpawn { tool: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TexpdfError>;
