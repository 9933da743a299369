use serde::{Deserialize, Serialize};

use crate::config::consts;
use crate::error::{Result, TexpdfError};

/// texpdf.toml schema - per-directory toolchain overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_latex")]
    pub latex: String,
    #[serde(default = "default_bibtex")]
    pub bibtex: String,
    #[serde(default = "default_dvipdf")]
    pub dvipdf: String,
    #[serde(default = "default_viewer")]
    pub viewer: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            latex: default_latex(),
            bibtex: default_bibtex(),
            dvipdf: default_dvipdf(),
            viewer: default_viewer(),
        }
    }
}

fn default_latex() -> String {
    consts::tools::LATEX.to_string()
}

fn default_bibtex() -> String {
    consts::tools::BIBTEX.to_string()
}

fn default_dvipdf() -> String {
    consts::tools::DVIPDF.to_string()
}

fn default_viewer() -> String {
    consts::tools::VIEWER.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    /// Default paper size; an explicit `-p` on the command line wins
    #[serde(default)]
    pub papersize: Option<String>,
}

impl Config {
    /// Read texpdf.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| TexpdfError::ConfigParse(e.to_string()))?;

        toml::from_str(&content).map_err(|e| TexpdfError::ConfigParse(e.to_string()))
    }

    /// Read texpdf.toml if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
