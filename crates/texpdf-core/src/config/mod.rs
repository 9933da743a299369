pub mod consts;
mod model;

pub use model::{BuildConfig, Config, ToolsConfig};
