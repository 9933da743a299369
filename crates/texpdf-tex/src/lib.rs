//! External TeX toolchain execution for texpdf.
//!
//! This crate drives the external binaries that do the actual typesetting
//! work. It is organized into three modules:
//!
//! - [`exec`]: one-shot tool invocation with full output capture
//! - [`pipeline`]: the latex → bibtex → dvipdf compile sequence
//! - [`view`]: launching the PDF viewer on the final document
//!
//! # Compile Flow
//!
//! ```text
//! compile()
//!     ↓
//! 1. latex <basename>
//!     ↓ (non-zero exit → Failed, nothing else runs)
//! 2. bibtex <basename>; latex <basename> ×2
//!     (only when a .bib file was detected; best-effort)
//!     ↓
//! 3. <basename>.dvi present?
//!     ↓ (absent → Failed)
//! 4. dvipdf -p <papersize> <basename>.dvi   (best-effort)
//!     ↓
//! Done
//! ```
//!
//! Every command is spawned and waited on to completion before the next
//! step begins; there is no timeout and no cancellation.

// Core modules
pub mod exec;
pub mod pipeline;
pub mod view;

// Re-export commonly used types
pub use exec::{ExecOptions, ExecResult, exec_tool};
pub use pipeline::compile;
pub use view::show_pdf;

// Type alias for convenience
pub type Result<T> = texpdf_core::Result<T>;
