//! Canonical result schema and its renderers
//!
//! Every extractor funnels into the same types:
//! - `NormalizedResult` is the document written to stdout
//! - `Summary` and `TestRecord` are its parts
//! - `formatter` renders it as JSON, compact text or a markdown failure report
//!
//! Extraction is best-effort. Missing pieces are reported as warnings on stderr
//! (verbose mode only) and never turn into errors.

pub mod error;
pub mod formatter;
pub mod types;

pub use formatter::{OutputFormat, ReportFormatter};
pub use types::*;

/// Helper to emit degradation warning
pub fn emit_degradation_warning(tool: &str, reason: &str) {
    eprintln!("[testnorm:DEGRADED] {} parser: {}", tool, reason);
}

/// Helper to emit a debug note about the pipeline
pub fn emit_debug(stage: &str, message: &str) {
    eprintln!("[testnorm] {}: {}", stage, message);
}
