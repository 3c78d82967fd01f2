/// Errors for user-supplied names (CLI flags, config values)
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseFormatError {
    #[error("Unknown framework: {0} (expected one of jest, pytest, dotnet, go, cargo, vitest, playwright, unknown)")]
    UnknownFramework(String),

    #[error("Unknown output format: {0} (expected json, text or markdown)")]
    UnknownOutputFormat(String),
}
