/// Canonical types for normalized test output
/// One schema regardless of which runner produced the text
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseFormatError;

/// Test runner that produced a block of output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    Jest,
    Pytest,
    Dotnet,
    Go,
    Cargo,
    Vitest,
    Playwright,
    Unknown,
}

impl FrameworkKind {
    pub const ALL: [FrameworkKind; 8] = [
        FrameworkKind::Jest,
        FrameworkKind::Pytest,
        FrameworkKind::Dotnet,
        FrameworkKind::Go,
        FrameworkKind::Cargo,
        FrameworkKind::Vitest,
        FrameworkKind::Playwright,
        FrameworkKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkKind::Jest => "jest",
            FrameworkKind::Pytest => "pytest",
            FrameworkKind::Dotnet => "dotnet",
            FrameworkKind::Go => "go",
            FrameworkKind::Cargo => "cargo",
            FrameworkKind::Vitest => "vitest",
            FrameworkKind::Playwright => "playwright",
            FrameworkKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkKind {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        FrameworkKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| ParseFormatError::UnknownFramework(s.to_string()))
    }
}

/// Outcome of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Aggregate counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration: Option<String>,
}

/// One test case, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub name: String,
    pub status: TestStatus,
    pub duration: Option<String>,
}

impl TestRecord {
    pub fn new(name: impl Into<String>, status: TestStatus, duration: Option<String>) -> Self {
        Self {
            name: name.into(),
            status,
            duration,
        }
    }
}

/// The normalized document emitted by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub framework: FrameworkKind,
    pub summary: Summary,
    pub tests: Vec<TestRecord>,
}

impl NormalizedResult {
    /// True when either the summary or any record reports a failure
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0 || self.failed_tests().next().is_some()
    }

    pub fn failed_tests(&self) -> impl Iterator<Item = &TestRecord> {
        self.tests
            .iter()
            .filter(|t| t.status == TestStatus::Failed)
    }
}
