/// Output rendering for the normalized result
use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseFormatError;
use super::types::*;
use crate::utils::truncate;

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical JSON document (default)
    #[default]
    Json,
    /// Compact human summary
    Text,
    /// Failure report for a fix phase
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(ParseFormatError::UnknownOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Knobs for the human-readable formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub colors: bool,
    pub max_failures: usize,
    pub verbose: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            colors: false,
            max_failures: 10,
            verbose: false,
        }
    }
}

/// Trait for rendering a result in each supported format
pub trait ReportFormatter {
    /// Indented JSON, keys in schema order
    fn format_json(&self) -> Result<String>;

    /// One summary line plus the first failures
    fn format_text(&self, opts: &RenderOptions) -> String;

    /// Markdown failure report
    fn format_markdown(&self, opts: &RenderOptions) -> String;

    /// Format according to mode
    fn format(&self, format: OutputFormat, opts: &RenderOptions) -> Result<String> {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Text => Ok(self.format_text(opts)),
            OutputFormat::Markdown => Ok(self.format_markdown(opts)),
        }
    }
}

fn paint(text: &str, status: TestStatus, colors: bool) -> String {
    if !colors {
        return text.to_string();
    }
    match status {
        TestStatus::Passed => text.green().to_string(),
        TestStatus::Failed => text.red().bold().to_string(),
        TestStatus::Skipped => text.yellow().to_string(),
    }
}

fn counts_line(summary: &Summary) -> String {
    format!(
        "{} passed, {} failed, {} skipped ({} total)",
        summary.passed, summary.failed, summary.skipped, summary.total
    )
}

fn status_label(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Passed => "PASS",
        TestStatus::Failed => "FAIL",
        TestStatus::Skipped => "SKIP",
    }
}

impl ReportFormatter for NormalizedResult {
    fn format_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize result")
    }

    fn format_text(&self, opts: &RenderOptions) -> String {
        let overall = if self.has_failures() {
            TestStatus::Failed
        } else {
            TestStatus::Passed
        };

        let mut header = format!(
            "{} {}: {}",
            paint(status_label(overall), overall, opts.colors),
            self.framework,
            counts_line(&self.summary)
        );
        if let Some(duration) = &self.summary.duration {
            header.push_str(&format!(" in {}", duration));
        }

        let mut lines = vec![header];

        if opts.verbose {
            for test in &self.tests {
                let mut line = format!(
                    "  {} {}",
                    paint(status_label(test.status), test.status, opts.colors),
                    truncate(&test.name, 100)
                );
                if let Some(duration) = &test.duration {
                    line.push_str(&format!(" ({})", duration));
                }
                lines.push(line);
            }
            return lines.join("\n");
        }

        let failed: Vec<&TestRecord> = self.failed_tests().collect();
        if !failed.is_empty() {
            lines.push(String::new());
            for (idx, test) in failed.iter().enumerate().take(opts.max_failures) {
                lines.push(format!("{}. {}", idx + 1, truncate(&test.name, 100)));
            }
            if failed.len() > opts.max_failures {
                lines.push(format!(
                    "... +{} more failures",
                    failed.len() - opts.max_failures
                ));
            }
        }

        lines.join("\n")
    }

    fn format_markdown(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();

        if self.has_failures() {
            out.push_str("# Test Failures\n\n");
        } else {
            out.push_str("# Test Results\n\n");
        }

        out.push_str(&format!("- Framework: {}\n", self.framework));
        out.push_str(&format!("- Summary: {}\n", counts_line(&self.summary)));
        if let Some(duration) = &self.summary.duration {
            out.push_str(&format!("- Duration: {}\n", duration));
        }

        if !self.has_failures() {
            out.push_str("\nNo failures reported.\n");
            return out;
        }

        let failed: Vec<&TestRecord> = self.failed_tests().collect();
        out.push_str("\n## Failed tests\n\n");

        if failed.is_empty() {
            out.push_str(&format!(
                "{} failure(s) reported in the summary, none listed individually.\n",
                self.summary.failed
            ));
            return out;
        }

        for (idx, test) in failed.iter().enumerate().take(opts.max_failures) {
            match &test.duration {
                Some(duration) => {
                    out.push_str(&format!("{}. `{}` ({})\n", idx + 1, test.name, duration))
                }
                None => out.push_str(&format!("{}. `{}`\n", idx + 1, test.name)),
            }
        }
        if failed.len() > opts.max_failures {
            out.push_str(&format!(
                "\n... +{} more failures\n",
                failed.len() - opts.max_failures
            ));
        }

        out
    }
}
