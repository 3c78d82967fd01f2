use regex::Regex;

use super::Extraction;
use crate::parser::{TestRecord, TestStatus};

lazy_static::lazy_static! {
    static ref PASSED_RE: Regex = Regex::new(r"(\d+)\s+passed\s+\(([^)]+)\)").unwrap();
    static ref FAILED_RE: Regex = Regex::new(r"(\d+)\s+failed").unwrap();
    // list reporter: "  ✓  1 [chromium] › login.spec.ts:3:5 › signs in (1.2s)"
    static ref TEST_LINE_RE: Regex = Regex::new(
        r"(?m)^\s*([✓✔✘✗×-])\s+\d+\s+([^\n]*?›[^\n]*?)(?:\s+\((\d+(?:\.\d+)?(?:ms|s|m))\))?\s*$"
    ).unwrap();
}

/// Playwright line/list reporter output.
///
/// The run duration printed next to `N passed (…)` is not extracted.
pub fn extract(output: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut total: usize = 0;

    match PASSED_RE.captures(output) {
        Some(caps) => {
            let passed = caps[1].parse().unwrap_or(0);
            extraction.passed = Some(passed);
            total = passed;
        }
        None => extraction.warn("no `N passed (duration)` line"),
    }

    if let Some(caps) = FAILED_RE.captures(output) {
        let failed = caps[1].parse().unwrap_or(0);
        extraction.failed = Some(failed);
        total = total.saturating_add(failed);
    }

    if !extraction.is_summary_missing() {
        extraction.total = Some(total);
    }

    extraction.tests = TEST_LINE_RE
        .captures_iter(output)
        .map(|caps| {
            let status = match &caps[1] {
                "✓" | "✔" => TestStatus::Passed,
                "-" => TestStatus::Skipped,
                _ => TestStatus::Failed,
            };
            let duration = caps.get(3).map(|m| m.as_str().to_string());
            TestRecord::new(caps[2].trim(), status, duration)
        })
        .collect();

    extraction
}
