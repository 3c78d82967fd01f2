use regex::Regex;

use super::{parse_count_list, Extraction};
use crate::parser::{TestRecord, TestStatus};
use crate::utils::join_duration;

lazy_static::lazy_static! {
    // "=== 4 passed, 1 failed, 2 skipped in 0.50s ===" (counts in any order)
    static ref SUMMARY_RE: Regex =
        Regex::new(r"((?:\d+\s+[A-Za-z]+,?\s*)*)\bin\s+([\d.]+)s\b").unwrap();
    // "tests/test_foo.py::TestBar::test_baz[param] PASSED"
    static ref TEST_LINE_RE: Regex =
        Regex::new(r"([\w/\\.\-]+\.py)::(\S+)\s+(PASSED|FAILED|SKIPPED|ERROR)\b").unwrap();
}

/// Pytest summary line and verbose (`-v`) per-test lines
pub fn extract(output: &str) -> Extraction {
    let mut extraction = Extraction::default();

    // The session summary is printed last; earlier "in Ns" hits are noise
    let mut summary_duration = None;
    let mut summary_counts = None;
    for caps in SUMMARY_RE.captures_iter(output) {
        let counts = parse_count_list(&caps[1]);
        summary_duration = Some(join_duration(&caps[2], "s"));
        if !counts.is_empty() {
            summary_counts = Some(counts);
        }
    }

    match summary_counts {
        Some(counts) => {
            let failed = counts
                .failed
                .unwrap_or(0)
                .saturating_add(counts.errors.unwrap_or(0));
            extraction.failed = Some(failed);
            extraction.passed = Some(counts.passed.unwrap_or(0));
            extraction.skipped = Some(counts.skipped.unwrap_or(0));
        }
        None => extraction.warn("no `N passed ... in Ns` summary line"),
    }
    extraction.duration = summary_duration;

    extraction.tests = TEST_LINE_RE
        .captures_iter(output)
        .map(|caps| {
            let status = match &caps[3] {
                "PASSED" => TestStatus::Passed,
                "SKIPPED" => TestStatus::Skipped,
                _ => TestStatus::Failed,
            };
            TestRecord::new(format!("{}::{}", &caps[1], &caps[2]), status, None)
        })
        .collect();

    extraction
}
