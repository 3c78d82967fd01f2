use regex::Regex;

use super::{parse_count_list, Extraction};
use crate::parser::{TestRecord, TestStatus};
use crate::utils::join_duration;

lazy_static::lazy_static! {
    static ref SUITES_RE: Regex = Regex::new(r"Test Suites:\s*([^\n]*)").unwrap();
    static ref TESTS_RE: Regex = Regex::new(r"(?m)^\s*Tests:\s*([^\n]*\d+\s+total)").unwrap();
    static ref TIME_RE: Regex = Regex::new(r"Time:\s*([\d.]+)\s*s\b").unwrap();
    static ref TEST_LINE_RE: Regex =
        Regex::new(r"([✓✔√✗✕×✘])\s+(.+?)\s+\((\d+)\s*ms\)").unwrap();
}

/// Jest summary block:
///
/// ```text
/// Test Suites: 1 failed, 1 total
/// Tests:       2 failed, 3 passed, 5 total
/// Time:        1.2 s
/// ```
pub fn extract(output: &str) -> Extraction {
    let mut extraction = Extraction::default();

    if let Some(caps) = SUITES_RE.captures(output) {
        let suites = parse_count_list(&caps[1]);
        extraction.warn(format!(
            "suites: {} failed, {} passed, {} total",
            suites.failed.unwrap_or(0),
            suites.passed.unwrap_or(0),
            suites.total.unwrap_or(0)
        ));
    }

    match TESTS_RE.captures(output) {
        Some(caps) => {
            let counts = parse_count_list(&caps[1]);
            extraction.failed = counts.failed;
            extraction.passed = counts.passed;
            extraction.skipped = counts.skipped;
            extraction.total = counts.total;
        }
        None => extraction.warn("no `Tests:` summary line"),
    }

    if let Some(caps) = TIME_RE.captures(output) {
        extraction.duration = Some(join_duration(&caps[1], "s"));
    }

    extraction.tests = extract_test_lines(output);
    extraction
}

/// "✓ adds numbers (3 ms)" style lines, shared with vitest
pub(crate) fn extract_test_lines(output: &str) -> Vec<TestRecord> {
    TEST_LINE_RE
        .captures_iter(output)
        .filter_map(|caps| {
            let name = caps[2].trim();
            if name.is_empty() {
                return None;
            }
            let status = match &caps[1] {
                "✓" | "✔" | "√" => TestStatus::Passed,
                _ => TestStatus::Failed,
            };
            Some(TestRecord::new(
                name,
                status,
                Some(join_duration(&caps[3], "ms")),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jest_summary() {
        let output = "Test Suites: 1 failed, 1 total\nTests: 2 failed, 3 passed, 5 total\nTime: 1.2 s";
        let extraction = extract(output);
        assert_eq!(extraction.total, Some(5));
        assert_eq!(extraction.passed, Some(3));
        assert_eq!(extraction.failed, Some(2));
        assert_eq!(extraction.skipped, None);
        assert_eq!(extraction.duration.as_deref(), Some("1.2s"));
    }

    #[test]
    fn test_jest_full_report() {
        let output = r#"PASS src/math.test.js
  math
    ✓ adds numbers (3 ms)
    ✓ subtracts numbers (1 ms)
FAIL src/parse.test.js
  parse
    ✕ rejects garbage (12 ms)
    ○ skipped parses hex

  ● parse › rejects garbage

    expect(received).toThrow()

Test Suites: 1 failed, 1 passed, 2 total
Tests:       1 failed, 1 skipped, 2 passed, 4 total
Snapshots:   0 total
Time:        2.345 s
Ran all test suites."#;

        let extraction = extract(output);
        assert_eq!(extraction.failed, Some(1));
        assert_eq!(extraction.skipped, Some(1));
        assert_eq!(extraction.passed, Some(2));
        assert_eq!(extraction.total, Some(4));
        assert_eq!(extraction.duration.as_deref(), Some("2.345s"));

        assert_eq!(extraction.tests.len(), 3);
        assert_eq!(extraction.tests[0].name, "adds numbers");
        assert_eq!(extraction.tests[0].status, TestStatus::Passed);
        assert_eq!(extraction.tests[0].duration.as_deref(), Some("3ms"));
        assert_eq!(extraction.tests[2].name, "rejects garbage");
        assert_eq!(extraction.tests[2].status, TestStatus::Failed);
    }

    #[test]
    fn test_jest_suites_line_is_not_tests_line() {
        let output = "Test Suites: 3 passed, 3 total";
        let extraction = extract(output);
        assert!(extraction.is_summary_missing());
        assert!(extraction
            .warnings
            .iter()
            .any(|w| w.contains("no `Tests:` summary line")));
    }

    #[test]
    fn test_jest_ascii_check_marks() {
        let output = "  ✗ breaks (5 ms)\n  ✓ works (10 ms)";
        let tests = extract_test_lines(output);
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[0].status, TestStatus::Failed);
        assert_eq!(tests[1].status, TestStatus::Passed);
        assert_eq!(tests[1].duration.as_deref(), Some("10ms"));
    }

    #[test]
    fn test_jest_test_without_timing_is_skipped() {
        // jest omits timings for fast tests; such lines carry no duration to anchor on
        let tests = extract_test_lines("    ✓ instant test\n    ✓ timed test (2 ms)");
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].name, "timed test");
    }
}
