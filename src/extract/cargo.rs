use regex::Regex;

use super::Extraction;
use crate::parser::{TestRecord, TestStatus};
use crate::utils::format_secs;

lazy_static::lazy_static! {
    // "test result: ok. 15 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.01s"
    static ref RESULT_RE: Regex = Regex::new(
        r"test result: \w+\.\s+(\d+) passed;\s+(\d+) failed;\s+(\d+) ignored(?:;[^\n]*?finished in ([\d.]+)s)?"
    ).unwrap();
    static ref TEST_LINE_RE: Regex =
        Regex::new(r"(?m)^test\s+(.+?)\s+\.\.\.\s+(ok|FAILED|ignored)\b").unwrap();
}

/// Aggregated counts over every `test result:` line of a run
#[derive(Debug, Default, Clone, PartialEq)]
struct AggregatedTestResult {
    passed: usize,
    failed: usize,
    ignored: usize,
    suites: usize,
    duration_secs: f64,
    has_duration: bool,
}

impl AggregatedTestResult {
    fn parse_line(caps: &regex::Captures) -> Option<Self> {
        let passed = caps.get(1)?.as_str().parse().ok()?;
        let failed = caps.get(2)?.as_str().parse().ok()?;
        let ignored = caps.get(3)?.as_str().parse().ok()?;

        let (duration_secs, has_duration) = match caps.get(4) {
            Some(m) => (m.as_str().parse().unwrap_or(0.0), true),
            None => (0.0, false),
        };

        Some(Self {
            passed,
            failed,
            ignored,
            suites: 1,
            duration_secs,
            has_duration,
        })
    }

    /// Merge another test result into this one
    fn merge(&mut self, other: &Self) {
        self.passed = self.passed.saturating_add(other.passed);
        self.failed = self.failed.saturating_add(other.failed);
        self.ignored = self.ignored.saturating_add(other.ignored);
        self.suites = self.suites.saturating_add(other.suites);
        self.duration_secs += other.duration_secs;
        self.has_duration = self.has_duration && other.has_duration;
    }
}

/// `cargo test` output: one `test result:` line per test binary (unit tests,
/// each integration test file, doc-tests). Ignored tests count as skipped.
pub fn extract(output: &str) -> Extraction {
    let mut extraction = Extraction::default();

    let mut aggregated: Option<AggregatedTestResult> = None;
    for caps in RESULT_RE.captures_iter(output) {
        if let Some(parsed) = AggregatedTestResult::parse_line(&caps) {
            if let Some(ref mut agg) = aggregated {
                agg.merge(&parsed);
            } else {
                aggregated = Some(parsed);
            }
        }
    }

    match aggregated {
        Some(agg) => {
            extraction.passed = Some(agg.passed);
            extraction.failed = Some(agg.failed);
            extraction.skipped = Some(agg.ignored);
            if agg.has_duration {
                extraction.duration = Some(format_secs(agg.duration_secs));
            }
            if agg.suites > 1 {
                extraction.warn(format!("summed {} test binaries", agg.suites));
            }
        }
        None => extraction.warn("no `test result:` line"),
    }

    extraction.tests = TEST_LINE_RE
        .captures_iter(output)
        .map(|caps| {
            let status = match &caps[2] {
                "ok" => TestStatus::Passed,
                "FAILED" => TestStatus::Failed,
                _ => TestStatus::Skipped,
            };
            TestRecord::new(&caps[1], status, None)
        })
        .collect();

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_single_suite() {
        let output = r#"running 3 tests
test utils::tests::test_truncate ... ok
test parser::tests::test_parse ... FAILED
test net::tests::test_slow ... ignored

failures:

---- parser::tests::test_parse stdout ----
thread 'parser::tests::test_parse' panicked at src/parser.rs:10:5

failures:
    parser::tests::test_parse

test result: FAILED. 1 passed; 1 failed; 1 ignored; 0 measured; 0 filtered out; finished in 0.02s
"#;
        let extraction = extract(output);
        assert_eq!(extraction.passed, Some(1));
        assert_eq!(extraction.failed, Some(1));
        assert_eq!(extraction.skipped, Some(1));
        assert_eq!(extraction.total, None);
        assert_eq!(extraction.duration.as_deref(), Some("0.02s"));

        assert_eq!(extraction.tests.len(), 3);
        assert_eq!(extraction.tests[0].name, "utils::tests::test_truncate");
        assert_eq!(extraction.tests[0].status, TestStatus::Passed);
        assert_eq!(extraction.tests[1].status, TestStatus::Failed);
        assert_eq!(extraction.tests[2].status, TestStatus::Skipped);
    }

    #[test]
    fn test_cargo_multi_suite_summed() {
        let output = r#"     Running unittests src/lib.rs (target/debug/deps/app-1a2b)

running 2 tests
test a ... ok
test b ... ok

test result: ok. 2 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.10s

     Running tests/cli.rs (target/debug/deps/cli-3c4d)

running 1 test
test cli_runs ... ok

test result: ok. 1 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.25s

   Doc-tests app

running 1 test
test src/lib.rs - add (line 5) ... ok

test result: ok. 1 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.30s
"#;
        let extraction = extract(output);
        assert_eq!(extraction.passed, Some(4));
        assert_eq!(extraction.failed, Some(0));
        assert_eq!(extraction.duration.as_deref(), Some("0.65s"));
        assert_eq!(extraction.tests.len(), 4);
        assert_eq!(extraction.tests[3].name, "src/lib.rs - add (line 5)");
    }

    #[test]
    fn test_cargo_old_format_without_duration() {
        let output = "test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured";
        let extraction = extract(output);
        assert_eq!(extraction.passed, Some(5));
        assert_eq!(extraction.duration, None);
    }

    #[test]
    fn test_cargo_no_result_line() {
        let extraction = extract("error[E0425]: cannot find value `x` in this scope");
        assert!(extraction.is_summary_missing());
        assert!(extraction.tests.is_empty());
    }

    #[test]
    fn test_cargo_sum_saturates() {
        let output = format!(
            "test result: ok. {} passed; 0 failed; 0 ignored\ntest result: ok. 2 passed; 0 failed; 0 ignored",
            usize::MAX
        );
        let extraction = extract(&output);
        assert_eq!(extraction.passed, Some(usize::MAX));
    }

    #[test]
    fn test_aggregated_merge_drops_duration_when_missing() {
        let mut a = AggregatedTestResult {
            passed: 1,
            suites: 1,
            duration_secs: 0.5,
            has_duration: true,
            ..Default::default()
        };
        let b = AggregatedTestResult {
            passed: 2,
            suites: 1,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.passed, 3);
        assert_eq!(a.suites, 2);
        assert!(!a.has_duration);
    }
}
