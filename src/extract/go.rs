use regex::Regex;

use super::{CountSource, Extraction};
use crate::parser::{TestRecord, TestStatus};
use crate::utils::join_duration;

lazy_static::lazy_static! {
    // top-level tests only: "TestParse/case" subtests stop at the slash
    static ref TEST_LINE_RE: Regex =
        Regex::new(r"---\s+(PASS|FAIL):\s+(\w+)\s+\(([\d.]+)s\)").unwrap();
    // "ok  	github.com/acme/app/pkg	0.123s" / "FAIL	github.com/acme/app/pkg	0.2s"
    static ref PACKAGE_RE: Regex =
        Regex::new(r"(?m)^(?:ok|FAIL)\s+(\S+)\s+([\d.]+)s\b").unwrap();
}

/// `go test -v` text output. Go prints no aggregate counts, so the
/// normalizer tallies them from the top-level `--- PASS/FAIL` records.
/// Subtests and `--- SKIP` lines are not counted.
pub fn extract(output: &str) -> Extraction {
    let mut extraction = Extraction {
        source: CountSource::Tests,
        ..Extraction::default()
    };

    extraction.tests = TEST_LINE_RE
        .captures_iter(output)
        .map(|caps| {
            let status = match &caps[1] {
                "PASS" => TestStatus::Passed,
                _ => TestStatus::Failed,
            };
            TestRecord::new(&caps[2], status, Some(join_duration(&caps[3], "s")))
        })
        .collect();

    let packages: Vec<_> = PACKAGE_RE.captures_iter(output).collect();
    if let Some(first) = packages.first() {
        extraction.duration = Some(join_duration(&first[2], "s"));
    }
    if packages.len() > 1 {
        extraction.warn(format!(
            "{} package lines, duration taken from {}",
            packages.len(),
            &packages[0][1]
        ));
    }
    if extraction.tests.is_empty() {
        extraction.warn("no `--- PASS/FAIL` lines (was -v passed to go test?)");
    }

    extraction
}
