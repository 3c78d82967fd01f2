use regex::Regex;

use super::Extraction;
use crate::parser::{TestRecord, TestStatus};
use crate::utils::join_duration;

lazy_static::lazy_static! {
    static ref SUMMARY_RE: Regex = Regex::new(
        r"Failed:\s*(\d+),\s*Passed:\s*(\d+),\s*Skipped:\s*(\d+),\s*Total:\s*(\d+),\s*Duration:\s*([\d.]+)\s*(ms|s|m)?"
    ).unwrap();
    static ref TEST_LINE_RE: Regex =
        Regex::new(r"(?m)^\s*(Passed|Failed|Skipped)\s+([\w.]+)(?:\s+\[([^\]]+)\])?").unwrap();
}

/// `dotnet test` output. One summary line is printed per test project:
///
/// ```text
/// Passed!  - Failed:     0, Passed:    10, Skipped:     0, Total:    10, Duration: 2 s - App.Tests.dll (net8.0)
/// ```
pub fn extract(output: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut projects = 0;

    for caps in SUMMARY_RE.captures_iter(output) {
        let count = |idx: usize| caps[idx].parse::<usize>().unwrap_or(0);
        let add = |slot: Option<usize>, n: usize| Some(slot.unwrap_or(0).saturating_add(n));
        extraction.failed = add(extraction.failed, count(1));
        extraction.passed = add(extraction.passed, count(2));
        extraction.skipped = add(extraction.skipped, count(3));
        extraction.total = add(extraction.total, count(4));

        if extraction.duration.is_none() {
            let unit = caps.get(6).map_or("s", |m| m.as_str());
            extraction.duration = Some(join_duration(&caps[5], unit));
        }
        projects += 1;
    }

    match projects {
        0 => extraction.warn("no `Failed: N, Passed: N, ...` summary line"),
        1 => {}
        n => extraction.warn(format!(
            "summed {} project summaries, duration taken from the first",
            n
        )),
    }

    extraction.tests = TEST_LINE_RE
        .captures_iter(output)
        .map(|caps| {
            let status = match &caps[1] {
                "Passed" => TestStatus::Passed,
                "Failed" => TestStatus::Failed,
                _ => TestStatus::Skipped,
            };
            let duration = caps.get(3).map(|m| m.as_str().replace(' ', ""));
            TestRecord::new(&caps[2], status, duration)
        })
        .collect();

    extraction
}
