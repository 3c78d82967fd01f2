use regex::Regex;

use super::{jest, parse_count_list, Extraction};
use crate::utils::join_duration;

lazy_static::lazy_static! {
    static ref TESTS_RE: Regex =
        Regex::new(r"(?m)^\s*Tests\s+([^\n(]*?)\s*\((\d+)\)").unwrap();
    static ref DURATION_RE: Regex = Regex::new(r"Duration\s+([\d.]+)\s*(ms|s)\b").unwrap();
}

/// Vitest prints jest-compatible output under some reporters; the default
/// reporter uses its own layout:
///
/// ```text
///  Test Files  1 failed | 2 passed (3)
///       Tests  1 failed | 12 passed | 2 skipped (15)
///    Duration  1.26s (transform 40ms, setup 0ms)
/// ```
pub fn extract(output: &str) -> Extraction {
    let mut extraction = jest::extract(output);
    if !extraction.is_summary_missing() {
        return extraction;
    }

    if let Some(caps) = TESTS_RE.captures(output) {
        let counts = parse_count_list(&caps[1]);
        extraction.failed = counts.failed;
        extraction.passed = counts.passed;
        extraction.skipped = counts.skipped;
        extraction.total = caps[2].parse().ok();
        extraction.warn("used vitest `Tests` layout");
    }

    if extraction.duration.is_none() {
        if let Some(caps) = DURATION_RE.captures(output) {
            extraction.duration = Some(join_duration(&caps[1], &caps[2]));
        }
    }

    extraction
}
