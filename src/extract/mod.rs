//! Per-framework extraction grammars.
//!
//! Each submodule exposes one pure `extract(&str) -> Extraction`. Nothing here
//! fails: a grammar that finds no match leaves the field unset and the
//! normalizer fills in the defaults.

pub mod cargo;
pub mod dotnet;
pub mod generic;
pub mod go;
pub mod jest;
pub mod playwright;
pub mod pytest;
pub mod vitest;

use regex::Regex;

use crate::parser::{FrameworkKind, TestRecord};

/// Where the normalizer should take the aggregate counts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountSource {
    /// Counts come from a summary line (missing total is derived)
    #[default]
    Summary,
    /// Counts are tallied from the extracted records
    Tests,
}

/// Whatever one grammar managed to find
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub passed: Option<usize>,
    pub failed: Option<usize>,
    pub skipped: Option<usize>,
    pub total: Option<usize>,
    pub duration: Option<String>,
    pub tests: Vec<TestRecord>,
    pub source: CountSource,
    /// Diagnostics for verbose mode
    pub warnings: Vec<String>,
}

impl Extraction {
    /// True when no summary count was found
    pub fn is_summary_missing(&self) -> bool {
        self.passed.is_none()
            && self.failed.is_none()
            && self.skipped.is_none()
            && self.total.is_none()
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Run the grammar for `kind` over the raw text
pub fn extract(kind: FrameworkKind, output: &str) -> Extraction {
    match kind {
        FrameworkKind::Jest => jest::extract(output),
        FrameworkKind::Pytest => pytest::extract(output),
        FrameworkKind::Dotnet => dotnet::extract(output),
        FrameworkKind::Go => go::extract(output),
        FrameworkKind::Cargo => cargo::extract(output),
        FrameworkKind::Vitest => vitest::extract(output),
        FrameworkKind::Playwright => playwright::extract(output),
        FrameworkKind::Unknown => generic::extract(output),
    }
}

/// Counts found in a comma separated summary fragment such as
/// "2 failed, 1 skipped, 3 passed, 6 total"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CountList {
    pub passed: Option<usize>,
    pub failed: Option<usize>,
    pub skipped: Option<usize>,
    pub errors: Option<usize>,
    pub total: Option<usize>,
}

impl CountList {
    pub fn is_empty(&self) -> bool {
        *self == CountList::default()
    }
}

/// Parse "<N> <word>" pairs in any order; unknown words are ignored
pub(crate) fn parse_count_list(fragment: &str) -> CountList {
    lazy_static::lazy_static! {
        static ref PAIR_RE: Regex = Regex::new(r"(\d+)\s+([A-Za-z]+)").unwrap();
    }

    let mut counts = CountList::default();
    for caps in PAIR_RE.captures_iter(fragment) {
        let n: usize = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        let slot = match caps[2].to_lowercase().as_str() {
            "passed" => &mut counts.passed,
            "failed" => &mut counts.failed,
            "skipped" => &mut counts.skipped,
            "error" | "errors" => &mut counts.errors,
            "total" => &mut counts.total,
            _ => continue,
        };
        *slot = Some(n);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_list_any_order() {
        let counts = parse_count_list("1 skipped, 2 failed, 3 passed, 6 total");
        assert_eq!(counts.failed, Some(2));
        assert_eq!(counts.passed, Some(3));
        assert_eq!(counts.skipped, Some(1));
        assert_eq!(counts.total, Some(6));
        assert_eq!(counts.errors, None);
    }

    #[test]
    fn test_parse_count_list_ignores_other_words() {
        let counts = parse_count_list("4 passed, 2 warnings, 1 error");
        assert_eq!(counts.passed, Some(4));
        assert_eq!(counts.errors, Some(1));
        assert_eq!(counts.failed, None);
    }

    #[test]
    fn test_parse_count_list_empty() {
        assert!(parse_count_list("no tests ran").is_empty());
    }

    #[test]
    fn test_dispatch_unknown_uses_generic() {
        let extraction = extract(FrameworkKind::Unknown, "PASS one\nFAIL two\npassed");
        assert_eq!(extraction.passed, Some(2));
        assert_eq!(extraction.failed, Some(1));
    }

    #[test]
    fn test_no_match_is_silent_default() {
        for kind in FrameworkKind::ALL {
            let extraction = extract(kind, "nothing recognizable here");
            assert!(extraction.tests.is_empty(), "{} produced tests", kind);
            assert_eq!(extraction.duration, None, "{} produced a duration", kind);
        }
    }
}
