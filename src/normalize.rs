//! Merge a partial extraction into the canonical result.

use crate::extract::{CountSource, Extraction};
use crate::parser::{FrameworkKind, NormalizedResult, Summary, TestStatus};

/// Fill defaults and derive `total`.
///
/// Counts reported by a summary line are passed through verbatim, even when
/// they disagree with the number of extracted records.
pub fn normalize(framework: FrameworkKind, extraction: Extraction) -> NormalizedResult {
    let Extraction {
        passed,
        failed,
        skipped,
        total,
        duration,
        tests,
        source,
        ..
    } = extraction;

    let summary = match source {
        CountSource::Summary => {
            let passed = passed.unwrap_or(0);
            let failed = failed.unwrap_or(0);
            let skipped = skipped.unwrap_or(0);
            Summary {
                total: total
                    .unwrap_or_else(|| passed.saturating_add(failed).saturating_add(skipped)),
                passed,
                failed,
                skipped,
                duration,
            }
        }
        CountSource::Tests => {
            let tally = |status: TestStatus| tests.iter().filter(|t| t.status == status).count();
            Summary {
                total: tests.len(),
                passed: tally(TestStatus::Passed),
                failed: tally(TestStatus::Failed),
                skipped: tally(TestStatus::Skipped),
                duration,
            }
        }
    };

    NormalizedResult {
        framework,
        summary,
        tests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TestRecord;

    #[test]
    fn test_defaults_when_nothing_found() {
        let result = normalize(FrameworkKind::Unknown, Extraction::default());
        assert_eq!(result.framework, FrameworkKind::Unknown);
        assert_eq!(result.summary, Summary::default());
        assert!(result.tests.is_empty());
    }

    #[test]
    fn test_total_derived_from_counts() {
        let extraction = Extraction {
            passed: Some(5),
            failed: Some(2),
            skipped: Some(1),
            ..Extraction::default()
        };
        let result = normalize(FrameworkKind::Pytest, extraction);
        assert_eq!(result.summary.total, 8);
    }

    #[test]
    fn test_derived_total_saturates() {
        let extraction = Extraction {
            passed: Some(usize::MAX),
            failed: Some(1),
            ..Extraction::default()
        };
        let result = normalize(FrameworkKind::Pytest, extraction);
        assert_eq!(result.summary.total, usize::MAX);
        assert_eq!(result.summary.passed, usize::MAX);
        assert_eq!(result.summary.failed, 1);
    }

    #[test]
    fn test_reported_total_is_verbatim() {
        let extraction = Extraction {
            passed: Some(3),
            failed: Some(2),
            total: Some(10),
            tests: vec![
                TestRecord::new("a", TestStatus::Passed, None),
                TestRecord::new("b", TestStatus::Passed, None),
                TestRecord::new("c", TestStatus::Failed, None),
            ],
            ..Extraction::default()
        };
        let result = normalize(FrameworkKind::Jest, extraction);
        assert_eq!(result.summary.total, 10);
        assert_eq!(result.summary.passed, 3);
        assert_eq!(result.tests.len(), 3);
    }

    #[test]
    fn test_tally_from_records() {
        let extraction = Extraction {
            // ignored when tallying
            passed: Some(99),
            source: CountSource::Tests,
            duration: Some("0.123s".to_string()),
            tests: vec![
                TestRecord::new("TestA", TestStatus::Passed, None),
                TestRecord::new("TestB", TestStatus::Failed, None),
                TestRecord::new("TestC", TestStatus::Skipped, None),
                TestRecord::new("TestA", TestStatus::Passed, None),
            ],
            ..Extraction::default()
        };
        let result = normalize(FrameworkKind::Go, extraction);
        assert_eq!(result.summary.total, 4);
        assert_eq!(result.summary.passed, 2);
        assert_eq!(result.summary.failed, 1);
        assert_eq!(result.summary.skipped, 1);
        assert_eq!(result.summary.duration.as_deref(), Some("0.123s"));
    }
}
