use regex::Regex;

use super::Extraction;

lazy_static::lazy_static! {
    static ref PASS_RE: Regex = Regex::new(r"(?i)\bpass(?:ed)?\b").unwrap();
    static ref FAIL_RE: Regex = Regex::new(r"(?i)\bfail(?:ed)?\b").unwrap();
}

/// Fallback for unrecognized runners: count pass/fail words.
/// No records and no duration.
pub fn extract(output: &str) -> Extraction {
    let mut extraction = Extraction::default();

    let passed = PASS_RE.find_iter(output).count();
    let failed = FAIL_RE.find_iter(output).count();

    extraction.passed = Some(passed);
    extraction.failed = Some(failed);
    extraction.total = Some(passed.saturating_add(failed));
    extraction.warn("unrecognized runner, counted pass/fail words");

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_word_counts() {
        let output = "check A: PASS\ncheck B: Failed\ncheck C: passed\nbypass is not a pass word";
        let extraction = extract(output);
        // "bypass" is not a whole word match, the trailing "pass" is
        assert_eq!(extraction.passed, Some(3));
        assert_eq!(extraction.failed, Some(1));
        assert_eq!(extraction.total, Some(4));
        assert!(extraction.tests.is_empty());
        assert_eq!(extraction.duration, None);
    }

    #[test]
    fn test_generic_ignores_longer_words() {
        let extraction = extract("passing failures passes failing");
        assert_eq!(extraction.passed, Some(0));
        assert_eq!(extraction.failed, Some(0));
    }

    #[test]
    fn test_generic_empty() {
        let extraction = extract("");
        assert_eq!(extraction.total, Some(0));
    }
}
