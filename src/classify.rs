//! Framework detection from raw runner output.
//!
//! Signatures are checked in a fixed order and the first match wins. Mixed CI
//! logs often contain the vocabulary of several runners, so the order is part
//! of the contract: jest, pytest, dotnet, go, cargo, vitest, playwright.

use crate::parser::FrameworkKind;

type Signature = fn(&str) -> bool;

/// Ordered (framework, predicate) pairs. Predicates receive lowercased text.
const SIGNATURES: &[(FrameworkKind, Signature)] = &[
    (FrameworkKind::Jest, is_jest),
    (FrameworkKind::Pytest, is_pytest),
    (FrameworkKind::Dotnet, is_dotnet),
    (FrameworkKind::Go, is_go),
    (FrameworkKind::Cargo, is_cargo),
    (FrameworkKind::Vitest, is_vitest),
    (FrameworkKind::Playwright, is_playwright),
];

fn is_jest(lower: &str) -> bool {
    lower.contains("jest") || lower.contains("test suites:")
}

fn is_pytest(lower: &str) -> bool {
    lower.contains("pytest") || (lower.contains("passed in") && lower.contains("s ===="))
}

fn is_dotnet(lower: &str) -> bool {
    (lower.contains("passed!") || lower.contains("failed!"))
        && lower.contains("failed:")
        && lower.contains("duration:")
}

fn is_go(lower: &str) -> bool {
    lower.contains("go test") || lower.contains("--- pass:") || lower.contains("--- fail:")
}

fn is_cargo(lower: &str) -> bool {
    lower.contains("cargo test") || lower.contains("test result:")
}

fn is_vitest(lower: &str) -> bool {
    lower.contains("vitest")
}

fn is_playwright(lower: &str) -> bool {
    lower.contains("playwright") || lower.contains("@playwright/test")
}

/// Classify raw output. Never fails; no signature means `Unknown`.
pub fn detect_framework(output: &str) -> FrameworkKind {
    let lower = output.to_lowercase();
    SIGNATURES
        .iter()
        .find(|(_, matches)| matches(&lower))
        .map(|(kind, _)| *kind)
        .unwrap_or(FrameworkKind::Unknown)
}
