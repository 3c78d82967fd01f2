use anyhow::Result;
use std::path::Path;

use crate::classify::detect_framework;
use crate::extract;
use crate::input;
use crate::normalize::normalize;
use crate::parser::formatter::RenderOptions;
use crate::parser::{
    emit_debug, emit_degradation_warning, FrameworkKind, NormalizedResult, OutputFormat,
    ReportFormatter,
};
use crate::utils::strip_ansi;

/// Resolved settings for one invocation (CLI flags over config file)
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub format: OutputFormat,
    pub framework: Option<FrameworkKind>,
    pub render: RenderOptions,
    pub verbose: u8,
}

/// Normalize a file's content and print it
pub fn run_file(file: &Path, opts: &ParseOptions) -> Result<()> {
    if opts.verbose > 0 {
        emit_debug("input", &format!("reading {}", file.display()));
    }
    let content = input::read_file(file)?;
    emit(&content, opts)
}

/// Normalize stdin and print it
pub fn run_stdin(opts: &ParseOptions) -> Result<()> {
    if opts.verbose > 0 {
        emit_debug("input", "reading stdin");
    }
    let content = input::read_stdin()?;
    emit(&content, opts)
}

fn emit(content: &str, opts: &ParseOptions) -> Result<()> {
    let result = parse_output(content, opts.framework, opts.verbose);
    let rendered = result.format(opts.format, &opts.render)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Classify, extract and normalize one block of runner output
pub fn parse_output(
    output: &str,
    forced: Option<FrameworkKind>,
    verbose: u8,
) -> NormalizedResult {
    let clean = strip_ansi(output);

    let framework = match forced {
        Some(kind) => kind,
        None => detect_framework(&clean),
    };
    if verbose > 0 {
        let how = if forced.is_some() { "forced" } else { "detected" };
        emit_debug(
            "classify",
            &format!("{} framework: {} ({} bytes)", how, framework, clean.len()),
        );
    }

    let extraction = extract::extract(framework, &clean);
    if verbose > 1 {
        for warning in &extraction.warnings {
            emit_degradation_warning(framework.as_str(), warning);
        }
    }

    let result = normalize(framework, extraction);
    if verbose > 0 {
        emit_debug(
            "normalize",
            &format!(
                "{} total, {} records",
                result.summary.total,
                result.tests.len()
            ),
        );
    }
    result
}
