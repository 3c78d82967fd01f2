mod classify;
mod config;
mod extract;
mod input;
mod normalize;
mod parse_cmd;
mod parser;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use parser::formatter::RenderOptions;
use parser::{FrameworkKind, OutputFormat};

#[derive(Parser)]
#[command(
    name = "testnorm",
    version,
    about = "Normalize test runner output into one JSON result",
    long_about = "Reads the output of jest, pytest, dotnet test, go test, cargo test, vitest or playwright \
(from a file or stdin), detects which runner produced it and prints pass/fail/skip counts, \
duration and per-test records in a single schema."
)]
struct Cli {
    /// Test output file (omit for stdin)
    file: Option<PathBuf>,

    /// Output format: json, text, markdown [default: from config, else json]
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Skip detection and parse as this framework
    #[arg(long)]
    framework: Option<FrameworkKind>,

    /// Disable colors in text output
    #[arg(long)]
    no_color: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show configuration and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        return config::show_config();
    }

    let config = config::Config::load_or_default();
    let opts = parse_cmd::ParseOptions {
        format: cli.format.unwrap_or(config.output.format),
        framework: cli.framework,
        render: RenderOptions {
            colors: config.display.colors && !cli.no_color,
            max_failures: config.display.max_failures,
            verbose: cli.verbose > 0,
        },
        verbose: cli.verbose,
    };

    match cli.file {
        Some(file) => parse_cmd::run_file(&file, &opts)?,
        None => parse_cmd::run_stdin(&opts)?,
    }

    Ok(())
}
