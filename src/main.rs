// SPDX-License-Identifier: PMPL-1.0-or-later
//! Web4All CLI - heuristic web accessibility checker.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use web4all::analyzer;
use web4all::dom::PageDocument;
use web4all::report::{render, OutputFormat, Report};

/// Heuristic web accessibility checker
#[derive(Parser)]
#[command(name = "web4all")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL and score its accessibility
    Check {
        /// URL to analyze (include https://)
        url: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Fetch timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Exit nonzero when the total score falls below this threshold
        #[arg(long)]
        min_score: Option<u32>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Score a local HTML file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit nonzero when the total score falls below this threshold
        #[arg(long)]
        min_score: Option<u32>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Markdown summary
    Text,
    /// Structured JSON
    Json,
    /// Issue table
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("web4all=debug")
    } else {
        EnvFilter::new("web4all=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            url,
            format,
            output,
            timeout,
            min_score,
            verbose,
        } => {
            init_logging(verbose);
            let report = analyzer::analyze_url(&url, Duration::from_secs(timeout));
            emit(&report, format.into(), output.as_deref())?;
            gate(&report, min_score);
        }

        Commands::Analyze {
            file,
            format,
            output,
            min_score,
            verbose,
        } => {
            init_logging(verbose);
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let doc = PageDocument::parse(&content);
            let report = analyzer::analyze_document(&file.display().to_string(), &doc);
            emit(&report, format.into(), output.as_deref())?;
            gate(&report, min_score);
        }
    }

    Ok(())
}

/// Render and write a report to a file or stdout.
fn emit(report: &Report, format: OutputFormat, path: Option<&std::path::Path>) -> anyhow::Result<()> {
    let rendered = render(report, format);
    match path {
        Some(p) => {
            std::fs::write(p, &rendered).with_context(|| format!("writing {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", rendered);
        }
    }
    Ok(())
}

/// Exit nonzero when the score misses the requested threshold.
fn gate(report: &Report, min_score: Option<u32>) {
    if let Some(threshold) = min_score {
        if report.total_score < threshold {
            std::process::exit(1);
        }
    }
}
