#![deny(missing_docs)]
//! doxreport command-line interface.
//!
//! Scores documentation coverage per file from a doxygen warning log.

use clap::{Parser, ValueEnum};
use doxreport_core::{
    CorpusReport, ScoreDistribution, ScorePainter, SourceLineCounter, StdFileSystem,
    ZeroLinePolicy, analyze_log, read_log, render_average, render_csv_summary, render_json,
    render_text_summary,
};
use serde_json::json;
use std::io::IsTerminal;
use std::path::PathBuf;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const DEFAULT_DISTRIBUTION: &str = "[100, 95]";

#[derive(Parser, Debug)]
#[command(
    name = "doxreport",
    version,
    about = "Documentation coverage report from a doxygen log"
)]
struct Cli {
    /// The doxygen output log to use.
    #[arg(short = 'l', long = "doxygen-log")]
    doxygen_log: PathBuf,
    /// Produce the score for each file.
    #[arg(short, long)]
    summary: bool,
    /// Produce the simple average of all scores.
    #[arg(short, long)]
    average: bool,
    /// Descending score thresholds used for highlighting, e.g. "[100, 95]".
    #[arg(
        short,
        long,
        env = "DOXREPORT_DISTRIBUTION",
        default_value = DEFAULT_DISTRIBUTION
    )]
    distribution: String,
    /// Output format for report data.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
    /// Directory that file names in the log are relative to.
    #[arg(long, env = "DOXREPORT_SOURCE_ROOT", default_value = ".")]
    source_root: PathBuf,
    /// When to colour score lines.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Fail instead of skipping files that have diagnostics but no lines.
    #[arg(long)]
    strict: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn should_use_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Report sections selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sections {
    summary: bool,
    average: bool,
}

impl Sections {
    fn from_flags(summary: bool, average: bool) -> Self {
        Self {
            summary: summary || !average,
            average,
        }
    }
}

#[cfg(not(test))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{}", failure_message(&err));
        std::process::exit(1);
    }
}

/// Line printed to stderr when a run fails, independent of the log filter.
fn failure_message(err: &dyn std::fmt::Display) -> String {
    format!("doxreport: error: {err}")
}

#[cfg(test)]
fn main() {}

#[cfg_attr(test, allow(dead_code))]
fn run(cli: Cli) -> CliResult<()> {
    let contents = render_report(&cli)?;
    print!("{contents}");
    Ok(())
}

fn render_report(cli: &Cli) -> CliResult<String> {
    let distribution: ScoreDistribution = cli.distribution.parse()?;
    let use_color = cli.output != OutputFormat::Json && cli.color.should_use_color();
    colored::control::set_override(use_color);
    let painter = ScorePainter::new(distribution, use_color);

    let policy = if cli.strict {
        ZeroLinePolicy::Fail
    } else {
        ZeroLinePolicy::Skip
    };

    log::debug!("reading doxygen log {}", cli.doxygen_log.display());
    let fs = StdFileSystem::new();
    let text = read_log(&fs, &cli.doxygen_log)?;
    let counter = SourceLineCounter::new(fs, &cli.source_root);
    let analysis = analyze_log(&text, &counter, policy)?;

    let sections = Sections::from_flags(cli.summary, cli.average);
    render_sections(&analysis.report, sections, cli.output, &painter)
}

fn render_sections(
    report: &CorpusReport,
    sections: Sections,
    format: OutputFormat,
    painter: &ScorePainter,
) -> CliResult<String> {
    if format == OutputFormat::Json {
        return render_json_sections(report, sections);
    }

    let mut output = String::new();
    if sections.summary {
        let summary = match format {
            OutputFormat::Csv => render_csv_summary(report, painter)?,
            _ => render_text_summary(report, painter),
        };
        output.push_str(&summary);
    }
    if sections.average {
        output.push_str(&render_average(report, painter));
    }
    Ok(output)
}

fn render_json_sections(report: &CorpusReport, sections: Sections) -> CliResult<String> {
    let payload = match (sections.summary, sections.average) {
        (true, true) => render_json(report)?,
        (true, false) => render_json(&json!({ "files": report.files }))?,
        (false, _) => render_json(&json!({ "average": report.average }))?,
    };
    Ok(format!("{payload}\n"))
}
