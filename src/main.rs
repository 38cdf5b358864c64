//! rowmatch - Set comparison of CSV rows

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use termcolor::ColorChoice;
use tracing::info;

use rowmatch::config::{Config, OutputFormat};
use rowmatch::logging;
use rowmatch::output::render_to_stdout;
use rowmatch::{FileComparator, SourceId};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Unified,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Unified => OutputFormat::Unified,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliColor {
    Auto,
    Always,
    Never,
}

impl From<CliColor> for ColorChoice {
    fn from(c: CliColor) -> Self {
        match c {
            CliColor::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            CliColor::Auto => ColorChoice::Never,
            CliColor::Always => ColorChoice::Always,
            CliColor::Never => ColorChoice::Never,
        }
    }
}

/// Report which CSV rows two files share and which are unique to each
#[derive(Parser, Debug)]
#[command(name = "rowmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First CSV file (file_one)
    file_one: PathBuf,

    /// Second CSV file (file_two)
    file_two: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Only show statistics, not the records
    #[arg(long)]
    stats_only: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value = "auto")]
    color: CliColor,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(has_differences) => {
            if has_differences {
                ExitCode::from(1) // Unique records found
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {:?}", cli.delimiter);
    }

    let config = Config::new(cli.file_one, cli.file_two)
        .with_delimiter(cli.delimiter as u8)
        .with_output_format(cli.format.into())
        .with_stats_only(cli.stats_only);

    let mut comparator = FileComparator::with_config(&config)
        .context("Failed to open input files")?;

    let comparison = comparator
        .comparison()
        .context("Failed to compare input files")?;
    info!(
        matching = comparison.stats.matching,
        differences = comparison.has_differences(),
        "comparison finished"
    );

    if config.stats_only {
        let stats = &comparison.stats;
        for (source, path) in SourceId::ALL.iter().zip([&config.file_one, &config.file_two]) {
            println!(
                "{}: {} ({} rows, {} duplicates)",
                source,
                path.display(),
                stats.rows(*source),
                stats.duplicates(*source)
            );
        }
        println!();
        println!("Matching:          {}", stats.matching);
        println!("Only in file_one:  {}", stats.unique(SourceId::FileOne));
        println!("Only in file_two:  {}", stats.unique(SourceId::FileTwo));
        return Ok(comparison.has_differences());
    }

    render_to_stdout(
        comparison,
        &config.file_one,
        &config.file_two,
        config.output_format,
        cli.color.into(),
    )?;

    Ok(comparison.has_differences())
}
