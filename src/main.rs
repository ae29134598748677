//! Babbleon CLI - docs reference checker

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use babbleon::config::CONFIG_FILE;
use babbleon::loader::{self, Document};
use babbleon::{
    extract, init, BabbleonConfig, BabbleonError, FixSuggestion, Report, ReferenceValidator,
};

#[derive(Parser)]
#[command(name = "babbleon")]
#[command(about = "Check that backticked references in docs exist in your reference data")]
#[command(version)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project (babbleon.json + sample reference and docs)
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Check docs references against the reference file
    Check {
        /// Path to the config file
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Override the reference file from the config
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Override the docs patterns from the config
        #[arg(short, long, num_args = 1..)]
        docs: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init { force } => init_project(force),
        Commands::Check {
            config,
            reference,
            docs,
            format,
        } => check(&config, reference, docs, format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            if let Some(suggestion) = e
                .downcast_ref::<BabbleonError>()
                .and_then(|e| e.fix_suggestion())
            {
                eprintln!("  {} {}", "Fix:".yellow(), suggestion);
            }
            ExitCode::from(2)
        }
    }
}

fn init_project(force: bool) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let result = init::init_project(&cwd, force)?;

    for file in &result.files_created {
        println!("{} Created {}", "✓".green(), file);
    }
    for file in &result.files_skipped {
        println!("{} Kept existing {}", "→".cyan(), file);
    }

    Ok(ExitCode::SUCCESS)
}

/// One checked document, as printed by `--format json`
#[derive(Serialize)]
struct DocumentReport<'a> {
    document: String,
    #[serde(flatten)]
    report: &'a Report,
}

fn check(
    config_path: &Path,
    reference: Option<PathBuf>,
    docs: Vec<String>,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let config = BabbleonConfig::load(config_path)?.with_overrides(reference, docs);
    let mapping = loader::load_reference(config.reference_file())?;
    let documents = loader::read_docs(config.docs.as_slice())?;

    let reports: Vec<(Document, Report)> = documents
        .into_iter()
        .map(|doc| {
            let report = ReferenceValidator::new(&mapping, &doc.text).validate_docs();
            (doc, report)
        })
        .collect();

    match format {
        OutputFormat::Text => print_text(&reports),
        OutputFormat::Json => {
            let out: Vec<DocumentReport> = reports
                .iter()
                .map(|(doc, report)| DocumentReport {
                    document: doc.path.display().to_string(),
                    report,
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&out).context("Failed to serialize report")?
            );
        }
    }

    if reports.iter().all(|(_, report)| report.is_clean()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_text(reports: &[(Document, Report)]) {
    let mut valid = 0;
    let mut invalid = 0;

    for (doc, report) in reports {
        let path = doc.path.display().to_string();
        println!("{}", path.bold());

        let mut valid_results: Vec<_> = report.valid.iter().collect();
        valid_results.sort_by(|a, b| a.path.cmp(&b.path));
        for result in valid_results {
            let value = result
                .value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_default();
            let kind = result.value_type.map(|k| k.as_str()).unwrap_or_default();
            println!(
                "  {} {} = {} ({})",
                "✓".green(),
                result.path,
                value,
                kind.dimmed()
            );
        }

        let lines = extract::locate_references(&doc.text);
        for p in report.invalid_paths() {
            let at = lines
                .get(p)
                .map(|ls| {
                    ls.iter()
                        .map(|l| format!("{path}:{l}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            println!("  {} {} {}", "✗".red(), p.red(), at.dimmed());
        }

        valid += report.valid.len();
        invalid += report.invalid.len();
    }

    let summary = format!(
        "{} references checked in {} document(s): {} valid, {} invalid",
        valid + invalid,
        reports.len(),
        valid,
        invalid
    );
    if invalid == 0 {
        println!("{} {}", "✓".green(), summary);
    } else {
        println!("{} {}", "✗".red(), summary);
    }
}
