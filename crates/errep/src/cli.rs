//! Command line interface
//!
//! ```text
//! errep [--config PATH] submit --job-id J --speaker-id S --original TEXT --corrected TEXT
//! errep [--config PATH] get <REPORT_ID>
//! errep [--config PATH] list --job-id J
//! errep [--config PATH] adapters
//! ```
//!
//! Results are written as JSON so the output can be piped into other tools.
//! Log output goes to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use errep_application::PortKind;
use errep_domain::SubmissionRequest;
use errep_infrastructure::{AppConfig, AppContext, ConfigLoader};
use serde_json::json;

/// Command line interface for errep
#[derive(Parser, Debug)]
#[command(name = "errep")]
#[command(about = "errep - submit and inspect transcription error reports")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from `--config` or the default locations
    ///
    /// # Errors
    ///
    /// Returns the loader's configuration error.
    pub fn load_config(&self) -> errep_domain::Result<AppConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        };
        loader.load()
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit an error report and print the response
    Submit(SubmitArgs),
    /// Print a stored report
    Get {
        /// Report identifier returned by `submit`
        id: String,
    },
    /// Print every stored report for a job
    List {
        /// Transcription job identifier
        #[arg(long)]
        job_id: String,
    },
    /// List the adapters linked into this binary
    Adapters,
}

/// Arguments of `errep submit`
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Transcription job identifier
    #[arg(long)]
    pub job_id: String,
    /// Speaker identifier
    #[arg(long)]
    pub speaker_id: String,
    /// Text as transcribed
    #[arg(long)]
    pub original: String,
    /// Text after correction (may be empty)
    #[arg(long, default_value = "")]
    pub corrected: String,
}

impl From<SubmitArgs> for SubmissionRequest {
    fn from(args: SubmitArgs) -> Self {
        SubmissionRequest::new(args.job_id, args.speaker_id, args.original, args.corrected)
    }
}

/// Run `command` against `context`, writing JSON to `out`
///
/// Returns `false` when the command completed but its outcome is a failure
/// (a rejected submission or an unknown report), so the binary can exit
/// non-zero.
///
/// # Errors
///
/// Returns an error if a repository lookup fails or `out` cannot be written.
pub async fn execute<W: Write>(
    command: &Command,
    context: &AppContext,
    out: &mut W,
) -> anyhow::Result<bool> {
    match command {
        Command::Submit(args) => {
            let response = context.submit(args.clone().into()).await;
            print_json(out, &response)?;
            Ok(response.is_accepted())
        }
        Command::Get { id } => match context.find_report(id).await? {
            Some(report) => {
                print_json(out, &report)?;
                Ok(true)
            }
            None => {
                print_json(out, &json!({ "status": "not_found", "report_id": id }))?;
                Ok(false)
            }
        },
        Command::List { job_id } => {
            let reports = context.reports_for_job(job_id).await?;
            print_json(out, &reports)?;
            Ok(true)
        }
        Command::Adapters => {
            let registry = context.registry();
            let listing = json!({
                "repository": describe(registry, PortKind::Repository),
                "event_publisher": describe(registry, PortKind::EventPublisher),
            });
            print_json(out, &listing)?;
            Ok(true)
        }
    }
}

fn describe(registry: &errep_application::AdapterRegistry, port: PortKind) -> serde_json::Value {
    registry
        .describe(port)
        .into_iter()
        .map(|(name, description)| json!({ "name": name, "description": description }))
        .collect()
}

fn print_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to write JSON output")?;
    writeln!(out).context("Failed to write JSON output")?;
    Ok(())
}
