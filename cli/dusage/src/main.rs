use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dusage_client::{ClientConfig, EngineClient};
use dusage_common::diagnostic::{self, Severity};
use dusage_common::telemetry;
use tracing::{error, info, warn};

mod render;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One row per resource kind
    Summary,
    /// The full report
    Json,
}

/// Show how much disk space the container engine is using.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Engine endpoint, e.g. tcp://127.0.0.1:2375 (overrides DUSAGE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Pin the engine API version, e.g. 1.45
    #[arg(long)]
    api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,
}

fn main() -> anyhow::Result<ExitCode> {
    telemetry::init_tracing("dusage")?;
    let args = Args::parse();

    let mut config = ClientConfig::from_env().map_err(diagnostic::Error::new)?;
    if let Some(host) = &args.host {
        config = config.with_endpoint(host).map_err(diagnostic::Error::new)?;
    }
    if let Some(version) = &args.api_version {
        config = config.with_api_version(version.as_str());
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    info!(endpoint = %config.endpoint, "Querying engine disk usage");

    let client = EngineClient::new(&config).map_err(diagnostic::Error::new)?;
    let report = match client.disk_usage() {
        Ok(report) => report,
        Err(e) => {
            let err = diagnostic::Error::new(e);
            match err.severity() {
                Severity::Warning => warn!(code = %err.code(), "{}", err),
                Severity::Error => error!(code = %err.code(), "{}", err),
            }
            if let Some(hint) = err.suggestion() {
                eprintln!("hint: {hint}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    match args.format {
        Format::Summary => print!("{}", render::summary_table(&report.summary())),
        Format::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
