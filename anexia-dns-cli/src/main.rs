//! `anexia-dns` entry point
//!
//! `records` prints the observed endpoints as JSON on stdout; `apply` reads a
//! planner delta and applies it. Logs go to stderr so stdout stays parseable.

mod cli;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anexia_dns_core::{AnexiaProvider, Changes, Provider, SyncError};
use anexia_dns_provider::CloudDnsClient;
use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // `log` records from the libraries are bridged into tracing by `init()`
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = CloudDnsClient::new(cli.connection.client_config())
        .context("failed to create CloudDNS client")?;
    let provider = AnexiaProvider::with_config(Arc::new(client), cli.provider.provider_config());

    match cli.command {
        Command::Records => {
            let endpoints = provider.records().await.context("failed to list records")?;
            tracing::info!("Listed {} endpoints", endpoints.len());
            println!("{}", serde_json::to_string_pretty(&endpoints)?);
        }
        Command::Apply(args) => {
            let changes = read_plan(&args.plan)?;
            if changes.is_empty() {
                tracing::info!("Plan is empty, nothing to apply");
                return Ok(());
            }
            provider
                .apply_changes(&changes)
                .await
                .map_err(apply_error)?;
            tracing::info!("Applied {} changes", changes.len());
        }
    }
    Ok(())
}

/// Plans that reference unknown zones or records are reported apart from backend failures.
fn apply_error(error: SyncError) -> anyhow::Error {
    if error.is_resolution_error() {
        anyhow::Error::new(error).context("plan does not match the current zone state")
    } else {
        anyhow::Error::new(error).context("failed to apply changes")
    }
}

fn read_plan(path: &Path) -> Result<Changes> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read plan from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid plan in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn resolution_errors_are_reported_as_plan_mismatch() {
        let err = apply_error(SyncError::RecordNotFound {
            zone: "anexia.test".into(),
            name: "ghost".into(),
        });
        assert_eq!(err.to_string(), "plan does not match the current zone state");
        assert!(format!("{err:#}").contains("Record 'ghost' not found in zone 'anexia.test'"));
    }

    #[test]
    fn other_errors_are_apply_failures() {
        let err = apply_error(SyncError::DeadlineExceeded(Duration::from_secs(1)));
        assert_eq!(err.to_string(), "failed to apply changes");
    }
}
