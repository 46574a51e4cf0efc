//! Command line arguments.

use std::path::PathBuf;
use std::time::Duration;

use anexia_dns_core::ProviderConfig;
use anexia_dns_provider::{ClientConfig, DEFAULT_BASE_URL};
use clap::{Args, Parser, Subcommand};

/// Reconcile Anexia CloudDNS zones with an external-dns plan.
#[derive(Parser)]
#[command(name = "anexia-dns", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the current records of every zone as endpoint JSON.
    Records,

    /// Apply a plan (`{"Create": [...], "UpdateOld": [...], "UpdateNew": [...], "Delete": [...]}`).
    Apply(ApplyArgs),
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Plan file, `-` for stdin.
    pub plan: PathBuf,
}

#[derive(Args)]
pub struct ConnectionArgs {
    /// CloudDNS API token.
    #[arg(long, env = "ANEXIA_TOKEN", hide_env_values = true)]
    pub token: String,

    /// API base URL.
    #[arg(long, env = "ANEXIA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Retries for read requests. Mutations are never retried.
    #[arg(long, env = "ANEXIA_MAX_RETRIES", default_value = "2")]
    pub max_retries: u32,
}

impl ConnectionArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.token.trim())
            .with_base_url(&self.base_url)
            .with_max_retries(self.max_retries)
    }
}

#[derive(Args)]
pub struct ProviderArgs {
    /// Record types to report and manage (comma separated).
    /// Defaults to A, AAAA, CNAME, MX, NAPTR, NS, PTR, SRV and TXT.
    #[arg(long, env = "ANEXIA_RECORD_TYPES", value_delimiter = ',')]
    pub record_types: Vec<String>,

    /// Abort a whole `records`/`apply` run after this many seconds.
    #[arg(long, env = "ANEXIA_DEADLINE_SECS")]
    pub deadline_secs: Option<u64>,

    /// Region attached to created and updated records.
    #[arg(long, env = "ANEXIA_REGION")]
    pub region: Option<String>,
}

impl ProviderArgs {
    pub fn provider_config(&self) -> ProviderConfig {
        let mut config = ProviderConfig::default();
        if !self.record_types.is_empty() {
            config = config.with_supported_record_types(&self.record_types);
        }
        if let Some(secs) = self.deadline_secs {
            config = config.with_deadline(Duration::from_secs(secs));
        }
        if let Some(region) = &self.region {
            config = config.with_default_region(region.clone());
        }
        config
    }
}
