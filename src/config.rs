// Server configuration (flags or environment) and tracing setup

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,conta_ledger=debug";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(name = "conta-server", version, about = "In-memory bank account API")]
pub struct ServerConfig {
    /// Address to bind
    #[clap(long, env = "CONTA_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[clap(short, long, env = "CONTA_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Emit logs as JSON lines
    #[clap(long, env = "CONTA_LOG_JSON")]
    pub log_json: bool,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Install the global tracing subscriber
    pub fn init_tracing(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let registry = tracing_subscriber::registry().with(filter);

        let installed = if self.log_json {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer()).try_init()
        };
        installed.context("failed to install tracing subscriber")
    }
}
