//! launch-tracker server binary

use clap::{Parser, ValueEnum};
use launch_tracker::{
    Config, LaunchRepository, LaunchService, LoggingFetcher, Retrier, RetryingFetcher,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Serve today's and failed rocket launches over HTTP
#[derive(Debug, Parser)]
#[command(name = "launch-tracker", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "LAUNCH_TRACKER_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides server.bind_address)
    #[arg(long, env = "LAUNCH_TRACKER_BIND")]
    bind: Option<SocketAddr>,

    /// Upstream launch API base URL (overrides upstream.base_url)
    #[arg(long, env = "LAUNCH_TRACKER_UPSTREAM")]
    upstream: Option<String>,

    /// Total attempts per upstream fetch (overrides retry.max_attempts)
    #[arg(long, env = "LAUNCH_TRACKER_MAX_ATTEMPTS")]
    max_attempts: Option<u32>,

    /// Backoff unit in milliseconds (overrides retry.base_delay)
    #[arg(long, env = "LAUNCH_TRACKER_BASE_DELAY_MS")]
    base_delay_ms: Option<u64>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl Cli {
    fn into_config(self) -> launch_tracker::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };

        if let Some(bind) = self.bind {
            config.server.bind_address = bind;
        }
        if let Some(upstream) = self.upstream {
            config.upstream.base_url = upstream;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.retry.max_attempts = max_attempts;
        }
        if let Some(ms) = self.base_delay_ms {
            config.retry.base_delay = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("launch_tracker=info,tower_http=info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn run(config: Config) -> launch_tracker::Result<()> {
    let config = Arc::new(config);

    let repository = Arc::new(LaunchRepository::new(&config.upstream)?);
    let logged = Arc::new(LoggingFetcher::new(repository));
    let retrying = Arc::new(RetryingFetcher::new(logged, Retrier::new(config.retry)));
    let service = Arc::new(LaunchService::new(retrying));

    tracing::info!(
        upstream = %config.upstream.base_url,
        max_attempts = config.retry.max_attempts,
        base_delay_ms = config.retry.base_delay.as_millis() as u64,
        "Launch service ready"
    );

    launch_tracker::api::start_api_server(service, config, launch_tracker::shutdown_signal()).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let result = match cli.into_config() {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("launch-tracker failed: {}", e);
        std::process::exit(1);
    }
}
