use clap::Parser;
use routegrid_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "routegrid")]
#[command(version)]
#[command(about = "Routegrid - federated router mount table refresher")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Batch deadline for one refresh cycle, in milliseconds
    #[arg(long)]
    batch_deadline_ms: Option<u64>,

    /// Number of parallel refresh workers
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        batch_deadline_ms: cli.batch_deadline_ms,
        worker_pool_size: cli.workers,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Routegrid v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;
    services.prewarm(&config);

    let shutdown = services.start_jobs(&config).await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    shutdown.cancel();
    services.shutdown();

    info!("Routegrid stopped");
    Ok(())
}
