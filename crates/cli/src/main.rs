use clap::Parser;
use rpz_exporter_api::AppState;
use rpz_exporter_domain::CliOverrides;
use rpz_exporter_infrastructure::ingest::AggregationSink;
use rpz_exporter_infrastructure::metrics::MetricsRegistry;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rpz-exporter")]
#[command(version)]
#[command(about = "Prometheus exporter for RPZ policy hits reported over PowerDNS protobuf logging")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Address to listen on for protobuf streams
    #[arg(long = "pb.listen-address", value_name = "ADDR")]
    pb_listen_address: Option<String>,

    /// Address to expose metrics on
    #[arg(long = "web.listen-address", value_name = "ADDR")]
    web_listen_address: Option<String>,

    /// Path under which metrics are exposed
    #[arg(long = "web.telemetry-path", value_name = "PATH")]
    web_telemetry_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Do not print a line for each response rewritten by a policy
    #[arg(long)]
    no_policy_hits: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        ingest_address: cli.pb_listen_address,
        web_address: cli.web_listen_address,
        metrics_path: cli.web_telemetry_path,
        log_level: cli.log_level,
        disable_policy_hits: cli.no_policy_hits,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting RPZ exporter v{}", env!("CARGO_PKG_VERSION"));

    let ingest_addr = config.ingest_socket_addr()?;
    let web_addr = config.web_socket_addr()?;

    let registry = Arc::new(
        MetricsRegistry::new(&config.metrics)
            .map_err(|e| anyhow::anyhow!("Failed to register metrics: {}", e))?,
    );

    let use_cases = di::UseCases::new(&config, registry.clone());
    let (ingest, receiver) = di::IngestServices::new(&config, &registry);

    let sink = AggregationSink::new(use_cases.record_applied_policy).start(receiver);

    let acceptor =
        server::start_ingest_server(ingest_addr, ingest, config.ingest.max_connections).await?;

    let app_state = AppState {
        export_metrics: use_cases.export_metrics,
        get_policy_counts: use_cases.get_policy_counts,
    };

    let result = server::start_web_server(web_addr, &config.server.metrics_path, app_state).await;

    acceptor.abort();
    sink.abort();
    if let Err(e) = &result {
        error!(error = %e, "Web server error");
    }

    info!("Server shutdown complete");
    result
}
