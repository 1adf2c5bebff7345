use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cortex_engine::analysis::{AnalysisService, PlayerAnalyzer};
use cortex_engine::api::routes::analyze::AnalyzeRequest;
use cortex_engine::api::state::AppState;
use cortex_engine::api::{build_router, cors_layer};
use cortex_engine::config::AppConfig;
use cortex_engine::models::Priority;

#[derive(Parser)]
#[command(name = "cortex-engine")]
#[command(about = "League of Legends player analysis and improvement recommendations")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number (defaults to $PORT, then the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Log all HTTP requests
        #[arg(long)]
        access_log: bool,
    },

    /// Analyze a request file and print the result as JSON
    Analyze {
        /// Request JSON with `summoner` and `matches` ("-" reads stdin)
        input: PathBuf,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Print the effective benchmark values
    Benchmarks,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    // Initialize tracing
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting cortex-engine v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve {
            host,
            port,
            access_log,
        } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::with_benchmarks(config.benchmarks);
            let mut app = build_router(state).layer(
                cors_layer(&config.server.cors_origin).context("Invalid CORS origin")?,
            );
            if access_log {
                app = app.layer(TraceLayer::new_for_http());
            }

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("OPGL Cortex Engine listening on http://{}", addr);
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::Analyze { input, compact } => {
            let raw = read_input(&input)?;
            let request: AnalyzeRequest =
                serde_json::from_str(&raw).context("Invalid request body")?;
            let (summoner, matches) = request.into_parts()?;

            let service = AnalysisService::new(config.benchmarks);
            let result = service.analyze_player(&summoner, &matches);

            tracing::info!(
                matches = result.player_stats.total_matches,
                high = result.areas_with_priority(Priority::High).count(),
                medium = result.areas_with_priority(Priority::Medium).count(),
                "Analyzed {}",
                summoner.name
            );

            let output = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{}", output);
        }
        Commands::Benchmarks => {
            print!("{}", toml::to_string_pretty(&config.benchmarks)?);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read request from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
