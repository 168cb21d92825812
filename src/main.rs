//! pipeline-demo - Demo web service deployed via a Jenkins CI/CD pipeline

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pipeline_demo::api::{self, AppState};
use pipeline_demo::config::Config;

#[derive(Parser)]
#[command(name = "pipeline-demo")]
#[command(about = "Demo web service deployed via a Jenkins CI/CD pipeline")]
#[command(version)]
struct Cli {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("pipeline_demo={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    let port = config.port;
    let addr = config.listen_addr();

    tracing::info!(
        "Starting HTTP server on port {} (environment: {})",
        port,
        config.environment
    );

    let state = AppState::new(config);
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("🚀 Server running on http://localhost:{}", port);
    println!("📊 Health check: http://localhost:{}/health", port);
    println!("ℹ️  API info: http://localhost:{}/api/info", port);
    println!("📚 API docs: http://localhost:{}/api/docs", port);

    axum::serve(listener, router).await?;

    Ok(())
}
