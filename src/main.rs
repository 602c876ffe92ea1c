use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mortgage_plan_rs::server::{create_app, AppState};

/// Web service for computing mortgage amortization plans
#[derive(Parser, Debug)]
#[command(name = "mortgage-plan-server", version)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "PLAN_SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PLAN_SERVER_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    let app = create_app(AppState::new());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "mortgage plan server listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
