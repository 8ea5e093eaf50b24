mod api_doc;
mod app;
mod config;
mod handlers;
mod models;
mod routes;

use anyhow::Context;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("snorting-code-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let router = app::build_router();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
