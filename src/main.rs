mod config;
mod context;
mod domain;
mod error;
mod http;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::gemini::GeminiClient;
use crate::infra::supabase::SupabaseClient;

#[derive(Parser, Debug)]
#[command(
    name = "support-copilot",
    about = "AI support co-pilot — ticket classification API"
)]
struct CliArgs {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDRESS")]
    bind_address: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    let mut config = AppConfig::load()?;
    if let Some(bind_address) = args.bind_address {
        config.bind_address = bind_address;
    }

    if config.supabase_url.is_none() {
        warn!("Supabase URL not configured; ticket updates will fail.");
    }
    if config.supabase_service_key.is_none() {
        warn!("Supabase service key not configured; ticket updates will fail.");
    }
    if config.gemini_api_key.is_none() {
        warn!("Gemini API key not configured; classification will fail.");
    }

    let classifier = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    )?);
    let ticket_store = Arc::new(SupabaseClient::new(
        config.supabase_url.clone(),
        config.supabase_service_key.clone(),
    )?);

    let bind_address = config.bind_address.clone();
    info!(bind = %bind_address, model = %config.gemini_model, "support co-pilot API starting");

    let context = AppContext::new(config, classifier, ticket_store);
    let app = http::build_router(context);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
