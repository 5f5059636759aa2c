use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use softdesk_api::{app, AppState};
use softdesk_config::{ConfigManager, ServerConfig};
use softdesk_domain::{IdentityProvider, Store};
use softdesk_persistence::InMemoryStore;
use softdesk_security::TokenIdentityProvider;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "softdesk-api")]
#[command(about = "SoftDesk project and issue tracking API server")]
struct Cli {
    /// Configuration file; defaults to the per-user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load_config().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
        config.validate()?;
    }

    init_logging(&config);

    let store: Arc<dyn Store> = Arc::new(InMemoryStore::new());
    let identity: Arc<dyn IdentityProvider> = Arc::new(TokenIdentityProvider::new(
        config.auth.jwt_secret.as_bytes(),
        chrono::Duration::minutes(config.auth.token_ttl_minutes),
    )?);
    let state = AppState::new(store, identity);

    if let Some(admin) = &config.admin {
        state
            .services
            .users
            .ensure_admin(&admin.username, &admin.password, admin.birth_date)
            .await
            .context("failed to bootstrap admin account")?;
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "SoftDesk API listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
