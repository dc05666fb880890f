use anyhow::{Context, Result};
use clap::Parser;
use gd_server::{app, cli};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. Charger la config
    let mut config = if cli.config.exists() {
        gd_core::config::load_config(&cli.config)?
    } else {
        log::warn!(
            "config not found: {}. Using defaults.",
            cli.config.display()
        );
        gd_core::ServerConfig::default()
    };
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    // 4. Construire l'état partagé et le routeur
    let state = app::build_state(&config)?;
    let router = app::router(state, config.max_upload_bytes);

    // 5. Servir
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    log::info!("ASCII art service listening on http://{}", config.bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
