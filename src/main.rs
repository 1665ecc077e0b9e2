use log::{error, info};
use std::sync::Arc;

mod config;
mod content;
mod core;
mod mission;
mod pages;
mod web;

use crate::config::MissionConfig;
use crate::mission::MissionRegistry;
use crate::pages::ship::FsAssetLoader;
use crate::web::server::start_web_server;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    info!("Starting Space Race mission...");

    let config = match MissionConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Configuration loaded: static files from {}, ship model at {}",
        config.static_dir.display(),
        config.model_path.display()
    );

    let registry = Arc::new(MissionRegistry::new(&config, Arc::new(FsAssetLoader)));
    info!("Mission registry ready for {} sessions", config.session_capacity);

    // Start the web interface
    let server = match start_web_server(config, registry) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to start web server: {}", e);
            std::process::exit(1);
        }
    };
    let server_handle = server.handle();
    let web_server_handle = tokio::spawn(server);

    info!("Mission control is running. Press Ctrl+C to stop.");
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
    }

    info!("Shutting down mission control...");
    server_handle.stop(true).await;
    match web_server_handle.await {
        Ok(Err(e)) => error!("Web server error: {}", e),
        Err(e) => error!("Error during web server shutdown: {:?}", e),
        Ok(Ok(())) => {}
    }

    info!("Shutdown complete");
}
