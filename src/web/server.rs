use std::sync::Arc;

use actix_files as fs;
use actix_web::dev::Server;
use actix_web::{middleware, web, App, HttpServer};
use log::info;

use crate::config::MissionConfig;
use crate::mission::MissionRegistry;
use crate::web::handlers;

/// Bind the web server for the mission screens. The returned server runs
/// once awaited or spawned.
pub fn start_web_server(config: MissionConfig, registry: Arc<MissionRegistry>) -> std::io::Result<Server> {
    let addr = config.listen_addr();
    let static_dir = config.static_dir.clone();
    info!("Starting web server on http://{}", addr);

    // Create shared application state
    let app_state = web::Data::new(AppState {
        registry,
        config,
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            // Static files: gallery images and the optional ship model
            .service(fs::Files::new("/static", static_dir.clone()))
            .configure(routes)
    })
    .bind(addr)?
    .run();
    Ok(server)
}

/// Route table, shared with the handler tests
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Mission APIs
            .route("/missions", web::post().to(handlers::mission::create_mission))
            .route("/missions/{id}", web::get().to(handlers::mission::get_mission))
            .route("/missions/{id}/actions", web::post().to(handlers::mission::apply_action))
            .route("/missions/{id}/keys", web::post().to(handlers::mission::key_event))
            .route("/missions/{id}/events", web::get().to(handlers::mission::get_events))
            // Catalogue APIs
            .route("/eras", web::get().to(handlers::eras::list_eras))
            .route("/eras/{id}", web::get().to(handlers::eras::get_era))
            .route("/citations", web::get().to(handlers::eras::list_citations)),
    )
    // Page routes
    .route("/", web::get().to(handlers::pages::index))
    .route("/mission/{id}", web::get().to(handlers::pages::mission))
    .route("/mission/{id}/action/{action}", web::post().to(handlers::pages::mission_action))
    .route("/eras", web::get().to(handlers::pages::eras))
    .route("/eras/{id}", web::get().to(handlers::pages::era_detail))
    // Default route for 404
    .default_service(web::to(handlers::pages::not_found));
}

/// Shared application state for web handlers
pub struct AppState {
    pub registry: Arc<MissionRegistry>,
    pub config: MissionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ship::FsAssetLoader;

    #[actix_web::test]
    async fn test_server_runs_on_spawned_task() {
        let config = MissionConfig {
            port: 0,
            ..MissionConfig::default()
        };
        let registry = Arc::new(MissionRegistry::new(&config, Arc::new(FsAssetLoader)));

        let server = start_web_server(config, registry).unwrap();
        let handle = server.handle();
        let task = tokio::spawn(server);

        handle.stop(true).await;
        assert!(task.await.unwrap().is_ok());
    }
}
