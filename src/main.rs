mod config;
mod conversation;
mod error;
mod model;
mod web;

use actix_web::middleware::Logger;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use config::Config;
use model::{InferenceBackend, WorkersAi};
use web::routes;

// App state structure
struct AppState {
    backend: Arc<dyn InferenceBackend>,
    system_prompt: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Workers AI chat application");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    let app_state = Data::new(AppState {
        backend: Arc::new(WorkersAi::new(&config)),
        system_prompt: config.system_prompt.clone(),
    });

    info!("Serving static assets from {}", config.static_dir.display());
    info!("Listening on http://{}:{}", config.host, config.port);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(routes::static_files(&static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
