use actix_files::Files;
use actix_web::guard::{self, GuardContext};
use actix_web::web;
use std::path::Path;

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .guard(guard::fn_guard(is_api_path))
            .app_data(web::JsonConfig::default().error_handler(handlers::json_error))
            .service(
                web::resource("/chat")
                    .route(web::post().to(handlers::chat))
                    .default_service(web::to(handlers::not_found)),
            )
            .default_service(web::to(handlers::not_found)),
    );
}

// Only /api/... belongs to the API; bare /api goes to the static assets
fn is_api_path(ctx: &GuardContext) -> bool {
    ctx.head().uri.path().starts_with("/api/")
}

// Frontend assets for every path outside /api
pub fn static_files(dir: impl AsRef<Path>) -> Files {
    Files::new("/", dir.as_ref()).index_file("index.html")
}
