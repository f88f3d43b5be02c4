mod assistant;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use crate::assistant::Assistant;
use crate::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let pool = db::create_pool(&config.database_url).await;
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    let assistant = web::Data::new(Assistant::from_config(&config));
    let bind_addr = config.bind_addr.clone();

    info!("Starting server at {}", bind_addr);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            // The browser frontend is served from another origin.
            .wrap(Cors::permissive())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(assistant.clone())
            .service(
                web::resource("/api/health")
                    .route(web::get().to(handlers::health::health_check)),
            )
            .service(
                web::resource("/api/admin/login")
                    .route(web::post().to(handlers::auth::admin_login)),
            )
            .service(
                web::resource("/api/gallery")
                    .route(web::get().to(handlers::gallery::get_gallery))
                    .route(web::post().to(handlers::gallery::upload_image)),
            )
            .service(
                web::resource("/api/gallery/{id}")
                    .route(web::delete().to(handlers::gallery::delete_image)),
            )
            .service(
                web::resource("/api/chat")
                    .route(web::post().to(handlers::chat::chat)),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
