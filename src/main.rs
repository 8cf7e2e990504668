mod inference;
mod model;
mod pipeline;
mod registry;
mod report;
mod routes;
mod storage;

use std::env;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use model::Category;
use registry::EnsembleRegistry;
use routes::configure_routes;
use storage::UploadStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let model_dir = PathBuf::from(env::var("MODEL_DIR").unwrap_or_else(|_| "models".to_string()));
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    log::info!("Loading models from {}", model_dir.display());
    let registry = EnsembleRegistry::load(&model_dir);
    log::info!(
        "Loaded {} cob models and {} leaf models",
        registry.ensemble(Category::Cob).len(),
        registry.ensemble(Category::Leaf).len()
    );

    if registry.is_empty() {
        log::error!(
            "No models loaded. Please ensure the .pt files are present in {}",
            model_dir.display()
        );
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "no models available",
        ));
    }

    let upload_store = UploadStore::new(PathBuf::from(&static_dir).join("uploads"))?;

    let registry = web::Data::new(registry);
    let upload_store = web::Data::new(upload_store);

    let port = env::var("PORT").unwrap_or_else(|_| "5001".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .max_age(3600),
            )
            .app_data(registry.clone())
            .app_data(upload_store.clone())
            .configure(|cfg| configure_routes(cfg, static_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
