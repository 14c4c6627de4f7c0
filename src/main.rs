mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::handlers::auth::JwtKeys;
use crate::store::Store;
use crate::store::mongo::MongoStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    let mongo = MongoStore::connect(&config).await?;
    mongo.ensure_indexes().await;
    let store: Arc<dyn Store> = Arc::new(mongo);

    let store_data = web::Data::from(store.clone());
    let keys = web::Data::new(JwtKeys::new(&config.access_token));

    tracing::info!("server is running on port {}", config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(store_data.clone())
            .app_data(keys.clone())
            .configure(routes::init)
    })
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("Failed to bind port {}", config.port))?
    .run()
    .await?;

    store.close().await;
    Ok(())
}
