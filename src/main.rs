use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;
use crate::app_state::AppState;
use crate::config::Config;

mod app_state;
mod config;
mod controller;
mod customers;
mod invoices;
mod logger;
mod models;
mod utils;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env is fine; everything has a default.
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    logger::setup_logger(config.log_level, config.log_path.as_deref())?;

    let state = web::Data::new(AppState::new());

    info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(controller::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
