use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::mongo_repo::MongoConnectionRepo;

pub mod config;
pub mod controller;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let reservation_repo = MongoConnectionRepo::connect(&config).await?;

    let app_state = AppState {
        reservation_repo: Arc::new(reservation_repo),
    };
    controller::serve(app_state, &config).await
}
