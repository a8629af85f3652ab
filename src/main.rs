
mod config;
mod error;
mod model;
mod web;

pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::config;

use crate::model::desk::FrontDesk;
use crate::model::ModelManager;
use crate::web::mw_res_map::mw_response_map;
use crate::web::{rest, routes_static};
use axum::{middleware, Router};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    //_dev_utils::init_dev().await;

    let mm = ModelManager::new().await?;
    let desk = FrontDesk::new(mm);

    let routes_all = Router::new()
        .merge(rest::routes(desk))
        .layer(middleware::map_response(mw_response_map))
        .layer(CorsLayer::permissive())
        .fallback_service(routes_static::serve_dir());

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    info!("{:<12} - {addr}\n", "LISTENING");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, routes_all).await?;
    Ok(())
}
