//! HTTP layer exposing the prediction pipeline.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Settings, engine::Engine};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub settings: Settings,
}

/// Build the application router; shared by `serve` and the HTTP tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API. The engine is fully trained before the listener binds.
pub async fn serve(engine: Arc<Engine>, settings: Settings, host: String, port: u16) -> Result<()> {
    let state = AppState { engine, settings };
    let router = router(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving dx-assistant API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
