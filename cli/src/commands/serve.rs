use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::{info, warn};

use paybff_common::ErrorKind;
use paybff_core::adapters::inbound::query::{Api, Outcome};

pub async fn serve(api: Api, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot listen on {addr}"))?;

    info!("Listening on http://{addr}");
    axum::serve(listener, router(api))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

pub fn router(api: Api) -> Router {
    Router::new()
        .route("/query", post(query))
        .route("/ping", get(ping))
        .with_state(api)
}

async fn query(State(api): State<Api>, body: String) -> impl IntoResponse {
    let outcome = api.handle_text(&body).await;
    (status_for(&outcome), Json(outcome))
}

async fn ping(State(api): State<Api>) -> impl IntoResponse {
    Json(api.health())
}

fn status_for(outcome: &Outcome) -> StatusCode {
    match outcome.error_kind() {
        None => StatusCode::OK,
        Some(ErrorKind::InvalidInput) => StatusCode::BAD_REQUEST,
        Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
        Some(ErrorKind::OperationFailed) => StatusCode::UNPROCESSABLE_ENTITY,
        Some(ErrorKind::ServiceUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        // Without a handler the server can only be killed.
        warn!(%error, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
