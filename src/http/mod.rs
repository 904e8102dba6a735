//! HTTP endpoint layer: routing, request/response mapping, error mapping.
//!
//! | Method | Path                  | Body         | Response          |
//! |--------|-----------------------|--------------|-------------------|
//! | POST   | /accounts             | -            | `{id, balance}`   |
//! | POST   | /accounts/{id}/credit | `{amount}`   | `{id, balance}`   |
//! | POST   | /accounts/{id}/debit  | `{amount}`   | `{id, balance}`   |
//! | GET    | /accounts/{id}        | -            | `{id, balance}`   |
//! | GET    | /health               | -            | `{status}`        |

pub mod dto;
pub mod errors;
pub mod routes;

use std::sync::Arc;

use axum::{Extension, Router};

use crate::core::AccountService;

/// Build the application router around `service`
pub fn build_app(service: Arc<AccountService>) -> Router {
    routes::router().layer(Extension(service))
}

/// Bind `addr` and serve the application until ctrl-c
pub async fn serve(addr: &str, service: Arc<AccountService>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, build_app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
