use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::core::AccountService;
use crate::http::{dto, errors};
use crate::types::AccountId;

pub fn router() -> Router {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/:id", get(get_account))
        .route("/accounts/:id/credit", post(credit))
        .route("/accounts/:id/debit", post(debit))
        .route("/health", get(health))
}

#[tracing::instrument(skip_all)]
pub async fn create_account(
    Extension(service): Extension<Arc<AccountService>>,
) -> axum::response::Response {
    match service.create_account().await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

#[tracing::instrument(skip_all, fields(account_id = id))]
pub async fn credit(
    Extension(service): Extension<Arc<AccountService>>,
    Path(id): Path<AccountId>,
    Json(body): Json<dto::AmountRequest>,
) -> axum::response::Response {
    match service.credit(id, body.amount).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

#[tracing::instrument(skip_all, fields(account_id = id))]
pub async fn debit(
    Extension(service): Extension<Arc<AccountService>>,
    Path(id): Path<AccountId>,
    Json(body): Json<dto::AmountRequest>,
) -> axum::response::Response {
    match service.debit(id, body.amount).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

#[tracing::instrument(skip_all, fields(account_id = id))]
pub async fn get_account(
    Extension(service): Extension<Arc<AccountService>>,
    Path(id): Path<AccountId>,
) -> axum::response::Response {
    match service.get_account(id).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn health() -> axum::response::Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}
