use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::types::LedgerError;

pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    let (status, code) = match &err {
        LedgerError::AccountNotFound { .. } => (StatusCode::NOT_FOUND, "account_not_found"),
        LedgerError::InsufficientFunds { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_funds")
        }
        LedgerError::InvalidAmount { .. } => (StatusCode::BAD_REQUEST, "invalid_amount"),
        LedgerError::ArithmeticOverflow { .. } | LedgerError::ArithmeticUnderflow { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "arithmetic_error")
        }
        LedgerError::Storage { .. } | LedgerError::Io { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "storage_error")
        }
    };
    json_error(status, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
