// API error payload
//
// Every domain failure is answered with HTTP 400 and
// `{ "codigo": "...", "erro": "...", "detalhes"?: {...} }`.

use crate::error::LedgerError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,

    /// Machine-readable code, e.g. `CUSTOMER_NOT_FOUND`
    #[serde(rename = "codigo")]
    pub code: &'static str,

    #[serde(rename = "erro")]
    pub message: String,

    #[serde(rename = "detalhes", skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// No `cpf` in the query string or headers
    pub fn missing_cpf() -> Self {
        Self::bad_request("MISSING_CPF", "CPF não informado!")
    }
}

impl From<LedgerError> for ApiError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::DuplicateCustomer(_) => {
                ApiError::bad_request("DUPLICATE_CUSTOMER", "Cliente já cadastrado!")
            }
            LedgerError::CustomerNotFound(_) => {
                ApiError::bad_request("CUSTOMER_NOT_FOUND", "Cliente não encontrado!")
            }
            LedgerError::InsufficientFunds {
                requested,
                available,
            } => ApiError::bad_request("INSUFFICIENT_FUNDS", "Saldo insuficiente!").with_details(
                serde_json::json!({
                    "solicitado": requested.to_f64(),
                    "disponivel": available.to_f64(),
                }),
            ),
            LedgerError::BalanceOverflow => {
                ApiError::bad_request("BALANCE_OVERFLOW", "Valor excede o limite da conta!")
            }
            LedgerError::InvalidAmount(_) => {
                ApiError::bad_request("INVALID_AMOUNT", "Valor inválido!")
            }
            e @ LedgerError::InvalidDate(_) => ApiError::bad_request("INVALID_DATE", e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request("INVALID_BODY", "Corpo da requisição inválido!")
            .with_details(serde_json::json!({ "motivo": rejection.body_text() }))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
