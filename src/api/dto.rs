// Request / response bodies (field names follow the public JSON contract)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// POST /conta
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub nome: String,
}

/// PUT /conta
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub nome: String,
}

/// POST /deposito
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    #[serde(default)]
    pub descricao: Option<String>,
}

/// POST /saque
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
}

/// GET /extrato/date?date=YYYY-MM-DD
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub sucesso: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        SuccessResponse {
            sucesso: message.into(),
        }
    }
}

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
