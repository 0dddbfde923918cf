// ============================================================================
// API Handlers
// ============================================================================
//
// Account-scoped handlers go through `gate::resolve` before touching the
// ledger. The resolved guard keeps the directory locked until the handler
// returns, and no handler awaits while holding it. Bodies are taken as
// `Result<ApiJson<_>, ApiError>` and checked after the gate, so an unknown
// cpf is reported ahead of a malformed body.

use crate::api::dto::{
    CreateAccountRequest, DepositRequest, HealthResponse, StatementDateQuery, SuccessResponse,
    UpdateAccountRequest, WithdrawRequest,
};
use crate::api::error::ApiError;
use crate::api::extract::{ApiJson, Cpf};
use crate::api::AppState;
use crate::entities::{Account, LedgerEntry};
use crate::gate;
use crate::ledger::parse_statement_date;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info, instrument, warn};

type ApiResult<T> = Result<T, ApiError>;
type Body<T> = Result<ApiJson<T>, ApiError>;

/// GET /health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
    })
}

/// POST /conta - Register a customer
#[instrument(skip(state))]
pub async fn create_account(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse>)> {
    state.directory.register(&body.cpf, &body.nome)?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("Cliente cadastrado com sucesso!")),
    ))
}

/// GET /extrato - Full statement
#[instrument(skip(state))]
pub async fn get_statement(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
) -> ApiResult<Json<Vec<LedgerEntry>>> {
    let account = gate::resolve(&state.directory, &cpf)?;
    Ok(Json(account.ledger().to_vec()))
}

/// POST /deposito - Credit the account
#[instrument(skip(state))]
pub async fn deposit(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    body: Body<DepositRequest>,
) -> ApiResult<StatusCode> {
    let mut account = gate::resolve(&state.directory, &cpf)?;
    let ApiJson(body) = body?;

    if let Err(e) = account.deposit(body.valor, body.descricao) {
        warn!(cpf = %cpf, "deposit rejected: {}", e);
        return Err(e.into());
    }

    info!(cpf = %cpf, amount = %body.valor, "deposit recorded");
    Ok(StatusCode::CREATED)
}

/// POST /saque - Debit the account if the balance covers it
#[instrument(skip(state))]
pub async fn withdraw(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    body: Body<WithdrawRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse>)> {
    let mut account = gate::resolve(&state.directory, &cpf)?;
    let ApiJson(body) = body?;

    if let Err(e) = account.withdraw(body.valor) {
        warn!(cpf = %cpf, "withdrawal rejected: {}", e);
        return Err(e.into());
    }

    info!(cpf = %cpf, amount = %body.valor, "withdrawal recorded");
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("Saque efetuado com sucesso")),
    ))
}

/// GET /extrato/date?date=YYYY-MM-DD - Statement for one calendar day
///
/// A missing or unparseable date matches no entry and yields `[]`.
#[instrument(skip(state))]
pub async fn get_statement_by_date(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    Query(query): Query<StatementDateQuery>,
) -> ApiResult<Json<Vec<LedgerEntry>>> {
    let account = gate::resolve(&state.directory, &cpf)?;

    let date = match query.date.as_deref().map(parse_statement_date) {
        Some(Ok(date)) => date,
        Some(Err(e)) => {
            debug!(cpf = %cpf, "empty statement: {}", e);
            return Ok(Json(Vec::new()));
        }
        None => return Ok(Json(Vec::new())),
    };

    let entries: Vec<LedgerEntry> = account.statement_on(date).cloned().collect();
    Ok(Json(entries))
}

/// PUT /conta - Rename the account holder
#[instrument(skip(state))]
pub async fn update_account(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
    body: Body<UpdateAccountRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse>)> {
    let mut account = gate::resolve(&state.directory, &cpf)?;
    let ApiJson(body) = body?;
    account.rename(body.nome);

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("Dados alterados com sucesso!")),
    ))
}

/// GET /conta - Account with its whole ledger
#[instrument(skip(state))]
pub async fn get_account(State(state): State<AppState>, Cpf(cpf): Cpf) -> ApiResult<Json<Account>> {
    let account = gate::resolve(&state.directory, &cpf)?;
    Ok(Json(Account::clone(&account)))
}

/// DELETE /conta - Remove the account, answer with the remaining directory
#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    Cpf(cpf): Cpf,
) -> ApiResult<Json<Vec<Account>>> {
    let account = gate::resolve(&state.directory, &cpf)?;
    Ok(Json(account.remove()))
}
